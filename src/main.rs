mod archive;
mod args;
mod context;
mod error;
mod result;
mod utils;

use args::Args;
use context::Context;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> result::Result<()> {
    let Args {
        verbose,
        path,
        version,
    } = Args::parse();

    let root_dir = utils::find_root(path.as_deref())?;
    let ctx = Context::new(root_dir, version, verbose);

    if ctx.verbose {
        cliclack::intro(format!("livechat-extension v{}", ctx.version))?;
        cliclack::log::info(format!("Repository root: {}", ctx.root_dir.display()))?;
        cliclack::log::info(format!("Packaging {}", ctx.dist_dir.display()))?;
    }

    let archive_path = archive::create_zip(&ctx)?;

    if ctx.verbose {
        cliclack::outro("Release archive ready")?;
    }

    println!("Archive created: {}", archive_path.display());
    Ok(())
}

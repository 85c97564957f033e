use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Environment variable npm populates with the `version` field of package.json
pub const VERSION_ENV: &str = "npm_package_version";

/// Command-line arguments for the packager
#[derive(Debug)]
pub struct Args {
    /// Report progress on stderr
    pub verbose: bool,

    /// Repository root, or a file inside it (e.g. package.json)
    pub path: Option<PathBuf>,

    /// Extension version used in the archive file name
    pub version: Option<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            version: matches.get_one::<String>("package-version").cloned(),
        }
    }
}

fn command() -> Command {
    Command::new("livechat-package")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Archive the extension build output (dist/) into release/livechat-extension-v<version>.zip")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("PATH")
                .help("Repository root or a file inside it (defaults to the current directory)"),
        )
        .arg(
            Arg::new("package-version")
                .long("package-version")
                .value_name("VERSION")
                .env(VERSION_ENV)
                .help("Version embedded in the archive name (defaults to 0.0.0)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Report progress on stderr"),
        )
}

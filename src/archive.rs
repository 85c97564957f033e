use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use crate::utils;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use time::OffsetDateTime;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Highest DEFLATE level
const COMPRESSION_LEVEL: i64 = 9;

/// A regular file of the build output and its name inside the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    pub name: String,
}

/// Package the build output directory into the release archive and return its path.
pub fn create_zip(ctx: &Context) -> Result<PathBuf> {
    if !ctx.dist_dir.is_dir() {
        return Err(Error::DistNotFound(ctx.dist_dir.clone()));
    }

    utils::ensure_dir(&ctx.release_dir)?;

    let archive_path = ctx.archive_path();
    if utils::remove_existing(&archive_path)? && ctx.verbose {
        cliclack::log::remark(format!("Removed previous {}", archive_path.display()))?;
    }

    let entries = collect_entries(&ctx.dist_dir)?;
    create_zip_file(ctx, &entries, &archive_path)?;

    if ctx.verbose {
        cliclack::log::info(format!("{} files archived", entries.len()))?;
    }

    Ok(archive_path)
}

/// Enumerate every regular file below `source_dir`, sorted by relative path.
///
/// Symlinks to files are included; symlinked directories are not descended into.
pub fn collect_entries(source_dir: &Path) -> Result<Vec<ArchiveEntry>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(source_dir) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(source_dir).map_err(|_| {
            Error::custom(format!(
                "{} is outside of {}",
                path.display(),
                source_dir.display()
            ))
        })?;
        files.push((relative.to_path_buf(), path.to_path_buf()));
    }

    files.sort();

    Ok(files
        .into_iter()
        .map(|(relative, source)| ArchiveEntry {
            name: entry_name(&relative),
            source,
        })
        .collect())
}

/// In-archive name for a relative path, always `/`-separated
pub fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn create_zip_file(ctx: &Context, entries: &[ArchiveEntry], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    // An error below drops the writer, which finalizes the archive.
    let mut zip = ZipWriter::new(file);

    for entry in entries {
        if ctx.verbose {
            cliclack::log::step(format!("Adding {}", entry.name))?;
        }

        let metadata = fs::metadata(&entry.source)?;
        zip.start_file(entry.name.as_str(), entry_options(&metadata))?;

        let mut f = File::open(&entry.source)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

fn entry_options(metadata: &fs::Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .last_modified_time(zip_time(metadata.modified().ok()));

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    options
}

/// Zip timestamp for a modification time. Times the format cannot hold fall back to 1980-01-01.
fn zip_time(modified: Option<SystemTime>) -> DateTime {
    modified
        .and_then(|t| DateTime::try_from(OffsetDateTime::from(t)).ok())
        .unwrap_or_default()
}

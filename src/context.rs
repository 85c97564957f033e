use std::path::PathBuf;

/// Version used when none is supplied or the supplied one is empty
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Context passed throughout the application containing the resolved invocation
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output (progress on stderr)
    pub verbose: bool,

    /// Absolute repository root
    pub root_dir: PathBuf,

    /// Build output directory (`<root>/dist`)
    pub dist_dir: PathBuf,

    /// Archive destination (`<root>/release`)
    pub release_dir: PathBuf,

    /// Extension version, not validated
    pub version: String,
}

impl Context {
    pub fn new(root_dir: PathBuf, version: Option<String>, verbose: bool) -> Self {
        let version = version
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Self {
            verbose,
            dist_dir: root_dir.join("dist"),
            release_dir: root_dir.join("release"),
            root_dir,
            version,
        }
    }

    pub fn archive_filename(&self) -> String {
        format!("livechat-extension-v{}.zip", self.version)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.release_dir.join(self.archive_filename())
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dist/ not found at {}. Run `npm run build` first.", .0.display())]
    DistNotFound(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    /// Process exit code for this error. A missing build output directory
    /// is the expected failure and exits with 1; anything else exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::DistNotFound(_) => 1,
            _ => 2,
        }
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Custom(err)
    }
}

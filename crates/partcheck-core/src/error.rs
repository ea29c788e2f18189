use thiserror::Error;

/// Container-level failures. Anything raised here ends the run before any
/// structural check is attempted; per-part defects are reported as
/// [`crate::validate::Issue`] values instead.
#[derive(Error, Debug)]
pub enum PartcheckError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("not a file: {path}")]
    NotAFile { path: String },

    #[error("invalid zip container: {0}")]
    InvalidContainer(#[from] zip::result::ZipError),

    #[error("entry '{name}' is not present in the package")]
    MissingEntry { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PartcheckError>;

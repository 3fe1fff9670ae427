use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RensubError {
    /// The operating system refused the rename. The OS message comes first,
    /// followed by the two paths involved.
    #[error("{source}: '{}' -> '{}'", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: '{}'", .0.display())]
    DestinationExists(PathBuf),

    #[error("Cannot rename '{}': path has no UTF-8 file name", .0.display())]
    InvalidTarget(PathBuf),

    #[error("Invalid new name {name:?} for '{}'", .path.display())]
    InvalidName { path: PathBuf, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RensubError>;

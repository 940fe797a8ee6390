use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be between 1 and 2147483647, got {0}")]
    InvalidSize(u32),
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("built-in font unavailable: {0}")]
    BuiltinFont(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Why the preferred font file was not used.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("cannot read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported font data in {}", path.display())]
    Parse { path: PathBuf },
}

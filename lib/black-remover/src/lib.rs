pub mod config;
pub mod io;
pub mod remover;

pub use config::RemoveConfig;
pub use io::{load_image, save_png};
pub use remover::{
    BLACK_THRESHOLD, RemoveSummary, TRANSPARENT, is_near_black, make_transparent, normalize,
    remove_black_background, remove_black_background_with_config, transform_pixels,
};

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Encode,
    Unexpected,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Encode { .. } => ErrorKind::Encode,
            Error::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

//! Asynchronous product picture loading.

mod source;
mod thumbnail;

pub use source::{HttpImageSource, ImageSource};
pub use thumbnail::Thumbnail;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Image download from {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels")]
    Empty,

    #[error("Image decode task aborted")]
    Aborted,
}

/// Load progress of one picture. Anything but `Ready` renders the placeholder.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImageSlot {
    #[default]
    Pending,
    Ready(Thumbnail),
    Failed,
}

impl ImageSlot {
    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        match self {
            Self::Ready(thumb) => Some(thumb),
            Self::Pending | Self::Failed => None,
        }
    }
}

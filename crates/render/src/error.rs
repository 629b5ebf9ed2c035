use lidarviz_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("point radius must not be negative, got {0}")]
    NegativeRadius(i32),

    #[error("failed to save overlay to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

//! Registry rendering errors

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write registry to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read existing registry {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

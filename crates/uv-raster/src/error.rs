use std::path::PathBuf;

use thiserror::Error;

use crate::constants::MAX_UV_CHANNELS;

/// Errors that can occur while rendering or exporting a UV layout.
///
/// Every validation variant is raised before the target image is touched.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Texture resolution is zero: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
    #[error("UV channel {0} is empty")]
    InvalidChannel(usize),
    #[error("UV channel {0} is out of range (0..{max})", max = MAX_UV_CHANNELS)]
    ChannelOutOfRange(usize),
    #[error("Index buffer length {index_count} is not a multiple of 3")]
    DegenerateGeometry { index_count: usize },
    #[error("Vertex index {index} is out of range for {uv_count} UVs")]
    IndexOutOfRange { index: u32, uv_count: usize },
    #[error("UV channel {channel} has {uv_count} entries but the mesh has {vertex_count} vertices")]
    ChannelLengthMismatch {
        channel: usize,
        uv_count: usize,
        vertex_count: usize,
    },
    #[error("Texture is not created")]
    TextureNotCreated,
    #[error("No free texture name left in {0}")]
    NoUniquePath(PathBuf),
    #[error("Failed to encode texture: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write texture: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RenderError::ChannelOutOfRange(9).to_string(),
            "UV channel 9 is out of range (0..8)"
        );
        assert_eq!(RenderError::InvalidChannel(2).to_string(), "UV channel 2 is empty");
        assert_eq!(
            RenderError::IndexOutOfRange { index: 7, uv_count: 3 }.to_string(),
            "Vertex index 7 is out of range for 3 UVs"
        );
    }
}

//! Texture export - RGBA8 conversion and PNG encoding

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use tracing::debug;
use uv_raster_config::RowOrder;

use crate::color::to_rgba8;
use crate::constants::{MAX_UNIQUE_NAME_ATTEMPTS, TEXTURE_FILE_STEM};
use crate::error::RenderError;
use crate::surface::{CpuSurface, PixelImage};

/// Convert a float surface to an 8-bit RGBA image.
///
/// With [`RowOrder::BottomUp`] surface row 0 becomes the last image row.
pub fn to_rgba_image(surface: &CpuSurface, row_order: RowOrder) -> RgbaImage {
    let height = surface.height;
    RgbaImage::from_fn(surface.width, height, |x, y| {
        let source_y = match row_order {
            RowOrder::BottomUp => height - 1 - y,
            RowOrder::TopDown => y,
        };
        let color = surface
            .get(x as i32, source_y as i32)
            .unwrap_or([0.0, 0.0, 0.0, 0.0]);
        Rgba(to_rgba8(color))
    })
}

/// Encode a surface as PNG bytes
pub fn encode_png(surface: &CpuSurface, row_order: RowOrder) -> Result<Vec<u8>, RenderError> {
    let image = to_rgba_image(surface, row_order);
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write a surface to `path` as PNG
pub fn save_png(surface: &CpuSurface, path: &Path, row_order: RowOrder) -> Result<(), RenderError> {
    let image = to_rgba_image(surface, row_order);
    image.save_with_format(path, ImageFormat::Png)?;
    debug!(
        "save_png: wrote {}x{} texture to {}",
        surface.width,
        surface.height,
        path.display()
    );
    Ok(())
}

/// Pick a texture path in `dir` that does not exist yet.
///
/// Tries `UV_Texture.png`, then `UV_Texture 1.png`, `UV_Texture 2.png`, ...
pub fn unique_texture_path(dir: &Path) -> Result<PathBuf, RenderError> {
    let first = dir.join(format!("{TEXTURE_FILE_STEM}.png"));
    if !first.exists() {
        return Ok(first);
    }

    (1..MAX_UNIQUE_NAME_ATTEMPTS)
        .map(|n| dir.join(format!("{TEXTURE_FILE_STEM} {n}.png")))
        .find(|candidate| !candidate.exists())
        .ok_or_else(|| RenderError::NoUniquePath(dir.to_path_buf()))
}

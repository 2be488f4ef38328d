//! Config-driven UV texture workflow
//!
//! [`UvTextureConverter`] ties the pieces together: it allocates a surface
//! at the configured resolution, renders the configured UV channel of a mesh
//! into it and can save the result as a PNG under `GeneratedTextures/`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use uv_raster_config::{RenderConfig, RowOrder};

use crate::constants::GENERATED_TEXTURES_DIR;
use crate::error::RenderError;
use crate::export::{encode_png, save_png, unique_texture_path};
use crate::mesh::UvMesh;
use crate::render::{RenderParams, render_mesh};
use crate::surface::CpuSurface;

/// A rendered texture and the row order it was drawn for
struct DrawnTexture {
    surface: CpuSurface,
    row_order: RowOrder,
}

/// Renders mesh UV layouts according to a [`RenderConfig`]
pub struct UvTextureConverter {
    config: RenderConfig,
    /// Result of the last successful `draw_uv`
    texture: Option<DrawnTexture>,
}

impl UvTextureConverter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            texture: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the settings. The current texture, and the row order it will
    /// be exported with, are kept until the next draw.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// The last rendered texture, if any
    pub fn texture(&self) -> Option<&CpuSurface> {
        self.texture.as_ref().map(|drawn| &drawn.surface)
    }

    /// Render the configured UV channel of `mesh` into a fresh texture.
    ///
    /// Margin and thickness are clamped to the accepted ranges first. On
    /// failure the previous texture is left in place.
    pub fn draw_uv(&mut self, mesh: &UvMesh) -> Result<&CpuSurface, RenderError> {
        let config = self.config.clamped();
        if config.width == 0 || config.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: config.width,
                height: config.height,
            });
        }

        let params = RenderParams::from(&config);
        let mut surface = CpuSurface::new(config.width, config.height);
        render_mesh(&mut surface, mesh, config.uv_channel as usize, &params)?;

        let drawn = self.texture.insert(DrawnTexture {
            surface,
            row_order: config.row_order,
        });
        Ok(&drawn.surface)
    }

    /// Encode the last texture as PNG bytes
    pub fn encode_texture(&self) -> Result<Vec<u8>, RenderError> {
        let drawn = self.texture.as_ref().ok_or(RenderError::TextureNotCreated)?;
        encode_png(&drawn.surface, drawn.row_order)
    }

    /// Save the last texture under `dir/GeneratedTextures/` with a unique name.
    ///
    /// Returns the path written.
    pub fn save_texture(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        let drawn = self.texture.as_ref().ok_or(RenderError::TextureNotCreated)?;

        let output_dir = dir.join(GENERATED_TEXTURES_DIR);
        fs::create_dir_all(&output_dir)?;
        let path = unique_texture_path(&output_dir)?;
        save_png(&drawn.surface, &path, drawn.row_order)?;

        info!("Saved UV texture to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::color::{RED, WHITE};
    use crate::surface::PixelImage;

    fn triangle_mesh(channel: usize) -> UvMesh {
        UvMesh::new(vec![Vec3::ZERO; 3], vec![0, 1, 2])
            .with_uvs(
                channel,
                vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            )
            .unwrap()
    }

    #[test]
    fn test_draw_uv_uses_config() {
        let mut config = RenderConfig::new(32, 16);
        config.uv_channel = 3;
        config.margin = 2;
        let mut converter = UvTextureConverter::new(config);

        let texture = converter.draw_uv(&triangle_mesh(3)).unwrap();
        assert_eq!((texture.width, texture.height), (32, 16));
        assert_eq!(texture.get(2, 2), Some(RED));
        assert_eq!(texture.get(0, 0), Some(WHITE));
        assert!(texture.is_committed());
    }

    #[test]
    fn test_draw_uv_clamps_thickness() {
        let mut config = RenderConfig::new(64, 64);
        config.thickness = 1000;
        let mut converter = UvTextureConverter::new(config);

        let point = UvMesh::new(vec![Vec3::ZERO; 3], vec![0, 1, 2])
            .with_uvs(0, vec![Vec2::splat(0.5); 3])
            .unwrap();
        let texture = converter.draw_uv(&point).unwrap();
        assert_eq!(texture.count_pixels(RED), 1 + 4 * 20);
        assert_eq!(texture.get(32, 12), Some(RED));
        assert_eq!(texture.get(32, 11), Some(WHITE));
    }

    #[test]
    fn test_draw_uv_zero_resolution() {
        let mut converter = UvTextureConverter::new(RenderConfig::new(0, 64));
        assert!(matches!(
            converter.draw_uv(&triangle_mesh(0)),
            Err(RenderError::InvalidResolution { width: 0, height: 64 })
        ));
        assert!(converter.texture().is_none());
    }

    #[test]
    fn test_failed_draw_keeps_previous_texture() {
        let mut converter = UvTextureConverter::new(RenderConfig::new(8, 8));
        converter.draw_uv(&triangle_mesh(0)).unwrap();

        let mut config = converter.config().clone();
        config.uv_channel = 1;
        config.width = 16;
        converter.set_config(config);

        assert!(matches!(
            converter.draw_uv(&triangle_mesh(0)),
            Err(RenderError::InvalidChannel(1))
        ));
        assert_eq!(converter.texture().map(|t| t.width), Some(8));
    }

    #[test]
    fn test_export_uses_row_order_of_draw() {
        let mut converter = UvTextureConverter::new(RenderConfig::new(8, 4));
        converter.draw_uv(&triangle_mesh(0)).unwrap();
        let bottom_up = encode_png(converter.texture().unwrap(), RowOrder::BottomUp).unwrap();
        let top_down = encode_png(converter.texture().unwrap(), RowOrder::TopDown).unwrap();
        assert_ne!(bottom_up, top_down);

        let mut config = converter.config().clone();
        config.row_order = RowOrder::TopDown;
        converter.set_config(config);
        assert_eq!(converter.encode_texture().unwrap(), bottom_up);

        converter.draw_uv(&triangle_mesh(0)).unwrap();
        assert_eq!(converter.encode_texture().unwrap(), top_down);
    }

    #[test]
    fn test_export_before_draw_fails() {
        let converter = UvTextureConverter::new(RenderConfig::default());
        assert!(matches!(
            converter.encode_texture(),
            Err(RenderError::TextureNotCreated)
        ));
        assert!(matches!(
            converter.save_texture(&std::env::temp_dir()),
            Err(RenderError::TextureNotCreated)
        ));
    }

    #[test]
    fn test_save_texture_creates_unique_files() {
        let dir = std::env::temp_dir().join(format!("uv-raster-converter-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let mut converter = UvTextureConverter::new(RenderConfig::new(16, 16));
        converter.draw_uv(&triangle_mesh(0)).unwrap();

        let first = converter.save_texture(&dir).unwrap();
        let second = converter.save_texture(&dir).unwrap();
        assert_eq!(first, dir.join("GeneratedTextures").join("UV_Texture.png"));
        assert_eq!(second, dir.join("GeneratedTextures").join("UV_Texture 1.png"));
        assert!(first.exists() && second.exists());

        let bytes = converter.encode_texture().unwrap();
        assert_eq!(fs::read(&first).unwrap(), bytes);
        let _ = fs::remove_dir_all(&dir);
    }
}

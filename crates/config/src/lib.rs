//! Shared render settings for the UV layout rasterizer
//!
//! This crate is the single source of truth for the knobs a caller can turn
//! before rasterizing a mesh's UV layout: output resolution, edge margin,
//! stroke thickness, colours and the UV channel to draw.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default texture width in pixels
pub const DEFAULT_WIDTH: u32 = 1024;

/// Default texture height in pixels
pub const DEFAULT_HEIGHT: u32 = 1024;

/// Largest stroke thickness the settings accept
pub const MAX_THICKNESS: u32 = 20;

/// Largest edge margin the settings accept
pub const MAX_MARGIN: u32 = 500;

/// Number of UV channels a mesh can carry
pub const UV_CHANNEL_COUNT: u8 = 8;

/// Default stroke colour (opaque red)
pub const DEFAULT_STROKE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Default background colour (opaque white)
pub const DEFAULT_BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse render config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Texture resolution is zero: {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },
    #[error("UV channel {0} is out of range (0..{max})", max = UV_CHANNEL_COUNT)]
    ChannelOutOfRange(u8),
}

/// Order in which surface rows are written to an encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Row 0 ends up at the bottom of the file, so v = 0 sits at the bottom
    #[default]
    BottomUp,
    /// Row 0 ends up at the top of the file
    TopDown,
}

/// Settings for one UV layout render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Texture width in pixels
    pub width: u32,
    /// Texture height in pixels
    pub height: u32,
    /// Inset of the UV square from the texture edges, in pixels
    pub margin: u32,
    /// Extra pixels plotted on each side of a line pixel
    pub thickness: u32,
    /// Colour of the UV edges
    pub stroke_color: [f32; 4],
    /// Colour everything else is filled with
    pub background_color: [f32; 4],
    /// UV channel to draw (0-7)
    pub uv_channel: u8,
    /// Row order used when the texture is encoded
    pub row_order: RowOrder,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: 0,
            thickness: 0,
            stroke_color: DEFAULT_STROKE_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
            uv_channel: 0,
            row_order: RowOrder::default(),
        }
    }
}

impl RenderConfig {
    /// Create a config with the given resolution and default everything else
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings no render can use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.uv_channel >= UV_CHANNEL_COUNT {
            return Err(ConfigError::ChannelOutOfRange(self.uv_channel));
        }
        Ok(())
    }

    /// Clamp margin and thickness into their accepted ranges
    pub fn clamped(&self) -> Self {
        Self {
            margin: self.margin.min(MAX_MARGIN),
            thickness: self.thickness.min(MAX_THICKNESS),
            ..self.clone()
        }
    }
}

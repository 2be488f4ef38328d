//! RGBA colour helpers
//!
//! Colours are `[f32; 4]` in `[r, g, b, a]` order, the same layout the
//! CPU surface stores.

/// Opaque black
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Opaque white
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Opaque red
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Return the colour with its alpha forced to 1.0
#[inline]
pub fn opaque(color: [f32; 4]) -> [f32; 4] {
    [color[0], color[1], color[2], 1.0]
}

/// Quantize a float channel to u8 (clamped, rounded)
#[inline]
pub fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a float RGBA colour to 8-bit RGBA
#[inline]
pub fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    [
        channel_to_u8(color[0]),
        channel_to_u8(color[1]),
        channel_to_u8(color[2]),
        channel_to_u8(color[3]),
    ]
}

/// Convert an 8-bit RGBA colour to floats
#[inline]
pub fn from_rgba8(rgba: [u8; 4]) -> [f32; 4] {
    [
        rgba[0] as f32 / 255.0,
        rgba[1] as f32 / 255.0,
        rgba[2] as f32 / 255.0,
        rgba[3] as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_forces_alpha() {
        assert_eq!(opaque([0.2, 0.4, 0.6, 0.0]), [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(to_rgba8([1.5, -0.5, 0.5, 1.0]), [255, 0, 128, 255]);
    }

    #[test]
    fn test_rgba8_roundtrip_exact_for_u8_values() {
        let rgba = [12, 200, 0, 255];
        assert_eq!(to_rgba8(from_rgba8(rgba)), rgba);
    }
}

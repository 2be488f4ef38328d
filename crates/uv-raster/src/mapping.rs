//! UV to pixel coordinate mapping
//!
//! The unit UV square is mapped onto the rectangle
//! `[margin, width - margin] x [margin, height - margin]`. Note the upper
//! bound is `width`, not `width - 1`: with a zero margin, `u = 1` lands one
//! past the last column and the pixel is clipped when drawn.
//!
//! A margin of more than half the width (or height) flips the rectangle, so
//! `u = 0` ends up right of `u = 1`. That is left as is.
//!
//! [`UvMapping::map`] additionally clamps its output to four times the
//! larger image side in each direction. Margins up to about twice the image
//! size map exactly; beyond that the endpoints are pulled in so the line
//! walker never sees a delta that overflows `i32`.

use glam::{IVec2, Vec2};

/// Linear interpolation with `t` clamped to [0, 1]
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Map a UV coordinate to a pixel on a `width` x `height` image.
///
/// Halfway values round to the nearest even integer.
pub fn uv_to_pixel(uv: Vec2, margin: u32, width: u32, height: u32) -> IVec2 {
    let margin = margin as f32;
    let x = lerp_clamped(margin, width as f32 - margin, uv.x);
    let y = lerp_clamped(margin, height as f32 - margin, uv.y);
    IVec2::new(x.round_ties_even() as i32, y.round_ties_even() as i32)
}

/// Pixel-space mapping bound to one image size and margin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvMapping {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl UvMapping {
    pub fn new(width: u32, height: u32, margin: u32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Largest absolute coordinate [`UvMapping::map`] returns
    pub fn coordinate_bound(&self) -> i32 {
        let bound = i64::from(self.width.max(self.height)) * 4;
        bound.min(i64::from(i32::MAX / 4)) as i32
    }

    #[inline]
    pub fn map(&self, uv: Vec2) -> IVec2 {
        let bound = self.coordinate_bound();
        uv_to_pixel(uv, self.margin, self.width, self.height)
            .clamp(IVec2::splat(-bound), IVec2::splat(bound))
    }

    /// Whether the margin flips the rectangle on either axis
    pub fn is_inverted(&self) -> bool {
        let twice_margin = u64::from(self.margin) * 2;
        twice_margin > u64::from(self.width) || twice_margin > u64::from(self.height)
    }
}

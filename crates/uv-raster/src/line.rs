//! Integer line stroking
//!
//! Lines are walked with Bresenham's algorithm: one pixel per step along the
//! longer axis, with an error accumulator deciding when to also step along
//! the shorter one. The result is an 8-connected line with no floating point.
//!
//! Thickness is applied as a plus-shaped cross around every line pixel, not
//! perpendicular to the line, so steep and shallow lines widen differently.

use glam::IVec2;

use crate::surface::PixelImage;

/// Iterator over the pixels of a Bresenham line, start to end inclusive.
///
/// Bookkeeping is done in i64 so any pair of `i32` endpoints is accepted.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    current: IVec2,
    /// Step taken when the accumulator overflows
    diagonal_step: IVec2,
    /// Step taken otherwise (along the long axis only)
    straight_step: IVec2,
    longest: i64,
    shortest: i64,
    numerator: i64,
    remaining: i64,
}

impl BresenhamLine {
    pub fn new(from: IVec2, to: IVec2) -> Self {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        let sign = IVec2::new(dx.signum() as i32, dy.signum() as i32);

        // Ties go to the vertical axis
        let (longest, shortest, straight_step) = if dx.abs() > dy.abs() {
            (dx.abs(), dy.abs(), IVec2::new(sign.x, 0))
        } else {
            (dy.abs(), dx.abs(), IVec2::new(0, sign.y))
        };

        Self {
            current: from,
            diagonal_step: sign,
            straight_step,
            longest,
            shortest,
            numerator: longest >> 1,
            remaining: longest + 1,
        }
    }

    /// Number of pixels the line covers
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.longest + 1) as usize
    }
}

impl Iterator for BresenhamLine {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = self.current;
        // No step past the end point, which may sit at the edge of i32
        if self.remaining > 0 {
            self.numerator += self.shortest;
            if self.numerator >= self.longest {
                self.numerator -= self.longest;
                self.current += self.diagonal_step;
            } else {
                self.current += self.straight_step;
            }
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Plot a pixel plus `thickness` pixels in each axis direction.
///
/// The cross is clipped to the image up front, so the work per point is
/// bounded by the image size whatever the thickness.
#[inline]
pub fn plot_cross<I: PixelImage + ?Sized>(
    image: &mut I,
    point: IVec2,
    thickness: u32,
    color: [f32; 4],
) {
    let reach = i64::from(thickness);
    let (x, y) = (i64::from(point.x), i64::from(point.y));
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));

    if (0..height).contains(&y) {
        for px in (x - reach).max(0)..=(x + reach).min(width - 1) {
            image.set(px as i32, point.y, color);
        }
    }
    if (0..width).contains(&x) {
        for py in (y - reach).max(0)..=(y + reach).min(height - 1) {
            image.set(point.x, py as i32, color);
        }
    }
}

/// Stroke a line from `from` to `to` with plus-shaped thickness.
///
/// A zero-length line still plots its single point.
pub fn draw_line<I: PixelImage + ?Sized>(
    image: &mut I,
    from: IVec2,
    to: IVec2,
    thickness: u32,
    color: [f32; 4],
) {
    for point in BresenhamLine::new(from, to) {
        plot_cross(image, point, thickness, color);
    }
}

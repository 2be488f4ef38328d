//! Pixel targets for UV rendering
//!
//! [`PixelImage`] is the minimal interface the rasterizer needs from a
//! texture: dimensions, per-pixel get/set and a commit step. [`CpuSurface`]
//! is the owned contiguous implementation; `image::RgbaImage` is supported
//! as well so callers can render straight into an encodable buffer.

use image::{Rgba, RgbaImage};
use tracing::trace;

use crate::color::{from_rgba8, to_rgba8};

/// A 2D RGBA pixel grid the rasterizer can draw into.
///
/// Coordinates are signed so callers can hand over points that fall off
/// the image; `set` ignores them and `get` returns `None`.
pub trait PixelImage {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Get the pixel at (x, y), or None if out of bounds
    fn get(&self, x: i32, y: i32) -> Option<[f32; 4]>;

    /// Set the pixel at (x, y). Out of bounds writes are dropped.
    fn set(&mut self, x: i32, y: i32, color: [f32; 4]);

    /// Make all previous writes visible to readers
    fn commit(&mut self);

    /// Overwrite every pixel with `color`
    fn fill(&mut self, color: [f32; 4]) {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                self.set(x, y, color);
            }
        }
    }

    /// Check whether (x, y) lies inside the image
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}

/// A float RGBA CPU surface.
/// Stores pixels as [f32; 4] in row-major order.
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a] as f32
    pixels: Vec<[f32; 4]>,
    /// Writes made since the last commit
    pending_writes: usize,
    /// Number of commits so far
    revision: u64,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 0.0]; pixel_count],
            pending_writes: 0,
            revision: 0,
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Count pixels equal to `color`
    pub fn count_pixels(&self, color: [f32; 4]) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Whether all writes have been committed
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.pending_writes == 0
    }

    /// Number of commits applied to this surface
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl PixelImage for CpuSurface {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, color: [f32; 4]) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
            self.pending_writes += 1;
        }
    }

    fn commit(&mut self) {
        trace!(
            "commit: {} pending writes, revision {}",
            self.pending_writes,
            self.revision + 1
        );
        self.pending_writes = 0;
        self.revision += 1;
    }

    fn fill(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
        self.pending_writes += self.pixels.len();
    }
}

impl PixelImage for RgbaImage {
    #[inline]
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    #[inline]
    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        if !PixelImage::contains(self, x, y) {
            return None;
        }
        Some(from_rgba8(self.get_pixel(x as u32, y as u32).0))
    }

    fn set(&mut self, x: i32, y: i32, color: [f32; 4]) {
        if PixelImage::contains(self, x, y) {
            self.put_pixel(x as u32, y as u32, Rgba(to_rgba8(color)));
        }
    }

    // Writes go straight into the buffer
    fn commit(&mut self) {}

    fn fill(&mut self, color: [f32; 4]) {
        let rgba = Rgba(to_rgba8(color));
        for pixel in self.pixels_mut() {
            *pixel = rgba;
        }
    }
}

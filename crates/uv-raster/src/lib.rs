//! UV layout rasterizer - draws a mesh's UV wireframe onto a texture
//!
//! This crate provides the pieces of the UV layout pipeline:
//! - [`mesh::UvMesh`] - Plain mesh data with up to eight UV channels
//! - [`topology`] - Grouping of flat index buffers into triangles
//! - [`surface`] - The [`surface::PixelImage`] trait and a CPU RGBA surface
//! - [`mapping`] - UV to pixel coordinate mapping
//! - [`line`] - Bresenham line stroking with plus-shaped thickness
//! - [`render`] - Background fill, edge stroking and commit
//! - [`export`] - RGBA8 conversion and PNG encoding
//! - [`converter`] - Config-driven render and save workflow

pub mod color;
pub mod constants;
pub mod converter;
pub mod error;
pub mod export;
pub mod line;
pub mod mapping;
pub mod mesh;
pub mod render;
pub mod surface;
pub mod topology;

pub use color::*;
pub use constants::*;
pub use converter::*;
pub use error::*;
pub use export::*;
pub use line::*;
pub use mapping::*;
pub use mesh::*;
pub use render::*;
pub use surface::*;
pub use topology::*;

pub use uv_raster_config::{RenderConfig, RowOrder};

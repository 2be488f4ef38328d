//! UV wireframe rendering
//!
//! [`render`] repaints the whole image: background fill first, then every
//! triangle's three edges, then a commit. Nothing from a previous render
//! survives, so overlays need separate images.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
use uv_raster_config::RenderConfig;

use crate::color::{RED, WHITE, opaque};
use crate::error::RenderError;
use crate::line::draw_line;
use crate::mapping::UvMapping;
use crate::mesh::UvMesh;
use crate::surface::PixelImage;
use crate::topology::Triangle;

/// Stroke settings for one render call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    /// Inset of the UV square from the image edges, in pixels
    pub margin: u32,
    /// Extra pixels plotted on each side of a line pixel (0 = one pixel wide)
    pub thickness: u32,
    /// Edge colour, always opaque
    pub stroke_color: [f32; 4],
    /// Fill colour, always opaque
    pub background_color: [f32; 4],
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            margin: 0,
            thickness: 0,
            stroke_color: RED,
            background_color: WHITE,
        }
    }
}

impl RenderParams {
    /// Create params; both colours get their alpha forced to 1.0
    pub fn new(
        margin: u32,
        thickness: u32,
        stroke_color: [f32; 4],
        background_color: [f32; 4],
    ) -> Self {
        Self {
            margin,
            thickness,
            stroke_color: opaque(stroke_color),
            background_color: opaque(background_color),
        }
    }
}

impl From<&RenderConfig> for RenderParams {
    fn from(config: &RenderConfig) -> Self {
        Self::new(
            config.margin,
            config.thickness,
            config.stroke_color,
            config.background_color,
        )
    }
}

/// Fail with [`RenderError::InvalidResolution`] if either dimension is zero
pub fn check_resolution<I: PixelImage + ?Sized>(image: &I) -> Result<(), RenderError> {
    if image.width() == 0 || image.height() == 0 {
        debug!(
            "check_resolution: rejecting {}x{} image",
            image.width(),
            image.height()
        );
        return Err(RenderError::InvalidResolution {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}

/// Overwrite every pixel with the opaque version of `color`
pub fn fill_background<I: PixelImage + ?Sized>(image: &mut I, color: [f32; 4]) {
    image.fill(opaque(color));
}

fn check_indices(uvs: &[Vec2], triangles: &[Triangle]) -> Result<(), RenderError> {
    let out_of_range = triangles
        .iter()
        .flat_map(|triangle| triangle.vertices)
        .find(|&index| index as usize >= uvs.len());

    match out_of_range {
        Some(index) => Err(RenderError::IndexOutOfRange {
            index,
            uv_count: uvs.len(),
        }),
        None => Ok(()),
    }
}

/// Draw the UV wireframe of `triangles` into `image`.
///
/// Inputs are validated before the first pixel write, so an error leaves
/// the image untouched. On success the image is committed and handed back.
pub fn render<'a, I: PixelImage + ?Sized>(
    image: &'a mut I,
    uvs: &[Vec2],
    triangles: &[Triangle],
    params: &RenderParams,
) -> Result<&'a mut I, RenderError> {
    check_resolution(image)?;
    check_indices(uvs, triangles)?;

    let mapping = UvMapping::new(image.width(), image.height(), params.margin);
    info!(
        "render: {} triangles onto {}x{} (margin {}, thickness {})",
        triangles.len(),
        mapping.width,
        mapping.height,
        params.margin,
        params.thickness
    );
    if mapping.is_inverted() {
        debug!("render: margin {} inverts the UV rectangle", params.margin);
    }

    fill_background(image, params.background_color);

    let stroke = opaque(params.stroke_color);
    for (i, triangle) in triangles.iter().enumerate() {
        let [a, b, c]: [IVec2; 3] = triangle
            .vertices
            .map(|index| mapping.map(uvs[index as usize]));
        trace!("triangle {}: {} {} {}", i, a, b, c);

        draw_line(image, b, a, params.thickness, stroke);
        draw_line(image, c, b, params.thickness, stroke);
        draw_line(image, c, a, params.thickness, stroke);
    }

    image.commit();
    Ok(image)
}

/// Resolve `channel` on `mesh` and render its UV layout.
///
/// Fails with [`RenderError::InvalidChannel`] for an empty channel and with
/// [`RenderError::DegenerateGeometry`] for a broken index buffer, both
/// before the image is touched.
pub fn render_mesh<'a, I: PixelImage + ?Sized>(
    image: &'a mut I,
    mesh: &UvMesh,
    channel: usize,
    params: &RenderParams,
) -> Result<&'a mut I, RenderError> {
    let uvs = mesh.uv_channel(channel)?;
    let triangles = mesh.triangles()?;
    render(image, uvs, &triangles, params)
}

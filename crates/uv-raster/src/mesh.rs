//! Plain mesh data consumed by the UV renderer
//!
//! A [`UvMesh`] holds vertex positions, up to [`MAX_UV_CHANNELS`] UV sets
//! and a flat triangle index buffer. Channels are either empty (unused) or
//! exactly as long as the vertex list.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MAX_UV_CHANNELS;
use crate::error::RenderError;
use crate::topology::{Triangle, try_extract_triangles};

/// Mesh geometry with multiple UV channels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UvMesh {
    /// Vertex positions (not used for rasterization)
    pub positions: Vec<Vec3>,
    /// UV sets, one per channel; an empty vec marks an unused channel
    pub uv_channels: [Vec<Vec2>; MAX_UV_CHANNELS],
    /// Flat triangle list, three indices per triangle
    pub indices: Vec<u32>,
}

impl UvMesh {
    /// Create a mesh with positions and indices but no UVs
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            uv_channels: Default::default(),
            indices,
        }
    }

    /// Builder form of [`UvMesh::set_uvs`]
    pub fn with_uvs(mut self, channel: usize, uvs: Vec<Vec2>) -> Result<Self, RenderError> {
        self.set_uvs(channel, uvs)?;
        Ok(self)
    }

    /// Replace the UVs of a channel
    pub fn set_uvs(&mut self, channel: usize, uvs: Vec<Vec2>) -> Result<(), RenderError> {
        let slot = self
            .uv_channels
            .get_mut(channel)
            .ok_or(RenderError::ChannelOutOfRange(channel))?;
        *slot = uvs;
        Ok(())
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of whole triangles in the index buffer
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Resolve a channel selector to its UV array.
    ///
    /// Fails with [`RenderError::InvalidChannel`] when the channel holds no UVs.
    pub fn uv_channel(&self, channel: usize) -> Result<&[Vec2], RenderError> {
        let uvs = self
            .uv_channels
            .get(channel)
            .ok_or(RenderError::ChannelOutOfRange(channel))?;
        if uvs.is_empty() {
            debug!("uv_channel: channel {} is empty", channel);
            return Err(RenderError::InvalidChannel(channel));
        }
        Ok(uvs)
    }

    /// Channels that carry UVs, in ascending order
    pub fn available_channels(&self) -> Vec<usize> {
        self.uv_channels
            .iter()
            .enumerate()
            .filter(|(_, uvs)| !uvs.is_empty())
            .map(|(channel, _)| channel)
            .collect()
    }

    /// Group the index buffer into triangles
    pub fn triangles(&self) -> Result<Vec<Triangle>, RenderError> {
        try_extract_triangles(&self.indices)
    }

    /// Check channel lengths and index buffer shape
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.indices.len() % 3 != 0 {
            return Err(RenderError::DegenerateGeometry {
                index_count: self.indices.len(),
            });
        }

        for (channel, uvs) in self.uv_channels.iter().enumerate() {
            if !uvs.is_empty() && uvs.len() != self.vertex_count() {
                return Err(RenderError::ChannelLengthMismatch {
                    channel,
                    uv_count: uvs.len(),
                    vertex_count: self.vertex_count(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> UvMesh {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let uvs = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        UvMesh::new(positions, vec![0, 1, 2, 0, 2, 3])
            .with_uvs(0, uvs)
            .unwrap()
    }

    #[test]
    fn test_uv_channel_resolves() {
        let mesh = quad();
        let uvs = mesh.uv_channel(0).unwrap();
        assert_eq!(uvs.len(), 4);
        assert_eq!(uvs[2], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_empty_channel_is_invalid() {
        let mesh = quad();
        assert!(matches!(
            mesh.uv_channel(1),
            Err(RenderError::InvalidChannel(1))
        ));
    }

    #[test]
    fn test_channel_out_of_range() {
        let mesh = quad();
        assert!(matches!(
            mesh.uv_channel(8),
            Err(RenderError::ChannelOutOfRange(8))
        ));

        let mut mesh = quad();
        assert!(mesh.set_uvs(9, Vec::new()).is_err());
    }

    #[test]
    fn test_available_channels() {
        let mesh = quad().with_uvs(5, vec![Vec2::ZERO; 4]).unwrap();
        assert_eq!(mesh.available_channels(), vec![0, 5]);
    }

    #[test]
    fn test_triangles() {
        let mesh = quad();
        assert_eq!(mesh.triangle_count(), 2);
        let triangles = mesh.triangles().unwrap();
        assert_eq!(triangles[1].vertices, [0, 2, 3]);
    }

    #[test]
    fn test_validate() {
        assert!(quad().validate().is_ok());

        let short = quad().with_uvs(2, vec![Vec2::ZERO; 3]).unwrap();
        assert!(matches!(
            short.validate(),
            Err(RenderError::ChannelLengthMismatch {
                channel: 2,
                uv_count: 3,
                vertex_count: 4
            })
        ));

        let mut broken = quad();
        broken.indices.pop();
        assert!(matches!(
            broken.validate(),
            Err(RenderError::DegenerateGeometry { index_count: 5 })
        ));
    }
}

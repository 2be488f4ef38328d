//! Triangle extraction from flat index buffers

use crate::error::RenderError;

/// Three vertex indices in the winding order of the index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub vertices: [u32; 3],
}

impl Triangle {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
}

/// Group consecutive indices into triangles.
///
/// Index bounds are not checked here. A trailing partial triple is ignored;
/// use [`try_extract_triangles`] to reject it instead.
pub fn extract_triangles(indices: &[u32]) -> Vec<Triangle> {
    indices
        .chunks_exact(3)
        .map(|chunk| Triangle::new(chunk[0], chunk[1], chunk[2]))
        .collect()
}

/// Like [`extract_triangles`], but fails on an index count not divisible by 3
pub fn try_extract_triangles(indices: &[u32]) -> Result<Vec<Triangle>, RenderError> {
    if indices.len() % 3 != 0 {
        return Err(RenderError::DegenerateGeometry {
            index_count: indices.len(),
        });
    }
    Ok(extract_triangles(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_preserves_order() {
        let triangles = extract_triangles(&[2, 0, 1, 5, 4, 3]);
        assert_eq!(
            triangles,
            vec![Triangle::new(2, 0, 1), Triangle::new(5, 4, 3)]
        );
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_triangles(&[]).is_empty());
    }

    #[test]
    fn test_out_of_range_indices_pass_through() {
        let triangles = extract_triangles(&[0, 1, 999]);
        assert_eq!(triangles[0].vertices[2], 999);
    }

    #[test]
    fn test_try_extract_rejects_partial_triangle() {
        assert!(matches!(
            try_extract_triangles(&[0, 1, 2, 3]),
            Err(RenderError::DegenerateGeometry { index_count: 4 })
        ));
        assert_eq!(try_extract_triangles(&[0, 1, 2]).unwrap().len(), 1);
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that generates rectangular floor meshes.
//!
//! A floor of `width × height` cells has one vertex per integer grid point of
//! the closed rectangle `[0, width] × [0, height]`, a boundary quad covering
//! the whole area, and one line per interior grid division. Vertex indices are
//! assigned column by column (x outer, y inner), and every index list refers
//! back into that exact order.

use std::collections::HashMap;

use lightbot_core::{Edge, Floor, MeshError, Quad, Vertex};
use serde::{Deserialize, Serialize};

/// Dimensions and elevation of a floor to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloorSpec {
    /// Number of cells along the x axis.
    pub width: u32,
    /// Number of cells along the y axis.
    pub height: u32,
    /// Elevation shared by every vertex.
    pub level: i32,
}

impl FloorSpec {
    /// Creates a new floor specification.
    #[must_use]
    pub const fn new(width: u32, height: u32, level: i32) -> Self {
        Self {
            width,
            height,
            level,
        }
    }
}

/// Largest vertex list a single floor may allocate.
pub const MAX_FLOOR_VERTICES: usize = 1 << 20;

/// Generates [`Floor`] meshes from integer dimensions.
#[derive(Debug, Default)]
pub struct FloorMeshBuilder;

impl FloorMeshBuilder {
    /// Builds the mesh of a `width × height` floor at `level`.
    ///
    /// Zero-sized floors are rejected rather than degenerated, as are floors
    /// needing more than [`MAX_FLOOR_VERTICES`] vertices.
    pub fn build(&self, width: u32, height: u32, level: i32) -> Result<Floor, MeshError> {
        let invalid = || MeshError::InvalidArgument {
            width,
            height,
            level,
        };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let max_x = i32::try_from(width).map_err(|_| invalid())?;
        let max_y = i32::try_from(height).map_err(|_| invalid())?;
        let vertex_count = grid_points(width)
            .zip(grid_points(height))
            .and_then(|(columns, rows)| columns.checked_mul(rows))
            .filter(|&count| count <= MAX_FLOOR_VERTICES)
            .ok_or_else(invalid)?;

        let grid = VertexGrid::generate(max_x, max_y, level, vertex_count);
        let big_rect: Quad = [
            grid.index(0, 0),
            grid.index(0, max_y),
            grid.index(max_x, max_y),
            grid.index(max_x, 0),
        ];

        let horizontal = (1..max_y).map(|y| [grid.index(0, y), grid.index(max_x, y)]);
        let vertical = (1..max_x).map(|x| [grid.index(x, 0), grid.index(x, max_y)]);
        let edges: Vec<Edge> = horizontal.chain(vertical).collect();

        log::debug!(
            "built {width}x{height} floor at level {level}: {} vertices, {} interior edges",
            grid.vertices.len(),
            edges.len()
        );
        Floor::from_parts(width, height, level, grid.vertices, big_rect, edges)
    }

    /// Builds one floor per specification, in order.
    ///
    /// Stops at the first invalid specification.
    pub fn build_stack(&self, specs: &[FloorSpec]) -> Result<Vec<Floor>, MeshError> {
        specs
            .iter()
            .map(|spec| self.build(spec.width, spec.height, spec.level))
            .collect()
    }
}

/// Number of grid points along an axis spanning `cells` cells.
fn grid_points(cells: u32) -> Option<usize> {
    usize::try_from(cells).ok()?.checked_add(1)
}

/// Vertex list paired with the coordinate lookup built alongside it.
struct VertexGrid {
    vertices: Vec<Vertex>,
    indices: HashMap<(i32, i32), usize>,
}

impl VertexGrid {
    fn generate(max_x: i32, max_y: i32, level: i32, capacity: usize) -> Self {
        let mut vertices = Vec::with_capacity(capacity);
        let mut indices = HashMap::with_capacity(capacity);
        for x in 0..=max_x {
            for y in 0..=max_y {
                let _ = indices.insert((x, y), vertices.len());
                vertices.push(Vertex::new(x, y, level));
            }
        }
        Self { vertices, indices }
    }

    /// Index of the grid point `(x, y)`; only called with points inside the grid.
    fn index(&self, x: i32, y: i32) -> usize {
        self.indices[&(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_grid_enumerates_columns_first() {
        let grid = VertexGrid::generate(2, 1, 3, 6);

        assert_eq!(
            grid.vertices,
            vec![
                Vertex::new(0, 0, 3),
                Vertex::new(0, 1, 3),
                Vertex::new(1, 0, 3),
                Vertex::new(1, 1, 3),
                Vertex::new(2, 0, 3),
                Vertex::new(2, 1, 3),
            ]
        );
        assert_eq!(grid.index(1, 1), 3);
        assert_eq!(grid.index(2, 0), 4);
    }

    #[test]
    fn lookup_matches_arithmetic_index() {
        let (max_x, max_y) = (5, 4);
        let grid = VertexGrid::generate(max_x, max_y, 0, 30);

        for x in 0..=max_x {
            for y in 0..=max_y {
                let expected = (x * (max_y + 1) + y) as usize;
                assert_eq!(grid.index(x, y), expected);
            }
        }
    }
}

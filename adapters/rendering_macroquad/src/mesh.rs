//! Conversion of floor and board descriptors into Macroquad meshes.
//!
//! Macroquad indexes meshes with `u16`, so every conversion checks that the
//! source index space fits before handing vertices to the GPU.

use anyhow::{Context, Result};
use glam::Vec3;
use lightbot_rendering::{CellHighlight, FloorPresentation, StartMarker};
use macroquad::{
    math::{Vec2 as MacroquadVec2, Vec3 as MacroquadVec3},
    models::{Mesh, Vertex},
};

use crate::to_macroquad_color;

/// Half the side length of the start marker square, in cells.
const START_MARKER_HALF_SIZE: f32 = 0.2;

/// Builds the filled boundary quad of a floor from its vertex and face lists.
pub(crate) fn floor_mesh(presentation: &FloorPresentation) -> Result<Mesh> {
    let floor = &presentation.floor;
    let color = to_macroquad_color(presentation.fill);
    let vertices = floor
        .vertices()
        .iter()
        .map(|vertex| mesh_vertex(Vec3::from(vertex.to_array()), color))
        .collect();
    let indices = floor
        .triangles()
        .iter()
        .flatten()
        .map(|&index| {
            u16::try_from(index).with_context(|| {
                format!(
                    "floor {}x{} at level {} exceeds the mesh index range",
                    floor.width(),
                    floor.height(),
                    floor.level()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Mesh {
        vertices,
        indices,
        texture: None,
    })
}

/// Builds a single mesh covering every highlighted cell.
pub(crate) fn highlight_mesh(highlights: &[CellHighlight]) -> Result<Option<Mesh>> {
    if highlights.is_empty() {
        return Ok(None);
    }

    let mut vertices = Vec::with_capacity(highlights.len() * 4);
    let mut indices = Vec::with_capacity(highlights.len() * 6);
    for highlight in highlights {
        let base = u16::try_from(vertices.len() + 3)
            .map(|last| last - 3)
            .context("too many highlighted cells for a single mesh")?;
        let color = to_macroquad_color(highlight.color);
        vertices.extend(
            highlight
                .corners
                .iter()
                .map(|&corner| mesh_vertex(corner, color)),
        );
        indices.extend_from_slice(&quad_indices(base));
    }

    Ok(Some(Mesh {
        vertices,
        indices,
        texture: None,
    }))
}

/// Builds a small square centred on the start cell.
pub(crate) fn start_marker_mesh(marker: &StartMarker) -> Mesh {
    let color = to_macroquad_color(marker.color);
    let [x, y, z] = marker.position.to_array();
    let h = START_MARKER_HALF_SIZE;
    let corners = [
        Vec3::new(x - h, y - h, z),
        Vec3::new(x - h, y + h, z),
        Vec3::new(x + h, y + h, z),
        Vec3::new(x + h, y - h, z),
    ];

    Mesh {
        vertices: corners
            .iter()
            .map(|&corner| mesh_vertex(corner, color))
            .collect(),
        indices: quad_indices(0).to_vec(),
        texture: None,
    }
}

/// End points of the line showing which way the actor faces.
pub(crate) fn start_marker_arrow(marker: &StartMarker) -> (MacroquadVec3, MacroquadVec3) {
    let tip = marker.position + marker.facing.extend(0.0) * 0.45;
    (to_macroquad_vec3(marker.position), to_macroquad_vec3(tip))
}

/// Line color for a floor grid, `None` when the grid is hidden.
pub(crate) fn grid_color(presentation: &FloorPresentation) -> Option<macroquad::color::Color> {
    presentation.grid.map(to_macroquad_color)
}

fn quad_indices(base: u16) -> [u16; 6] {
    [base, base + 1, base + 2, base, base + 2, base + 3]
}

fn mesh_vertex(position: Vec3, color: macroquad::color::Color) -> Vertex {
    Vertex {
        position: to_macroquad_vec3(position),
        uv: MacroquadVec2::ZERO,
        color,
    }
}

pub(crate) fn to_macroquad_vec3(vector: Vec3) -> MacroquadVec3 {
    MacroquadVec3::new(vector.x, vector.y, vector.z)
}

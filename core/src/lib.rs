#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lightbot engine.
//!
//! This crate defines the data model that connects the level loader, the
//! floor mesh builder and the rendering adapters. A [`Board`] is the typed
//! form of a level file: a fully populated grid of [`Cell`] values plus the
//! actor's [`StartPose`]. A [`Floor`] is a procedurally generated rectangular
//! mesh described purely through [`Vertex`] coordinates and index lists, so
//! any drawing backend can consume it without knowing how it was produced.
//!
//! Every type here is immutable once constructed. Constructors validate the
//! invariants that downstream consumers rely upon and report violations
//! through [`FormatError`] and [`MeshError`].

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical window title used when the experience boots.
pub const WINDOW_TITLE: &str = "Lightbot";

/// One grid square of a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    elevation: u32,
    active: bool,
    lit: bool,
}

impl Cell {
    /// Creates a new unlit cell.
    #[must_use]
    pub const fn new(elevation: u32, active: bool) -> Self {
        Self {
            elevation,
            active,
            lit: false,
        }
    }

    /// Decodes a single level-file integer.
    ///
    /// The magnitude is the elevation and a negative sign marks the cell as
    /// active. Cells always start unlit.
    #[must_use]
    pub const fn from_encoded(value: i32) -> Self {
        Self::new(value.unsigned_abs(), value < 0)
    }

    /// Height tier of the cell.
    #[must_use]
    pub const fn elevation(&self) -> u32 {
        self.elevation
    }

    /// Whether the cell is a target that the actor has to light up.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Whether the cell is currently lit.
    #[must_use]
    pub const fn lit(&self) -> bool {
        self.lit
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "z = {}, active = {}, lit up = {}",
            self.elevation, self.active, self.lit
        )
    }
}

/// Initial facing of the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing 0 degrees.
    North,
    /// Facing 90 degrees.
    East,
    /// Facing 180 degrees.
    South,
    /// Facing 270 degrees.
    West,
}

impl Heading {
    const QUADRANTS: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Decodes the raw `start_angle` header value.
    ///
    /// Values `0..=3` are quadrant indices, anything else has to be a multiple
    /// of 90 degrees. Returns `None` for every other value.
    #[must_use]
    pub fn from_raw(value: i32) -> Option<Self> {
        let quadrant = if (0..=3).contains(&value) {
            value
        } else if value % 90 == 0 {
            (value / 90).rem_euclid(4)
        } else {
            return None;
        };
        usize::try_from(quadrant)
            .ok()
            .and_then(|index| Self::QUADRANTS.get(index).copied())
    }

    /// Zero-based quadrant index, clockwise from north.
    #[must_use]
    pub const fn quadrant(self) -> u32 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Facing expressed in whole degrees.
    #[must_use]
    pub const fn degrees(self) -> u32 {
        self.quadrant() * 90
    }
}

/// Starting position and facing of the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartPose {
    column: u32,
    row: u32,
    heading: Heading,
    raw_angle: i32,
}

impl StartPose {
    /// Creates a start pose from the raw header angle.
    ///
    /// Fails when the angle cannot be decoded into a [`Heading`].
    pub fn new(column: u32, row: u32, raw_angle: i32) -> Result<Self, FormatError> {
        let heading =
            Heading::from_raw(raw_angle).ok_or(FormatError::InvalidHeading { value: raw_angle })?;
        Ok(Self {
            column,
            row,
            heading,
            raw_angle,
        })
    }

    /// Zero-based column of the starting cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row of the starting cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Decoded initial facing.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Angle exactly as written in the level header.
    #[must_use]
    pub const fn raw_angle(&self) -> i32 {
        self.raw_angle
    }
}

/// Loaded level grid plus the actor's starting pose.
///
/// Rows are stored top row first, matching the order of the level file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    width: u32,
    height: u32,
    start: StartPose,
    rows: Vec<Vec<Cell>>,
}

#[derive(Deserialize)]
struct BoardParts {
    width: u32,
    height: u32,
    start: StartPose,
    rows: Vec<Vec<Cell>>,
}

impl TryFrom<BoardParts> for Board {
    type Error = FormatError;

    fn try_from(parts: BoardParts) -> Result<Self, Self::Error> {
        Self::from_rows(parts.width, parts.height, parts.start, parts.rows)
    }
}

impl Board {
    /// Assembles a board from independently allocated rows.
    ///
    /// Every row must hold exactly `width` cells, there must be exactly
    /// `height` rows, and the start pose has to lie inside the grid.
    pub fn from_rows(
        width: u32,
        height: u32,
        start: StartPose,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, FormatError> {
        if rows.len() != height as usize {
            return Err(FormatError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width as usize)
        {
            return Err(FormatError::RowLength {
                row,
                expected: width,
                found: cells.len(),
            });
        }
        if start.column() >= width || start.row() >= height {
            return Err(FormatError::StartOutOfBounds {
                column: i64::from(start.column()),
                row: i64::from(start.row()),
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            start,
            rows,
        })
    }

    /// Number of cells in every row.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Starting pose of the actor.
    #[must_use]
    pub const fn start(&self) -> StartPose {
        self.start
    }

    /// Retrieves the cell at the provided column and row.
    #[must_use]
    pub fn cell(&self, column: u32, row: u32) -> Option<&Cell> {
        self.rows
            .get(row as usize)
            .and_then(|cells| cells.get(column as usize))
    }

    /// Rows of the grid, top row first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterates every cell in row-major order together with its column and row.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> + '_ {
        self.rows.iter().zip(0u32..).flat_map(|(cells, row)| {
            cells
                .iter()
                .zip(0u32..)
                .map(move |(cell, column)| (column, row, cell))
        })
    }

    /// Total number of cells held by the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Highest elevation found on the board.
    #[must_use]
    pub fn max_elevation(&self) -> u32 {
        self.cells()
            .map(|(_, _, cell)| cell.elevation())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.rows {
            for cell in cells {
                writeln!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Point in 3-space used as a mesh index target.
///
/// `x` and `y` are grid coordinates and `z` is the floor level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    /// Grid coordinate along the board columns.
    pub x: i32,
    /// Grid coordinate along the board rows.
    pub y: i32,
    /// Level the vertex belongs to.
    pub z: i32,
}

impl Vertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinates converted for floating point draw APIs.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

/// Quad expressed as four indices into a vertex list.
pub type Quad = [usize; 4];

/// Line segment expressed as two indices into a vertex list.
pub type Edge = [usize; 2];

/// Triangle expressed as three indices into a vertex list.
pub type Triangle = [usize; 3];

/// Generated rectangular floor mesh at a single level.
///
/// The order of [`Floor::vertices`] defines the index namespace used by
/// [`Floor::big_rect`] and [`Floor::edges`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FloorParts")]
pub struct Floor {
    width: u32,
    height: u32,
    level: i32,
    vertices: Vec<Vertex>,
    big_rect: Quad,
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct FloorParts {
    width: u32,
    height: u32,
    level: i32,
    vertices: Vec<Vertex>,
    big_rect: Quad,
    edges: Vec<Edge>,
}

impl TryFrom<FloorParts> for Floor {
    type Error = MeshError;

    fn try_from(parts: FloorParts) -> Result<Self, Self::Error> {
        Self::from_parts(
            parts.width,
            parts.height,
            parts.level,
            parts.vertices,
            parts.big_rect,
            parts.edges,
        )
    }
}

impl Floor {
    /// Assembles a floor from its vertex list and index lists.
    ///
    /// Fails when a vertex is duplicated or lies outside `level`, when an
    /// index does not resolve, or when the vertex count is not
    /// `(width + 1) * (height + 1)`.
    pub fn from_parts(
        width: u32,
        height: u32,
        level: i32,
        vertices: Vec<Vertex>,
        big_rect: Quad,
        edges: Vec<Edge>,
    ) -> Result<Self, MeshError> {
        let mut seen = HashSet::with_capacity(vertices.len());
        for vertex in &vertices {
            if vertex.z != level {
                return Err(MeshError::LevelMismatch {
                    vertex: *vertex,
                    level,
                });
            }
            if !seen.insert(*vertex) {
                return Err(MeshError::DuplicateVertex { vertex: *vertex });
            }
        }

        let len = vertices.len();
        if let Some(&index) = big_rect
            .iter()
            .chain(edges.iter().flatten())
            .find(|&&index| index >= len)
        {
            return Err(MeshError::IndexOutOfRange { index, len });
        }

        let expected = (u64::from(width) + 1).checked_mul(u64::from(height) + 1);
        if expected != u64::try_from(len).ok() {
            return Err(MeshError::VertexCount { width, height, len });
        }

        Ok(Self {
            width,
            height,
            level,
            vertices,
            big_rect,
            edges,
        })
    }

    /// Number of cells along the x axis.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of cells along the y axis.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Elevation shared by every vertex of the floor.
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.level
    }

    /// Vertices in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Retrieves the vertex stored at `index`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        self.vertices.get(index).copied()
    }

    /// Outer boundary quad, wound `(0,0)`, `(0,h)`, `(w,h)`, `(w,0)`.
    #[must_use]
    pub const fn big_rect(&self) -> Quad {
        self.big_rect
    }

    /// Interior grid lines.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Boundary quad split into two triangles sharing its first corner.
    #[must_use]
    pub const fn triangles(&self) -> [Triangle; 2] {
        let [a, b, c, d] = self.big_rect;
        [[a, b, c], [a, c, d]]
    }

    /// Corner vertices of the boundary quad.
    #[must_use]
    pub fn outline(&self) -> [Vertex; 4] {
        self.big_rect.map(|index| self.vertices[index])
    }

    /// Interior grid lines resolved to their end points.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.edges
            .iter()
            .map(|&[from, to]| (self.vertices[from], self.vertices[to]))
    }
}

/// Problems found in the textual level description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The source did not contain a header line.
    #[error("level file is empty, expected a header line")]
    MissingHeader,
    /// The header did not hold exactly five integers.
    #[error("header must contain 5 integers, found {found}")]
    HeaderTokenCount {
        /// Number of tokens on the header line.
        found: usize,
    },
    /// A token could not be parsed as an integer.
    #[error("line {line}: `{token}` is not an integer")]
    InvalidInteger {
        /// One-based line number in the source.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// Width or height was negative.
    #[error("board dimensions must not be negative, found {width}x{height}")]
    InvalidDimension {
        /// Width declared in the header.
        width: i64,
        /// Height declared in the header.
        height: i64,
    },
    /// A body row did not hold exactly `width` integers.
    #[error("line {line}: row {row} must contain {expected} cells, found {found}")]
    RowTokenCount {
        /// Zero-based row index.
        row: usize,
        /// One-based line number in the source.
        line: usize,
        /// Width declared in the header.
        expected: u32,
        /// Number of tokens on the row.
        found: usize,
    },
    /// An assembled row did not hold exactly `width` cells.
    #[error("row {row} must contain {expected} cells, found {found}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Board width.
        expected: u32,
        /// Number of cells in the row.
        found: usize,
    },
    /// The body did not hold exactly `height` rows.
    #[error("board must contain {expected} rows, found {found}")]
    RowCount {
        /// Height declared in the header.
        expected: u32,
        /// Number of body rows.
        found: usize,
    },
    /// The start position lies outside the grid.
    #[error("start position ({column}, {row}) lies outside the {width}x{height} board")]
    StartOutOfBounds {
        /// Start column declared in the header.
        column: i64,
        /// Start row declared in the header.
        row: i64,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
    /// The start angle is neither a quadrant index nor a multiple of 90 degrees.
    #[error("start angle {value} is neither a quadrant index nor a multiple of 90 degrees")]
    InvalidHeading {
        /// Angle declared in the header.
        value: i32,
    },
}

/// Failure to load a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The level text is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The source could not be read.
    #[error("failed to read level source")]
    Io(#[from] std::io::Error),
}

/// Failure to build or assemble a floor mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Requested dimensions cannot describe a floor.
    #[error("cannot build a {width}x{height} floor at level {level}: dimensions must be positive and the vertex grid bounded")]
    InvalidArgument {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Requested level.
        level: i32,
    },
    /// An index list referenced a missing vertex.
    #[error("vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of vertices.
        len: usize,
    },
    /// The same coordinates appeared twice.
    #[error("duplicate vertex {vertex:?}")]
    DuplicateVertex {
        /// Repeated vertex.
        vertex: Vertex,
    },
    /// The vertex list does not cover the grid points of the declared size.
    #[error("a {width}x{height} floor needs one vertex per grid point, found {len}")]
    VertexCount {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Number of vertices.
        len: usize,
    },
    /// A vertex does not share the floor's level.
    #[error("vertex {vertex:?} does not lie on level {level}")]
    LevelMismatch {
        /// Offending vertex.
        vertex: Vertex,
        /// Level of the floor.
        level: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::{Board, Cell, Floor, FormatError, Heading, MeshError, StartPose, Vertex};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    fn start(column: u32, row: u32) -> StartPose {
        StartPose::new(column, row, 0).expect("valid heading")
    }

    fn unit_floor() -> Floor {
        let vertices = vec![
            Vertex::new(0, 0, 0),
            Vertex::new(0, 1, 0),
            Vertex::new(1, 0, 0),
            Vertex::new(1, 1, 0),
        ];
        Floor::from_parts(1, 1, 0, vertices, [0, 1, 3, 2], Vec::new()).expect("valid floor")
    }

    #[test]
    fn cell_decodes_sign_as_activity() {
        assert_eq!(Cell::from_encoded(-3), Cell::new(3, true));
        assert_eq!(Cell::from_encoded(2), Cell::new(2, false));
        assert_eq!(Cell::from_encoded(0), Cell::new(0, false));
        assert!(!Cell::from_encoded(-1).lit());
    }

    #[test]
    fn cell_display_lists_every_flag() {
        assert_eq!(
            Cell::from_encoded(-2).to_string(),
            "z = 2, active = true, lit up = false"
        );
    }

    #[test]
    fn heading_accepts_quadrants_and_right_angles() {
        assert_eq!(Heading::from_raw(0), Some(Heading::North));
        assert_eq!(Heading::from_raw(3), Some(Heading::West));
        assert_eq!(Heading::from_raw(90), Some(Heading::East));
        assert_eq!(Heading::from_raw(180), Some(Heading::South));
        assert_eq!(Heading::from_raw(450), Some(Heading::East));
        assert_eq!(Heading::from_raw(-90), Some(Heading::West));
        assert_eq!(Heading::from_raw(45), None);
        assert_eq!(Heading::from_raw(-1), None);
        assert_eq!(Heading::West.degrees(), 270);
    }

    #[test]
    fn board_rejects_ragged_rows() {
        let rows = vec![vec![Cell::default(); 2], vec![Cell::default(); 1]];
        let error = Board::from_rows(2, 2, start(0, 0), rows).expect_err("ragged rows");

        assert_eq!(
            error,
            FormatError::RowLength {
                row: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn board_rejects_start_outside_grid() {
        let rows = vec![vec![Cell::default(); 2]; 2];
        let error = Board::from_rows(2, 2, start(2, 0), rows).expect_err("start out of bounds");

        assert!(matches!(error, FormatError::StartOutOfBounds { .. }));
    }

    #[test]
    fn board_cells_iterate_row_major() {
        let rows = vec![
            vec![Cell::from_encoded(0), Cell::from_encoded(-1)],
            vec![Cell::from_encoded(2), Cell::from_encoded(3)],
        ];
        let board = Board::from_rows(2, 2, start(1, 1), rows).expect("valid board");
        let order: Vec<_> = board
            .cells()
            .map(|(column, row, cell)| (column, row, cell.elevation()))
            .collect();

        assert_eq!(order, vec![(0, 0, 0), (1, 0, 1), (0, 1, 2), (1, 1, 3)]);
        assert_eq!(board.cell(1, 0), Some(&Cell::new(1, true)));
        assert_eq!(board.cell(2, 0), None);
        assert_eq!(board.max_elevation(), 3);
    }

    #[test]
    fn board_round_trips_through_bincode() {
        let rows = vec![vec![Cell::from_encoded(-1), Cell::from_encoded(4)]];
        let board = Board::from_rows(2, 1, start(1, 0), rows).expect("valid board");
        assert_round_trip(&board);
    }

    #[test]
    fn floor_round_trips_through_bincode() {
        assert_round_trip(&unit_floor());
    }

    #[test]
    fn floor_rejects_dangling_indices() {
        let vertices = vec![Vertex::new(0, 0, 0), Vertex::new(1, 0, 0)];
        let error = Floor::from_parts(1, 1, 0, vertices, [0, 1, 2, 3], Vec::new())
            .expect_err("dangling quad");

        assert_eq!(error, MeshError::IndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn floor_rejects_dimensions_disagreeing_with_vertices() {
        let vertices = unit_floor().vertices().to_vec();
        let error = Floor::from_parts(100, 100, 0, vertices, [0, 1, 3, 2], Vec::new())
            .expect_err("four vertices cannot span 100x100 cells");

        assert_eq!(
            error,
            MeshError::VertexCount {
                width: 100,
                height: 100,
                len: 4,
            }
        );
    }

    #[derive(Serialize)]
    struct RawBoard {
        width: u32,
        height: u32,
        start: StartPose,
        rows: Vec<Vec<Cell>>,
    }

    #[derive(Serialize)]
    struct RawFloor {
        width: u32,
        height: u32,
        level: i32,
        vertices: Vec<Vertex>,
        big_rect: [usize; 4],
        edges: Vec<[usize; 2]>,
    }

    #[test]
    fn deserializing_ragged_board_is_rejected() {
        let raw = RawBoard {
            width: 2,
            height: 2,
            start: start(0, 0),
            rows: vec![vec![Cell::default(); 2], vec![Cell::default(); 1]],
        };
        let bytes = bincode::serialize(&raw).expect("serialize");
        let error = bincode::deserialize::<Board>(&bytes).expect_err("ragged board");

        assert!(
            error.to_string().contains("row 1 must contain 2 cells, found 1"),
            "unexpected error: {error}"
        );
        assert!(!error.to_string().contains("line"));
    }

    #[test]
    fn deserializing_floor_with_dangling_edge_is_rejected() {
        let raw = RawFloor {
            width: 1,
            height: 1,
            level: 0,
            vertices: unit_floor().vertices().to_vec(),
            big_rect: [0, 1, 3, 2],
            edges: vec![[0, 9]],
        };
        let bytes = bincode::serialize(&raw).expect("serialize");
        let error = bincode::deserialize::<Floor>(&bytes).expect_err("dangling edge");

        assert!(
            error
                .to_string()
                .contains("vertex index 9 out of range for 4 vertices"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn deserializing_floor_with_inflated_size_is_rejected() {
        let raw = RawFloor {
            width: 100,
            height: 100,
            level: 0,
            vertices: unit_floor().vertices().to_vec(),
            big_rect: [0, 1, 3, 2],
            edges: Vec::new(),
        };
        let bytes = bincode::serialize(&raw).expect("serialize");

        assert!(bincode::deserialize::<Floor>(&bytes).is_err());
    }

    #[test]
    fn floor_rejects_duplicate_and_misplaced_vertices() {
        let duplicate = vec![Vertex::new(0, 0, 1), Vertex::new(0, 0, 1)];
        assert!(matches!(
            Floor::from_parts(1, 1, 1, duplicate, [0, 0, 1, 1], Vec::new()),
            Err(MeshError::DuplicateVertex { .. })
        ));

        let misplaced = vec![Vertex::new(0, 0, 0)];
        assert!(matches!(
            Floor::from_parts(1, 1, 1, misplaced, [0, 0, 0, 0], Vec::new()),
            Err(MeshError::LevelMismatch { .. })
        ));
    }

    #[test]
    fn floor_triangles_cover_the_boundary_quad() {
        let floor = unit_floor();

        assert_eq!(floor.triangles(), [[0, 1, 3], [0, 3, 2]]);
        assert_eq!(
            floor.outline(),
            [
                Vertex::new(0, 0, 0),
                Vertex::new(0, 1, 0),
                Vertex::new(1, 1, 0),
                Vertex::new(1, 0, 0),
            ]
        );
    }
}

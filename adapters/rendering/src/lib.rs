#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Lightbot adapters.
//!
//! Nothing here talks to a graphics API. Backends receive a [`Presentation`]
//! holding floors as vertex coordinates plus index lists, boards as cell
//! highlights, and a [`CameraRig`] describing where the viewer stands. They
//! translate those into actual draw calls every frame.

mod camera;
mod pacing;

pub use camera::{CameraInput, CameraRig};
pub use pacing::FrameLimiter;

use anyhow::Result as AnyResult;
use glam::{Vec2, Vec3};
use lightbot_core::{Board, Floor, Heading};
use std::time::Duration;
use thiserror::Error;

/// Height at which board decorations float above the surface they sit on.
const SURFACE_OFFSET: f32 = 0.01;

/// Linear RGBA color shared by floors, highlights and the clear pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red, `0.0..=1.0`.
    pub red: f32,
    /// Green, `0.0..=1.0`.
    pub green: f32,
    /// Blue, `0.0..=1.0`.
    pub blue: f32,
    /// Opacity, `0.0..=1.0`.
    pub alpha: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Color with every channel given explicitly.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from 8-bit channels, as palette entries are usually written.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        const SCALE: f32 = 255.0;
        Self::new(red as f32 / SCALE, green as f32 / SCALE, blue as f32 / SCALE, 1.0)
    }

    /// Creates an opaque color from floating point RGB values.
    ///
    /// Returns an error when a channel lies outside `0.0..=1.0`.
    pub fn try_from_rgb(red: f32, green: f32, blue: f32) -> Result<Self, RenderingError> {
        for (channel, value) in [("red", red), ("green", green), ("blue", blue)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RenderingError::InvalidColorChannel { channel, value });
            }
        }
        Ok(Self::new(red, green, blue, 1.0))
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Camera controls held or pressed this frame.
    pub camera: CameraInput,
    /// Whether the adapter detected a pause toggle press on this frame.
    pub pause_toggle: bool,
}

/// Floor mesh paired with the colors used to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorPresentation {
    /// Generated mesh.
    pub floor: Floor,
    /// Fill color of the boundary quad.
    pub fill: Color,
    /// Color of the interior grid lines, `None` hides the grid.
    pub grid: Option<Color>,
}

impl FloorPresentation {
    /// Fill color of the ground floor.
    pub const DEFAULT_FILL: Color = Color::new(0.2, 0.4, 0.4, 1.0);

    /// Creates a new floor descriptor.
    #[must_use]
    pub fn new(floor: Floor, fill: Color, grid: Option<Color>) -> Self {
        Self { floor, fill, grid }
    }

    /// Boundary quad corners in world space.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 4] {
        self.floor.outline().map(|vertex| Vec3::from(vertex.to_array()))
    }

    /// Interior grid lines in world space.
    #[must_use]
    pub fn grid_lines(&self) -> Vec<(Vec3, Vec3)> {
        self.floor
            .edge_segments()
            .map(|(from, to)| (Vec3::from(from.to_array()), Vec3::from(to.to_array())))
            .collect()
    }

    /// Centre of the floor in world space.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.floor.width() as f32 * 0.5,
            self.floor.height() as f32 * 0.5,
            self.floor.level() as f32,
        )
    }
}

/// Filled square drawn on top of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellHighlight {
    /// Zero-based column of the cell.
    pub column: u32,
    /// Zero-based row of the cell.
    pub row: u32,
    /// Corners of the square in world space, wound like a floor quad.
    pub corners: [Vec3; 4],
    /// Fill color of the square.
    pub color: Color,
}

/// Marker showing where the actor starts and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartMarker {
    /// Centre of the start cell in world space.
    pub position: Vec3,
    /// Unit vector pointing in the starting direction.
    pub facing: Vec2,
    /// Marker color.
    pub color: Color,
}

/// Loaded board together with the colors used to decorate it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardPresentation {
    /// Board being decorated.
    pub board: Board,
    /// Color of active, unlit cells.
    pub active_color: Color,
    /// Color of lit cells.
    pub lit_color: Color,
    /// Color of the start marker.
    pub start_color: Color,
}

impl BoardPresentation {
    /// Creates a board descriptor using the default palette.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            active_color: Color::from_rgb_u8(60, 110, 220),
            lit_color: Color::from_rgb_u8(250, 220, 60),
            start_color: Color::from_rgb_u8(230, 90, 60),
        }
    }

    /// Squares covering every active or lit cell at its elevation.
    #[must_use]
    pub fn highlights(&self) -> Vec<CellHighlight> {
        self.board
            .cells()
            .filter(|(_, _, cell)| cell.active() || cell.lit())
            .map(|(column, row, cell)| {
                let x = column as f32;
                let y = row as f32;
                let z = cell.elevation() as f32 + SURFACE_OFFSET;
                CellHighlight {
                    column,
                    row,
                    corners: [
                        Vec3::new(x, y, z),
                        Vec3::new(x, y + 1.0, z),
                        Vec3::new(x + 1.0, y + 1.0, z),
                        Vec3::new(x + 1.0, y, z),
                    ],
                    color: if cell.lit() {
                        self.lit_color
                    } else {
                        self.active_color
                    },
                }
            })
            .collect()
    }

    /// Marker placed on the start cell.
    #[must_use]
    pub fn start_marker(&self) -> StartMarker {
        let start = self.board.start();
        let elevation = self
            .board
            .cell(start.column(), start.row())
            .map_or(0, |cell| cell.elevation());
        StartMarker {
            position: Vec3::new(
                start.column() as f32 + 0.5,
                start.row() as f32 + 0.5,
                elevation as f32 + SURFACE_OFFSET,
            ),
            facing: heading_vector(start.heading()),
            color: self.start_color,
        }
    }
}

/// Grid-space direction of a heading; rows grow southwards.
#[must_use]
pub fn heading_vector(heading: Heading) -> Vec2 {
    match heading {
        Heading::North => Vec2::new(0.0, -1.0),
        Heading::East => Vec2::new(1.0, 0.0),
        Heading::South => Vec2::new(0.0, 1.0),
        Heading::West => Vec2::new(-1.0, 0.0),
    }
}

/// Scene description combining floors, boards and the camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Floors drawn in order, ground first.
    pub floors: Vec<FloorPresentation>,
    /// Boards decorated on top of the floors.
    pub boards: Vec<BoardPresentation>,
    /// Viewer position.
    pub camera: CameraRig,
    /// Whether the experience is paused.
    pub paused: bool,
}

impl Scene {
    /// Creates a scene whose camera looks at the first floor isometrically.
    #[must_use]
    pub fn new(floors: Vec<FloorPresentation>, boards: Vec<BoardPresentation>) -> Self {
        let camera = floors
            .first()
            .map_or_else(CameraRig::default, |ground| {
                let extent = ground.floor.width().max(ground.floor.height()) as f32;
                CameraRig::isometric(ground.center(), extent)
            });
        Self {
            floors,
            boards,
            camera,
            paused: false,
        }
    }

    /// Applies one frame of input to the camera and pause state.
    pub fn apply_input(&mut self, input: &FrameInput) {
        self.camera.apply(&input.camera);
        if input.pause_toggle {
            self.paused = !self.paused;
        }
    }

    /// Short lines describing the scene for the text overlay.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .boards
            .iter()
            .map(|presentation| {
                let board = &presentation.board;
                let start = board.start();
                format!(
                    "board {}x{}  start ({}, {}) facing {}",
                    board.width(),
                    board.height(),
                    start.column(),
                    start.row(),
                    start.heading().degrees()
                )
            })
            .collect();
        lines.extend(self.floors.iter().map(|presentation| {
            let floor = &presentation.floor;
            format!(
                "floor {}x{} at level {}",
                floor.width(),
                floor.height(),
                floor.level()
            )
        }));
        if self.paused {
            lines.push("paused".to_owned());
        }
        lines
    }
}

/// Window configuration requested from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSettings {
    /// Text shown in the window decoration.
    pub title: String,
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
}

impl WindowSettings {
    /// Creates new window settings.
    ///
    /// Returns an error when either dimension is zero.
    pub fn new<T>(title: T, width: u32, height: u32) -> Result<Self, RenderingError>
    where
        T: Into<String>,
    {
        if width == 0 || height == 0 {
            return Err(RenderingError::InvalidWindowSize { width, height });
        }
        Ok(Self {
            title: title.into(),
            width,
            height,
        })
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Everything a backend needs to open a window and draw the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Window the backend should create.
    pub window: WindowSettings,
    /// Background behind the floors.
    pub clear_color: Color,
    /// Frame pacing applied after each presented frame.
    pub limiter: FrameLimiter,
    /// Floors, boards and camera to draw.
    pub scene: Scene,
}

impl Presentation {
    /// Bundles the window, pacing and scene for a backend.
    #[must_use]
    pub fn new(
        window: WindowSettings,
        clear_color: Color,
        limiter: FrameLimiter,
        scene: Scene,
    ) -> Self {
        Self {
            window,
            clear_color,
            limiter,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Lightbot scenes.
pub trait RenderingBackend {
    /// Opens the window and draws `presentation` until the user quits, calling
    /// `update_scene` once per frame with the elapsed time and sampled input.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Invalid window, color or pacing settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderingError {
    /// Color channels must lie within `0.0..=1.0`.
    #[error("{channel} channel must lie within 0.0..=1.0 (received {value})")]
    InvalidColorChannel {
        /// Name of the offending channel.
        channel: &'static str,
        /// Provided channel value.
        value: f32,
    },
    /// Windows need a positive area.
    #[error("window size must be positive (received {width}x{height})")]
    InvalidWindowSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A frame rate limit of zero frames per second cannot be honoured.
    #[error("target frame rate must be positive")]
    InvalidTargetFps,
}

//! Boot sequence turning a level file and configuration into a presentation.

use std::{fmt::Write as _, path::Path};

use anyhow::{Context, Result};
use lightbot_core::Board;
use lightbot_rendering::{BoardPresentation, Color, FloorPresentation, Presentation, Scene};
use lightbot_system_floor_mesh::{FloorMeshBuilder, FloorSpec};
use lightbot_system_level_loader::LevelLoader;

use crate::config::{Config, FloorConfig};

/// Background color of every frame.
const CLEAR_COLOR: Color = Color::BLACK;

/// Level loaded from disk together with the floors generated for it.
#[derive(Debug)]
pub(crate) struct Level {
    pub(crate) board: Board,
    pub(crate) floors: Vec<FloorPresentation>,
}

impl Level {
    /// Loads the board at `path` and builds the configured floors.
    pub(crate) fn load(path: &Path, config: &Config) -> Result<Self> {
        let board = LevelLoader
            .load_path(path)
            .with_context(|| format!("failed to load level {}", path.display()))?;
        log::info!(
            "loaded {}: {}x{} board with {} cells",
            path.display(),
            board.width(),
            board.height(),
            board.cell_count()
        );
        let floors = build_floors(&config.floors_for(&board))?;
        Ok(Self { board, floors })
    }

    /// Assembles the presentation handed to the rendering backend.
    pub(crate) fn into_presentation(self, config: &Config) -> Result<Presentation> {
        let window = config.window.settings()?;
        let limiter = config.window.limiter()?;
        let scene = Scene::new(self.floors, vec![BoardPresentation::new(self.board)]);
        Ok(Presentation::new(window, CLEAR_COLOR, limiter, scene))
    }

    /// Human-readable dump of the board followed by floor statistics.
    pub(crate) fn describe(&self) -> String {
        let mut text = self.board.to_string();
        let start = self.board.start();
        let _ = writeln!(
            text,
            "start: ({}, {}) facing {} degrees",
            start.column(),
            start.row(),
            start.heading().degrees()
        );
        for presentation in &self.floors {
            let floor = &presentation.floor;
            let _ = writeln!(
                text,
                "floor {}x{} at level {}: {} vertices, {} interior edges",
                floor.width(),
                floor.height(),
                floor.level(),
                floor.vertices().len(),
                floor.edges().len()
            );
        }
        text
    }
}

fn build_floors(configs: &[FloorConfig]) -> Result<Vec<FloorPresentation>> {
    let specs: Vec<FloorSpec> = configs.iter().map(FloorConfig::spec).collect();
    let floors = FloorMeshBuilder
        .build_stack(&specs)
        .context("failed to build floor meshes")?;

    configs
        .iter()
        .zip(floors)
        .map(|(config, floor)| {
            let grid = config.grid.then_some(Color::BLACK);
            Ok(FloorPresentation::new(floor, config.fill()?, grid))
        })
        .collect()
}

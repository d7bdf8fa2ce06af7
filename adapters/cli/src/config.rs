use std::{fs, path::Path};

use anyhow::{Context, Result};
use lightbot_core::{Board, WINDOW_TITLE};
use lightbot_rendering::{Color, FloorPresentation, FrameLimiter, WindowSettings};
use lightbot_system_floor_mesh::FloorSpec;
use serde::Deserialize;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 100;

/// Settings read from the optional TOML configuration file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) window: WindowConfig,
    pub(crate) floors: Vec<FloorConfig>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Zero disables the frame limiter.
    pub(crate) target_fps: u32,
    pub(crate) vsync: bool,
    pub(crate) show_fps: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: false,
            show_fps: false,
        }
    }
}

impl WindowConfig {
    pub(crate) fn settings(&self) -> Result<WindowSettings> {
        WindowSettings::new(self.title.clone(), self.width, self.height)
            .context("invalid [window] size")
    }

    pub(crate) fn limiter(&self) -> Result<FrameLimiter> {
        if self.target_fps == 0 {
            return Ok(FrameLimiter::unlimited());
        }
        FrameLimiter::from_fps(self.target_fps).context("invalid [window] target_fps")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FloorConfig {
    pub(crate) width: u32,
    pub(crate) height: u32,
    #[serde(default)]
    pub(crate) level: i32,
    #[serde(default = "default_floor_color")]
    pub(crate) color: [f32; 3],
    #[serde(default = "default_grid")]
    pub(crate) grid: bool,
}

fn default_floor_color() -> [f32; 3] {
    let fill = FloorPresentation::DEFAULT_FILL;
    [fill.red, fill.green, fill.blue]
}

const fn default_grid() -> bool {
    true
}

impl FloorConfig {
    /// Ground floor spanning the whole board.
    pub(crate) fn ground_for(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            level: 0,
            color: default_floor_color(),
            grid: default_grid(),
        }
    }

    pub(crate) const fn spec(&self) -> FloorSpec {
        FloorSpec::new(self.width, self.height, self.level)
    }

    pub(crate) fn fill(&self) -> Result<Color> {
        let [red, green, blue] = self.color;
        Color::try_from_rgb(red, green, blue).with_context(|| {
            format!(
                "invalid color for the {}x{} floor at level {}",
                self.width, self.height, self.level
            )
        })
    }
}

impl Config {
    /// Reads and parses the configuration file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid configuration toml")
    }

    /// Floors to build, falling back to a ground floor matching the board.
    pub(crate) fn floors_for(&self, board: &Board) -> Vec<FloorConfig> {
        if self.floors.is_empty() {
            log::debug!("no floors configured, deriving the ground floor from the board");
            return vec![FloorConfig::ground_for(board)];
        }
        let covered = self.floors.iter().any(|floor| {
            floor.level == 0 && floor.width >= board.width() && floor.height >= board.height()
        });
        if !covered {
            log::warn!(
                "no configured floor at level 0 covers the {}x{} board",
                board.width(),
                board.height()
            );
        }
        self.floors.clone()
    }
}

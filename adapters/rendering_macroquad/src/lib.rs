#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Lightbot.
//!
//! The board is silent, so macroquad is pulled in without its `audio`
//! feature and the crate builds without native sound libraries.
//!
//! Floors are uploaded as meshes built from their vertex list and boundary
//! triangles, grid lines are drawn as 3D lines, and the text overlay is drawn
//! in screen space after the 3D pass.

mod fps;
mod mesh;
mod overlay;

use anyhow::Result;
use lightbot_rendering::{
    CameraInput, CameraRig, FrameInput, FrameLimiter, Presentation, RenderingBackend, Scene,
};
use macroquad::{
    camera::{set_camera, set_default_camera, Camera3D},
    input::{is_key_down, is_key_pressed, KeyCode},
    models::{draw_line_3d, draw_mesh},
};
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use self::mesh::{
    floor_mesh, grid_color, highlight_mesh, start_marker_arrow, start_marker_mesh,
    to_macroquad_vec3,
};
use self::{fps::FrameClock, overlay::draw_overlay};

/// Keyboard state sampled during a single frame.
///
/// Held keys drive continuous camera motion; toggles are edge-triggered.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// `Escape` or `Q` quits the render loop.
    pub quit_requested: bool,
    /// `Space` toggles pause.
    pub pause_pressed: bool,
    /// `Home` restores the default camera.
    pub home_pressed: bool,
    /// `Left` held.
    pub left_down: bool,
    /// `Right` held.
    pub right_down: bool,
    /// `Up` held.
    pub up_down: bool,
    /// `Down` held.
    pub down_down: bool,
    /// `PageUp` held, zooms out.
    pub page_up_down: bool,
    /// `PageDown` held, zooms in.
    pub page_down_down: bool,
}

impl KeyboardState {
    fn poll() -> Self {
        Self {
            quit_requested: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
            pause_pressed: is_key_pressed(KeyCode::Space),
            home_pressed: is_key_pressed(KeyCode::Home),
            left_down: is_key_down(KeyCode::Left),
            right_down: is_key_down(KeyCode::Right),
            up_down: is_key_down(KeyCode::Up),
            down_down: is_key_down(KeyCode::Down),
            page_up_down: is_key_down(KeyCode::PageUp),
            page_down_down: is_key_down(KeyCode::PageDown),
        }
    }

    /// Translates the sampled keys into backend-agnostic frame input.
    #[must_use]
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            camera: CameraInput {
                rotate_left: self.left_down,
                rotate_right: self.right_down,
                rotate_up: self.up_down,
                rotate_down: self.down_down,
                zoom_in: self.page_down_down,
                zoom_out: self.page_up_down,
                reset: self.home_pressed,
            },
            pause_toggle: self.pause_pressed,
        }
    }
}

/// Draws a [`Scene`] in a macroquad window.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
}

impl MacroquadBackend {
    /// Backend that leaves the swap interval to the platform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests `interval` vertical blanks per presented frame, `None` for the platform default.
    #[must_use]
    pub fn with_swap_interval(mut self, interval: Option<i32>) -> Self {
        self.swap_interval = interval;
        self
    }

    /// Waits for one vertical blank per frame when `enabled`, otherwise presents immediately.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        self.with_swap_interval(Some(i32::from(enabled)))
    }

    /// Adds a frame rate line to the overlay and logs timings every second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
        } = self;

        let Presentation {
            window,
            clear_color,
            limiter,
            scene,
        } = presentation;

        let mut conf = macroquad::window::Conf {
            window_title: window.title,
            window_width: i32::try_from(window.width)?,
            window_height: i32::try_from(window.height)?,
            ..macroquad::window::Conf::default()
        };
        conf.platform.swap_interval = swap_interval;

        let (failure_sender, failure_receiver) = mpsc::channel::<anyhow::Error>();

        macroquad::Window::from_config(conf, async move {
            let mut scene = scene;
            let clear = to_macroquad_color(clear_color);
            let mut clock = FrameClock::default();
            let mut fps_line = None;

            loop {
                let started = Instant::now();
                let keyboard = KeyboardState::poll();
                if keyboard.quit_requested {
                    break;
                }

                let frame_time =
                    Duration::from_secs_f32(macroquad::time::get_frame_time().max(0.0));
                update_scene(frame_time, keyboard.frame_input(), &mut scene);

                let drawing = Instant::now();
                macroquad::window::clear_background(clear);
                if let Err(error) = draw_scene(&scene) {
                    let _ = failure_sender.send(error);
                    break;
                }
                set_default_camera();
                let mut lines = scene.summary();
                lines.extend(fps_line.clone());
                draw_overlay(&lines);

                if let Some(report) = clock.tick(frame_time, drawing.elapsed()) {
                    if show_fps {
                        report.log();
                        fps_line = Some(report.overlay_line());
                    }
                }

                pace_frame(&limiter, started.elapsed());
                macroquad::window::next_frame().await;
            }
        });

        match failure_receiver.try_recv() {
            Ok(error) => Err(error.context("rendering loop aborted")),
            Err(_) => Ok(()),
        }
    }
}

fn pace_frame(limiter: &FrameLimiter, elapsed: Duration) {
    if let Some(remaining) = limiter.remaining(elapsed) {
        thread::sleep(remaining);
    }
}

fn draw_scene(scene: &Scene) -> Result<()> {
    set_camera(&camera_3d(&scene.camera));

    for presentation in &scene.floors {
        draw_mesh(&floor_mesh(presentation)?);
        if let Some(color) = grid_color(presentation) {
            for (from, to) in presentation.grid_lines() {
                draw_line_3d(to_macroquad_vec3(from), to_macroquad_vec3(to), color);
            }
        }
    }

    for presentation in &scene.boards {
        if let Some(highlights) = highlight_mesh(&presentation.highlights())? {
            draw_mesh(&highlights);
        }
        let marker = presentation.start_marker();
        draw_mesh(&start_marker_mesh(&marker));
        let (from, to) = start_marker_arrow(&marker);
        draw_line_3d(from, to, to_macroquad_color(marker.color));
    }

    Ok(())
}

fn camera_3d(rig: &CameraRig) -> Camera3D {
    Camera3D {
        position: to_macroquad_vec3(rig.eye()),
        target: to_macroquad_vec3(rig.target()),
        up: to_macroquad_vec3(rig.up()),
        fovy: rig.fovy_degrees().to_radians(),
        ..Camera3D::default()
    }
}

fn to_macroquad_color(color: lightbot_rendering::Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

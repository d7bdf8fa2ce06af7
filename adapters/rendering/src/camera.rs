use glam::Vec3;

const ISOMETRIC_YAW_DEGREES: f32 = 225.0;
/// `atan(1 / sqrt(2))`, the elevation of a true isometric projection.
const ISOMETRIC_PITCH_DEGREES: f32 = 35.264;
const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
const MIN_DISTANCE: f32 = 7.0;
const DISTANCE_PER_CELL: f32 = 1.4;

const ROTATE_STEP_DEGREES: f32 = 1.0;
const ZOOM_IN_FACTOR: f32 = 1.02;
const ZOOM_OUT_FACTOR: f32 = 0.98;
const MIN_SCALE: f32 = 0.1;
const MAX_SCALE: f32 = 10.0;
const MIN_PITCH_DEGREES: f32 = 5.0;
const MAX_PITCH_DEGREES: f32 = 89.0;

/// Camera controls sampled for a single frame.
///
/// Held controls apply one step per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraInput {
    /// Orbit counter-clockwise around the target.
    pub rotate_left: bool,
    /// Orbit clockwise around the target.
    pub rotate_right: bool,
    /// Raise the camera towards a top-down view.
    pub rotate_up: bool,
    /// Lower the camera towards the horizon.
    pub rotate_down: bool,
    /// Move closer to the target.
    pub zoom_in: bool,
    /// Move away from the target.
    pub zoom_out: bool,
    /// Restore the isometric pose.
    pub reset: bool,
}

/// Perspective camera orbiting a fixed target with a z-up world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    target: Vec3,
    distance: f32,
    yaw_degrees: f32,
    pitch_degrees: f32,
    scale: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::isometric(Vec3::ZERO, 0.0)
    }
}

impl CameraRig {
    /// Creates an isometric camera looking at `target`, pulled back far enough
    /// to frame `extent` cells.
    #[must_use]
    pub fn isometric(target: Vec3, extent: f32) -> Self {
        Self {
            target,
            distance: (extent * DISTANCE_PER_CELL).max(MIN_DISTANCE),
            yaw_degrees: ISOMETRIC_YAW_DEGREES,
            pitch_degrees: ISOMETRIC_PITCH_DEGREES,
            scale: 1.0,
        }
    }

    /// Point the camera looks at.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// Orbit angle around the vertical axis.
    #[must_use]
    pub const fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    /// Elevation angle above the floor plane.
    #[must_use]
    pub const fn pitch_degrees(&self) -> f32 {
        self.pitch_degrees
    }

    /// Magnification relative to the initial framing.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Vertical field of view.
    #[must_use]
    pub const fn fovy_degrees(&self) -> f32 {
        FIELD_OF_VIEW_DEGREES
    }

    /// World-space up direction.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        Vec3::Z
    }

    /// Current distance between the eye and the target.
    #[must_use]
    pub fn eye_distance(&self) -> f32 {
        self.distance / self.scale
    }

    /// World-space eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        let pitch = self.pitch_degrees.to_radians();
        let direction = Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.cos() * yaw.sin(),
            pitch.sin(),
        );
        self.target + direction * self.eye_distance()
    }

    /// Applies one frame of camera input.
    pub fn apply(&mut self, input: &CameraInput) {
        if input.reset {
            self.reset();
            return;
        }

        if input.rotate_left {
            self.yaw_degrees -= ROTATE_STEP_DEGREES;
        }
        if input.rotate_right {
            self.yaw_degrees += ROTATE_STEP_DEGREES;
        }
        self.yaw_degrees = self.yaw_degrees.rem_euclid(360.0);

        if input.rotate_up {
            self.pitch_degrees += ROTATE_STEP_DEGREES;
        }
        if input.rotate_down {
            self.pitch_degrees -= ROTATE_STEP_DEGREES;
        }
        self.pitch_degrees = self
            .pitch_degrees
            .clamp(MIN_PITCH_DEGREES, MAX_PITCH_DEGREES);

        if input.zoom_in {
            self.scale *= ZOOM_IN_FACTOR;
        }
        if input.zoom_out {
            self.scale *= ZOOM_OUT_FACTOR;
        }
        self.scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Restores the isometric pose while keeping target and framing.
    pub fn reset(&mut self) {
        self.yaw_degrees = ISOMETRIC_YAW_DEGREES;
        self.pitch_degrees = ISOMETRIC_PITCH_DEGREES;
        self.scale = 1.0;
    }
}

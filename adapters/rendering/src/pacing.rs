use std::time::Duration;

use crate::RenderingError;

/// Caps the presentation rate by sleeping away the rest of each frame budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameLimiter {
    budget: Option<Duration>,
}

impl FrameLimiter {
    /// Limiter that never sleeps.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { budget: None }
    }

    /// Limiter targeting `fps` frames per second.
    ///
    /// Returns an error when `fps` is zero.
    pub fn from_fps(fps: u32) -> Result<Self, RenderingError> {
        if fps == 0 {
            return Err(RenderingError::InvalidTargetFps);
        }
        Ok(Self {
            budget: Some(Duration::from_secs(1) / fps),
        })
    }

    /// Time allotted to a single frame, if limited.
    #[must_use]
    pub const fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time left to wait after a frame that took `elapsed`.
    ///
    /// Returns `None` when the frame already used its whole budget.
    #[must_use]
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget
            .and_then(|budget| budget.checked_sub(elapsed))
            .filter(|remaining| !remaining.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_fps_budgets_ten_milliseconds() {
        let limiter = FrameLimiter::from_fps(100).expect("positive fps");

        assert_eq!(limiter.budget(), Some(Duration::from_millis(10)));
        assert_eq!(
            limiter.remaining(Duration::from_millis(4)),
            Some(Duration::from_millis(6))
        );
        assert_eq!(limiter.remaining(Duration::from_millis(10)), None);
        assert_eq!(limiter.remaining(Duration::from_millis(25)), None);
    }

    #[test]
    fn unlimited_never_sleeps() {
        assert_eq!(
            FrameLimiter::unlimited().remaining(Duration::ZERO),
            None
        );
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert_eq!(
            FrameLimiter::from_fps(0),
            Err(RenderingError::InvalidTargetFps)
        );
    }
}

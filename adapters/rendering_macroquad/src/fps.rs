use std::time::Duration;

const REPORT_PERIOD: Duration = Duration::from_secs(1);

/// Frame statistics gathered over one reporting period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FpsReport {
    pub(crate) frames_per_second: f32,
    pub(crate) slowest_frame: Duration,
    pub(crate) mean_render: Duration,
}

impl FpsReport {
    pub(crate) fn overlay_line(&self) -> String {
        format!(
            "{:.0} fps  worst {:.1} ms",
            self.frames_per_second,
            millis(self.slowest_frame)
        )
    }

    pub(crate) fn log(&self) {
        log::info!(
            "{:.1} fps, slowest frame {:.2} ms, mean render {:.2} ms",
            self.frames_per_second,
            millis(self.slowest_frame),
            millis(self.mean_render)
        );
    }
}

/// Accumulates frame and render durations until a full period has passed.
#[derive(Debug, Default)]
pub(crate) struct FrameClock {
    period: Duration,
    frames: u32,
    slowest: Duration,
    rendering: Duration,
}

impl FrameClock {
    /// Adds one frame, yielding a report once the period is complete.
    pub(crate) fn tick(&mut self, frame: Duration, render: Duration) -> Option<FpsReport> {
        self.period += frame;
        self.frames = self.frames.saturating_add(1);
        self.slowest = self.slowest.max(frame);
        self.rendering += render;

        if self.period < REPORT_PERIOD {
            return None;
        }

        let finished = std::mem::take(self);
        Some(FpsReport {
            frames_per_second: finished.frames as f32 / finished.period.as_secs_f32(),
            slowest_frame: finished.slowest,
            mean_render: finished.rendering / finished.frames,
        })
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

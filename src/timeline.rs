use std::time::{Duration, Instant};

/// Frame-time bookkeeping for the render loop. This only feeds diagnostics;
/// the animation clock is deliberately not time-based.
pub struct Timeline {
    previous_frame_time: Instant,
    previous_frame_duration: Duration,

    frames_since_report: u32,
    last_report: Instant,
}

impl Timeline {
    pub fn new() -> Timeline {
        let now = Instant::now();
        Timeline {
            previous_frame_time: now,
            previous_frame_duration: Duration::from_secs(0),
            frames_since_report: 0,
            last_report: now,
        }
    }

    /// Notify the timeline that we've ended the current frame and proceeding
    /// to the next.
    pub fn next_frame(&mut self) -> &mut Self {
        let now = Instant::now();
        let duration = now.duration_since(self.previous_frame_time);
        self.previous_frame_time = now;
        self.previous_frame_duration = duration;
        self.frames_since_report += 1;
        self
    }

    /// Returns the duration of the last frame in fractional seconds
    pub fn previous_frame_time(&self) -> f32 {
        as_fractional_secs(self.previous_frame_duration)
    }

    /// Once at least a second of frames has accumulated, returns the average
    /// frame rate over that window and starts a new window.
    pub fn frames_per_second(&mut self) -> Option<f32> {
        let elapsed = self.last_report.elapsed();
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames_since_report as f32 / as_fractional_secs(elapsed);
        self.frames_since_report = 0;
        self.last_report = Instant::now();
        Some(fps)
    }
}

fn as_fractional_secs(duration: Duration) -> f32 {
    duration.as_secs() as f32 + (f64::from(duration.subsec_nanos()) * 1e-9) as f32
}

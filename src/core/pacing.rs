/// Smoothing factor for the frame-time moving average
const SMOOTHING: f32 = 0.1;
/// Seconds between pacing reports
const REPORT_INTERVAL: f32 = 1.0;

/// Frame statistics gathered over one reporting interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingReport {
    pub frames: u32,
    pub elapsed: f32,
    pub fps: f32,
    pub smoothed_frame_time: f32,
}

/// Adaptive feedback on measured frame durations.
///
/// Keeps an exponential moving average of frame time for animation and
/// UI readouts, and a per-interval FPS count.
#[derive(Debug, Clone)]
pub struct FramePacer {
    smoothed_frame_time: Option<f32>,
    total_frames: u64,
    interval: f32,
    interval_frames: u32,
    interval_elapsed: f32,
    last_report: Option<PacingReport>,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::with_interval(REPORT_INTERVAL)
    }

    /// Pacer that reports every `interval` seconds
    pub fn with_interval(interval: f32) -> Self {
        Self {
            smoothed_frame_time: None,
            total_frames: 0,
            interval,
            interval_frames: 0,
            interval_elapsed: 0.0,
            last_report: None,
        }
    }

    /// Feed one measured frame duration. Returns a report when a reporting
    /// interval has elapsed.
    pub fn record(&mut self, frame_duration: f32) -> Option<PacingReport> {
        let frame_duration = frame_duration.max(0.0);

        self.smoothed_frame_time = Some(match self.smoothed_frame_time {
            Some(avg) => avg + (frame_duration - avg) * SMOOTHING,
            None => frame_duration,
        });
        self.total_frames += 1;
        self.interval_frames += 1;
        self.interval_elapsed += frame_duration;

        if self.interval_elapsed < self.interval {
            return None;
        }

        let report = PacingReport {
            frames: self.interval_frames,
            elapsed: self.interval_elapsed,
            fps: self.interval_frames as f32 / self.interval_elapsed,
            smoothed_frame_time: self.smoothed_frame_time(),
        };
        self.interval_frames = 0;
        self.interval_elapsed = 0.0;
        self.last_report = Some(report);
        Some(report)
    }

    /// Moving average of frame duration in seconds (0 before any frame)
    pub fn smoothed_frame_time(&self) -> f32 {
        self.smoothed_frame_time.unwrap_or(0.0)
    }

    /// FPS from the last completed interval, falling back to the
    /// moving average before the first report
    pub fn fps(&self) -> f32 {
        if let Some(report) = self.last_report {
            return report.fps;
        }
        match self.smoothed_frame_time {
            Some(t) if t > 0.0 => 1.0 / t,
            _ => 0.0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.total_frames
    }

    pub fn last_report(&self) -> Option<PacingReport> {
        self.last_report
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

use std::time::Instant;

/// Measures wall time between the starts of consecutive render calls
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_start: Instant,
}

impl FrameClock {
    /// Create a clock whose first lap is measured from now
    pub fn new() -> Self {
        Self {
            last_start: Instant::now(),
        }
    }

    /// Seconds since the previous lap (or since creation/restart), and
    /// start the next lap now
    pub fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_start).as_secs_f32();
        self.last_start = now;
        elapsed
    }

    /// Seconds since the previous lap without starting a new one
    pub fn peek(&self) -> f32 {
        self.last_start.elapsed().as_secs_f32()
    }

    /// Measure the next lap from now
    pub fn restart(&mut self) {
        self.last_start = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn lap_measures_elapsed_time() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(10));
        let lap = clock.lap();

        assert!(lap >= 0.009, "lap was {lap}");
    }

    #[test]
    fn lap_starts_next_measurement() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(20));
        clock.lap();
        let second = clock.lap();

        assert!(second < 0.015, "second lap was {second}");
    }

    #[test]
    fn restart_discards_elapsed_time() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(20));
        clock.restart();

        assert!(clock.peek() < 0.015);
    }

    #[test]
    fn peek_does_not_reset() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(10));
        let peeked = clock.peek();
        let lapped = clock.lap();

        assert!(lapped >= peeked);
    }
}

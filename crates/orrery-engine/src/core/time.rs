/// Wall-clock bookkeeping for the frame loop.
///
/// Physics does not read this: it always advances by the configured fixed step,
/// one step per displayed frame, so slow frames simply run the simulation slower.
/// Tweens, timers and ambient motion use the real frame delta tracked here.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: f64,
    frame: u64,
    last_dt: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a displayed frame that took `dt` seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt as f64;
        self.last_dt = dt;
        self.frame += 1;
    }

    /// Seconds since the clock started.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Delta of the most recent frame.
    pub fn last_dt(&self) -> f32 {
        self.last_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_elapsed_and_frames() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-9);
        assert_eq!(clock.frame(), 2);
        assert_eq!(clock.last_dt(), 0.25);
    }

    #[test]
    fn negative_delta_is_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(-1.0);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame(), 1);
    }
}

use std::time::{Duration, Instant};

/// How long every count-up runs.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(900);

/// Ease-out-cubic curve: decelerates toward the target. Input is clamped to
/// [0, 1].
pub fn ease_out_cubic(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(3)
}

/// One animated count from 0 up to `target`.
///
/// The counter holds no clock of its own; callers sample `value_at` from
/// their tick loop and stop rescheduling once `is_done`. The terminal frame
/// always yields exactly `target`.
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    start: Instant,
    target: u64,
    duration: Duration,
}

impl CountUp {
    pub fn starting_at(start: Instant, target: u64, duration: Duration) -> Self {
        CountUp {
            start,
            target,
            duration,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Elapsed fraction in [0, 1].
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Interpolated display value for this frame, floored to an integer.
    pub fn value_at(&self, now: Instant) -> u64 {
        let eased = ease_out_cubic(self.progress(now));
        (self.target as f64 * eased).floor() as u64
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Clamped outside the unit interval
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_decelerates() {
        // Past the midpoint the curve is already most of the way there
        assert!(ease_out_cubic(0.5) > 0.5);
        let early = ease_out_cubic(0.2) - ease_out_cubic(0.0);
        let late = ease_out_cubic(1.0) - ease_out_cubic(0.8);
        assert!(early > late);
    }

    #[test]
    fn test_count_up_starts_at_zero() {
        let start = Instant::now();
        let counter = CountUp::starting_at(start, 12_345, Duration::from_millis(900));
        assert_eq!(counter.value_at(start), 0);
        assert!(!counter.is_done(start));
    }

    #[test]
    fn test_count_up_terminal_frame_is_exact() {
        let start = Instant::now();
        for target in [0u64, 1, 400, 11_200_000_000] {
            let counter = CountUp::starting_at(start, target, Duration::from_millis(900));
            let end = start + Duration::from_millis(900);
            assert_eq!(counter.value_at(end), target);
            assert!(counter.is_done(end));
            // Well past the duration the value stays pinned to the target
            assert_eq!(counter.value_at(end + Duration::from_secs(5)), target);
        }
    }

    #[test]
    fn test_count_up_is_monotonic() {
        let start = Instant::now();
        let counter = CountUp::starting_at(start, 1_000_000, Duration::from_millis(900));
        let mut previous = 0;
        for ms in (0..=900).step_by(30) {
            let value = counter.value_at(start + Duration::from_millis(ms));
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 1_000_000);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let start = Instant::now();
        let counter = CountUp::starting_at(start, 77, Duration::ZERO);
        assert!(counter.is_done(start));
        assert_eq!(counter.value_at(start), 77);
    }
}

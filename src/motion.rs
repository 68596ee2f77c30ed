//! Scroll and Count-up Math
//!
//! Pure helpers behind the scroll-driven effects: waterfall flow, progress
//! bars, reveal thresholds and animated stat counters.

use std::time::Duration;

/// Fraction of `span` pixels scrolled, clamped to [0, 1].
pub fn flow_from_scroll(scroll_y: f64, span: f64) -> f64 {
    if span <= 0.0 {
        return 1.0;
    }
    (scroll_y / span).clamp(0.0, 1.0)
}

/// Percentage of the scrollable height already scrolled.
pub fn scroll_progress(scroll_y: f64, scroll_max: f64) -> f64 {
    if scroll_max <= 0.0 {
        return 0.0;
    }
    (scroll_y / scroll_max * 100.0).clamp(0.0, 100.0)
}

/// True once an element's top edge is above `fraction` of the viewport.
pub fn is_revealed(top: f64, viewport_height: f64, fraction: f64) -> bool {
    top < viewport_height * fraction
}

pub const STATS_REVEAL: f64 = 0.8;
pub const TIMELINE_REVEAL: f64 = 0.85;

/// Linear count from zero to `target` in a fixed number of ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub target: f64,
    pub steps: u32,
    pub duration: Duration,
}

impl CountUp {
    pub const STEPS: u32 = 60;
    pub const DURATION: Duration = Duration::from_millis(1800);

    pub fn new(target: f64) -> Self {
        Self { target, steps: Self::STEPS, duration: Self::DURATION }
    }

    pub fn tick_interval(&self) -> Duration {
        self.duration / self.steps.max(1)
    }

    /// Value after `step` ticks, rounded to 2 decimals; exact on the last.
    pub fn value_at(&self, step: u32) -> f64 {
        if step >= self.steps {
            return self.target;
        }
        let raw = self.target / self.steps as f64 * step as f64;
        (raw * 100.0).round() / 100.0
    }
}

/// Render a stat without trailing zeros: `5`, `3.37`, `0.5`.
pub fn format_stat(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_clamped() {
        assert_eq!(flow_from_scroll(0.0, 300.0), 0.0);
        assert_eq!(flow_from_scroll(150.0, 300.0), 0.5);
        assert_eq!(flow_from_scroll(9000.0, 500.0), 1.0);
        assert_eq!(flow_from_scroll(-20.0, 500.0), 0.0);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(250.0, 1000.0), 25.0);
        assert_eq!(scroll_progress(10.0, 0.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 1000.0), 100.0);
    }

    #[test]
    fn test_reveal_threshold() {
        assert!(!is_revealed(640.0, 800.0, STATS_REVEAL));
        assert!(is_revealed(639.0, 800.0, STATS_REVEAL));
        assert!(is_revealed(679.0, 800.0, TIMELINE_REVEAL));
    }

    #[test]
    fn test_count_up_reaches_target_exactly() {
        for target in [5.0, 18.0, 0.0, 3.37] {
            let counter = CountUp::new(target);
            assert_eq!(counter.value_at(CountUp::STEPS), target);
        }
    }

    #[test]
    fn test_count_up_intermediate_steps() {
        let counter = CountUp::new(3.37);
        assert_eq!(counter.value_at(0), 0.0);
        assert_eq!(counter.value_at(20), 1.12);
        assert_eq!(counter.tick_interval(), Duration::from_millis(30));
        let values: Vec<f64> = (0..=CountUp::STEPS).map(|s| counter.value_at(s)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(5.0), "5");
        assert_eq!(format_stat(3.37), "3.37");
        assert_eq!(format_stat(0.5), "0.5");
        assert_eq!(format_stat(0.0), "0");
        assert_eq!(format_stat(10.0), "10");
    }
}

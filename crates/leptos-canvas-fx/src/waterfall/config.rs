//! Waterfall Configuration
//!
//! Builder-style parameters for one waterfall instance, plus the presets
//! used by the portfolio pages.

use rand::Rng;

/// Closed interval sampled uniformly when a particle is spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric span around zero, e.g. `Span::around(0.3)` is `[-0.3, 0.3]`.
    pub const fn around(half_width: f64) -> Self {
        Self { min: -half_width, max: half_width }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

/// How the falling "streams" behind the particles are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamStyle {
    /// Thick straight strands swaying with the frame clock.
    Straight,
    /// One wide bezier main fall with thin strands beside it.
    Cascade,
}

/// Parameters for a waterfall instance.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallConfig {
    pub particle_count: usize,
    pub stream_count: usize,
    pub stream_style: StreamStyle,
    /// Base hue (degrees) for particles, ripples and the wash.
    pub hue: f64,
    /// Random hue offset added per particle.
    pub hue_spread: f64,
    /// Distance above the bottom edge that counts as the floor.
    pub floor_offset: f64,
    pub size: Span,
    pub fall_speed: Span,
    pub drift: Span,
    pub wobble_amplitude: f64,
    pub wobble_speed: Span,
    pub decay: Span,
    pub trail_length: usize,
    pub ripple_speed: f64,
    pub ripple_fade: f64,
    pub ripple_max_radius: f64,
    pub ripple_line_width: f64,
    pub ripple_alpha: f64,
    /// Horizontal centre of the mist, as a fraction of the width.
    pub mist_center: f64,
    pub mist_radius: f64,
    pub mist_band: f64,
    pub mist_alpha: f64,
    /// Wash alpha at top, middle and bottom.
    pub wash_alpha: [f64; 3],
    pub stream_width: f64,
    pub stream_sway: f64,
    pub stream_alpha: f64,
    /// Extra stream alpha at full scroll flow.
    pub flow_gain: f64,
    pub core_alpha: f64,
    pub rim_alpha: f64,
}

impl Default for WaterfallConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            stream_count: 2,
            stream_style: StreamStyle::Straight,
            hue: 200.0,
            hue_spread: 60.0,
            floor_offset: 30.0,
            size: Span::new(1.0, 4.0),
            fall_speed: Span::new(2.0, 5.0),
            drift: Span::around(0.3),
            wobble_amplitude: 0.4,
            wobble_speed: Span::new(0.03, 0.09),
            decay: Span::new(0.001, 0.003),
            trail_length: 0,
            ripple_speed: 1.5,
            ripple_fade: 0.03,
            ripple_max_radius: 40.0,
            ripple_line_width: 1.5,
            ripple_alpha: 0.2,
            mist_center: 0.3,
            mist_radius: 150.0,
            mist_band: 80.0,
            mist_alpha: 0.08,
            wash_alpha: [0.12, 0.06, 0.02],
            stream_width: 12.0,
            stream_sway: 8.0,
            stream_alpha: 0.3,
            flow_gain: 0.2,
            core_alpha: 0.7,
            rim_alpha: 0.2,
        }
    }
}

impl WaterfallConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense cascade with trails, used behind the landing hero.
    pub fn home() -> Self {
        Self::new()
            .particles(150)
            .streams(StreamStyle::Cascade, 3)
            .floor_offset(50.0)
            .size(Span::new(1.0, 5.0))
            .fall_speed(Span::new(2.0, 6.0))
            .drift(Span::around(0.4))
            .wobble(0.5, Span::new(0.03, 0.11))
            .trail(5)
            .ripples(2.0, 0.02, 50.0)
            .ripple_style(2.0, 0.3)
            .mist(0.4, 200.0, 100.0, 0.1)
            .wash([0.15, 0.08, 0.02])
            .stream_look(5.0, 15.0, 0.2, 0.3)
            .particle_alpha(0.8, 0.3)
    }

    pub fn about() -> Self {
        Self::new()
    }

    pub fn certifications() -> Self {
        Self::new()
            .particles(100)
            .drift(Span::around(0.25))
            .wobble(0.3, Span::new(0.03, 0.09))
    }

    /// Sparse violet variant for the skills grid.
    pub fn skills() -> Self {
        Self::new()
            .particles(80)
            .streams(StreamStyle::Straight, 1)
            .hue(255.0)
            .hue_spread(40.0)
            .mist(0.5, 160.0, 80.0, 0.07)
    }

    pub fn particles(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Stream count is clamped to 1..=3.
    pub fn streams(mut self, style: StreamStyle, count: usize) -> Self {
        self.stream_style = style;
        self.stream_count = count.clamp(1, 3);
        self
    }

    pub fn hue(mut self, hue: f64) -> Self {
        self.hue = hue;
        self
    }

    pub fn hue_spread(mut self, spread: f64) -> Self {
        self.hue_spread = spread;
        self
    }

    pub fn floor_offset(mut self, offset: f64) -> Self {
        self.floor_offset = offset.max(0.0);
        self
    }

    pub fn size(mut self, size: Span) -> Self {
        self.size = size;
        self
    }

    pub fn fall_speed(mut self, speed: Span) -> Self {
        self.fall_speed = speed;
        self
    }

    pub fn drift(mut self, drift: Span) -> Self {
        self.drift = drift;
        self
    }

    pub fn wobble(mut self, amplitude: f64, speed: Span) -> Self {
        self.wobble_amplitude = amplitude;
        self.wobble_speed = speed;
        self
    }

    pub fn decay(mut self, decay: Span) -> Self {
        self.decay = decay;
        self
    }

    pub fn trail(mut self, length: usize) -> Self {
        self.trail_length = length;
        self
    }

    pub fn ripples(mut self, speed: f64, fade: f64, max_radius: f64) -> Self {
        self.ripple_speed = speed;
        self.ripple_fade = fade;
        self.ripple_max_radius = max_radius;
        self
    }

    pub fn ripple_style(mut self, line_width: f64, alpha: f64) -> Self {
        self.ripple_line_width = line_width;
        self.ripple_alpha = alpha;
        self
    }

    pub fn mist(mut self, center: f64, radius: f64, band: f64, alpha: f64) -> Self {
        self.mist_center = center;
        self.mist_radius = radius;
        self.mist_band = band;
        self.mist_alpha = alpha;
        self
    }

    pub fn wash(mut self, alphas: [f64; 3]) -> Self {
        self.wash_alpha = alphas;
        self
    }

    pub fn stream_look(mut self, width: f64, sway: f64, alpha: f64, flow_gain: f64) -> Self {
        self.stream_width = width;
        self.stream_sway = sway;
        self.stream_alpha = alpha;
        self.flow_gain = flow_gain;
        self
    }

    pub fn particle_alpha(mut self, core: f64, rim: f64) -> Self {
        self.core_alpha = core;
        self.rim_alpha = rim;
        self
    }

    /// Stream alpha for a scroll flow value in `[0, 1]`.
    pub fn stream_alpha_at(&self, flow: f64) -> f64 {
        self.stream_alpha + flow.clamp(0.0, 1.0) * self.flow_gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_presets_stay_in_particle_budget() {
        for config in [
            WaterfallConfig::home(),
            WaterfallConfig::about(),
            WaterfallConfig::certifications(),
            WaterfallConfig::skills(),
        ] {
            assert!((80..=150).contains(&config.particle_count));
            assert!((1..=3).contains(&config.stream_count));
        }
    }

    #[test]
    fn test_stream_count_is_clamped() {
        let config = WaterfallConfig::new().streams(StreamStyle::Straight, 9);
        assert_eq!(config.stream_count, 3);
        let config = WaterfallConfig::new().streams(StreamStyle::Cascade, 0);
        assert_eq!(config.stream_count, 1);
    }

    #[test]
    fn test_span_sampling() {
        let mut rng = SmallRng::seed_from_u64(7);
        let span = Span::new(2.0, 5.0);
        for _ in 0..100 {
            let v = span.sample(&mut rng);
            assert!((2.0..5.0).contains(&v));
        }
        // Degenerate span never panics
        assert_eq!(Span::new(3.0, 3.0).sample(&mut rng), 3.0);
        assert_eq!(Span::new(4.0, 1.0).sample(&mut rng), 4.0);
    }

    #[test]
    fn test_stream_alpha_follows_flow() {
        let config = WaterfallConfig::about();
        assert_eq!(config.stream_alpha_at(0.0), 0.3);
        assert!((config.stream_alpha_at(1.0) - 0.5).abs() < 1e-9);
        assert!((config.stream_alpha_at(4.0) - 0.5).abs() < 1e-9);
    }
}

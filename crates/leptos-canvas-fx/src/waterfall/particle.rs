//! Falling water particles and the ripples they leave on the floor.

use std::collections::VecDeque;

use rand::Rng;

use super::config::WaterfallConfig;

/// Height of the band above the canvas where particles respawn.
pub const SPAWN_BAND: f64 = 100.0;

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_y: f64,
    pub drift: f64,
    pub wobble: f64,
    pub wobble_speed: f64,
    pub hue: f64,
    pub life: f64,
    pub decay: f64,
    /// Recent positions, oldest first.
    pub trail: VecDeque<(f64, f64)>,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &WaterfallConfig, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: config.size.sample(rng),
            speed_y: config.fall_speed.sample(rng),
            drift: config.drift.sample(rng),
            wobble: rng.gen::<f64>() * std::f64::consts::TAU,
            wobble_speed: config.wobble_speed.sample(rng),
            hue: config.hue + rng.gen::<f64>() * config.hue_spread,
            life: 1.0,
            decay: config.decay.sample(rng),
            trail: VecDeque::with_capacity(config.trail_length + 1),
        }
    }

    /// Move back into the band above the canvas at a random column.
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64) {
        self.y = -rng.gen::<f64>() * SPAWN_BAND;
        self.x = rng.gen::<f64>() * width;
        self.trail.clear();
    }

    /// Advance one frame. Returns the splash point when the particle hit the floor.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &WaterfallConfig,
        width: f64,
        height: f64,
    ) -> Option<(f64, f64)> {
        if config.trail_length > 0 {
            self.trail.push_back((self.x, self.y));
            while self.trail.len() > config.trail_length {
                self.trail.pop_front();
            }
        }

        self.y += self.speed_y;
        self.x += self.drift + self.wobble.sin() * config.wobble_amplitude;
        self.wobble += self.wobble_speed;
        self.life -= self.decay;

        let mut splash = None;
        if self.y > height - config.floor_offset {
            splash = Some((self.x, height));
            self.respawn(rng, width);
        }

        if self.y < -SPAWN_BAND || self.life <= 0.0 {
            self.respawn(rng, width);
            self.life = 1.0;
        }

        splash
    }
}

/// Expanding ring left where a particle reached the floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub life: f64,
}

impl Ripple {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, radius: 0.0, life: 1.0 }
    }

    pub fn update(&mut self, config: &WaterfallConfig) {
        self.radius += config.ripple_speed;
        self.life -= config.ripple_fade;
    }

    pub fn is_spent(&self, config: &WaterfallConfig) -> bool {
        self.life <= 0.0 || self.radius > config.ripple_max_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_particle_splashes_at_floor() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = WaterfallConfig::about();
        let mut particle = Particle::spawn(&mut rng, &config, 50.0, 265.0);
        particle.speed_y = 10.0;

        let splash = particle.update(&mut rng, &config, 200.0, 300.0);
        let (x, y) = splash.expect("particle should hit the floor");
        assert_eq!(y, 300.0);
        assert!(x > 40.0 && x < 60.0);
        assert!(particle.y <= 0.0 && particle.y >= -SPAWN_BAND);
        assert!(particle.x >= 0.0 && particle.x < 200.0);
    }

    #[test]
    fn test_dead_particle_respawns_with_full_life() {
        let mut rng = SmallRng::seed_from_u64(2);
        let config = WaterfallConfig::about();
        let mut particle = Particle::spawn(&mut rng, &config, 10.0, 10.0);
        particle.life = 0.0005;
        particle.decay = 0.002;

        assert!(particle.update(&mut rng, &config, 100.0, 400.0).is_none());
        assert_eq!(particle.life, 1.0);
        assert!(particle.y <= 0.0);
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut rng = SmallRng::seed_from_u64(3);
        let config = WaterfallConfig::home();
        let mut particle = Particle::spawn(&mut rng, &config, 10.0, 0.0);
        particle.speed_y = 0.5;
        for _ in 0..20 {
            particle.update(&mut rng, &config, 100.0, 10_000.0);
        }
        assert_eq!(particle.trail.len(), config.trail_length);
    }

    #[test]
    fn test_ripple_fades_out() {
        let config = WaterfallConfig::about();
        let mut ripple = Ripple::new(5.0, 100.0);
        let mut frames = 0;
        while !ripple.is_spent(&config) {
            ripple.update(&config);
            frames += 1;
        }
        // radius cap (40 / 1.5) is reached before the fade (1 / 0.03)
        assert_eq!(frames, 27);
        assert!(ripple.radius > config.ripple_max_radius);
    }
}

//! Waterfall Simulation
//!
//! Canvas-independent state of one waterfall: the particle pool, live
//! ripples and the queue of floor hits waiting to become ripples.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::WaterfallConfig;
use super::particle::{Particle, Ripple};

pub struct WaterfallSim {
    config: WaterfallConfig,
    rng: SmallRng,
    particles: Vec<Particle>,
    ripples: Vec<Ripple>,
    splashes: Vec<(f64, f64)>,
    width: f64,
    height: f64,
}

impl WaterfallSim {
    /// Create a simulation with its particles scattered over the whole canvas.
    pub fn new(config: WaterfallConfig, seed: u64, width: f64, height: f64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..config.particle_count)
            .map(|_| {
                let x = rng.gen::<f64>() * width;
                let y = rng.gen::<f64>() * height;
                Particle::spawn(&mut rng, &config, x, y)
            })
            .collect();

        Self {
            config,
            rng,
            particles,
            ripples: Vec::new(),
            splashes: Vec::new(),
            width,
            height,
        }
    }

    /// Track new canvas dimensions. Particles are kept; those outside the
    /// new bounds are recycled by the regular floor check.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.ripples
            .extend(self.splashes.drain(..).map(|(x, y)| Ripple::new(x, y)));

        let config = &self.config;
        self.ripples.retain_mut(|ripple| {
            ripple.update(config);
            !ripple.is_spent(config)
        });

        for particle in &mut self.particles {
            if let Some(hit) = particle.update(&mut self.rng, config, self.width, self.height) {
                self.splashes.push(hit);
            }
        }
    }

    pub fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn pending_splashes(&self) -> usize {
        self.splashes.len()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waterfall::particle::SPAWN_BAND;

    fn assert_bounds(sim: &WaterfallSim) {
        for p in sim.particles() {
            assert!(p.y >= -SPAWN_BAND && p.y <= sim.height(), "y out of range: {}", p.y);
            assert!(p.life >= 0.0 && p.life <= 1.0, "life out of range: {}", p.life);
        }
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        for (seed, config) in [
            (11, WaterfallConfig::home()),
            (12, WaterfallConfig::about()),
            (13, WaterfallConfig::certifications()),
            (14, WaterfallConfig::skills()),
        ] {
            let mut sim = WaterfallSim::new(config, seed, 480.0, 720.0);
            for _ in 0..2_000 {
                sim.step();
                assert_bounds(&sim);
            }
        }
    }

    #[test]
    fn test_pool_size_is_fixed() {
        let mut sim = WaterfallSim::new(WaterfallConfig::home(), 5, 300.0, 300.0);
        for _ in 0..500 {
            sim.step();
        }
        assert_eq!(sim.particles().len(), 150);
    }

    #[test]
    fn test_floor_hits_become_ripples_next_frame() {
        let mut sim = WaterfallSim::new(WaterfallConfig::about(), 21, 400.0, 200.0);
        let mut saw_ripples = false;
        for _ in 0..200 {
            let pending = sim.pending_splashes();
            sim.step();
            if pending > 0 {
                saw_ripples |= !sim.ripples().is_empty();
            }
        }
        assert!(saw_ripples);
        let max = sim.config().ripple_max_radius;
        assert!(sim.ripples().iter().all(|r| r.radius <= max && r.life > 0.0));
    }

    #[test]
    fn test_shrinking_canvas_recycles_particles() {
        let mut sim = WaterfallSim::new(WaterfallConfig::about(), 8, 800.0, 900.0);
        sim.resize(200.0, 150.0);
        sim.step();
        assert_bounds(&sim);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = WaterfallSim::new(WaterfallConfig::skills(), 99, 320.0, 480.0);
        let mut b = WaterfallSim::new(WaterfallConfig::skills(), 99, 320.0, 480.0);
        for _ in 0..50 {
            a.step();
            b.step();
        }
        let ya: Vec<f64> = a.particles().iter().map(|p| p.y).collect();
        let yb: Vec<f64> = b.particles().iter().map(|p| p.y).collect();
        assert_eq!(ya, yb);
    }
}

//! Confetti animation engine.
//!
//! Spawns a fixed number of particles on `start`, moves them linearly on each
//! `tick` and deactivates itself once the configured duration has elapsed.
//! The engine never looks at the wall clock: every tick advances the run by
//! the delta it is given, which the UI keeps constant.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::confetti::config::ConfettiConfig;
use crate::confetti::particle::{ConfettiColor, Particle, Vec2};
use crate::confetti::state::{AnimationState, RenderNotification};
use crate::core::time::{ticks_for, Millis};

/// Confetti animation engine with an injectable random source
pub struct ConfettiEngine<R = StdRng> {
    config: ConfettiConfig,
    rng: R,
    particles: Vec<Particle>,
    elapsed: Millis,
    state: AnimationState,
}

impl ConfettiEngine<StdRng> {
    /// Create an engine seeded from OS entropy
    pub fn from_entropy(config: ConfettiConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a deterministic engine
    pub fn seeded(config: ConfettiConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ConfettiEngine<R> {
    pub fn with_rng(config: ConfettiConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            particles: Vec::new(),
            elapsed: 0,
            state: AnimationState::Idle,
        }
    }

    /// Effective spawn area for a viewport, never smaller than the configured floor
    pub fn spawn_area(&self, viewport_width: f32, viewport_height: f32) -> (f32, f32) {
        // f32::max ignores NaN, so a NaN viewport falls back to the floor
        (
            viewport_width.max(self.config.min_width),
            viewport_height.max(self.config.min_height),
        )
    }

    /// Start a new run, replacing any particles from a previous one
    pub fn start(&mut self, viewport_width: f32, viewport_height: f32) {
        let (width, height) = self.spawn_area(viewport_width, viewport_height);

        let count = self.config.particle_count;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(self.spawn_particle(width, height));
        }

        self.particles = particles;
        self.elapsed = 0;
        self.state = AnimationState::Running;

        debug!(
            "Confetti started: {} particles over {}x{}, {} ticks",
            count,
            width,
            height,
            ticks_for(self.config.duration_ms, self.config.tick_interval_ms)
        );
    }

    fn spawn_particle(&mut self, width: f32, height: f32) -> Particle {
        let config = &self.config;
        let rng = &mut self.rng;

        let x = sample_half_open(rng, 0.0, width);
        let y = sample_half_open(rng, config.spawn_top, height * config.spawn_depth);
        let color = *ConfettiColor::ALL
            .choose(rng)
            .unwrap_or(&ConfettiColor::Coral);
        let size = rng.gen_range(config.size.0..=config.size.1) as f32;
        let vy = sample_closed(rng, config.fall_speed);
        let vx = sample_closed(rng, config.drift_speed);
        let rotation = sample_half_open(rng, 0.0, 360.0);
        let rotation_speed = sample_closed(rng, config.rotation_speed);

        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            color,
            size,
            rotation,
            rotation_speed,
        }
    }

    /// Advance the run by one tick of `delta_ms`.
    /// Returns `None` when idle; nothing is mutated in that case.
    pub fn tick(&mut self, delta_ms: Millis) -> Option<RenderNotification> {
        if self.state.is_idle() {
            return None;
        }

        for particle in &mut self.particles {
            particle.advance();
        }
        self.elapsed = self.elapsed.saturating_add(delta_ms);

        if self.elapsed >= self.config.duration_ms {
            self.state = AnimationState::Idle;
            debug!("Confetti finished after {}ms", self.elapsed);
            return Some(RenderNotification::Finished);
        }

        Some(RenderNotification::Redraw)
    }

    /// Current particles in spawn order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_active(&self) -> bool {
        self.state.is_running()
    }

    /// Time accumulated since the last `start`
    pub fn elapsed(&self) -> Millis {
        self.elapsed
    }
}

/// Uniform sample in `[low, high)`, or `low` when the range is empty or unbounded
fn sample_half_open<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low && (high - low).is_finite() {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Uniform sample in `[low, high]`, or `low` when the range is reversed or unbounded
fn sample_closed<R: Rng>(rng: &mut R, (low, high): (f32, f32)) -> f32 {
    if high >= low && (high - low).is_finite() {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::TICK_INTERVAL_MS;
    use approx::assert_relative_eq;

    fn engine(seed: u64) -> ConfettiEngine {
        ConfettiEngine::seeded(ConfettiConfig::default(), seed)
    }

    fn assert_in_ranges(engine: &ConfettiEngine, width: f32, height: f32) {
        assert_eq!(engine.particles().len(), 100);
        for p in engine.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < width, "x = {}", p.position.x);
            assert!(
                p.position.y >= -200.0 && p.position.y < height * 0.3,
                "y = {}",
                p.position.y
            );
            assert!(p.size >= 6.0 && p.size <= 14.0 && p.size.fract() == 0.0);
            assert!(p.velocity.y >= 2.0 && p.velocity.y <= 8.0);
            assert!(p.velocity.x >= -2.0 && p.velocity.x <= 2.0);
            assert!(p.rotation >= 0.0 && p.rotation < 360.0);
            assert!(p.rotation_speed >= -15.0 && p.rotation_speed <= 15.0);
            assert!(ConfettiColor::ALL.contains(&p.color));
        }
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = engine(1);
        assert!(!engine.is_active());
        assert_eq!(engine.elapsed(), 0);
        assert!(engine.particles().is_empty());
    }

    #[test]
    fn test_start_spawns_particles_in_range() {
        let mut engine = engine(7);
        engine.start(1280.0, 720.0);

        assert!(engine.is_active());
        assert_eq!(engine.elapsed(), 0);
        assert_in_ranges(&engine, 1280.0, 720.0);
    }

    #[test]
    fn test_spawn_area_floor() {
        let engine = engine(0);
        assert_eq!(engine.spawn_area(0.0, 0.0), (700.0, 450.0));
        assert_eq!(engine.spawn_area(-5.0, 300.0), (700.0, 450.0));
        assert_eq!(engine.spawn_area(f32::NAN, 900.0), (700.0, 900.0));
        assert_eq!(engine.spawn_area(1920.0, 1080.0), (1920.0, 1080.0));
    }

    #[test]
    fn test_zero_viewport_uses_floor() {
        for seed in 0..5 {
            let mut engine = engine(seed);
            engine.start(0.0, 0.0);
            assert_in_ranges(&engine, 700.0, 450.0);
        }
    }

    #[test]
    fn test_reference_viewport_spawn_rows() {
        let mut engine = engine(42);
        engine.start(700.0, 450.0);
        assert!(engine
            .particles()
            .iter()
            .all(|p| p.position.y >= -200.0 && p.position.y < 135.0));
    }

    #[test]
    fn test_same_seed_same_particles() {
        let mut a = engine(99);
        let mut b = engine(99);
        a.start(800.0, 600.0);
        b.start(800.0, 600.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_linear_motion() {
        let mut engine = engine(3);
        engine.start(700.0, 450.0);
        let initial = engine.particles().to_vec();

        let k = 10;
        for _ in 0..k {
            assert_eq!(engine.tick(TICK_INTERVAL_MS), Some(RenderNotification::Redraw));
        }

        for (before, after) in initial.iter().zip(engine.particles()) {
            let expected = before.position + before.velocity * k as f32;
            assert_relative_eq!(after.position.x, expected.x, epsilon = 1e-3);
            assert_relative_eq!(after.position.y, expected.y, epsilon = 1e-3);
            assert_relative_eq!(
                after.rotation,
                before.rotation + before.rotation_speed * k as f32,
                epsilon = 1e-3
            );
            assert_eq!(after.velocity, before.velocity);
            assert_eq!(after.size, before.size);
            assert_eq!(after.color, before.color);
        }
        assert_eq!(engine.elapsed(), 160);
    }

    #[test]
    fn test_finishes_on_125th_tick() {
        let mut engine = engine(5);
        engine.start(700.0, 450.0);
        assert_eq!(ticks_for(2000, TICK_INTERVAL_MS), 125);

        for i in 1..125 {
            assert_eq!(
                engine.tick(TICK_INTERVAL_MS),
                Some(RenderNotification::Redraw),
                "tick {i} finished too early"
            );
            assert!(engine.is_active());
        }

        assert_eq!(engine.tick(TICK_INTERVAL_MS), Some(RenderNotification::Finished));
        assert!(!engine.is_active());
        assert_eq!(engine.elapsed(), 2000);
        assert_eq!(engine.particles().len(), 100);
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut engine = engine(11);
        for _ in 0..10 {
            assert_eq!(engine.tick(TICK_INTERVAL_MS), None);
        }
        assert_eq!(engine.elapsed(), 0);
        assert!(engine.particles().is_empty());
    }

    #[test]
    fn test_particles_frozen_after_finish() {
        let mut engine = engine(13);
        engine.start(700.0, 450.0);
        while engine.tick(TICK_INTERVAL_MS) != Some(RenderNotification::Finished) {}

        let frozen = engine.particles().to_vec();
        for _ in 0..20 {
            assert_eq!(engine.tick(TICK_INTERVAL_MS), None);
        }
        assert_eq!(engine.particles(), frozen.as_slice());
        assert_eq!(engine.elapsed(), 2000);
    }

    #[test]
    fn test_restart_while_running() {
        let mut engine = engine(17);
        engine.start(700.0, 450.0);
        for _ in 0..30 {
            engine.tick(TICK_INTERVAL_MS);
        }
        let previous = engine.particles().to_vec();

        engine.start(700.0, 450.0);
        assert!(engine.is_active());
        assert_eq!(engine.elapsed(), 0);
        assert_eq!(engine.particles().len(), 100);
        assert_ne!(engine.particles(), previous.as_slice());
    }

    #[test]
    fn test_large_delta_finishes_immediately() {
        let mut engine = engine(19);
        engine.start(700.0, 450.0);
        assert_eq!(engine.tick(5000), Some(RenderNotification::Finished));
        assert!(!engine.is_active());
    }

    #[test]
    fn test_unbounded_ranges_do_not_panic() {
        let config = ConfettiConfig {
            fall_speed: (2.0, f32::INFINITY),
            drift_speed: (2.0, -2.0),
            min_width: f32::INFINITY,
            ..Default::default()
        };
        let mut engine = ConfettiEngine::seeded(config, 29);
        engine.start(700.0, 450.0);

        assert_eq!(engine.particles().len(), 100);
        for p in engine.particles() {
            assert_eq!(p.velocity.y, 2.0);
            assert_eq!(p.velocity.x, 2.0);
            assert_eq!(p.position.x, 0.0);
        }
    }

    #[test]
    fn test_custom_particle_count() {
        let config = ConfettiConfig {
            particle_count: 12,
            ..Default::default()
        };
        let mut engine = ConfettiEngine::seeded(config, 23);
        engine.start(700.0, 450.0);
        assert_eq!(engine.particles().len(), 12);
    }
}

//! Visual-feedback particles
//!
//! The simulation only ever pushes into a `ParticleSystem`; nothing it decides
//! depends on what the particles do afterwards.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Receives particles during `draw()`
pub trait ParticleCanvas {
    fn circle(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32);
}

/// Sink for visual feedback
pub trait ParticleSystem {
    /// Engine smoke, once per playing frame
    fn emit_exhaust(&mut self, at: Vec2, boost_active: bool);
    /// One flame of the boost trail (emitted twice per boosted frame)
    fn emit_boost_trail(&mut self, at: Vec2);
    /// Burst at a crash site
    fn emit_collision_sparks(&mut self, at: Vec2);
    /// Advance and retire particles
    fn update(&mut self);
    fn draw(&self, canvas: &mut dyn ParticleCanvas);
    fn clear(&mut self);
}

/// Maximum live particles; oldest are dropped first
pub const MAX_PARTICLES: usize = 500;

const SMOKE: [u8; 3] = [150, 150, 150];
const FLAME: [u8; 3] = [255, 140, 0];
const TRAIL: [u8; 3] = [255, 220, 0];
const SPARK: [u8; 3] = [255, 255, 120];

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [u8; 3],
    /// Frames left to live
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

impl Particle {
    /// Remaining life as 0-1, used for fading
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life.max(1) as f32
    }
}

/// Default particle system: simple drift-and-fade physics
#[derive(Debug, Clone)]
pub struct Particles {
    particles: VecDeque<Particle>,
    rng: Pcg32,
}

impl Particles {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: VecDeque::with_capacity(MAX_PARTICLES),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    fn spawn(&mut self, pos: Vec2, vel: Vec2, color: [u8; 3], life: u32, size: f32) {
        if self.particles.len() >= MAX_PARTICLES {
            self.particles.pop_front();
        }
        self.particles.push_back(Particle {
            pos,
            vel,
            color,
            life,
            max_life: life,
            size,
        });
    }
}

impl ParticleSystem for Particles {
    fn emit_exhaust(&mut self, at: Vec2, boost_active: bool) {
        let (count, color, speed) = if boost_active {
            (3, FLAME, 4.0)
        } else {
            (1, SMOKE, 2.0)
        };
        for _ in 0..count {
            let vel = Vec2::new(
                self.rng.random_range(-0.5..=0.5),
                self.rng.random_range(speed * 0.5..=speed),
            );
            let life = self.rng.random_range(15..=25);
            let size = self.rng.random_range(2.0..=4.0);
            self.spawn(at, vel, color, life, size);
        }
    }

    fn emit_boost_trail(&mut self, at: Vec2) {
        let vel = Vec2::new(self.rng.random_range(-0.3..=0.3), 5.0);
        let life = self.rng.random_range(10..=18);
        self.spawn(at, vel, TRAIL, life, 3.0);
    }

    fn emit_collision_sparks(&mut self, at: Vec2) {
        for _ in 0..24 {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(2.0..=7.0);
            let life = self.rng.random_range(20..=40);
            let size = self.rng.random_range(2.0..=5.0);
            self.spawn(at, Vec2::from_angle(angle) * speed, SPARK, life, size);
        }
    }

    fn update(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel;
            particle.vel *= 0.95;
            particle.size *= 0.97;
            particle.life = particle.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    fn draw(&self, canvas: &mut dyn ParticleCanvas) {
        for particle in &self.particles {
            canvas.circle(particle.pos, particle.size, particle.color, particle.alpha());
        }
    }

    fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingCanvas(usize);

    impl ParticleCanvas for CountingCanvas {
        fn circle(&mut self, _center: Vec2, _radius: f32, _color: [u8; 3], alpha: f32) {
            assert!(alpha > 0.0 && alpha <= 1.0);
            self.0 += 1;
        }
    }

    #[test]
    fn test_particles_retire() {
        let mut particles = Particles::new(1);
        particles.emit_collision_sparks(Vec2::new(100.0, 100.0));
        assert_eq!(particles.len(), 24);

        for _ in 0..40 {
            particles.update();
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_boost_exhaust_is_denser() {
        let mut particles = Particles::new(2);
        particles.emit_exhaust(Vec2::ZERO, false);
        assert_eq!(particles.len(), 1);
        particles.emit_exhaust(Vec2::ZERO, true);
        assert_eq!(particles.len(), 4);
    }

    #[test]
    fn test_pool_is_bounded() {
        let mut particles = Particles::new(3);
        for _ in 0..100 {
            particles.emit_collision_sparks(Vec2::ZERO);
        }
        assert_eq!(particles.len(), MAX_PARTICLES);
    }

    #[test]
    fn test_full_pool_drops_oldest_first() {
        struct Centers(Vec<Vec2>);

        impl ParticleCanvas for Centers {
            fn circle(&mut self, center: Vec2, _radius: f32, _color: [u8; 3], _alpha: f32) {
                self.0.push(center);
            }
        }

        let mut particles = Particles::new(5);
        for i in 0..=MAX_PARTICLES {
            particles.emit_boost_trail(Vec2::new(i as f32, 0.0));
        }

        let mut canvas = Centers(Vec::new());
        particles.draw(&mut canvas);
        assert_eq!(canvas.0.len(), MAX_PARTICLES);
        assert_eq!(canvas.0.first().map(|c| c.x), Some(1.0));
        assert_eq!(canvas.0.last().map(|c| c.x), Some(MAX_PARTICLES as f32));
    }

    #[test]
    fn test_draw_and_clear() {
        let mut particles = Particles::new(4);
        particles.emit_boost_trail(Vec2::new(10.0, 10.0));
        particles.emit_boost_trail(Vec2::new(30.0, 10.0));

        let mut canvas = CountingCanvas(0);
        particles.draw(&mut canvas);
        assert_eq!(canvas.0, 2);

        particles.clear();
        let mut canvas = CountingCanvas(0);
        particles.draw(&mut canvas);
        assert_eq!(canvas.0, 0);
    }
}

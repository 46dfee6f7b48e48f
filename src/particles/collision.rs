//! Cross-pool spawning
//!
//! A rain particle that lands inside its emitter's collision volume spawns
//! one splash. The splash pool is handed to the rain simulate call through
//! `SplashSink`, so the rain pool never holds a reference to it.

use super::emitter_data::EmitterConfig;
use super::emitter_operations::{random_color, random_size};
use super::particle_data::{Particle, ParticleState};
use super::particle_pool_data::ParticlePool;
use super::particle_pool_operations::spawn_particle_at;
use cgmath::{Point3, Vector3};
use rand::Rng;

/// Receives collision hits from a simulate pass
pub trait SplashSink {
    fn spawn_splash(&mut self, position: Point3<f32>);
}

/// Sink for emitters without a collision volume
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSplash;

impl SplashSink for NoSplash {
    fn spawn_splash(&mut self, _position: Point3<f32>) {}
}

/// Writes one stationary particle per hit into the splash pool
pub struct SplashSpawner<'a, R: Rng + ?Sized> {
    pub pool: &'a mut ParticlePool,

    /// Color and size ranges for the splash
    pub config: &'a EmitterConfig,

    /// Seconds each splash lives
    pub lifetime: f32,

    pub rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> SplashSpawner<'a, R> {
    pub fn new(
        pool: &'a mut ParticlePool,
        config: &'a EmitterConfig,
        lifetime: f32,
        rng: &'a mut R,
    ) -> Self {
        Self {
            pool,
            config,
            lifetime,
            rng,
        }
    }
}

impl<R: Rng + ?Sized> SplashSink for SplashSpawner<'_, R> {
    fn spawn_splash(&mut self, position: Point3<f32>) {
        let particle = Particle {
            position,
            velocity: Vector3::new(0.0, 0.0, 0.0),
            color: random_color(&mut *self.rng, &self.config.color),
            size: random_size(&mut *self.rng, &self.config.size),
            remaining_life: self.lifetime,
            camera_distance_squared: 0.0,
            state: ParticleState::Alive,
        };
        spawn_particle_at(self.pool, particle);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SplashSink;
    use cgmath::Point3;

    /// Records hit positions without spawning anything
    #[derive(Debug, Default, Clone)]
    pub struct RecordingSink {
        pub hits: Vec<Point3<f32>>,
    }

    impl SplashSink for RecordingSink {
        fn spawn_splash(&mut self, position: Point3<f32>) {
            self.hits.push(position);
        }
    }
}

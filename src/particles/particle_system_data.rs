//! Particle system data - the three emitters of the car scene

use super::emitter_data::EmitterConfig;
use super::particle_data::{create_particle_buffers, ParticleBuffers};
use super::particle_pool_data::{create_particle_pool, ParticlePool};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pool, config and staging buffers for one emitter
#[derive(Debug, Clone)]
pub struct EmitterData {
    pub config: EmitterConfig,
    pub pool: ParticlePool,
    pub buffers: ParticleBuffers,
}

/// Smoke, rain and splash emitters plus the shared random source
#[derive(Debug, Clone)]
pub struct ParticleSystemData {
    pub smoke: EmitterData,
    pub rain: EmitterData,
    pub splash: EmitterData,
    pub rng: StdRng,
}

/// Live particles per emitter after a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameParticleCounts {
    pub smoke: usize,
    pub rain: usize,
    pub splash: usize,
}

impl FrameParticleCounts {
    pub fn total(&self) -> usize {
        self.smoke + self.rain + self.splash
    }
}

pub fn create_emitter_data(config: EmitterConfig) -> EmitterData {
    let capacity = config.capacity;
    EmitterData {
        config,
        pool: create_particle_pool(capacity),
        buffers: create_particle_buffers(capacity),
    }
}

/// Build the system with entropy-seeded randomness
pub fn create_particle_system(
    smoke: EmitterConfig,
    rain: EmitterConfig,
    splash: EmitterConfig,
) -> ParticleSystemData {
    create_particle_system_with_rng(smoke, rain, splash, StdRng::from_entropy())
}

/// Build the system with a caller-provided random source
pub fn create_particle_system_with_rng(
    smoke: EmitterConfig,
    rain: EmitterConfig,
    splash: EmitterConfig,
    rng: StdRng,
) -> ParticleSystemData {
    log::info!(
        "[create_particle_system] smoke={} rain={} splash={} slots",
        smoke.capacity,
        rain.capacity,
        splash.capacity
    );

    ParticleSystemData {
        smoke: create_emitter_data(smoke),
        rain: create_emitter_data(rain),
        splash: create_emitter_data(splash),
        rng,
    }
}

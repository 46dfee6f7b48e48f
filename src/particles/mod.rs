//! Particles Module - smoke, rain and splash pools
//!
//! Fixed-capacity pools with slot reuse, per-frame physics, back-to-front
//! sorting and rain-to-splash spawning. Data lives in the `*_data` modules,
//! transformations in the `*_operations` modules.

pub mod collision;
pub mod emitter_data;
pub mod emitter_operations;
pub mod particle_data;
pub mod particle_pool_data;
pub mod particle_pool_operations;
pub mod particle_system_data;
pub mod particle_system_operations;

pub use collision::{NoSplash, SplashSink, SplashSpawner};
pub use emitter_data::{
    rain_emitter_config, smoke_emitter_config, splash_emitter_config, CollisionConfig,
    ColorRange, EmitterConfig, EmitterKind, SizeRange,
};
pub use emitter_operations::{emit_particle, emitter_spawn_count};
pub use particle_data::{
    color_bytes, create_particle_buffers, position_bytes, Particle, ParticleBuffers,
    ParticleState,
};
pub use particle_pool_data::{create_particle_pool, pool_capacity, ParticlePool, PoolStats};
pub use particle_pool_operations::{
    emit_for_frame, find_free_slot, live_particle_count, simulate_particles,
    sort_by_descending_camera_distance, spawn_particle_at, spawn_particles, write_sorted_buffers,
};
pub use particle_system_data::{
    create_particle_system, create_particle_system_with_rng, EmitterData, FrameParticleCounts,
    ParticleSystemData,
};
pub use particle_system_operations::update_particle_system;

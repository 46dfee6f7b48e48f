//! Particle system operations - one frame of smoke, rain and splash
//!
//! Frame order is fixed: spawn, simulate, sort, repack. Rain is simulated
//! before splash so that splashes spawned by roof hits are advanced and
//! drawn in the same frame.

use super::collision::{NoSplash, SplashSpawner};
use super::particle_pool_operations::{
    emit_for_frame, simulate_particles, sort_by_descending_camera_distance, write_sorted_buffers,
};
use super::particle_system_data::{EmitterData, FrameParticleCounts, ParticleSystemData};
use cgmath::Point3;

/// Advance all three emitters by one frame
pub fn update_particle_system(
    system: &mut ParticleSystemData,
    delta_time: f32,
    camera_position: Point3<f32>,
) -> FrameParticleCounts {
    let ParticleSystemData {
        smoke,
        rain,
        splash,
        rng,
    } = system;

    emit_for_frame(&mut smoke.pool, &smoke.config, delta_time, rng);
    emit_for_frame(&mut rain.pool, &rain.config, delta_time, rng);
    emit_for_frame(&mut splash.pool, &splash.config, delta_time, rng);

    simulate_particles(
        &mut smoke.pool,
        &smoke.config,
        delta_time,
        camera_position,
        &mut smoke.buffers,
        &mut NoSplash,
    );

    match rain.config.collision {
        Some(collision) => {
            let mut spawner = SplashSpawner::new(
                &mut splash.pool,
                &splash.config,
                collision.splash_lifetime,
                rng,
            );
            simulate_particles(
                &mut rain.pool,
                &rain.config,
                delta_time,
                camera_position,
                &mut rain.buffers,
                &mut spawner,
            );
        }
        None => {
            simulate_particles(
                &mut rain.pool,
                &rain.config,
                delta_time,
                camera_position,
                &mut rain.buffers,
                &mut NoSplash,
            );
        }
    }

    simulate_particles(
        &mut splash.pool,
        &splash.config,
        delta_time,
        camera_position,
        &mut splash.buffers,
        &mut NoSplash,
    );

    let counts = FrameParticleCounts {
        smoke: finish_emitter(smoke),
        rain: finish_emitter(rain),
        splash: finish_emitter(splash),
    };

    log::trace!(
        "[update_particle_system] dt={:.4} smoke={} rain={} splash={}",
        delta_time,
        counts.smoke,
        counts.rain,
        counts.splash
    );

    counts
}

/// Sort back to front and repack the staging buffers in draw order
fn finish_emitter(emitter: &mut EmitterData) -> usize {
    sort_by_descending_camera_distance(&mut emitter.pool);
    write_sorted_buffers(&emitter.pool, &mut emitter.buffers)
}

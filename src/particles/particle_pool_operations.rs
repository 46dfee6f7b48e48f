//! Particle pool operations - pure DOP functions
//!
//! Slot allocation, spawning, per-frame simulation and back-to-front
//! sorting. Every function takes the pool explicitly; there is no global
//! particle state.
//!
//! Per-slot lifecycle:
//!
//! ```text
//!   Dead --spawn--> Alive --simulate (life left)--> Alive
//!                     |
//!                     +--simulate (life runs out)--> Dead
//! ```

use super::collision::SplashSink;
use super::emitter_data::EmitterConfig;
use super::emitter_operations::{emit_particle, emitter_spawn_count};
use super::particle_data::{write_particle_instance, Particle, ParticleBuffers, ParticleState};
use super::particle_pool_data::{pool_capacity, ParticlePool};
use crate::constants::particles::DEAD_DISTANCE_SENTINEL;
use crate::constants::physics::{GRAVITY, GRAVITY_HALF_STEP};
use crate::physics::aabb_contains_point;
use cgmath::{InnerSpace, Point3, Vector3};
use rand::Rng;

// ============================================================================
// ALLOCATION
// ============================================================================

/// Index of a dead slot, searching forward from the hint and wrapping.
///
/// When every slot is alive this returns 0 and the caller overwrites a live
/// particle. The overwrite is counted in `stats.stomped`; the hint is left
/// unchanged.
pub fn find_free_slot(pool: &mut ParticlePool) -> usize {
    let hint = pool.next_search_hint.min(pool.slots.len());

    let found = pool.slots[hint..]
        .iter()
        .position(|particle| !particle.is_alive())
        .map(|offset| hint + offset)
        .or_else(|| pool.slots[..hint].iter().position(|particle| !particle.is_alive()));

    match found {
        Some(index) => {
            pool.next_search_hint = index;
            index
        }
        None => {
            pool.stats.stomped += 1;
            if pool.stats.stomped == 1 {
                log::warn!(
                    "[find_free_slot] Pool of {} slots is full, overwriting slot 0",
                    pool_capacity(pool)
                );
            } else {
                log::debug!(
                    "[find_free_slot] Pool full, overwrite #{}",
                    pool.stats.stomped
                );
            }
            0
        }
    }
}

/// Place a fully initialized particle into a free slot.
///
/// Returns the slot index, or None for a zero-capacity pool or a particle
/// without positive life. Rejected particles never take a slot.
pub fn spawn_particle_at(pool: &mut ParticlePool, mut particle: Particle) -> Option<usize> {
    if pool.slots.is_empty() {
        log::warn!("[spawn_particle_at] Ignoring spawn into an empty pool");
        return None;
    }

    if particle.remaining_life <= 0.0 || particle.remaining_life.is_nan() {
        log::debug!(
            "[spawn_particle_at] Ignoring particle with life {}",
            particle.remaining_life
        );
        return None;
    }
    particle.state = ParticleState::Alive;

    let index = find_free_slot(pool);
    pool.slots[index] = particle;
    pool.stats.spawned += 1;
    Some(index)
}

// ============================================================================
// SPAWNING
// ============================================================================

/// Spawn `count` particles from the emitter. Returns how many were placed.
pub fn spawn_particles<R: Rng + ?Sized>(
    pool: &mut ParticlePool,
    config: &EmitterConfig,
    count: usize,
    rng: &mut R,
) -> usize {
    let mut spawned = 0;
    for _ in 0..count {
        let particle = emit_particle(config, rng);
        if spawn_particle_at(pool, particle).is_some() {
            spawned += 1;
        }
    }
    spawned
}

/// Spawn this frame's budget for the emitter, see `emitter_spawn_count`
pub fn emit_for_frame<R: Rng + ?Sized>(
    pool: &mut ParticlePool,
    config: &EmitterConfig,
    delta_time: f32,
    rng: &mut R,
) -> usize {
    let count = emitter_spawn_count(config, delta_time);
    spawn_particles(pool, config, count, rng)
}

// ============================================================================
// SIMULATION
// ============================================================================

/// Advance every live particle by `delta_time` and pack the survivors into
/// `buffers`. Returns the number of live particles written.
///
/// Gravity is applied as a half step before the position update. If the
/// emitter has a collision volume, each live particle inside it after
/// integration reports a hit to `splash`; the particle itself keeps falling
/// and can hit again on later frames.
///
/// Negative or non-finite deltas are treated as zero.
pub fn simulate_particles(
    pool: &mut ParticlePool,
    config: &EmitterConfig,
    delta_time: f32,
    camera_position: Point3<f32>,
    buffers: &mut ParticleBuffers,
    splash: &mut dyn SplashSink,
) -> usize {
    let dt = if delta_time.is_finite() {
        delta_time.max(0.0)
    } else {
        0.0
    };

    ensure_buffer_capacity(buffers, pool.slots.len());

    let gravity = Vector3::from(GRAVITY) * config.gravity_factor;
    let collision_volume = config.collision.map(|collision| collision.volume);

    let mut live_count = 0;
    let mut retired = 0;

    for particle in pool.slots.iter_mut() {
        if !particle.is_alive() {
            continue;
        }

        particle.remaining_life -= dt;

        if particle.remaining_life > 0.0 {
            particle.velocity += gravity * dt * GRAVITY_HALF_STEP;
            particle.position += particle.velocity * dt;
            particle.camera_distance_squared = (particle.position - camera_position).magnitude2();

            write_particle_instance(buffers, live_count, particle);
            live_count += 1;

            if let Some(volume) = &collision_volume {
                if aabb_contains_point(volume, particle.position) {
                    splash.spawn_splash(particle.position);
                }
            }
        } else {
            // Position and velocity are left as they were
            particle.state = ParticleState::Dead;
            particle.camera_distance_squared = DEAD_DISTANCE_SENTINEL;
            retired += 1;
        }
    }

    pool.stats.retired += retired;
    buffers.live_count = live_count;

    log::trace!(
        "[simulate_particles] {:?}: {} live, {} retired",
        config.kind,
        live_count,
        retired
    );

    live_count
}

fn ensure_buffer_capacity(buffers: &mut ParticleBuffers, capacity: usize) {
    if buffers.positions.len() < capacity {
        buffers.positions.resize(capacity, [0.0; 4]);
    }
    if buffers.colors.len() < capacity {
        buffers.colors.resize(capacity, [0; 4]);
    }
}

// ============================================================================
// ORDERING
// ============================================================================

/// Reorder every slot by camera distance, farthest first.
///
/// Dead slots carry the -1 sentinel and end up as a contiguous suffix.
/// Not stable.
pub fn sort_by_descending_camera_distance(pool: &mut ParticlePool) {
    pool.slots.sort_unstable_by(|a, b| {
        b.camera_distance_squared
            .total_cmp(&a.camera_distance_squared)
    });
}

/// Repack the output buffers from the pool's current slot order.
///
/// Called after sorting so the render stage receives particles back to front.
pub fn write_sorted_buffers(pool: &ParticlePool, buffers: &mut ParticleBuffers) -> usize {
    ensure_buffer_capacity(buffers, pool.slots.len());

    let mut live_count = 0;
    for particle in pool.slots.iter().filter(|particle| particle.is_alive()) {
        write_particle_instance(buffers, live_count, particle);
        live_count += 1;
    }
    buffers.live_count = live_count;
    live_count
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn live_particle_count(pool: &ParticlePool) -> usize {
    pool.slots.iter().filter(|particle| particle.is_alive()).count()
}

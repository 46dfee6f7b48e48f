//! Particle pool - pure data
//!
//! A fixed array of slots plus the search hint that keeps free-slot lookup
//! amortized O(1). Allocated once, never resized.

use super::particle_data::Particle;

/// Lifetime counters for a pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Particles placed into a slot
    pub spawned: u64,

    /// Spawns that overwrote a live particle because no slot was free
    pub stomped: u64,

    /// Particles whose life ran out during simulate
    pub retired: u64,
}

#[derive(Debug, Clone)]
pub struct ParticlePool {
    /// Length is the capacity
    pub slots: Vec<Particle>,

    /// Where the next free-slot search starts
    pub next_search_hint: usize,

    pub stats: PoolStats,
}

/// Allocate a pool with every slot dead
pub fn create_particle_pool(capacity: usize) -> ParticlePool {
    log::debug!("[create_particle_pool] Allocating {} slots", capacity);

    ParticlePool {
        slots: vec![Particle::dead(); capacity],
        next_search_hint: 0,
        stats: PoolStats::default(),
    }
}

pub fn pool_capacity(pool: &ParticlePool) -> usize {
    pool.slots.len()
}

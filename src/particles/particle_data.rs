//! Particle data structures - Pure DOP
//!
//! NO METHODS beyond constructors. Lifecycle transitions live in
//! particle_pool_operations.rs.

use crate::constants::particles::{DEAD_DISTANCE_SENTINEL, DEAD_LIFE};
use cgmath::{Point3, Vector3};

/// Lifecycle of a single slot.
///
/// Kept in lockstep with `remaining_life`: a slot is `Dead` exactly when
/// `remaining_life <= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleState {
    #[default]
    Dead,
    Alive,
}

/// One particle slot, stored inline in a pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// World space position
    pub position: Point3<f32>,

    /// World space units per second
    pub velocity: Vector3<f32>,

    /// RGBA, 8 bits per channel
    pub color: [u8; 4],

    /// Half-extent of the billboard quad
    pub size: f32,

    /// Seconds left to live
    pub remaining_life: f32,

    /// Squared distance to the camera, sentinel while dead
    pub camera_distance_squared: f32,

    pub state: ParticleState,
}

impl Particle {
    /// A never-used slot
    pub fn dead() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            velocity: Vector3::new(0.0, 0.0, 0.0),
            color: [0; 4],
            size: 0.0,
            remaining_life: DEAD_LIFE,
            camera_distance_squared: DEAD_DISTANCE_SENTINEL,
            state: ParticleState::Dead,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == ParticleState::Alive
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::dead()
    }
}

/// Host-side staging arrays handed to the render stage each frame.
///
/// Sized to pool capacity once; only the first `live_count` entries are
/// valid after a frame.
#[derive(Debug, Clone, Default)]
pub struct ParticleBuffers {
    /// x, y, z, size per live particle
    pub positions: Vec<[f32; 4]>,

    /// r, g, b, a per live particle
    pub colors: Vec<[u8; 4]>,

    pub live_count: usize,
}

/// Allocate staging buffers for a pool of `capacity` slots
pub fn create_particle_buffers(capacity: usize) -> ParticleBuffers {
    ParticleBuffers {
        positions: vec![[0.0; 4]; capacity],
        colors: vec![[0; 4]; capacity],
        live_count: 0,
    }
}

/// Write one live particle at `index`
pub fn write_particle_instance(buffers: &mut ParticleBuffers, index: usize, particle: &Particle) {
    buffers.positions[index] = [
        particle.position.x,
        particle.position.y,
        particle.position.z,
        particle.size,
    ];
    buffers.colors[index] = particle.color;
}

/// Valid position data as bytes, ready for upload
pub fn position_bytes(buffers: &ParticleBuffers) -> &[u8] {
    bytemuck::cast_slice(&buffers.positions[..buffers.live_count])
}

/// Valid color data as bytes, ready for upload
pub fn color_bytes(buffers: &ParticleBuffers) -> &[u8] {
    bytemuck::cast_slice(&buffers.colors[..buffers.live_count])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_particle_defaults() {
        let particle = Particle::default();
        assert_eq!(particle.state, ParticleState::Dead);
        assert!(particle.remaining_life <= 0.0);
        assert_eq!(particle.camera_distance_squared, DEAD_DISTANCE_SENTINEL);
        assert!(!particle.is_alive());
    }

    #[test]
    fn test_byte_views_cover_live_prefix_only() {
        let mut buffers = create_particle_buffers(8);
        let mut particle = Particle::dead();
        particle.position = Point3::new(1.0, 2.0, 3.0);
        particle.size = 0.5;
        particle.color = [10, 20, 30, 40];
        write_particle_instance(&mut buffers, 0, &particle);
        buffers.live_count = 1;

        assert_eq!(position_bytes(&buffers).len(), 16);
        assert_eq!(color_bytes(&buffers), &[10, 20, 30, 40]);
        assert_eq!(buffers.positions[0], [1.0, 2.0, 3.0, 0.5]);
    }
}

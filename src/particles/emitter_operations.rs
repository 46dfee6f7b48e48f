//! Emitter operations - pure functions over EmitterConfig
//!
//! Spawn budgeting and the random initial state of new particles.

use super::emitter_data::{ColorRange, EmitterConfig, SizeRange};
use super::particle_data::{Particle, ParticleState};
use cgmath::Vector3;
use rand::Rng;

/// Number of particles to spawn for a frame of `delta_time` seconds.
///
/// The delta is capped at `max_frame_delta` first, so a stalled frame
/// (debugger pause, window drag) cannot inject a burst of catch-up
/// particles. Partial particles are truncated.
pub fn emitter_spawn_count(config: &EmitterConfig, delta_time: f32) -> usize {
    if !delta_time.is_finite() || delta_time <= 0.0 || config.rate_per_second <= 0.0 {
        return 0;
    }

    let uncapped = config.rate_per_second * delta_time;
    let capped = config.rate_per_second * config.max_frame_delta;
    uncapped.min(capped).floor() as usize
}

/// Uniform sample in the [-1, 1] cube
pub fn random_unit_cube_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f32> {
    Vector3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    )
}

/// Each channel drawn independently from its inclusive range
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, range: &ColorRange) -> [u8; 4] {
    let mut color = [0u8; 4];
    for (channel, value) in color.iter_mut().enumerate() {
        *value = rng.gen_range(range.min[channel]..=range.max[channel]);
    }
    color
}

pub fn random_size<R: Rng + ?Sized>(rng: &mut R, range: &SizeRange) -> f32 {
    rng.gen_range(range.min..=range.max)
}

/// Fresh particle at the emitter origin, alive for the configured lifetime
pub fn emit_particle<R: Rng + ?Sized>(config: &EmitterConfig, rng: &mut R) -> Particle {
    let velocity = config.direction + random_unit_cube_vector(rng) * config.spread;

    Particle {
        position: config.origin,
        velocity,
        color: random_color(rng, &config.color),
        size: random_size(rng, &config.size),
        remaining_life: config.lifetime,
        // Recomputed on the first simulate step
        camera_distance_squared: 0.0,
        state: ParticleState::Alive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::emitter_data::{rain_emitter_config, smoke_emitter_config};
    use cgmath::InnerSpace;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_count_follows_rate() {
        let config = smoke_emitter_config();
        assert_eq!(emitter_spawn_count(&config, 0.001), 10);
        assert_eq!(emitter_spawn_count(&config, 0.0), 0);
        assert_eq!(emitter_spawn_count(&config, -0.5), 0);
        assert_eq!(emitter_spawn_count(&config, f32::NAN), 0);
    }

    #[test]
    fn test_spawn_count_is_capped_for_long_frames() {
        let config = smoke_emitter_config();
        let capped = (config.rate_per_second * config.max_frame_delta).floor() as usize;

        assert_eq!(emitter_spawn_count(&config, 0.5), capped);
        assert_eq!(emitter_spawn_count(&config, 30.0), capped);
        assert!(capped < (config.rate_per_second * 0.5) as usize);
    }

    #[test]
    fn test_zero_rate_spawns_nothing() {
        let mut config = rain_emitter_config();
        config.rate_per_second = 0.0;
        assert_eq!(emitter_spawn_count(&config, 0.016), 0);
    }

    #[test]
    fn test_emitted_particle_respects_ranges() {
        let config = smoke_emitter_config();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let particle = emit_particle(&config, &mut rng);
            assert!(particle.is_alive());
            assert_eq!(particle.position, config.origin);
            assert_eq!(particle.remaining_life, config.lifetime);

            let jitter = particle.velocity - config.direction;
            assert!(jitter.x.abs() <= config.spread);
            assert!(jitter.y.abs() <= config.spread);
            assert!(jitter.z.abs() <= config.spread);
            assert!(jitter.magnitude() <= config.spread * 3.0_f32.sqrt() + 1e-4);

            assert!(particle.color[3] <= config.color.max[3]);
            assert!(particle.size >= config.size.min && particle.size <= config.size.max);
        }
    }

    #[test]
    fn test_degenerate_ranges_are_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        let color = random_color(&mut rng, &ColorRange { min: [9, 8, 7, 6], max: [9, 8, 7, 6] });
        assert_eq!(color, [9, 8, 7, 6]);
        assert_eq!(random_size(&mut rng, &SizeRange { min: 0.25, max: 0.25 }), 0.25);
    }
}

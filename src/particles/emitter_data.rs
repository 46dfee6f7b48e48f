//! Emitter configuration - pure data
//!
//! One `EmitterConfig` per pool. Presets match the car scene; every field
//! can be overridden from a scene file.

use crate::constants::{particles, rain, smoke, splash};
use crate::physics::{aabb_from_center_half_extents, AABB};
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Which effect an emitter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitterKind {
    Smoke,
    Rain,
    Splash,
}

/// Inclusive per-channel color ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub min: [u8; 4],
    pub max: [u8; 4],
}

/// Inclusive billboard size range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f32,
    pub max: f32,
}

/// Collision volume that turns hits into splashes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    pub volume: AABB,

    /// Seconds a spawned splash lives
    pub splash_lifetime: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitterConfig {
    pub kind: EmitterKind,

    /// Slots in the pool, fixed for the life of the program
    pub capacity: usize,

    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,

    /// Magnitude of the random [-1, 1]^3 velocity jitter
    pub spread: f32,

    pub rate_per_second: f32,

    /// Upper bound on the delta used for spawn budgeting
    pub max_frame_delta: f32,

    pub color: ColorRange,
    pub size: SizeRange,
    pub lifetime: f32,

    /// 1.0 for full gravity, 0.0 for floating particles
    pub gravity_factor: f32,

    pub collision: Option<CollisionConfig>,
}

/// Smoke column behind the car
pub fn smoke_emitter_config() -> EmitterConfig {
    EmitterConfig {
        kind: EmitterKind::Smoke,
        capacity: particles::MAX_PARTICLES,
        origin: smoke::ORIGIN.into(),
        direction: smoke::DIRECTION.into(),
        spread: smoke::SPREAD,
        rate_per_second: smoke::RATE_PER_SECOND,
        max_frame_delta: particles::MAX_FRAME_DELTA,
        color: ColorRange {
            min: [0, 0, 0, 0],
            max: [255, 255, 255, smoke::ALPHA_MAX],
        },
        size: SizeRange {
            min: smoke::SIZE_MIN,
            max: smoke::SIZE_MAX,
        },
        lifetime: smoke::LIFETIME,
        gravity_factor: 1.0,
        collision: None,
    }
}

/// Rain falling onto the car roof
pub fn rain_emitter_config() -> EmitterConfig {
    EmitterConfig {
        kind: EmitterKind::Rain,
        capacity: particles::MAX_PARTICLES,
        origin: rain::ORIGIN.into(),
        direction: rain::DIRECTION.into(),
        spread: rain::SPREAD,
        rate_per_second: rain::RATE_PER_SECOND,
        max_frame_delta: particles::MAX_FRAME_DELTA,
        color: ColorRange {
            min: [80, 120, 200, 120],
            max: [120, 180, 255, 200],
        },
        size: SizeRange {
            min: rain::SIZE_MIN,
            max: rain::SIZE_MAX,
        },
        lifetime: rain::LIFETIME,
        gravity_factor: 1.0,
        collision: Some(CollisionConfig {
            volume: aabb_from_center_half_extents(
                rain::ROOF_CENTER.into(),
                rain::ROOF_HALF_EXTENTS.into(),
            ),
            splash_lifetime: rain::SPLASH_LIFETIME,
        }),
    }
}

/// Splashes on the roof; only spawned by rain hits
pub fn splash_emitter_config() -> EmitterConfig {
    EmitterConfig {
        kind: EmitterKind::Splash,
        capacity: particles::MAX_PARTICLES,
        origin: Point3::new(0.0, 0.0, 0.0),
        direction: Vector3::new(0.0, 0.0, 0.0),
        spread: 0.0,
        rate_per_second: 0.0,
        max_frame_delta: particles::MAX_FRAME_DELTA,
        color: ColorRange {
            min: [180, 200, 230, 140],
            max: [230, 240, 255, 220],
        },
        size: SizeRange {
            min: splash::SIZE_MIN,
            max: splash::SIZE_MAX,
        },
        lifetime: rain::SPLASH_LIFETIME,
        gravity_factor: 0.0,
        collision: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{aabb_contains_point, aabb_is_well_formed};

    #[test]
    fn test_rain_roof_volume_spans_the_roof() {
        let collision = rain_emitter_config().collision.expect("rain collides with the roof");
        let volume = collision.volume;

        assert!(aabb_is_well_formed(&volume));
        assert!((volume.min.x - -0.8).abs() < 1e-6);
        assert!((volume.min.y - 0.3).abs() < 1e-6);
        assert!((volume.max.y - 0.6).abs() < 1e-6);
        assert!((volume.max.z - 0.5).abs() < 1e-6);
        assert!(aabb_contains_point(&volume, Point3::new(0.0, 0.45, 0.0)));
        assert!(!aabb_contains_point(&volume, rain::ORIGIN.into()));
    }

    #[test]
    fn test_only_rain_collides() {
        assert!(smoke_emitter_config().collision.is_none());
        assert!(splash_emitter_config().collision.is_none());
    }
}

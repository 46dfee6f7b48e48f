//! Scene configuration
//!
//! Compiled-in presets, optionally overridden from a TOML file. A file only
//! needs the fields it changes:
//!
//! ```toml
//! seed = 42
//!
//! [smoke]
//! rate_per_second = 5000.0
//!
//! [rain.collision]
//! splash_lifetime = 0.4
//! volume = { min = { x = -1.0, y = 0.2, z = -0.6 }, max = { x = 1.0, y = 0.7, z = 0.6 } }
//! ```
//!
//! A `collision` table replaces the preset's collision as a whole.
//! `collision_enabled = false` turns it off; an emitter's kind is fixed by
//! its table name.

use crate::camera::CameraConfig;
use crate::constants::animation;
use crate::error::{ErrorContext, SceneError, SceneResult};
use crate::particles::{
    rain_emitter_config, smoke_emitter_config, splash_emitter_config, CollisionConfig,
    ColorRange, EmitterConfig, SizeRange,
};
use crate::physics::aabb_is_well_formed;
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to build a `SceneState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,

    pub animation_step_degrees: f32,
    pub camera: CameraConfig,
    pub smoke: EmitterConfig,
    pub rain: EmitterConfig,
    pub splash: EmitterConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            animation_step_degrees: animation::STEP_DEGREES,
            camera: CameraConfig::default(),
            smoke: smoke_emitter_config(),
            rain: rain_emitter_config(),
            splash: splash_emitter_config(),
        }
    }
}

/// Partial emitter settings as read from a file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EmitterOverrides {
    capacity: Option<usize>,
    origin: Option<Point3<f32>>,
    direction: Option<Vector3<f32>>,
    spread: Option<f32>,
    rate_per_second: Option<f32>,
    max_frame_delta: Option<f32>,
    color: Option<ColorRange>,
    size: Option<SizeRange>,
    lifetime: Option<f32>,
    gravity_factor: Option<f32>,
    collision: Option<CollisionConfig>,
    collision_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    seed: Option<u64>,
    animation_step_degrees: Option<f32>,
    camera: Option<CameraConfig>,
    smoke: Option<EmitterOverrides>,
    rain: Option<EmitterOverrides>,
    splash: Option<EmitterOverrides>,
}

fn apply_emitter_overrides(
    name: &str,
    base: EmitterConfig,
    overrides: Option<EmitterOverrides>,
) -> SceneResult<EmitterConfig> {
    let Some(o) = overrides else {
        return Ok(base);
    };

    let collision = match o.collision_enabled {
        Some(false) => None,
        Some(true) => match o.collision.or(base.collision) {
            Some(collision) => Some(collision),
            None => {
                return Err(SceneError::invalid_config(
                    format!("{}.collision_enabled", name),
                    true,
                    "needs a [collision] table",
                ))
            }
        },
        None => o.collision.or(base.collision),
    };

    Ok(EmitterConfig {
        kind: base.kind,
        capacity: o.capacity.unwrap_or(base.capacity),
        origin: o.origin.unwrap_or(base.origin),
        direction: o.direction.unwrap_or(base.direction),
        spread: o.spread.unwrap_or(base.spread),
        rate_per_second: o.rate_per_second.unwrap_or(base.rate_per_second),
        max_frame_delta: o.max_frame_delta.unwrap_or(base.max_frame_delta),
        color: o.color.unwrap_or(base.color),
        size: o.size.unwrap_or(base.size),
        lifetime: o.lifetime.unwrap_or(base.lifetime),
        gravity_factor: o.gravity_factor.unwrap_or(base.gravity_factor),
        collision,
    })
}

/// Parse and validate a scene file's contents
pub fn parse_scene_config(source: &str) -> SceneResult<SceneConfig> {
    let file: SceneFile = toml::from_str(source)?;
    let defaults = SceneConfig::default();

    let config = SceneConfig {
        seed: file.seed.or(defaults.seed),
        animation_step_degrees: file
            .animation_step_degrees
            .unwrap_or(defaults.animation_step_degrees),
        camera: file.camera.unwrap_or(defaults.camera),
        smoke: apply_emitter_overrides("smoke", defaults.smoke, file.smoke)?,
        rain: apply_emitter_overrides("rain", defaults.rain, file.rain)?,
        splash: apply_emitter_overrides("splash", defaults.splash, file.splash)?,
    };

    validate_scene_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a scene file
pub fn load_scene_config(path: &Path) -> SceneResult<SceneConfig> {
    log::info!("[load_scene_config] Loading {}", path.display());
    let source = std::fs::read_to_string(path).path_context(path)?;
    parse_scene_config(&source)
}

/// Write the full configuration as TOML
pub fn save_scene_config(config: &SceneConfig, path: &Path) -> SceneResult<()> {
    let source = toml::to_string_pretty(config)?;
    std::fs::write(path, source).path_context(path)
}

pub fn validate_scene_config(config: &SceneConfig) -> SceneResult<()> {
    require_finite("animation_step_degrees", config.animation_step_degrees)?;
    validate_camera_config(&config.camera)?;
    validate_emitter_config("smoke", &config.smoke)?;
    validate_emitter_config("rain", &config.rain)?;
    validate_emitter_config("splash", &config.splash)?;

    log::debug!("[validate_scene_config] Configuration validated successfully");
    Ok(())
}

pub fn validate_camera_config(camera: &CameraConfig) -> SceneResult<()> {
    require_finite("camera.fov_degrees", camera.fov_degrees)?;
    if camera.fov_degrees <= 0.0 || camera.fov_degrees >= 180.0 {
        return Err(SceneError::invalid_config(
            "camera.fov_degrees",
            camera.fov_degrees,
            "must be between 0 and 180",
        ));
    }
    require_positive("camera.aspect_ratio", camera.aspect_ratio)?;
    require_positive("camera.near_plane", camera.near_plane)?;
    if !(camera.far_plane > camera.near_plane) {
        return Err(SceneError::invalid_config(
            "camera.far_plane",
            camera.far_plane,
            "must be greater than near_plane",
        ));
    }
    Ok(())
}

pub fn validate_emitter_config(name: &str, emitter: &EmitterConfig) -> SceneResult<()> {
    let field = |suffix: &str| format!("{}.{}", name, suffix);

    if emitter.capacity == 0 {
        return Err(SceneError::invalid_config(field("capacity"), 0, "must be at least 1"));
    }

    for (label, value) in [
        ("origin.x", emitter.origin.x),
        ("origin.y", emitter.origin.y),
        ("origin.z", emitter.origin.z),
        ("direction.x", emitter.direction.x),
        ("direction.y", emitter.direction.y),
        ("direction.z", emitter.direction.z),
        ("gravity_factor", emitter.gravity_factor),
    ] {
        require_finite(&field(label), value)?;
    }

    require_non_negative(&field("spread"), emitter.spread)?;
    require_non_negative(&field("rate_per_second"), emitter.rate_per_second)?;
    require_positive(&field("max_frame_delta"), emitter.max_frame_delta)?;
    require_positive(&field("lifetime"), emitter.lifetime)?;

    for channel in 0..4 {
        if emitter.color.min[channel] > emitter.color.max[channel] {
            return Err(SceneError::invalid_config(
                field("color"),
                format!("{:?}..{:?}", emitter.color.min, emitter.color.max),
                format!("channel {} min exceeds max", channel),
            ));
        }
    }

    require_non_negative(&field("size.min"), emitter.size.min)?;
    require_finite(&field("size.max"), emitter.size.max)?;
    if emitter.size.min > emitter.size.max {
        return Err(SceneError::invalid_config(
            field("size"),
            format!("{}..{}", emitter.size.min, emitter.size.max),
            "min exceeds max",
        ));
    }

    if let Some(collision) = &emitter.collision {
        if !aabb_is_well_formed(&collision.volume) {
            return Err(SceneError::invalid_config(
                field("collision.volume"),
                format!("{:?}", collision.volume),
                "min exceeds max",
            ));
        }
        require_positive(&field("collision.splash_lifetime"), collision.splash_lifetime)?;
    }

    Ok(())
}

fn require_finite(field: &str, value: f32) -> SceneResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::invalid_config(field, value, "must be finite"))
    }
}

fn require_positive(field: &str, value: f32) -> SceneResult<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid_config(field, value, "must be positive"))
    }
}

fn require_non_negative(field: &str, value: f32) -> SceneResult<()> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid_config(field, value, "must not be negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        validate_scene_config(&SceneConfig::default()).expect("presets must validate");
    }

    #[test]
    fn test_empty_file_yields_presets() {
        let config = parse_scene_config("").expect("empty file is valid");
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_fields() {
        let config = parse_scene_config(
            r#"
            seed = 42

            [rain]
            rate_per_second = 500.0
            "#,
        )
        .expect("valid overrides");

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rain.rate_per_second, 500.0);
        assert_eq!(config.rain.origin, rain_emitter_config().origin);
        assert!(config.rain.collision.is_some());
        assert_eq!(config.smoke, smoke_emitter_config());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse_scene_config("[smoke]\nrate = 1.0\n").expect_err("typo must fail");
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = parse_scene_config("[smoke]\nlifetime = 0.0\n").expect_err("zero lifetime");
        match err {
            SceneError::InvalidConfig { field, .. } => assert_eq!(field, "smoke.lifetime"),
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_scene_config("[splash]\ncapacity = 0\n").expect_err("zero capacity");
        assert!(matches!(err, SceneError::InvalidConfig { .. }));

        let err =
            parse_scene_config("[rain.size]\nmin = 0.5\nmax = 0.1\n").expect_err("inverted size");
        assert!(matches!(err, SceneError::InvalidConfig { .. }));

        let err = parse_scene_config(
            "[smoke.color]\nmin = [10, 0, 0, 0]\nmax = [5, 255, 255, 255]\n",
        )
        .expect_err("inverted color");
        assert!(matches!(err, SceneError::InvalidConfig { .. }));
    }

    #[test]
    fn test_collision_can_be_disabled() {
        let config = parse_scene_config("[rain]\ncollision_enabled = false\n").expect("valid");
        assert_eq!(config.rain.collision, None);
        assert_eq!(config.rain.rate_per_second, rain_emitter_config().rate_per_second);
    }

    #[test]
    fn test_enabling_collision_without_volume_is_rejected() {
        let err = parse_scene_config("[smoke]\ncollision_enabled = true\n").expect_err("no volume");
        match err {
            SceneError::InvalidConfig { field, .. } => assert_eq!(field, "smoke.collision_enabled"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_kind_cannot_be_overridden() {
        let err = parse_scene_config("[smoke]\nkind = \"rain\"\n").expect_err("kind is fixed");
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_inverted_collision_volume_is_rejected() {
        let mut config = SceneConfig::default();
        if let Some(collision) = config.rain.collision.as_mut() {
            std::mem::swap(&mut collision.volume.min, &mut collision.volume.max);
        }
        assert!(validate_scene_config(&config).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let path = temp_dir.path().join("scene.toml");

        let mut config = SceneConfig::default();
        config.seed = Some(7);
        config.smoke.spread = 2.5;
        config.camera.fov_degrees = 60.0;

        save_scene_config(&config, &path).expect("save");
        let loaded = load_scene_config(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory for test");
        let path = temp_dir.path().join("missing.toml");
        match load_scene_config(&path) {
            Err(SceneError::Io { path: reported, .. }) => {
                assert!(reported.ends_with("missing.toml"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

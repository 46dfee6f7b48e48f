// Particled Car - Data-Oriented Programming (DOP) Architecture
//
// Host-side simulation for a stylized car scene: smoke, rain and splash
// particle pools, camera, and wheel/sun animation. Rendering is left to the
// caller, which uploads the staging buffers produced each frame.
//
// - *_data modules hold plain data
// - *_operations modules hold pure functions over that data

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;
pub mod scene_state;

// Essential systems
pub mod camera;
pub mod particles;
pub mod physics;
pub mod scene;

pub use camera::{CameraConfig, CameraData, ParticleCameraUniform};
pub use config::{load_scene_config, parse_scene_config, save_scene_config, SceneConfig};
pub use error::{ErrorContext, SceneError, SceneResult};
pub use particles::{
    EmitterConfig, EmitterKind, FrameParticleCounts, Particle, ParticleBuffers, ParticlePool,
    ParticleState, ParticleSystemData,
};
pub use physics::AABB;
pub use scene::{FrameClock, SceneAnimation, SceneTransforms};
pub use scene_state::{create_scene_state, step_scene, FrameReport, SceneState};

//! Scene state - everything the render loop needs each frame
//!
//! The render collaborator owns the window and GPU resources. Each frame it
//! calls `step_scene` with the elapsed time and uploads what comes back.

use crate::camera::{
    apply_transform_batch, build_particle_uniform, build_view_matrix, camera_world_position,
    init_camera_from_config, log_camera_context, CameraData, CameraTransformBatch,
    ParticleCameraUniform,
};
use crate::config::SceneConfig;
use crate::particles::{
    create_particle_system, create_particle_system_with_rng, update_particle_system,
    FrameParticleCounts, ParticleSystemData,
};
use crate::scene::{advance_animation, build_scene_transforms, SceneAnimation, SceneTransforms};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SceneState {
    pub particles: ParticleSystemData,
    pub camera: CameraData,
    pub animation: SceneAnimation,

    /// Input collected since the last frame, consumed by the next step
    pub camera_input: CameraTransformBatch,

    pub frame_index: u64,
}

/// Per-frame output for the render stage
#[derive(Debug, Clone, Copy)]
pub struct FrameReport {
    pub frame_index: u64,
    pub particle_counts: FrameParticleCounts,
    pub camera_uniform: ParticleCameraUniform,
    pub transforms: SceneTransforms,
}

/// Build the scene from an already validated config
pub fn create_scene_state(config: &SceneConfig) -> SceneState {
    let smoke = config.smoke.clone();
    let rain = config.rain.clone();
    let splash = config.splash.clone();
    let particles = match config.seed {
        Some(seed) => {
            create_particle_system_with_rng(smoke, rain, splash, StdRng::seed_from_u64(seed))
        }
        None => create_particle_system(smoke, rain, splash),
    };

    let animation = SceneAnimation {
        step_degrees: config.animation_step_degrees,
        ..SceneAnimation::default()
    };

    log::info!(
        "[create_scene_state] Scene ready (seed: {:?}, step: {}°)",
        config.seed,
        config.animation_step_degrees
    );

    let camera = init_camera_from_config(&config.camera);
    log_camera_context(&camera);

    SceneState {
        particles,
        camera,
        animation,
        camera_input: CameraTransformBatch::default(),
        frame_index: 0,
    }
}

/// Run one frame: camera input, particle spawn/simulate/sort, animation
pub fn step_scene(state: &mut SceneState, delta_time: f32) -> FrameReport {
    state.camera = apply_transform_batch(&state.camera, &state.camera_input, delta_time);
    state.camera_input = CameraTransformBatch::default();

    let view = build_view_matrix(&state.camera);
    let camera_position = camera_world_position(&view).unwrap_or(state.camera.position);

    let particle_counts = update_particle_system(&mut state.particles, delta_time, camera_position);

    // Transforms use this frame's angle; the step applies to the next frame
    let transforms = build_scene_transforms(&state.animation);
    state.animation = advance_animation(&state.animation);

    let report = FrameReport {
        frame_index: state.frame_index,
        particle_counts,
        camera_uniform: build_particle_uniform(&state.camera),
        transforms,
    };
    state.frame_index += 1;
    report
}

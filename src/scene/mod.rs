//! Scene Module - car animation and frame timing

pub mod animation_data;
pub mod animation_operations;
pub mod frame_clock;

pub use animation_data::{SceneAnimation, SceneTransforms};
pub use animation_operations::{
    advance_animation, build_scene_transforms, sun_light_position, sun_model_matrix,
    wheel_model_matrix,
};
pub use frame_clock::FrameClock;

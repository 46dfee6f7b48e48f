//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use crate::constants::camera;
use cgmath::Point3;
use serde::{Deserialize, Serialize};

/// Camera data structure - pure data, no methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    /// Camera position in world space
    pub position: Point3<f32>,

    /// Horizontal angle (radians, around Y axis). PI looks down -Z.
    pub yaw_radians: f32,

    /// Vertical angle (radians)
    pub pitch_radians: f32,

    /// Field of view (vertical, radians)
    pub fov_radians: f32,

    /// Aspect ratio (width / height)
    pub aspect_ratio: f32,

    pub near_plane: f32,
    pub far_plane: f32,

    /// World units per second
    pub movement_speed: f32,

    /// Radians per pixel of mouse travel
    pub rotation_sensitivity: f32,
}

/// Batch transform data for camera updates
///
/// Filled by the input collaborator, applied once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraTransformBatch {
    /// Forward/backward movement (-1..1, scaled by speed and delta time)
    pub forward_delta: f32,

    /// Left/right movement (-1..1, scaled by speed and delta time)
    pub right_delta: f32,

    /// Mouse travel in pixels
    pub yaw_pixels: f32,
    pub pitch_pixels: f32,
}

/// Uniform block for the billboard particle shaders.
/// Must match shader layout exactly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleCameraUniform {
    /// View-projection matrix (4x4, column-major)
    pub view_projection_matrix: [[f32; 4]; 4],

    /// World-space camera right (vec3 + padding)
    pub camera_right: [f32; 4],

    /// World-space camera up (vec3 + padding)
    pub camera_up: [f32; 4],
}

static_assertions::const_assert_eq!(std::mem::size_of::<ParticleCameraUniform>(), 96);

/// Camera configuration for initialization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub initial_position: Point3<f32>,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub fov_degrees: f32,
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub movement_speed: f32,
    pub rotation_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_position: camera::POSITION.into(),
            initial_yaw: camera::HORIZONTAL_ANGLE,
            initial_pitch: camera::VERTICAL_ANGLE,
            fov_degrees: camera::FOV_DEGREES,
            aspect_ratio: camera::ASPECT_RATIO,
            near_plane: camera::NEAR_PLANE,
            far_plane: camera::FAR_PLANE,
            movement_speed: camera::MOVEMENT_SPEED,
            rotation_sensitivity: camera::ROTATION_SENSITIVITY,
        }
    }
}

//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.

use super::camera_data::{CameraConfig, CameraData, CameraTransformBatch, ParticleCameraUniform};
use cgmath::{InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize camera from config
pub fn init_camera_from_config(config: &CameraConfig) -> CameraData {
    CameraData {
        position: config.initial_position,
        yaw_radians: config.initial_yaw,
        pitch_radians: config.initial_pitch,
        fov_radians: config.fov_degrees.to_radians(),
        aspect_ratio: config.aspect_ratio,
        near_plane: config.near_plane,
        far_plane: config.far_plane,
        movement_speed: config.movement_speed,
        rotation_sensitivity: config.rotation_sensitivity,
    }
}

impl Default for CameraData {
    fn default() -> Self {
        init_camera_from_config(&CameraConfig::default())
    }
}

// ============================================================================
// VIEW/PROJECTION MATRICES
// ============================================================================

/// Build view matrix from camera data
pub fn build_view_matrix(camera: &CameraData) -> Matrix4<f32> {
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    let up = calculate_up_vector(camera.yaw_radians, camera.pitch_radians);

    Matrix4::look_at_rh(camera.position, camera.position + forward, up)
}

/// Build projection matrix from camera data
pub fn build_projection_matrix(camera: &CameraData) -> Matrix4<f32> {
    cgmath::perspective(
        Rad(camera.fov_radians),
        camera.aspect_ratio,
        camera.near_plane,
        camera.far_plane,
    )
}

/// Eye position recovered from a view matrix (translation of its inverse).
/// None for a singular matrix.
pub fn camera_world_position(view: &Matrix4<f32>) -> Option<Point3<f32>> {
    view.invert()
        .map(|inverse| Point3::new(inverse.w.x, inverse.w.y, inverse.w.z))
}

/// World-space right and up axes of the view, used to orient billboards
pub fn billboard_axes(view: &Matrix4<f32>) -> (Vector3<f32>, Vector3<f32>) {
    let right = Vector3::new(view.x.x, view.y.x, view.z.x);
    let up = Vector3::new(view.x.y, view.y.y, view.z.y);
    (right, up)
}

/// Build the particle shader uniform
pub fn build_particle_uniform(camera: &CameraData) -> ParticleCameraUniform {
    let view = build_view_matrix(camera);
    let view_projection = build_projection_matrix(camera) * view;
    let (right, up) = billboard_axes(&view);

    ParticleCameraUniform {
        view_projection_matrix: view_projection.into(),
        camera_right: [right.x, right.y, right.z, 0.0],
        camera_up: [up.x, up.y, up.z, 0.0],
    }
}

// ============================================================================
// UPDATES
// ============================================================================

/// Update aspect ratio (e.g., on window resize)
pub fn update_aspect_ratio(camera: &CameraData, width: u32, height: u32) -> CameraData {
    let mut new_camera = *camera;
    if height > 0 {
        new_camera.aspect_ratio = width as f32 / height as f32;
    }
    new_camera
}

// ============================================================================
// MOVEMENT
// ============================================================================

/// Move camera forward by distance (in camera's forward direction)
pub fn move_forward(camera: &CameraData, distance: f32) -> CameraData {
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    let mut new_camera = *camera;
    new_camera.position += forward * distance;
    new_camera
}

/// Move camera right by distance (in camera's right direction)
pub fn move_right(camera: &CameraData, distance: f32) -> CameraData {
    let right = calculate_right_vector(camera.yaw_radians);
    let mut new_camera = *camera;
    new_camera.position += right * distance;
    new_camera
}

/// Rotate camera by yaw/pitch deltas (radians)
pub fn rotate(camera: &CameraData, yaw_delta: f32, pitch_delta: f32) -> CameraData {
    let mut new_camera = *camera;
    new_camera.yaw_radians += yaw_delta;
    new_camera.pitch_radians += pitch_delta;

    // Clamp pitch to avoid gimbal lock
    const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
    new_camera.pitch_radians = new_camera.pitch_radians.clamp(-PITCH_LIMIT, PITCH_LIMIT);

    new_camera
}

/// Apply one frame of input to the camera
pub fn apply_transform_batch(
    camera: &CameraData,
    batch: &CameraTransformBatch,
    delta_time: f32,
) -> CameraData {
    let mut result = rotate(
        camera,
        batch.yaw_pixels * camera.rotation_sensitivity,
        batch.pitch_pixels * camera.rotation_sensitivity,
    );

    let step = camera.movement_speed * delta_time;
    result = move_forward(&result, batch.forward_delta * step);
    result = move_right(&result, batch.right_delta * step);
    result
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Spherical to cartesian: yaw 0 looks down +Z, yaw PI down -Z
pub fn calculate_forward_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    Vector3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        pitch.cos() * yaw.cos(),
    )
    .normalize()
}

pub fn calculate_right_vector(yaw: f32) -> Vector3<f32> {
    let angle = yaw - std::f32::consts::FRAC_PI_2;
    Vector3::new(angle.sin(), 0.0, angle.cos()).normalize()
}

pub fn calculate_up_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    let forward = calculate_forward_vector(yaw, pitch);
    let right = calculate_right_vector(yaw);
    right.cross(forward).normalize()
}

/// Log camera context for debugging
pub fn log_camera_context(camera: &CameraData) {
    log::debug!(
        "[Camera] Position: ({:.2}, {:.2}, {:.2}) | Yaw: {:.1}° | Pitch: {:.1}° | FOV: {:.1}°",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.yaw_radians.to_degrees(),
        camera.pitch_radians.to_degrees(),
        camera.fov_radians.to_degrees()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < EPSILON
    }

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = CameraData::default();
        let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
        assert!(close(forward, Vector3::new(0.0, 0.0, -1.0)));
        assert!(close(calculate_right_vector(camera.yaw_radians), Vector3::new(1.0, 0.0, 0.0)));
        let up = calculate_up_vector(camera.yaw_radians, camera.pitch_radians);
        assert!(close(up, Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_world_position_round_trips_through_view() {
        let camera = init_camera_from_config(&CameraConfig {
            initial_position: Point3::new(3.0, -2.0, 7.5),
            initial_yaw: 0.7,
            initial_pitch: -0.3,
            ..CameraConfig::default()
        });
        let view = build_view_matrix(&camera);
        let eye = camera_world_position(&view).expect("view matrix is invertible");
        assert!((eye - camera.position).magnitude() < EPSILON);
    }

    #[test]
    fn test_billboard_axes_match_camera_basis() {
        let camera = CameraData::default();
        let (right, up) = billboard_axes(&build_view_matrix(&camera));
        assert!(close(right, calculate_right_vector(camera.yaw_radians)));
        assert!(close(up, calculate_up_vector(camera.yaw_radians, camera.pitch_radians)));
    }

    #[test]
    fn test_particle_uniform_bytes() {
        let uniform = build_particle_uniform(&CameraData::default());
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
        assert_eq!(uniform.camera_right[3], 0.0);
    }

    #[test]
    fn test_transform_batch_moves_and_clamps() {
        let camera = CameraData::default();
        let batch = CameraTransformBatch {
            forward_delta: 1.0,
            pitch_pixels: 1.0e6,
            ..Default::default()
        };
        let moved = apply_transform_batch(&camera, &batch, 0.5);
        assert!(moved.pitch_radians < std::f32::consts::FRAC_PI_2);
        assert!((moved.position - camera.position).magnitude() > 1.0);
    }

    #[test]
    fn test_zero_height_resize_is_ignored() {
        let camera = CameraData::default();
        assert_eq!(update_aspect_ratio(&camera, 800, 0).aspect_ratio, camera.aspect_ratio);
        assert_eq!(update_aspect_ratio(&camera, 800, 400).aspect_ratio, 2.0);
    }
}

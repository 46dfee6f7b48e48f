/// Camera Module - Data-Oriented Programming (DOP) style
///
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data
///
/// The particle pools only need the eye position; the render stage also
/// takes the billboard uniform built here.

pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::{CameraConfig, CameraData, CameraTransformBatch, ParticleCameraUniform};

// Re-export all operations
pub use camera_operations::{
    // Initialization
    init_camera_from_config,

    // View/projection
    billboard_axes,
    build_particle_uniform,
    build_projection_matrix,
    build_view_matrix,
    camera_world_position,

    // Updates
    update_aspect_ratio,

    // Movement
    apply_transform_batch,
    move_forward,
    move_right,
    rotate,

    // Utilities
    calculate_forward_vector,
    calculate_right_vector,
    calculate_up_vector,

    // Diagnostics
    log_camera_context,
};

//! Scene animation data - wheel spin and sun orbit

use crate::constants::animation;
use cgmath::{Matrix4, Point3, Vector3};

/// Shared rotation angle for the wheels and the sun
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneAnimation {
    /// Current angle in degrees, unbounded
    pub angle_degrees: f32,

    /// Added once per rendered frame
    pub step_degrees: f32,

    pub back_wheel_pivot: Vector3<f32>,
    pub front_wheel_pivot: Vector3<f32>,

    /// Sun position before the orbit rotation
    pub light_position: Vector3<f32>,
}

impl Default for SceneAnimation {
    fn default() -> Self {
        Self {
            angle_degrees: 0.0,
            step_degrees: animation::STEP_DEGREES,
            back_wheel_pivot: animation::BACK_WHEEL_PIVOT.into(),
            front_wheel_pivot: animation::FRONT_WHEEL_PIVOT.into(),
            light_position: animation::LIGHT_POSITION.into(),
        }
    }
}

/// Per-frame model matrices handed to the render stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransforms {
    pub back_wheel: Matrix4<f32>,
    pub front_wheel: Matrix4<f32>,
    pub sun: Matrix4<f32>,
    pub light_position: Point3<f32>,
}

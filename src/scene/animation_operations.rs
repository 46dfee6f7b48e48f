//! Scene animation operations - pure functions

use super::animation_data::{SceneAnimation, SceneTransforms};
use cgmath::{Deg, Matrix4, Point3, Vector3};

/// Step the shared angle by one frame
pub fn advance_animation(animation: &SceneAnimation) -> SceneAnimation {
    SceneAnimation {
        angle_degrees: animation.angle_degrees + animation.step_degrees,
        ..*animation
    }
}

/// Spin a wheel about the Z axis through its hub
pub fn wheel_model_matrix(pivot: Vector3<f32>, angle_degrees: f32) -> Matrix4<f32> {
    Matrix4::from_translation(pivot)
        * Matrix4::from_angle_z(Deg(angle_degrees))
        * Matrix4::from_translation(-pivot)
}

/// Orbit the sun about the world Y axis
pub fn sun_model_matrix(angle_degrees: f32, light_position: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_angle_y(Deg(angle_degrees)) * Matrix4::from_translation(light_position)
}

/// Light position fed to the car shader, read off the sun matrix diagonal
pub fn sun_light_position(sun: &Matrix4<f32>) -> Point3<f32> {
    Point3::new(sun.x.x, sun.y.y, sun.z.z)
}

pub fn build_scene_transforms(animation: &SceneAnimation) -> SceneTransforms {
    let sun = sun_model_matrix(animation.angle_degrees, animation.light_position);

    SceneTransforms {
        back_wheel: wheel_model_matrix(animation.back_wheel_pivot, animation.angle_degrees),
        front_wheel: wheel_model_matrix(animation.front_wheel_pivot, animation.angle_degrees),
        sun,
        light_position: sun_light_position(&sun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, SquareMatrix, Vector4};

    fn transform_point(matrix: &Matrix4<f32>, point: Vector3<f32>) -> Vector3<f32> {
        let v = *matrix * Vector4::new(point.x, point.y, point.z, 1.0);
        Vector3::new(v.x, v.y, v.z)
    }

    #[test]
    fn test_advance_steps_backwards() {
        let animation = SceneAnimation::default();
        let next = advance_animation(&advance_animation(&animation));
        assert_eq!(next.angle_degrees, -2.0);
        assert_eq!(next.back_wheel_pivot, animation.back_wheel_pivot);
    }

    #[test]
    fn test_wheel_hub_stays_fixed() {
        let animation = SceneAnimation::default();
        for angle in [0.0, -45.0, -90.0, -359.0] {
            let matrix = wheel_model_matrix(animation.back_wheel_pivot, angle);
            let hub = transform_point(&matrix, animation.back_wheel_pivot);
            assert!((hub - animation.back_wheel_pivot).magnitude() < 1e-5);
        }
    }

    #[test]
    fn test_wheel_rim_moves() {
        let pivot = Vector3::new(0.6, -0.4, 0.0);
        let matrix = wheel_model_matrix(pivot, 90.0);
        let rim = transform_point(&matrix, pivot + Vector3::new(0.2, 0.0, 0.0));
        assert!((rim - (pivot + Vector3::new(0.0, 0.2, 0.0))).magnitude() < 1e-5);
    }

    #[test]
    fn test_zero_angle_is_identity_rotation() {
        let animation = SceneAnimation::default();
        let transforms = build_scene_transforms(&animation);
        assert_eq!(transforms.back_wheel, Matrix4::identity());
        assert_eq!(transforms.light_position, Point3::new(1.0, 1.0, 1.0));
    }
}

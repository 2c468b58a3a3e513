use glam::{Mat4, Vec3, Vec4};
use menger_video::transforms::{
    model_matrix, projection_matrix, view_matrix, DEPTH_RANGE_GL_TO_WGPU, FAR_PLANE, FOV_Y,
    NEAR_PLANE,
};
use std::f32::consts::TAU;

fn assert_mat4_near(a: Mat4, b: Mat4, tol: f32) {
    let a = a.to_cols_array();
    let b = b.to_cols_array();
    for i in 0..16 {
        assert!(
            (a[i] - b[i]).abs() < tol,
            "matrices differ at element {}: {} vs {}",
            i,
            a[i],
            b[i]
        );
    }
}

#[cfg(test)]
mod rotation_tests {
    use super::*;

    #[test]
    fn test_zero_angle_is_identity() {
        let m = model_matrix(Vec3::new(0.0, 1.0, 1.0), 0.0);
        assert_mat4_near(m, Mat4::IDENTITY, 1e-6);
    }

    #[test]
    fn test_full_turn_equals_zero_for_various_axes() {
        let axes = [
            Vec3::Y,
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, 0.5, -0.25),
        ];
        for axis in axes {
            let m = model_matrix(axis, TAU);
            assert_mat4_near(m, Mat4::IDENTITY, 1e-5);
        }
    }

    #[test]
    fn test_rotation_preserves_axis() {
        let axis = Vec3::new(0.0, 1.0, 1.0).normalize();
        let m = model_matrix(axis, 1.234);
        let rotated = m.transform_vector3(axis);
        assert!(rotated.distance(axis) < 1e-6, "rotation must fix its axis");
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let m = model_matrix(Vec3::Y, std::f32::consts::FRAC_PI_2);
        let rotated = m.transform_vector3(Vec3::X);
        assert!(rotated.distance(Vec3::NEG_Z) < 1e-6);
    }

    #[test]
    fn test_axis_is_normalized_before_use() {
        let a = model_matrix(Vec3::new(0.0, 2.0, 2.0), 0.8);
        let b = model_matrix(Vec3::new(0.0, 1.0, 1.0), 0.8);
        assert_mat4_near(a, b, 1e-6);
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;

    #[test]
    fn test_view_is_pure_translation() {
        let v = view_matrix(10.0);
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0));
        assert_mat4_near(v, expected, 1e-6);
    }

    #[test]
    fn test_view_moves_origin_to_camera_distance() {
        let v = view_matrix(8.0);
        let eye_space = v.transform_point3(Vec3::ZERO);
        assert!(eye_space.distance(Vec3::new(0.0, 0.0, -8.0)) < 1e-6);
    }
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    /// Reference formula from the classic GL perspective matrix with
    /// fovy = 45 degrees, near = 1, far = 1000, aspect carried as h/w in the
    /// x scale.
    fn reference_projection(width: f32, height: f32) -> [[f32; 4]; 4] {
        let t = (FOV_Y / 2.0).tan();
        let mut m = [[0.0f32; 4]; 4];
        m[0][0] = height / width / t;
        m[1][1] = 1.0 / t;
        m[2][2] = -(FAR_PLANE + NEAR_PLANE) / (FAR_PLANE - NEAR_PLANE);
        m[2][3] = -1.0;
        m[3][2] = -2.0 * FAR_PLANE * NEAR_PLANE / (FAR_PLANE - NEAR_PLANE);
        m
    }

    #[test]
    fn test_projection_matches_reference_elementwise() {
        let proj = projection_matrix(1920, 1080).to_cols_array_2d();
        let expected = reference_projection(1920.0, 1080.0);
        for col in 0..4 {
            for row in 0..4 {
                assert!(
                    (proj[col][row] - expected[col][row]).abs() < 1e-5,
                    "proj[{}][{}]: {} vs {}",
                    col,
                    row,
                    proj[col][row],
                    expected[col][row]
                );
            }
        }
    }

    #[test]
    fn test_projection_constants_near_one_far_thousand() {
        let proj = projection_matrix(1920, 1080).to_cols_array_2d();
        assert!((proj[2][2] - (-1001.0 / 999.0)).abs() < 1e-5);
        assert!((proj[3][2] - (-2000.0 / 999.0)).abs() < 1e-4);
        assert!((proj[2][3] - (-1.0)).abs() < 1e-6);
        assert_eq!(proj[3][3], 0.0);
    }

    #[test]
    fn test_near_and_far_planes_map_to_gl_clip_extremes() {
        let proj = projection_matrix(800, 600);
        let near = proj * Vec4::new(0.0, 0.0, -NEAR_PLANE, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, -FAR_PLANE, 1.0);
        assert!((near.z / near.w - (-1.0)).abs() < 1e-4, "near plane -> z = -1");
        assert!((far.z / far.w - 1.0).abs() < 1e-4, "far plane -> z = +1");
    }

    #[test]
    fn test_depth_range_remap_puts_scene_in_unit_interval() {
        // Showcase scene: sponge of size 4 at camera distance 10.
        let proj = DEPTH_RANGE_GL_TO_WGPU * projection_matrix(1920, 1080);
        let view = view_matrix(10.0);
        for z in [-2.0f32, 0.0, 2.0] {
            let clip = proj * view * Vec4::new(0.0, 0.0, z, 1.0);
            let ndc_z = clip.z / clip.w;
            assert!(
                (0.0..=1.0).contains(&ndc_z),
                "scene depth {} must stay in wgpu clip range, got {}",
                z,
                ndc_z
            );
        }
    }
}

#[cfg(test)]
mod config_axis_tests {
    use menger_video::RenderConfig;

    #[test]
    fn test_degenerate_rotation_axis_rejected() {
        let config = RenderConfig {
            rotation_axis: [0.0, 0.0, 0.0],
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err(), "zero axis must be rejected");
    }
}

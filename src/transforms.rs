use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_4;

/// Vertical field of view of the turntable camera, radians.
pub const FOV_Y: f32 = FRAC_PI_4;
pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 1000.0;

/// Rotation of the sponge about `axis` by `angle` radians (Rodrigues
/// axis-angle). No translation or scale. `axis` must be non-degenerate; it is
/// normalized here so callers can pass the raw configured vector.
pub fn model_matrix(axis: Vec3, angle: f32) -> Mat4 {
    Mat4::from_axis_angle(axis.normalize(), angle)
}

/// Fixed camera looking at the origin down -Z: pure translation by the
/// camera distance, identity orientation. Only the sponge rotates.
pub fn view_matrix(camera_distance: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -camera_distance))
}

/// Perspective projection in OpenGL clip-space convention (z in [-1, 1]):
/// fovy 45 degrees, near 1, far 1000. The x scale carries the height/width
/// aspect term, matching the reference mapping exactly.
pub fn projection_matrix(width: u32, height: u32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y, width as f32 / height as f32, NEAR_PLANE, FAR_PLANE)
}

/// Remaps GL clip-space depth [-1, 1] to wgpu's [0, 1]. Applied to the
/// projection by the renderer only; the matrices above stay in the reference
/// convention.
pub const DEPTH_RANGE_GL_TO_WGPU: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.5, 0.0, //
    0.0, 0.0, 0.5, 1.0, //
]);

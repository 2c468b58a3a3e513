use glam::Mat4;

/// Per-frame transform uniform: model, view, projection.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
}

impl SceneUniform {
    pub fn new(model: Mat4, view: Mat4, proj: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
        }
    }
}

/// Lighting uniform shared by both profiles. Positions are vec4-padded for
/// WGSL array stride; `count` selects how many entries are live.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub positions: [[f32; 4]; crate::lighting::MAX_LIGHTS],
    pub object_color: [f32; 3],
    pub transparency: f32,
    pub ambient_color: [f32; 3],
    pub intensity: f32,
    pub count: u32,
    pub _pad: [u32; 3],
}

/// Vertex layout: position only, matching the reference's `in_vert`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

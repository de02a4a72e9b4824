use glam::{Mat4, Vec3};

/// Mesh vertex: position + face normal
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_matrix(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

/// Per-mesh uniform: model transform + base color
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ModelUniform {
    pub fn new(scale: f32, color: [f32; 3]) -> Self {
        Self {
            model: Mat4::from_scale(Vec3::splat(scale)).to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// Single directional light for GPU (vec3s padded to vec4)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightData {
    pub direction: [f32; 3],
    pub _pad1: f32,
    pub color: [f32; 3],
    pub _pad2: f32,
}

impl LightData {
    pub fn new(direction: Vec3, color: [f32; 3]) -> Self {
        Self {
            direction: direction.to_array(),
            _pad1: 0.0,
            color,
            _pad2: 0.0,
        }
    }
}

/// Fixed six-light rig uniform
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [LightData; 6],
}

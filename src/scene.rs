use glam::Vec3;
use std::collections::BTreeSet;

use crate::types::{LightData, LightsUniform, Vertex};

pub const CUBE_SIZE: f32 = 0.8;
pub const CUBE_SEGMENTS: u32 = 3;
/// Wireframe mesh is scaled slightly past the solid to prevent z-fighting
pub const WIREFRAME_SCALE: f32 = 1.001;

pub const CUBE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const WIREFRAME_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Cube geometry shared by the solid and wireframe draws
pub struct CubeMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub wire_indices: Vec<u32>,
}

/// Builds a segmented box centered on the origin with per-face normals
/// (flat shading). Each face is an independent (segments+1)^2 vertex grid.
pub fn build_cube(size: f32, segments: u32) -> CubeMesh {
    let half = size * 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // (normal, tangent) per face; bitangent is derived
    let faces = [
        (Vec3::X, Vec3::Y),
        (Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::Z),
        (Vec3::NEG_Y, Vec3::Z),
        (Vec3::Z, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y),
    ];

    for (normal, tangent) in faces {
        let bitangent = normal.cross(tangent);
        let base = vertices.len() as u32;
        let steps = segments + 1;

        for i in 0..steps {
            for j in 0..steps {
                let u = (i as f32 / segments as f32) * 2.0 - 1.0;
                let v = (j as f32 / segments as f32) * 2.0 - 1.0;
                let pos = normal * half + tangent * (u * half) + bitangent * (v * half);
                vertices.push(Vertex::new(pos.to_array(), normal.to_array()));
            }
        }

        for i in 0..segments {
            for j in 0..segments {
                let a = base + i * steps + j;
                let b = a + 1;
                let c = a + steps;
                let d = c + 1;
                indices.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }
    }

    let wire_indices = wireframe_edges(&indices);

    CubeMesh {
        vertices,
        indices,
        wire_indices,
    }
}

/// Unique undirected edges of a triangle mesh, as a line-list index buffer
pub fn wireframe_edges(triangle_indices: &[u32]) -> Vec<u32> {
    let mut seen = BTreeSet::new();
    let mut edges = Vec::new();

    for tri in triangle_indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                edges.extend_from_slice(&[a, b]);
            }
        }
    }

    edges
}

/// Six directional lights, one per axis, with the rig's fixed colors
pub fn light_rig() -> LightsUniform {
    LightsUniform {
        lights: [
            LightData::new(Vec3::Y, hex_color(0x32a852)),
            LightData::new(Vec3::NEG_Y, hex_color(0xf54266)),
            LightData::new(Vec3::Z, hex_color(0x1180a8)),
            LightData::new(Vec3::NEG_Z, hex_color(0xfacc41)),
            LightData::new(Vec3::X, hex_color(0x6f2aa1)),
            LightData::new(Vec3::NEG_X, hex_color(0xe03d3d)),
        ],
    }
}

/// Converts 0xRRGGBB to linear-ish [r, g, b] in 0..1
pub fn hex_color(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

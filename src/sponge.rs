use glam::Vec3;

use crate::error::{RenderError, RenderResult};

/// A leaf cube of the sponge: axis-aligned, described by its center and edge
/// length in the sponge's local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cube {
    pub center: Vec3,
    pub size: f32,
}

/// Flat geometry buffers for one sponge.
///
/// Faces are quads of indices into `vertices`. Adjacent cubes do not share
/// corners; each leaf cube owns a contiguous block of 8 vertices.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 4]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Number of leaf cubes at recursion level `level` (20 kept sub-cubes per
/// subdivision step).
pub fn leaf_count(level: u32) -> usize {
    20usize.pow(level)
}

/// Recursively subdivide a cube into the Menger sponge's leaf cubes.
///
/// At each step the cube splits into a 3x3x3 grid; a sub-cube at offset
/// (x, y, z) in {-1, 0, 1}^3 survives iff |x| + |y| + |z| > 1, which removes
/// the center cube and the six face centers. Level 0 is a single leaf at the
/// local origin.
pub fn leaf_cubes(size: f32, level: u32) -> Vec<Cube> {
    if level == 0 {
        return vec![Cube {
            center: Vec3::ZERO,
            size,
        }];
    }

    let child_size = size / 3.0;
    let mut cubes = Vec::with_capacity(leaf_count(level));
    for x in -1i32..=1 {
        for y in -1i32..=1 {
            for z in -1i32..=1 {
                if x.abs() + y.abs() + z.abs() <= 1 {
                    continue;
                }
                let offset = Vec3::new(x as f32, y as f32, z as f32) * child_size;
                for child in leaf_cubes(child_size, level - 1) {
                    cubes.push(Cube {
                        center: offset + child.center,
                        size: child.size,
                    });
                }
            }
        }
    }
    cubes
}

// Corner order and face pattern match the reference geometry: -Z quad first,
// then +Z, then the four side quads.
fn cube_vertices(cube: &Cube) -> [[f32; 3]; 8] {
    let Vec3 { x, y, z } = cube.center;
    let h = cube.size / 2.0;
    [
        [x - h, y - h, z - h],
        [x + h, y - h, z - h],
        [x + h, y + h, z - h],
        [x - h, y + h, z - h],
        [x - h, y - h, z + h],
        [x + h, y - h, z + h],
        [x + h, y + h, z + h],
        [x - h, y + h, z + h],
    ]
}

const CUBE_FACES: [[u32; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
];

/// Generate the full sponge mesh: 8 vertices and 6 quad faces per leaf cube,
/// face indices offset so they stay globally unique within the mesh.
pub fn generate(size: f32, level: u32) -> RenderResult<Mesh> {
    if !size.is_finite() || size <= 0.0 {
        return Err(RenderError::config(format!(
            "sponge size must be positive and finite, got {size}"
        )));
    }

    let cubes = leaf_cubes(size, level);
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(cubes.len() * 8),
        faces: Vec::with_capacity(cubes.len() * 6),
    };

    let mut offset: u32 = 0;
    for cube in &cubes {
        mesh.vertices.extend_from_slice(&cube_vertices(cube));
        for face in &CUBE_FACES {
            mesh.faces
                .push([face[0] + offset, face[1] + offset, face[2] + offset, face[3] + offset]);
        }
        offset += 8;
    }

    Ok(mesh)
}

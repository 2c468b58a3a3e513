use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::LightUniform;

pub const MAX_LIGHTS: usize = 6;

/// Lighting profile for a run. Both variants lower onto the same shader
/// uniform, so there is exactly one pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Lighting {
    /// Up to six point lights sharing one intensity scalar; the intensity
    /// also scales the ambient term.
    Symmetric {
        positions: Vec<[f32; 3]>,
        intensity: f32,
    },
    /// One point light, unscaled: diffuse is `diff * object_color` and the
    /// ambient term is used as-is.
    Single { position: [f32; 3] },
}

impl Lighting {
    /// Six lights on the principal axes at `distance` from the origin, the
    /// reference showcase arrangement.
    pub fn symmetric_at_distance(distance: f32, intensity: f32) -> Self {
        let positions = vec![
            [distance, 0.0, 0.0],
            [-distance, 0.0, 0.0],
            [0.0, distance, 0.0],
            [0.0, -distance, 0.0],
            [0.0, 0.0, distance],
            [0.0, 0.0, -distance],
        ];
        Lighting::Symmetric {
            positions,
            intensity,
        }
    }

    pub fn light_count(&self) -> usize {
        match self {
            Lighting::Symmetric { positions, .. } => positions.len(),
            Lighting::Single { .. } => 1,
        }
    }

    /// Lower the profile into the GPU uniform. The single-light profile maps
    /// to count 1 with intensity 1.0, which makes the shared shader produce
    /// the unscaled diffuse and ambient of the reference.
    pub fn to_uniform(
        &self,
        object_color: Vec3,
        ambient_color: Vec3,
        transparency: f32,
    ) -> LightUniform {
        let mut uniform = LightUniform {
            positions: [[0.0; 4]; MAX_LIGHTS],
            object_color: object_color.to_array(),
            transparency,
            ambient_color: ambient_color.to_array(),
            intensity: 1.0,
            count: 0,
            _pad: [0; 3],
        };
        match self {
            Lighting::Symmetric {
                positions,
                intensity,
            } => {
                let count = positions.len().min(MAX_LIGHTS);
                for (slot, pos) in uniform.positions.iter_mut().zip(positions.iter()) {
                    *slot = [pos[0], pos[1], pos[2], 0.0];
                }
                uniform.intensity = *intensity;
                uniform.count = count as u32;
            }
            Lighting::Single { position } => {
                uniform.positions[0] = [position[0], position[1], position[2], 0.0];
                uniform.count = 1;
            }
        }
        uniform
    }
}

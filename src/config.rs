use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::lighting::{Lighting, MAX_LIGHTS};

/// Immutable description of one render run. Built once, validated once,
/// then passed by reference into every component; no process-wide state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub frame_count: u32,
    pub fps: u32,
    pub sponge_size: f32,
    pub sponge_level: u32,
    pub camera_distance: f32,
    pub rotation_axis: [f32; 3],
    pub object_color: [f32; 3],
    pub ambient_color: [f32; 3],
    pub background_color: [f32; 3],
    pub transparency: f32,
    pub lighting: Lighting,
    pub output_path: PathBuf,
    pub scratch_dir: PathBuf,
}

impl Default for RenderConfig {
    /// The showcase configuration: gold sponge, six symmetric lights.
    fn default() -> Self {
        let camera_distance = 10.0;
        Self {
            width: 1920,
            height: 1080,
            frame_count: 240,
            fps: 30,
            sponge_size: 4.0,
            sponge_level: 4,
            camera_distance,
            rotation_axis: [0.0, 1.0, 1.0],
            object_color: [1.0, 215.0 / 255.0, 0.0],
            ambient_color: [0.2, 0.2, 0.3],
            background_color: [221.0 / 255.0, 221.0 / 255.0, 221.0 / 255.0],
            transparency: 1.0,
            lighting: Lighting::symmetric_at_distance(camera_distance, 0.6),
            output_path: PathBuf::from("MengerSponge.mp4"),
            scratch_dir: PathBuf::from("images"),
        }
    }
}

impl RenderConfig {
    /// The logo configuration: blue sponge, one unscaled light, black
    /// background.
    pub fn logo() -> Self {
        Self {
            sponge_size: 2.0,
            camera_distance: 8.0,
            rotation_axis: [0.0, 1.0, 0.0],
            object_color: [0.5, 0.5, 1.0],
            ambient_color: [0.1, 0.1, 0.2],
            background_color: [0.0, 0.0, 0.0],
            lighting: Lighting::Single {
                position: [-5.0, -5.0, -5.0],
            },
            ..Self::default()
        }
    }

    pub fn from_json_file(path: &Path) -> RenderResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| RenderError::config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    pub fn rotation_axis_vec(&self) -> Vec3 {
        Vec3::from_array(self.rotation_axis)
    }

    /// Angle advanced per frame, radians.
    pub fn angle_step(&self) -> f32 {
        std::f32::consts::TAU / self.frame_count as f32
    }

    /// Reject invalid configuration before any GPU work begins.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::config(format!(
                "frame dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.frame_count == 0 {
            return Err(RenderError::config("frame count must be non-zero"));
        }
        if self.fps == 0 {
            return Err(RenderError::config("frame rate must be non-zero"));
        }
        if !self.sponge_size.is_finite() || self.sponge_size <= 0.0 {
            return Err(RenderError::config(format!(
                "sponge size must be positive and finite, got {}",
                self.sponge_size
            )));
        }
        if !self.camera_distance.is_finite() || self.camera_distance <= 0.0 {
            return Err(RenderError::config(format!(
                "camera distance must be positive and finite, got {}",
                self.camera_distance
            )));
        }
        let axis = self.rotation_axis_vec();
        if !axis.is_finite() || axis.length_squared() < 1e-12 {
            return Err(RenderError::config(
                "rotation axis must be a non-degenerate 3-vector",
            ));
        }
        if !(0.0..=1.0).contains(&self.transparency) {
            return Err(RenderError::config(format!(
                "transparency must be in [0, 1], got {}",
                self.transparency
            )));
        }
        match &self.lighting {
            Lighting::Symmetric {
                positions,
                intensity,
            } => {
                if positions.is_empty() || positions.len() > MAX_LIGHTS {
                    return Err(RenderError::config(format!(
                        "symmetric lighting needs 1..={MAX_LIGHTS} lights, got {}",
                        positions.len()
                    )));
                }
                if !intensity.is_finite() || *intensity < 0.0 {
                    return Err(RenderError::config(format!(
                        "light intensity must be non-negative and finite, got {intensity}"
                    )));
                }
            }
            Lighting::Single { position } => {
                if !Vec3::from_array(*position).is_finite() {
                    return Err(RenderError::config("light position must be finite"));
                }
            }
        }
        Ok(())
    }
}

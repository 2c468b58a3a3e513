pub mod cli;
pub mod config;
pub mod error;
pub mod lighting;
pub mod readback;
pub mod renderer;
pub mod sequencer;
pub mod sink;
pub mod sponge;
pub mod transforms;
pub mod types;

pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use lighting::Lighting;
pub use renderer::SpongeRenderer;
pub use sequencer::{run_sequence, FrameSchedule, FrameTiming};
pub use sponge::{generate, leaf_cubes, Mesh};

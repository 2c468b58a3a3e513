// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum Preset {
    /// Gold sponge, six symmetric lights, light gray background.
    Showcase,
    /// Blue sponge, one light, black background.
    Logo,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum Encoder {
    /// Stream raw frames straight into ffmpeg.
    Pipe,
    /// Write numbered PNGs to a scratch directory, then encode them.
    PngDir,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "menger-video")]
#[command(about = "Renders a rotating Menger sponge to a video file", long_about = None)]
pub struct Cli {
    /// JSON configuration file; overrides the preset
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Built-in configuration to start from
    #[arg(long, value_enum, default_value_t = Preset::Showcase)]
    pub preset: Preset,

    /// How frames reach the video encoder
    #[arg(long, value_enum, default_value_t = Encoder::Pipe)]
    pub encoder: Encoder,

    /// Frame width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of frames in the video
    #[arg(long)]
    pub frames: Option<u32>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Edge length of the sponge
    #[arg(long)]
    pub size: Option<f32>,

    /// Recursion level of the sponge
    #[arg(long)]
    pub level: Option<u32>,

    /// Output video file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Keep the scratch directory after encoding (png-dir only)
    #[arg(long, default_value = "false")]
    pub keep_frames: bool,
}

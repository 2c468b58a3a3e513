use anyhow::Context;
use clap::Parser;

use menger_video::cli::{Cli, Encoder, Preset};
use menger_video::sink::{cleanup_scratch, encode_png_sequence, FfmpegSink, FrameSink, PngDirSink};
use menger_video::{run_sequence, sponge, RenderConfig, SpongeRenderer};

fn build_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match cli.preset {
            Preset::Showcase => RenderConfig::default(),
            Preset::Logo => RenderConfig::logo(),
        },
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(frames) = cli.frames {
        config.frame_count = frames;
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    if let Some(size) = cli.size {
        config.sponge_size = size;
    }
    if let Some(level) = cli.level {
        config.sponge_level = level;
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;

    let mesh = sponge::generate(config.sponge_size, config.sponge_level)?;
    log::info!(
        "generated level-{} sponge: {} vertices, {} faces",
        config.sponge_level,
        mesh.vertex_count(),
        mesh.face_count()
    );

    let mut renderer = pollster::block_on(SpongeRenderer::new(&config, &mesh))?;

    match cli.encoder {
        Encoder::Pipe => {
            let mut sink = FfmpegSink::spawn(&config)?;
            run_sequence(&mut renderer, &config, &mut sink)?;
            sink.finish()?;
        }
        Encoder::PngDir => {
            let mut sink = PngDirSink::create(&config)?;
            run_sequence(&mut renderer, &config, &mut sink)?;
            sink.finish()?;
            encode_png_sequence(&config.scratch_dir, &config.output_path, config.fps)?;
            if !cli.keep_frames {
                cleanup_scratch(&config.scratch_dir);
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Cli::parse())
}

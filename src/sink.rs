use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};

/// Destination for rendered frames. Implementations must accept frames in
/// strictly ascending index order and preserve that order in their output.
pub trait FrameSink {
    fn write_frame(&mut self, index: u32, rgb: &[u8]) -> RenderResult<()>;

    /// Flush and close the sink. Must be called after the last frame.
    fn finish(self) -> RenderResult<()>;
}

/// Zero-padded frame file name, so lexical sort equals temporal order.
pub fn frame_file_name(index: u32) -> String {
    format!("frame_{index:04}.png")
}

/// Streams raw RGB frames into an ffmpeg child process encoding straight to
/// the output container. No intermediate files.
pub struct FfmpegSink {
    child: Child,
    stdin: Option<ChildStdin>,
    output: PathBuf,
}

impl FfmpegSink {
    pub fn spawn(config: &RenderConfig) -> RenderResult<Self> {
        let mut child = Command::new("ffmpeg")
            .args(["-y", "-f", "rawvideo", "-pix_fmt", "rgb24"])
            .arg("-s")
            .arg(format!("{}x{}", config.width, config.height))
            .arg("-r")
            .arg(config.fps.to_string())
            .args(["-i", "-", "-c:v", "libx264", "-pix_fmt", "yuv420p"])
            .arg(&config.output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| RenderError::encode(format!("failed to spawn ffmpeg: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::encode("ffmpeg stdin unavailable"))?;
        Ok(Self {
            child,
            stdin: Some(stdin),
            output: config.output_path.clone(),
        })
    }
}

impl FrameSink for FfmpegSink {
    fn write_frame(&mut self, _index: u32, rgb: &[u8]) -> RenderResult<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| RenderError::encode("ffmpeg stdin already closed"))?;
        stdin
            .write_all(rgb)
            .map_err(|e| RenderError::encode(format!("ffmpeg pipe write failed: {e}")))
    }

    fn finish(mut self) -> RenderResult<()> {
        // Closing stdin signals end-of-stream; ffmpeg finalizes the container.
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| RenderError::encode(format!("waiting for ffmpeg failed: {e}")))?;
        if !status.success() {
            return Err(RenderError::encode(format!(
                "ffmpeg exited with {status} while writing {}",
                self.output.display()
            )));
        }
        log::info!("video written to {}", self.output.display());
        Ok(())
    }
}

/// Persists each frame as a numbered PNG in a scratch directory; a separate
/// encoding pass turns the sequence into the video file.
pub struct PngDirSink {
    dir: PathBuf,
    width: u32,
    height: u32,
}

impl PngDirSink {
    pub fn create(config: &RenderConfig) -> RenderResult<Self> {
        std::fs::create_dir_all(&config.scratch_dir)?;
        Ok(Self {
            dir: config.scratch_dir.clone(),
            width: config.width,
            height: config.height,
        })
    }
}

impl FrameSink for PngDirSink {
    fn write_frame(&mut self, index: u32, rgb: &[u8]) -> RenderResult<()> {
        let path = self.dir.join(frame_file_name(index));
        image::save_buffer(
            &path,
            rgb,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
        .map_err(|e| RenderError::encode(format!("writing {}: {e}", path.display())))
    }

    fn finish(self) -> RenderResult<()> {
        Ok(())
    }
}

/// Encode a scratch directory of `frame_%04d.png` files into the output
/// container at the configured frame rate.
pub fn encode_png_sequence(dir: &Path, output: &Path, fps: u32) -> RenderResult<()> {
    let status = Command::new("ffmpeg")
        .arg("-y")
        .arg("-framerate")
        .arg(fps.to_string())
        .arg("-i")
        .arg(dir.join("frame_%04d.png"))
        .args(["-c:v", "libx264", "-pix_fmt", "yuv420p"])
        .arg(output)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| RenderError::encode(format!("failed to run ffmpeg: {e}")))?;
    if !status.success() {
        return Err(RenderError::encode(format!(
            "ffmpeg exited with {status} while encoding {}",
            output.display()
        )));
    }
    log::info!("video written to {}", output.display());
    Ok(())
}

/// Best-effort removal of the scratch directory. Failure is logged, not
/// fatal: the run already produced its output.
pub fn cleanup_scratch(dir: &Path) {
    if let Err(e) = std::fs::remove_dir_all(dir) {
        log::warn!("could not remove scratch dir {}: {e}", dir.display());
    }
}

use std::f32::consts::TAU;

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::renderer::SpongeRenderer;
use crate::sink::FrameSink;

/// One frame's worth of schedule: its index and the rotation angle to render
/// it at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    pub index: u32,
    pub angle: f32,
}

/// Finite iterator over the run's frames, in strictly ascending index order.
///
/// The angle is derived from the index (`index * 2pi / frame_count`), never
/// accumulated, so frame N's transform does not depend on having produced
/// frames 0..N.
pub struct FrameSchedule {
    frame_count: u32,
    next: u32,
}

impl FrameSchedule {
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_count,
            next: 0,
        }
    }

    pub fn angle_for(&self, index: u32) -> f32 {
        index as f32 * (TAU / self.frame_count as f32)
    }
}

impl Iterator for FrameSchedule {
    type Item = FrameTiming;

    fn next(&mut self) -> Option<FrameTiming> {
        if self.next >= self.frame_count {
            return None;
        }
        let timing = FrameTiming {
            index: self.next,
            angle: self.angle_for(self.next),
        };
        self.next += 1;
        Some(timing)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.frame_count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSchedule {}

/// Render every scheduled frame and deliver it to the sink in order. Any
/// failure aborts the run; there is no partial-output guarantee.
pub fn run_sequence<S: FrameSink>(
    renderer: &mut SpongeRenderer,
    config: &RenderConfig,
    sink: &mut S,
) -> RenderResult<()> {
    for timing in FrameSchedule::new(config.frame_count) {
        log::info!(
            "rendering frame {}/{}",
            timing.index + 1,
            config.frame_count
        );
        let rgb = renderer.render_frame(timing.angle)?;
        sink.write_frame(timing.index, &rgb)?;
    }
    Ok(())
}

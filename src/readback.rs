use crate::error::{RenderError, RenderResult};

/// Align a row length to WebGPU's copy row alignment (256 bytes).
fn align_bytes_per_row(unpadded: u32) -> u32 {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Read an `Rgba8Unorm` color target back as a tight, row-major RGB buffer,
/// top row first. The copy goes through a 256-byte-aligned staging buffer;
/// rows are depadded and the alpha channel stripped on the CPU side.
pub fn read_rgb_frame(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
    width: u32,
    height: u32,
) -> RenderResult<Vec<u8>> {
    let unpadded_bpr = width * 4;
    let padded_bpr = align_bytes_per_row(unpadded_bpr);
    let buffer_size = (padded_bpr as u64) * (height as u64);

    let staging = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Frame Readback Staging"),
        size: buffer_size,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Frame Readback Encoder"),
    });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &staging,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(padded_bpr),
                rows_per_image: Some(height),
            },
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    queue.submit(std::iter::once(encoder.finish()));

    let slice = staging.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        tx.send(result).ok();
    });
    device
        .poll(wgpu::PollType::Wait {
            submission_index: None,
            timeout: None,
        })
        .map_err(|e| RenderError::readback(format!("device poll failed: {e:?}")))?;
    rx.recv()
        .map_err(|_| RenderError::readback("map_async callback dropped"))?
        .map_err(|e| RenderError::readback(format!("buffer map failed: {e:?}")))?;

    let data = slice.get_mapped_range();
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for row in 0..height as usize {
        let row_start = row * padded_bpr as usize;
        for px in 0..width as usize {
            let offset = row_start + px * 4;
            rgb.extend_from_slice(&data[offset..offset + 3]);
        }
    }
    drop(data);
    staging.unmap();

    Ok(rgb)
}

//! Upscaled RGBA previews of a dot matrix, and PNG encoding.

use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::{
    foundation::core::Cell,
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
};

/// Rendered preview pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Straight RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

/// How each dot is drawn in a preview image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewStyle {
    /// Pixels per dot along each axis.
    pub scale: u32,
    /// Background pixels between neighbouring dots.
    pub gap: u32,
    /// Colour of a lit dot.
    pub on_rgba: [u8; 4],
    /// Colour of an unlit dot.
    pub off_rgba: [u8; 4],
    /// Colour of the gaps between dots.
    pub background_rgba: [u8; 4],
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            scale: 8,
            gap: 1,
            on_rgba: [255, 214, 10, 255],
            off_rgba: [34, 34, 38, 255],
            background_rgba: [12, 12, 14, 255],
        }
    }
}

impl PreviewStyle {
    /// Require `scale >= 1` and `gap < scale`.
    pub fn validate(&self) -> FlipdotResult<()> {
        if self.scale == 0 {
            return Err(FlipdotError::validation("preview scale must be >= 1"));
        }
        if self.gap >= self.scale {
            return Err(FlipdotError::validation(format!(
                "preview gap {} must be smaller than scale {}",
                self.gap, self.scale
            )));
        }
        Ok(())
    }
}

/// Paint every dot of `buffer` as a `scale - gap` square.
pub fn render_preview(buffer: &PixelBuffer, style: &PreviewStyle) -> FlipdotResult<FrameRGBA> {
    style.validate()?;
    let grid = buffer.grid();
    let width = grid
        .width
        .checked_mul(style.scale)
        .ok_or_else(|| FlipdotError::validation("preview width overflows u32"))?;
    let height = grid
        .height
        .checked_mul(style.scale)
        .ok_or_else(|| FlipdotError::validation("preview height overflows u32"))?;

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..(width as usize * height as usize) {
        data.extend_from_slice(&style.background_rgba);
    }

    let dot = style.scale - style.gap;
    let stride = width as usize * 4;
    for gy in 0..grid.height {
        for gx in 0..grid.width {
            let on = buffer.get(Cell::new(gx as i32, gy as i32)) == Some(true);
            let rgba = if on { style.on_rgba } else { style.off_rgba };
            let x0 = (gx * style.scale) as usize;
            let y0 = (gy * style.scale) as usize;
            for py in y0..y0 + dot as usize {
                let row = py * stride;
                for px in x0..x0 + dot as usize {
                    let o = row + px * 4;
                    data[o..o + 4].copy_from_slice(&rgba);
                }
            }
        }
    }

    Ok(FrameRGBA {
        width,
        height,
        data,
    })
}

/// Encode a preview frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> FlipdotResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out)
}

/// Write a preview frame to `path` as PNG, creating parent directories.
pub fn save_png(frame: &FrameRGBA, path: &Path) -> FlipdotResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/frame/preview.rs"]
mod tests;

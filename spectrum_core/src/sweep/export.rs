//! GIF encoding of sweep frames through the `plotters` bitmap backend.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::frame::SweepFrame;
use crate::error::{ArtifactError, SpectrumError};

const CAPTION_FONT: (&str, f64) = ("sans-serif", 20.0);
const CAPTION_POSITION: (i32, i32) = (10, 10);

/// Write `frames` as an animated GIF at `fps` frames per second.
///
/// Every frame must have the same panel shape. When `annotate` is set the
/// frame caption is drawn in yellow in the top-left corner; if no font is
/// available the caption is skipped with a warning and the frame is still
/// written. Parent directories of `path` are created as needed.
pub fn export_gif<P: AsRef<Path>>(
    frames: &[SweepFrame],
    fps: u32,
    path: P,
    annotate: bool,
) -> Result<PathBuf, ArtifactError> {
    let first = frames
        .first()
        .ok_or_else(|| SpectrumError::invalid_input("frames", 0, "at least one frame"))?;
    if fps == 0 {
        return Err(SpectrumError::invalid_input("fps", fps, "fps > 0").into());
    }

    let (rows, cols) = first.panel_dim();
    if let Some(frame) = frames.iter().find(|f| f.panel_dim() != (rows, cols)) {
        return Err(SpectrumError::shape_mismatch(
            (rows, cols),
            frame.panel_dim(),
            format!("sweep frame for radius {}", frame.radius),
        )
        .into());
    }

    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let frame_delay_ms = (1000 / fps).max(1);
    let backend = BitMapBackend::gif(path, ((2 * cols) as u32, rows as u32), frame_delay_ms)
        .map_err(render_error)?;
    let drawing_area = backend.into_drawing_area();
    let caption_style = CAPTION_FONT.into_font().color(&YELLOW);

    let mut caption_failed = false;
    for frame in frames {
        let rgb = frame.compose_rgb();
        for row in 0..rows {
            for col in 0..2 * cols {
                let color = RGBColor(rgb[[row, col, 0]], rgb[[row, col, 1]], rgb[[row, col, 2]]);
                drawing_area
                    .draw_pixel((col as i32, row as i32), &color)
                    .map_err(render_error)?;
            }
        }

        if annotate && !caption_failed {
            let caption = Text::new(frame.caption(), CAPTION_POSITION, caption_style.clone());
            if let Err(err) = drawing_area.draw(&caption) {
                tracing::warn!("Could not render sweep caption, continuing without text: {}", err);
                caption_failed = true;
            }
        }

        drawing_area.present().map_err(render_error)?;
    }

    tracing::info!(
        frames = frames.len(),
        fps,
        path = %path.display(),
        "wrote sweep animation"
    );
    Ok(path.to_path_buf())
}

fn render_error<E: std::fmt::Display>(err: E) -> ArtifactError {
    ArtifactError::Render(err.to_string())
}

//! Pure frame computation for high-pass sweeps.
//!
//! Each frame pairs a left panel (chosen by [`PanelContent`]) with the image
//! reconstructed after removing every frequency within `radius` of DC. No I/O
//! happens here; see [`super::export`] for encoding.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, Array3, ArrayView2};
use rayon::prelude::*;
use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::{SpectrumError, SpectrumResult};
use crate::spectral::ensure_non_empty;
use crate::spectral::fft::{centered_spectrum, ifft2, ifft_shift, WindowFunction};
use crate::spectral::mask::{apply_center_mask, low_frequency_mask};

/// Expected input shape; other shapes are swept but logged with a warning.
pub const REFERENCE_SHAPE: (usize, usize) = (256, 256);

/// What the left half of each frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelContent {
    /// log(1 + |masked spectrum|), min-max normalised
    #[default]
    Spectrum,
    /// Pass band in white, removed disc in black
    Mask,
    /// The unfiltered input image
    Original,
}

impl PanelContent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelContent::Spectrum => "spectrum",
            PanelContent::Mask => "mask",
            PanelContent::Original => "original",
        }
    }
}

impl FromStr for PanelContent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spectrum" => Ok(PanelContent::Spectrum),
            "mask" => Ok(PanelContent::Mask),
            "original" => Ok(PanelContent::Original),
            _ => Err(format!(
                "unsupported panel content '{}' (expected spectrum, mask or original)",
                s
            )),
        }
    }
}

impl fmt::Display for PanelContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the sweep: both panels share the input image's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFrame {
    pub radius: u32,
    pub left: Array2<u8>,
    pub right: Array2<u8>,
}

impl SweepFrame {
    /// `(rows, cols)` of a single panel.
    pub fn panel_dim(&self) -> (usize, usize) {
        self.right.dim()
    }

    /// Text drawn over the frame when annotation is enabled.
    pub fn caption(&self) -> String {
        format!("Radius: {}", self.radius)
    }

    /// Panels side by side as an `(rows, 2 * cols, 3)` RGB array.
    pub fn compose_rgb(&self) -> Array3<u8> {
        let (rows, cols) = self.panel_dim();
        Array3::from_shape_fn((rows, 2 * cols, 3), |(row, col, _)| {
            if col < cols {
                self.left[[row, col]]
            } else {
                self.right[[row, col - cols]]
            }
        })
    }
}

/// Evenly spaced integer radii from 0 to the half-diagonal.
///
/// `num_frames` samples of `[0, trunc(sqrt((h/2)^2 + (w/2)^2))]` are truncated
/// to integers, then sorted and de-duplicated, so small images yield fewer
/// radii than requested.
pub fn default_radii(height: usize, width: usize, num_frames: usize) -> Vec<u32> {
    let half_h = height as f64 / 2.0;
    let half_w = width as f64 / 2.0;
    let max_radius = (half_h * half_h + half_w * half_w).sqrt() as u32;

    let mut radii: Vec<u32> = match num_frames {
        0 => Vec::new(),
        1 => vec![0],
        n => {
            let step = f64::from(max_radius) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        max_radius
                    } else {
                        (i as f64 * step) as u32
                    }
                })
                .collect()
        }
    };
    radii.sort_unstable();
    radii.dedup();
    radii
}

/// Min-max scale to `0..=255`, truncating. Constant input maps to all zeros.
pub fn normalize_to_u8(values: ArrayView2<'_, f64>) -> Array2<u8> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    if range > 0.0 {
        values.mapv(|v| ((v - min) / range * 255.0) as u8)
    } else {
        Array2::zeros(values.dim())
    }
}

/// Compute one frame per radius, in the order given.
///
/// The forward transform runs once; frames are then built in parallel.
pub fn compute_sweep_frames<A>(
    image: ArrayView2<'_, A>,
    radii: &[u32],
    panel: PanelContent,
) -> SpectrumResult<Vec<SweepFrame>>
where
    A: Copy + Into<f64>,
{
    ensure_non_empty(&image, "image")?;
    warn_if_not_reference_shape(image.dim());
    if radii.is_empty() {
        return Err(SpectrumError::invalid_input(
            "radii",
            "[]",
            "at least one radius",
        ));
    }

    let spectrum = centered_spectrum(image, WindowFunction::None)?;
    let left = match panel {
        PanelContent::Spectrum => LeftPanel::Spectrum,
        PanelContent::Mask => LeftPanel::Mask,
        PanelContent::Original => LeftPanel::Original(image.mapv(|v| to_gray(v.into()))),
    };

    tracing::debug!(frames = radii.len(), panel = %panel, "computing sweep frames");
    radii
        .par_iter()
        .map(|&radius| compute_frame(spectrum.view(), radius, &left))
        .collect()
}

enum LeftPanel {
    Spectrum,
    Mask,
    Original(Array2<u8>),
}

fn compute_frame(
    spectrum: ArrayView2<'_, Complex<f64>>,
    radius: u32,
    left: &LeftPanel,
) -> SpectrumResult<SweepFrame> {
    let masked = apply_center_mask(spectrum, radius)?;

    let left = match left {
        LeftPanel::Spectrum => {
            let log_magnitude = masked.mapv(|z| z.norm().ln_1p());
            normalize_to_u8(log_magnitude.view())
        }
        LeftPanel::Mask => {
            low_frequency_mask(masked.dim(), radius).mapv(|blocked| if blocked { 0 } else { 255 })
        }
        LeftPanel::Original(original) => original.clone(),
    };

    let filtered = ifft2(ifft_shift(masked.view()).view())?.mapv(|z| z.norm());
    let right = normalize_to_u8(filtered.view());

    Ok(SweepFrame {
        radius,
        left,
        right,
    })
}

/// Returns whether a warning was emitted.
fn warn_if_not_reference_shape(dim: (usize, usize)) -> bool {
    if dim == REFERENCE_SHAPE {
        return false;
    }
    tracing::warn!(
        rows = dim.0,
        cols = dim.1,
        "sweep input is expected to be a {}x{} grayscale image",
        REFERENCE_SHAPE.0,
        REFERENCE_SHAPE.1
    );
    true
}

fn to_gray(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

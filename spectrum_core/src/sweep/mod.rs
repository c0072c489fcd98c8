//! High-pass sweep animations.
//!
//! A sweep removes a growing disc of low frequencies from an image's centred
//! spectrum and shows, frame by frame, what is left. Frame computation
//! ([`frame`]) is pure and returns an in-memory sequence; [`export`] turns that
//! sequence into a GIF.

pub mod export;
pub mod frame;

use std::path::PathBuf;

use ndarray::ArrayView2;

use crate::config::SweepConfig;
use crate::error::ArtifactError;

pub use export::export_gif;
pub use frame::{
    compute_sweep_frames, default_radii, normalize_to_u8, PanelContent, SweepFrame,
};

/// Compute the sweep described by `config` for `image` and write it as a GIF.
///
/// Uses `config.radii` when given, otherwise [`default_radii`] with
/// `config.num_frames`. Returns the path of the written file.
pub fn create_hpf_sweep_gif<A>(
    image: ArrayView2<'_, A>,
    config: &SweepConfig,
) -> Result<PathBuf, ArtifactError>
where
    A: Copy + Into<f64>,
{
    let (height, width) = image.dim();
    let radii = match &config.radii {
        Some(radii) => radii.clone(),
        None => {
            tracing::info!(
                num_frames = config.num_frames,
                "no radius list given, spacing radii evenly up to the half-diagonal"
            );
            default_radii(height, width, config.num_frames)
        }
    };

    let output = config.output_path();
    tracing::info!(
        output = %output.display(),
        panel = %config.left_panel,
        frames = radii.len(),
        "starting high-pass sweep"
    );

    let frames = compute_sweep_frames(image, &radii, config.left_panel)?;
    export_gif(&frames, config.fps, output, config.annotate)
}

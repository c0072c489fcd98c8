//! Animate a high-pass sweep over mask radii.
//!
//! Run with: cargo run --release --example hpf_sweep -- [path/to/image.png]
//! Without a path a 256x256 checkerboard with a soft blob is used.

use std::env;

use anyhow::Context;
use ndarray::Array2;
use spectrum_features_core::config::ConfigError;
use spectrum_features_core::io::{load_grayscale, save_grayscale};
use spectrum_features_core::logging;
use spectrum_features_core::sweep::{compute_sweep_frames, create_hpf_sweep_gif, default_radii};
use spectrum_features_core::SweepConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
        .init();

    let config = load_config()?;
    let image = match env::args().nth(1) {
        Some(path) => load_grayscale(&path).with_context(|| format!("loading {path}"))?,
        None => synthetic(256),
    };

    let output = create_hpf_sweep_gif(image.view(), &config)?;
    let radii = config
        .radii
        .clone()
        .unwrap_or_else(|| default_radii(image.nrows(), image.ncols(), config.num_frames));
    logging::log_sweep("logs", &output, &radii, config.fps, config.left_panel.as_str())?;
    println!("Saved {}", output.display());

    // Keep the strongest high-pass result as a still next to the animation.
    if let Some(&last) = radii.last() {
        let frames = compute_sweep_frames(image.view(), &[last], config.left_panel)?;
        let still = output.with_extension("png");
        save_grayscale(&still, frames[0].right.view())?;
        println!("Saved {} (radius {last})", still.display());
    }
    Ok(())
}

fn synthetic(size: usize) -> Array2<f64> {
    let center = size as f64 / 2.0;
    Array2::from_shape_fn((size, size), |(y, x)| {
        let checker = if (x / 16 + y / 16) % 2 == 0 { 60.0 } else { 0.0 };
        let r2 = (x as f64 - center).powi(2) + (y as f64 - center).powi(2);
        checker + 180.0 * (-r2 / 2000.0).exp()
    })
}

fn load_config() -> Result<SweepConfig, ConfigError> {
    SweepConfig::load_from_file("config/spectrum.toml").or_else(|err| {
        eprintln!("Falling back to default config: {err}");
        Ok(SweepConfig::default())
    })
}

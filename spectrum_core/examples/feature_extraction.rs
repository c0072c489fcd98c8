//! Radial profile and central coefficients for an image.
//!
//! Run with: cargo run --example feature_extraction -- [path/to/image.png]
//! Without a path a 256x256 stripe pattern is used.

use std::env;

use anyhow::Context;
use ndarray::Array2;
use spectrum_features_core::config::ConfigError;
use spectrum_features_core::io::load_grayscale;
use spectrum_features_core::logging;
use spectrum_features_core::spectral::{
    centered_spectrum, compute_radial_profile, extract_unique_central_features, magnitude,
    WindowFunction,
};
use spectrum_features_core::FeatureConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    let (source, image) = match env::args().nth(1) {
        Some(path) => {
            let image = load_grayscale(&path).with_context(|| format!("loading {path}"))?;
            (path, image)
        }
        None => ("stripes".to_string(), stripes(256, 10)),
    };

    let spectrum = centered_spectrum(image.view(), WindowFunction::None)?;
    let mag = magnitude(spectrum.view());

    let profile = compute_radial_profile(mag.view())?;
    let features = extract_unique_central_features(mag.view(), config.window_size, config.include_dc)?;

    println!("Image {} ({}x{})", source, image.nrows(), image.ncols());
    println!("Radial profile length: {}", profile.len());
    println!(
        "Central features: {} (window {}, include_dc={})",
        features.len(),
        config.window_size,
        config.include_dc
    );

    logging::log_features(
        "logs",
        &source,
        image.dim(),
        &profile.to_vec(),
        config.window_size,
        config.include_dc,
        &features.to_vec(),
    )?;
    Ok(())
}

fn stripes(size: usize, width: usize) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(_, x)| {
        if (x / width) % 2 == 0 {
            -1.0
        } else {
            1.0
        }
    })
}

fn load_config() -> Result<FeatureConfig, ConfigError> {
    FeatureConfig::load_from_file("config/spectrum.toml").or_else(|err| {
        eprintln!("Falling back to default config: {err}");
        Ok(FeatureConfig::default())
    })
}

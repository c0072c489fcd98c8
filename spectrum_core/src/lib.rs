//! # Spectrum Features Core
//!
//! Frequency-domain descriptors and visualisations for grayscale images.
//! Spectra are `ndarray` grids in centred layout (DC at `(rows / 2, cols / 2)`).
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::Array2;
//! use spectrum_features_core::spectral::{
//!     centered_spectrum, compute_radial_profile, extract_unique_central_features, magnitude,
//!     WindowFunction,
//! };
//!
//! // Vertical stripes with a period of 8 pixels
//! let image = Array2::from_shape_fn((64, 64), |(_, x)| if (x / 4) % 2 == 0 { 1.0 } else { -1.0 });
//!
//! let spectrum = centered_spectrum(image.view(), WindowFunction::None).unwrap();
//! let mag = magnitude(spectrum.view());
//!
//! let profile = compute_radial_profile(mag.view()).unwrap();
//! let features = extract_unique_central_features(mag.view(), 11, true).unwrap();
//! assert_eq!(features.len(), 61);
//! println!("{} radial bins", profile.len());
//! ```
//!
//! ## Core Modules
//!
//! - [`spectral`] - Transforms, radial profile, central coefficients, masking
//! - [`sweep`] - High-pass sweep frames and GIF export
//! - [`config`] - Feature and sweep configuration via TOML
//! - [`logging`] - JSON line-delimited run logs
//! - [`io`] - Grayscale image loading and saving

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod spectral;
pub mod sweep;

pub use config::{ConfigError, FeatureConfig, SweepConfig};
pub use error::{ArtifactError, SpectrumError, SpectrumResult};
pub use spectral::{
    apply_center_mask_and_ifft, as_spectrum, centered_spectrum, compute_radial_profile,
    extract_unique_central_features, reconstruct_central_window, WindowFunction,
};
pub use sweep::{create_hpf_sweep_gif, PanelContent, SweepFrame};

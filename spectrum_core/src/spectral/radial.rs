//! Azimuthally averaged (radial) profile of a centred spectrum.
//!
//! Every pixel is assigned to the integer bin `trunc(distance to centre)`,
//! where the centre is the geometric centre `(rows / 2.0, cols / 2.0)`. For
//! even dimensions that centre sits between pixels, so bin edges carry a
//! half-pixel offset relative to the DC term. The offset is kept as-is so
//! profiles stay comparable with previously computed ones.

use ndarray::{Array1, ArrayView2};

use super::ensure_non_empty;
use crate::error::SpectrumResult;

/// Compute the mean spectrum value for each integer radius.
///
/// Bin `r` collects the pixels whose distance to the geometric centre lies in
/// `[r, r + 1)`. Its value is the sum of those pixels divided by their count,
/// or `0.0` when no pixel falls into the bin. The profile length is
/// [`radial_profile_len`] of the input shape.
///
/// The input is assumed to be centred already (DC at the middle, see
/// [`fft_shift`](super::fft::fft_shift)); this is not checked.
///
/// # Example
/// ```
/// # use ndarray::Array2;
/// # use spectrum_features_core::spectral::compute_radial_profile;
/// let spectrum = Array2::<f64>::ones((4, 4));
/// let profile = compute_radial_profile(spectrum.view()).unwrap();
/// assert_eq!(profile.len(), 3);
/// assert!(profile.iter().all(|&v| v == 1.0));
/// ```
pub fn compute_radial_profile<A>(spectrum: ArrayView2<'_, A>) -> SpectrumResult<Array1<f64>>
where
    A: Copy + Into<f64>,
{
    ensure_non_empty(&spectrum, "spectrum")?;
    let (rows, cols) = spectrum.dim();
    let center = geometric_center(rows, cols);

    let bins = radial_profile_len(rows, cols);
    let mut counts = vec![0usize; bins];
    let mut sums = vec![0.0f64; bins];

    // Row-major accumulation, one pass.
    for ((y, x), &value) in spectrum.indexed_iter() {
        let bin = radial_bin(y, x, center);
        let value: f64 = value.into();
        counts[bin] += 1;
        sums[bin] += value;
    }

    let profile = sums
        .into_iter()
        .zip(counts)
        .map(|(sum, count)| if count > 0 { sum / count as f64 } else { 0.0 })
        .collect::<Array1<f64>>();

    tracing::debug!(rows, cols, bins, "computed radial profile");
    Ok(profile)
}

/// Number of bins [`compute_radial_profile`] produces for a `rows x cols` input.
///
/// Equals `1 + trunc(distance from the geometric centre to pixel (0, 0))`,
/// which is the farthest pixel from that centre.
pub fn radial_profile_len(rows: usize, cols: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    radial_bin(0, 0, geometric_center(rows, cols)) + 1
}

fn geometric_center(rows: usize, cols: usize) -> (f64, f64) {
    (rows as f64 / 2.0, cols as f64 / 2.0)
}

fn radial_bin(y: usize, x: usize, (center_y, center_x): (f64, f64)) -> usize {
    let dx = x as f64 - center_x;
    let dy = y as f64 - center_y;
    (dx * dx + dy * dy).sqrt() as usize
}

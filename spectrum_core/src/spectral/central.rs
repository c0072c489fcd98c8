//! Symmetry-reduced coefficients from the centre of a spectrum.
//!
//! The Fourier transform of a real image satisfies `F(-u, -v) = conj(F(u, v))`,
//! so magnitude and power spectra are point-symmetric about the DC term. Of a
//! `W x W` window centred on DC only `(W^2 - 1) / 2` coefficient pairs plus the
//! DC term itself carry independent information.
//!
//! Layout of the feature vector for a window with `half = W / 2`:
//!
//! ```text
//! [ DC,
//!   window[0, 0..W], window[1, 0..W], ..., window[half - 1, 0..W],
//!   window[half, half + 1..W] ]
//! ```
//!
//! DC always comes first so that dropping it is dropping index 0. This order
//! differs from the plain row-major order of the earlier Python feature
//! extractor (which puts the window corner first), so vectors produced by that
//! tool do not line up element by element with these.

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

use super::ensure_non_empty;
use crate::error::{SpectrumError, SpectrumResult};

/// Extract the unique coefficients of the `window_size x window_size` block
/// centred at `(rows / 2, cols / 2)` (integer division).
///
/// Returns [`unique_feature_len`]`(window_size, include_dc)` values. Fails with
/// [`SpectrumError::InvalidInput`] when `window_size` is zero or even, or when
/// the window does not fit inside the spectrum.
///
/// # Example
/// ```
/// # use ndarray::Array2;
/// # use spectrum_features_core::spectral::extract_unique_central_features;
/// let spectrum = Array2::<f64>::zeros((256, 256));
/// let with_dc = extract_unique_central_features(spectrum.view(), 11, true).unwrap();
/// let without_dc = extract_unique_central_features(spectrum.view(), 11, false).unwrap();
/// assert_eq!(with_dc.len(), 61);
/// assert_eq!(without_dc.len(), 60);
/// ```
pub fn extract_unique_central_features<A: Clone>(
    spectrum: ArrayView2<'_, A>,
    window_size: usize,
    include_dc: bool,
) -> SpectrumResult<Array1<A>> {
    let window = central_window(spectrum, window_size)?;
    let half = window_size / 2;

    let mut features = Vec::with_capacity(unique_feature_len(window_size, include_dc));
    if include_dc {
        features.push(window[[half, half]].clone());
    }
    for row in window.rows().into_iter().take(half) {
        features.extend(row.iter().cloned());
    }
    features.extend(window.slice(s![half, half + 1..]).iter().cloned());

    Ok(Array1::from(features))
}

/// Rebuild the full central window from a DC-inclusive feature vector.
///
/// Each coefficient below (or left of) the centre is copied from its point
/// mirror `(W - 1 - i, W - 1 - j)`. For a point-symmetric spectrum the result
/// equals the window the features were extracted from.
pub fn reconstruct_central_window<A: Clone>(
    features: ArrayView1<'_, A>,
    window_size: usize,
) -> SpectrumResult<Array2<A>> {
    validate_window_size(window_size)?;
    let expected = unique_feature_len(window_size, true);
    if features.len() != expected {
        return Err(SpectrumError::invalid_input(
            "features",
            format!("length {}", features.len()),
            format!("length {expected} for a {window_size}x{window_size} window including DC"),
        ));
    }

    let half = window_size / 2;
    let last = window_size - 1;
    let source = |i: usize, j: usize| -> usize {
        // Upper half and the right side of the centre row are stored directly.
        if i < half {
            1 + i * window_size + j
        } else {
            1 + half * window_size + (j - half - 1)
        }
    };

    Ok(Array2::from_shape_fn((window_size, window_size), |(i, j)| {
        let index = if i == half && j == half {
            0
        } else if i < half || (i == half && j > half) {
            source(i, j)
        } else {
            source(last - i, last - j)
        };
        features[index].clone()
    }))
}

/// Feature count for an odd `window_size`: `(W^2 - 1) / 2 + 1` with DC, one
/// less without. Saturates instead of overflowing for absurd window sizes.
pub fn unique_feature_len(window_size: usize, include_dc: bool) -> usize {
    let with_dc = window_size
        .checked_mul(window_size)
        .map_or(usize::MAX / 2 + 1, |area| area / 2 + area % 2);
    if include_dc {
        with_dc
    } else {
        with_dc.saturating_sub(1)
    }
}

fn validate_window_size(window_size: usize) -> SpectrumResult<()> {
    if window_size == 0 || window_size % 2 == 0 {
        return Err(SpectrumError::invalid_input(
            "window_size",
            window_size,
            "an odd positive integer",
        ));
    }
    Ok(())
}

fn central_window<A>(spectrum: ArrayView2<'_, A>, window_size: usize) -> SpectrumResult<ArrayView2<'_, A>> {
    ensure_non_empty(&spectrum, "spectrum")?;
    validate_window_size(window_size)?;

    let (rows, cols) = spectrum.dim();
    let (center_y, center_x) = (rows / 2, cols / 2);
    let half = window_size / 2;

    let fits = half <= center_y
        && center_y + half < rows
        && half <= center_x
        && center_x + half < cols;
    if !fits {
        return Err(SpectrumError::invalid_input(
            "window_size",
            window_size,
            format!(
                "a window centred at ({center_y}, {center_x}) that fits inside a {rows}x{cols} spectrum"
            ),
        ));
    }

    Ok(spectrum.slice_move(s![
        center_y - half..=center_y + half,
        center_x - half..=center_x + half
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rustfft::num_complex::Complex;

    fn numbered(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(i, j)| (i * cols + j) as f64)
    }

    #[test]
    fn test_feature_len_formula() {
        assert_eq!(unique_feature_len(1, true), 1);
        assert_eq!(unique_feature_len(1, false), 0);
        assert_eq!(unique_feature_len(3, true), 5);
        assert_eq!(unique_feature_len(11, true), 61);
        assert_eq!(unique_feature_len(11, false), 60);
    }

    #[test]
    fn test_feature_len_saturates_for_huge_windows() {
        let huge = usize::MAX / 2 + 1;
        assert_eq!(unique_feature_len(huge, true), usize::MAX / 2 + 1);
        assert_eq!(unique_feature_len(huge, false), usize::MAX / 2);
        assert!(extract_unique_central_features(numbered(3, 3).view(), usize::MAX, true).is_err());
    }

    #[test]
    fn test_three_by_three_layout() {
        // 5x5 grid, centre (2, 2); window rows 1..=3, cols 1..=3.
        let spectrum = numbered(5, 5);
        let features = extract_unique_central_features(spectrum.view(), 3, true).unwrap();
        assert_eq!(features.to_vec(), vec![12.0, 6.0, 7.0, 8.0, 13.0]);
    }

    #[test]
    fn test_dc_is_first_and_dropped_first() {
        let spectrum = numbered(8, 6);
        let with_dc = extract_unique_central_features(spectrum.view(), 5, true).unwrap();
        let without_dc = extract_unique_central_features(spectrum.view(), 5, false).unwrap();
        assert_eq!(with_dc[0], spectrum[[4, 3]]);
        assert_eq!(with_dc.slice(s![1..]), without_dc);
    }

    #[test]
    fn test_window_of_one_is_dc_only() {
        let spectrum = numbered(4, 4);
        let features = extract_unique_central_features(spectrum.view(), 1, true).unwrap();
        assert_eq!(features.to_vec(), vec![10.0]);
        let empty = extract_unique_central_features(spectrum.view(), 1, false).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_even_window_is_rejected() {
        let spectrum = numbered(9, 9);
        let err = extract_unique_central_features(spectrum.view(), 4, true).unwrap_err();
        assert!(matches!(err, SpectrumError::InvalidInput { .. }));
        assert!(extract_unique_central_features(spectrum.view(), 0, true).is_err());
    }

    #[test]
    fn test_window_must_fit_floor_center() {
        // 4 rows: centre row 2, so only rows 1..=3 are available for half = 1.
        let spectrum = numbered(4, 9);
        assert!(extract_unique_central_features(spectrum.view(), 3, true).is_ok());
        let err = extract_unique_central_features(spectrum.view(), 5, true).unwrap_err();
        assert!(err.to_string().contains("4x9"));

        let spectrum = numbered(5, 5);
        assert!(extract_unique_central_features(spectrum.view(), 5, true).is_ok());
        assert!(extract_unique_central_features(spectrum.view(), 7, true).is_err());
    }

    #[test]
    fn test_complex_coefficients_are_supported() {
        let spectrum = Array2::from_shape_fn((3, 3), |(i, j)| Complex::new(i as f64, j as f64));
        let features = extract_unique_central_features(spectrum.view(), 3, true).unwrap();
        assert_eq!(features[0], Complex::new(1.0, 1.0));
        assert_eq!(features.len(), 5);
    }

    #[test]
    fn test_reconstruct_mirrors_point_symmetric_window() {
        // Symmetric about (3, 3) in a 7x7 grid.
        let spectrum = Array2::from_shape_fn((7, 7), |(i, j)| {
            let (dy, dx) = (i as i64 - 3, j as i64 - 3);
            (dy * dy + 3 * dx * dx + dy * dx) as f64
        });
        let features = extract_unique_central_features(spectrum.view(), 5, true).unwrap();
        let window = reconstruct_central_window(features.view(), 5).unwrap();
        assert_eq!(window, spectrum.slice(s![1..6, 1..6]));
    }

    #[test]
    fn test_reconstruct_rejects_wrong_length() {
        let features = Array1::<f64>::zeros(4);
        assert!(reconstruct_central_window(features.view(), 3).is_err());
        assert!(reconstruct_central_window(features.view(), 2).is_err());
    }
}

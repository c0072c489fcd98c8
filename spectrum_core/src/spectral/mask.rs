//! Circular low-frequency removal followed by an inverse transform.
//!
//! The disc is centred at `(rows / 2, cols / 2)` with integer division, which
//! is where [`fft_shift`](super::fft::fft_shift) puts the DC term. Points with
//! `(x - cx)^2 + (y - cy)^2 <= radius^2` are zeroed, so the remaining spectrum
//! describes a high-pass filtered image.

use ndarray::{Array2, ArrayView2};
use rustfft::num_complex::Complex;

use super::ensure_non_empty;
use super::fft::{ifft2, ifft_shift};
use crate::error::SpectrumResult;

/// Boolean mask of the disc that [`apply_center_mask`] removes.
///
/// `true` marks a frequency inside the disc (blocked), `false` a frequency
/// that passes.
pub fn low_frequency_mask(shape: (usize, usize), radius: u32) -> Array2<bool> {
    let (rows, cols) = shape;
    let (center_y, center_x) = ((rows / 2) as i64, (cols / 2) as i64);
    let radius_sq = i64::from(radius) * i64::from(radius);

    Array2::from_shape_fn(shape, |(y, x)| {
        let dy = y as i64 - center_y;
        let dx = x as i64 - center_x;
        dx * dx + dy * dy <= radius_sq
    })
}

/// Copy of `spectrum` with every coefficient inside the disc set to zero.
pub fn apply_center_mask(
    spectrum: ArrayView2<'_, Complex<f64>>,
    radius: u32,
) -> SpectrumResult<Array2<Complex<f64>>> {
    ensure_non_empty(&spectrum, "spectrum")?;
    let mask = low_frequency_mask(spectrum.dim(), radius);

    let mut masked = spectrum.to_owned();
    masked.zip_mut_with(&mask, |value, &blocked| {
        if blocked {
            *value = Complex::new(0.0, 0.0);
        }
    });
    Ok(masked)
}

/// Mask the centred spectrum, undo the centring, inverse-transform and take
/// the magnitude.
///
/// The result has the same shape as `spectrum`. With `radius = 0` only the DC
/// term is removed, so the output is the image with its mean subtracted (in
/// magnitude).
///
/// # Example
/// ```
/// # use ndarray::Array2;
/// # use spectrum_features_core::spectral::{apply_center_mask_and_ifft, centered_spectrum, WindowFunction};
/// let image = Array2::<f64>::from_elem((8, 8), 3.0);
/// let centred = centered_spectrum(image.view(), WindowFunction::None).unwrap();
/// let filtered = apply_center_mask_and_ifft(centred.view(), 0).unwrap();
/// assert!(filtered.iter().all(|v| v.abs() < 1e-9));
/// ```
pub fn apply_center_mask_and_ifft(
    spectrum: ArrayView2<'_, Complex<f64>>,
    radius: u32,
) -> SpectrumResult<Array2<f64>> {
    let masked = apply_center_mask(spectrum, radius)?;
    let natural = ifft_shift(masked.view());
    let image = ifft2(natural.view())?;
    Ok(image.mapv(|z| z.norm()))
}

//! Frequency-domain analysis of grayscale images.
//!
//! Provides the forward/inverse transforms that produce centred spectra, the
//! azimuthally averaged radial profile, symmetry-reduced central coefficients,
//! and the circular high-pass mask used by the sweep animator.

pub mod central;
pub mod fft;
pub mod mask;
pub mod radial;

use ndarray::{ArrayView2, ArrayViewD, Ix2};

use crate::error::{SpectrumError, SpectrumResult};

pub use central::{extract_unique_central_features, reconstruct_central_window, unique_feature_len};
pub use fft::{
    centered_spectrum, fft2, fft_shift, ifft2, ifft_shift, magnitude, power, WindowFunction,
};
pub use mask::{apply_center_mask, apply_center_mask_and_ifft, low_frequency_mask};
pub use radial::{compute_radial_profile, radial_profile_len};

/// View a dynamically-shaped array as a 2-D spectrum.
///
/// Fails with [`SpectrumError::InvalidInput`] when the array is not 2-D or has
/// a zero-length axis.
///
/// # Example
/// ```
/// # use ndarray::{ArrayD, IxDyn};
/// # use spectrum_features_core::spectral::as_spectrum;
/// let flat = ArrayD::<f64>::zeros(IxDyn(&[16]));
/// assert!(as_spectrum(flat.view()).is_err());
/// ```
pub fn as_spectrum<'a, A>(array: ArrayViewD<'a, A>) -> SpectrumResult<ArrayView2<'a, A>> {
    let ndim = array.ndim();
    let spectrum = array
        .into_dimensionality::<Ix2>()
        .map_err(|_| SpectrumError::invalid_input("spectrum", format!("{ndim}-D array"), "a 2-D array"))?;
    ensure_non_empty(&spectrum, "spectrum")?;
    Ok(spectrum)
}

pub(crate) fn ensure_non_empty<A>(array: &ArrayView2<'_, A>, parameter: &str) -> SpectrumResult<()> {
    let (rows, cols) = array.dim();
    if rows == 0 || cols == 0 {
        return Err(SpectrumError::empty_array(parameter, (rows, cols)));
    }
    Ok(())
}

//! Forward and inverse 2-D Fourier transforms over `ndarray` grids.
//!
//! The transforms run separably with `rustfft`: one pass along every row, then
//! one pass along every column. The inverse is normalised by `1 / (rows * cols)`
//! so that `ifft2(fft2(x))` reproduces `x` up to rounding.
//!
//! [`fft_shift`] moves the zero-frequency term to index `(rows / 2, cols / 2)`;
//! every routine in [`crate::spectral`] that consumes a spectrum expects it in
//! this centred layout.

use ndarray::{Array2, ArrayView2, Axis};
use rustfft::{num_complex::Complex, FftDirection, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::ensure_non_empty;
use crate::error::SpectrumResult;

/// Window function applied to the image before the forward transform.
///
/// Windowing reduces spectral leakage by smoothly tapering the signal at edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowFunction {
    /// No windowing (rectangular)
    #[default]
    None,
    /// Hann window: 0.5 - 0.5*cos(2π*n/N)
    Hann,
    /// Hamming window: 0.54 - 0.46*cos(2π*n/N)
    Hamming,
}

impl WindowFunction {
    /// Generate window coefficients for a given length.
    pub fn generate(&self, n: usize) -> Vec<f64> {
        match self {
            WindowFunction::None => vec![1.0; n],
            WindowFunction::Hann => (0..n)
                .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / n as f64).cos())
                .collect(),
            WindowFunction::Hamming => (0..n)
                .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / n as f64).cos())
                .collect(),
        }
    }
}

/// Compute the 2-D DFT of a real-valued image.
///
/// The separable window is applied as the outer product of a row window and a
/// column window before transforming. The output is in natural (unshifted)
/// order with the zero-frequency term at `[0, 0]`.
///
/// # Example
/// ```
/// # use ndarray::Array2;
/// # use spectrum_features_core::spectral::{fft2, WindowFunction};
/// let image = Array2::<f64>::ones((4, 4));
/// let spectrum = fft2(image.view(), WindowFunction::None).unwrap();
/// assert!((spectrum[[0, 0]].re - 16.0).abs() < 1e-12);
/// ```
pub fn fft2<A>(image: ArrayView2<'_, A>, window: WindowFunction) -> SpectrumResult<Array2<Complex<f64>>>
where
    A: Copy + Into<f64>,
{
    ensure_non_empty(&image, "image")?;
    let (rows, cols) = image.dim();

    let row_window = window.generate(rows);
    let col_window = window.generate(cols);

    let mut data = Array2::from_shape_fn((rows, cols), |(i, j)| {
        let value: f64 = image[[i, j]].into();
        Complex::new(value * row_window[i] * col_window[j], 0.0)
    });

    transform_2d(&mut data, FftDirection::Forward);
    Ok(data)
}

/// Compute the normalised inverse 2-D DFT of a spectrum in natural order.
pub fn ifft2(spectrum: ArrayView2<'_, Complex<f64>>) -> SpectrumResult<Array2<Complex<f64>>> {
    ensure_non_empty(&spectrum, "spectrum")?;
    let (rows, cols) = spectrum.dim();

    let mut data = spectrum.to_owned();
    transform_2d(&mut data, FftDirection::Inverse);

    let scale = 1.0 / (rows * cols) as f64;
    data.mapv_inplace(|z| z * scale);
    Ok(data)
}

/// Forward transform followed by [`fft_shift`].
pub fn centered_spectrum<A>(
    image: ArrayView2<'_, A>,
    window: WindowFunction,
) -> SpectrumResult<Array2<Complex<f64>>>
where
    A: Copy + Into<f64>,
{
    let spectrum = fft2(image, window)?;
    Ok(fft_shift(spectrum.view()))
}

/// Move the zero-frequency term from `[0, 0]` to `[rows / 2, cols / 2]`.
pub fn fft_shift<T: Clone>(array: ArrayView2<'_, T>) -> Array2<T> {
    let (rows, cols) = array.dim();
    roll(array, rows / 2, cols / 2)
}

/// Exact inverse of [`fft_shift`], including for odd dimensions.
pub fn ifft_shift<T: Clone>(array: ArrayView2<'_, T>) -> Array2<T> {
    let (rows, cols) = array.dim();
    roll(array, rows - rows / 2, cols - cols / 2)
}

/// |z| for every coefficient.
pub fn magnitude(spectrum: ArrayView2<'_, Complex<f64>>) -> Array2<f64> {
    spectrum.mapv(|z| z.norm())
}

/// |z|^2 for every coefficient.
pub fn power(spectrum: ArrayView2<'_, Complex<f64>>) -> Array2<f64> {
    spectrum.mapv(|z| z.norm_sqr())
}

/// Cyclic shift: `out[i, j] = in[i - shift_rows, j - shift_cols]` (mod shape).
fn roll<T: Clone>(array: ArrayView2<'_, T>, shift_rows: usize, shift_cols: usize) -> Array2<T> {
    let (rows, cols) = array.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        array[[(i + rows - shift_rows) % rows, (j + cols - shift_cols) % cols]].clone()
    })
}

fn transform_2d(data: &mut Array2<Complex<f64>>, direction: FftDirection) {
    let (rows, cols) = data.dim();

    let mut planner = FftPlanner::new();
    let fft_row = planner.plan_fft(cols, direction);
    let fft_col = planner.plan_fft(rows, direction);

    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(rows.max(cols));

    // Lanes along axis 1 are rows, lanes along axis 0 are columns.
    for (axis, fft) in [(Axis(1), &fft_row), (Axis(0), &fft_col)] {
        for mut lane in data.lanes_mut(axis) {
            buffer.clear();
            buffer.extend(lane.iter().copied());
            fft.process(&mut buffer);
            lane.iter_mut()
                .zip(buffer.iter())
                .for_each(|(dst, src)| *dst = *src);
        }
    }
}

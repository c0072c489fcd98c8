//! Grayscale image input and output.

use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView2};

use crate::error::{ArtifactError, SpectrumError};

/// Decode an image file and convert it to 8-bit luma, as `(rows, cols)`.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, ArtifactError> {
    let gray = image::open(path.as_ref())?.into_luma8();
    let (width, height) = gray.dimensions();
    tracing::debug!(width, height, path = %path.as_ref().display(), "loaded grayscale image");
    Ok(Array2::from_shape_fn(
        (height as usize, width as usize),
        |(row, col)| f64::from(gray.get_pixel(col as u32, row as u32)[0]),
    ))
}

/// Encode an 8-bit grayscale array; the format follows the file extension.
pub fn save_grayscale<P: AsRef<Path>>(path: P, pixels: ArrayView2<'_, u8>) -> Result<(), ArtifactError> {
    let (rows, cols) = pixels.dim();
    if rows == 0 || cols == 0 {
        return Err(SpectrumError::empty_array("pixels", (rows, cols)).into());
    }

    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let image = GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([pixels[[y as usize, x as usize]]])
    });
    image.save(path)?;
    Ok(())
}

use std::fs;

use ndarray::Array2;
use spectrum_features_core::io::{load_grayscale, save_grayscale};
use spectrum_features_core::sweep::{compute_sweep_frames, default_radii, export_gif};
use spectrum_features_core::{
    apply_center_mask_and_ifft, centered_spectrum, create_hpf_sweep_gif, ArtifactError,
    PanelContent, SweepConfig, WindowFunction,
};

fn blob(size: usize) -> Array2<f64> {
    let center = size as f64 / 2.0;
    Array2::from_shape_fn((size, size), |(y, x)| {
        let r2 = (x as f64 - center).powi(2) + (y as f64 - center).powi(2);
        200.0 * (-r2 / 40.0).exp() + if (x + y) % 2 == 0 { 20.0 } else { 0.0 }
    })
}

#[test]
fn sweep_frames_match_mask_and_ifft_step() {
    let image = blob(32);
    let frames = compute_sweep_frames(image.view(), &[3], PanelContent::Spectrum).unwrap();

    let spectrum = centered_spectrum(image.view(), WindowFunction::None).unwrap();
    let filtered = apply_center_mask_and_ifft(spectrum.view(), 3).unwrap();
    let expected = spectrum_features_core::sweep::normalize_to_u8(filtered.view());
    assert_eq!(frames[0].right, expected);
}

#[test]
fn spectrum_panel_is_black_inside_removed_disc() {
    let image = blob(32);
    let frames = compute_sweep_frames(image.view(), &[4], PanelContent::Spectrum).unwrap();
    let left = &frames[0].left;
    assert_eq!(left[[16, 16]], 0);
    assert_eq!(left[[16, 20]], 0);
    assert_eq!(*left.iter().max().unwrap(), 255);
}

#[test]
fn hpf_sweep_writes_gif_with_explicit_radii() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        gif_filename: "sweep.gif".to_string(),
        save_path: Some(dir.path().join("gifs")),
        fps: 10,
        radii: Some(vec![0, 2, 6]),
        left_panel: PanelContent::Mask,
        annotate: false,
        ..SweepConfig::default()
    };

    let written = create_hpf_sweep_gif(blob(24).view(), &config).unwrap();
    assert_eq!(written, dir.path().join("gifs").join("sweep.gif"));
    let bytes = fs::read(&written).unwrap();
    assert!(bytes.starts_with(b"GIF89a") || bytes.starts_with(b"GIF87a"));
}

#[test]
fn hpf_sweep_falls_back_to_default_radii() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        save_path: Some(dir.path().to_path_buf()),
        num_frames: 5,
        annotate: false,
        ..SweepConfig::default()
    };
    assert_eq!(default_radii(16, 16, 5), vec![0, 2, 5, 8, 11]);

    let written = create_hpf_sweep_gif(blob(16).view(), &config).unwrap();
    assert!(written.ends_with("hpf_sweep.gif"));
    assert!(written.exists());
}

#[test]
fn export_without_frames_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = export_gif(&[], 15, dir.path().join("none.gif"), true).unwrap_err();
    assert!(matches!(err, ArtifactError::Spectrum(_)));
    assert!(!dir.path().join("none.gif").exists());
}

#[test]
fn final_high_pass_still_is_saved_next_to_gif() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        save_path: Some(dir.path().to_path_buf()),
        radii: Some(vec![0, 3, 7]),
        annotate: false,
        ..SweepConfig::default()
    };
    let image = blob(20);
    let gif = create_hpf_sweep_gif(image.view(), &config).unwrap();

    let frames = compute_sweep_frames(image.view(), &[7], config.left_panel).unwrap();
    let still = gif.with_extension("png");
    save_grayscale(&still, frames[0].right.view()).unwrap();

    let reloaded = load_grayscale(&still).unwrap();
    assert_eq!(reloaded.dim(), (20, 20));
    assert_eq!(reloaded, frames[0].right.mapv(f64::from));
}

//! JSON line-delimited run logs.
//!
//! Each record is one JSON object per line, appended to a file inside the
//! caller's log directory. Diagnostics that are not run records go through
//! `tracing` instead.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

pub const FEATURES_LOG: &str = "features.jsonl";
pub const SWEEPS_LOG: &str = "sweeps.jsonl";

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn log_path(dir: &Path, file: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(file))
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct FeatureLogEntry {
    pub source: String,
    pub timestamp_ms: u128,
    pub shape: [usize; 2],
    pub radial_bins: usize,
    pub radial_peak_bin: Option<usize>,
    pub window_size: usize,
    pub include_dc: bool,
    pub central_features: Vec<f64>,
}

/// Record one feature extraction run in `dir/features.jsonl`.
pub fn log_features<P: AsRef<Path>>(
    dir: P,
    source: &str,
    shape: (usize, usize),
    radial_profile: &[f64],
    window_size: usize,
    include_dc: bool,
    central_features: &[f64],
) -> io::Result<()> {
    let path = log_path(dir.as_ref(), FEATURES_LOG)?;
    let radial_peak_bin = radial_profile
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(idx, _)| idx);

    let entry = FeatureLogEntry {
        source: source.to_string(),
        timestamp_ms: timestamp_ms(),
        shape: [shape.0, shape.1],
        radial_bins: radial_profile.len(),
        radial_peak_bin,
        window_size,
        include_dc,
        central_features: central_features.to_vec(),
    };
    append_json_line(path, &entry)
}

#[derive(Debug, Serialize)]
pub struct SweepLogEntry {
    pub output: String,
    pub timestamp_ms: u128,
    pub radii: Vec<u32>,
    pub fps: u32,
    pub left_panel: String,
}

/// Record one exported sweep in `dir/sweeps.jsonl`.
pub fn log_sweep<P: AsRef<Path>>(
    dir: P,
    output: &Path,
    radii: &[u32],
    fps: u32,
    left_panel: &str,
) -> io::Result<()> {
    let path = log_path(dir.as_ref(), SWEEPS_LOG)?;
    let entry = SweepLogEntry {
        output: output.display().to_string(),
        timestamp_ms: timestamp_ms(),
        radii: radii.to_vec(),
        fps,
        left_panel: left_panel.to_string(),
    };
    append_json_line(path, &entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_features_appends_one_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let profile = [4.0, 9.0, 1.0];
        log_features(dir.path(), "a.png", (8, 8), &profile, 3, true, &[1.0, 2.0]).unwrap();
        log_features(dir.path(), "b.png", (8, 8), &profile, 3, false, &[2.0]).unwrap();

        let contents = fs::read_to_string(dir.path().join(FEATURES_LOG)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["source"], "a.png");
        assert_eq!(first["radial_peak_bin"], 1);
        assert_eq!(first["central_features"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn log_sweep_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        log_sweep(&logs, Path::new("out/sweep.gif"), &[0, 2, 4], 15, "mask").unwrap();

        let contents = fs::read_to_string(logs.join(SWEEPS_LOG)).unwrap();
        let entry: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(entry["fps"], 15);
        assert_eq!(entry["left_panel"], "mask");
        assert_eq!(entry["radii"], serde_json::json!([0, 2, 4]));
    }
}

//! Landmark dump reader.
//!
//! The pose detector and video decoder run upstream and leave a JSON
//! document (optionally gzipped): `fps` and `source` are optional metadata,
//! `frames` is one entry per video frame, `null` where no pose was detected,
//! otherwise the landmark array in index order. Arrays may be shorter or
//! longer than the 33 MediaPipe points; absent indices simply read as
//! missing landmarks.

use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::io::open_maybe_gz;
use crate::pose::{FrameLandmarks, Landmark};

#[derive(Debug, Deserialize)]
struct LandmarkDump {
    fps: Option<f64>,
    source: Option<String>,
    frames: Vec<Option<Vec<Landmark>>>,
}

#[derive(Debug)]
pub struct LandmarkFile {
    pub fps: Option<f64>,
    pub source: Option<String>,
    pub frames: Vec<Option<FrameLandmarks>>,
}

pub fn read_landmark_file(path: &Path) -> Result<LandmarkFile> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open landmark file {}", path.display()))?;
    let dump: LandmarkDump = serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("failed to parse landmark file {}", path.display()))?;
    let frames = dump
        .frames
        .into_iter()
        .map(|frame| frame.map(FrameLandmarks::new))
        .collect();
    Ok(LandmarkFile {
        fps: dump.fps,
        source: dump.source,
        frames,
    })
}

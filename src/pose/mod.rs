//! Pose landmark types shared by the whole pipeline.
//!
//! Landmarks use the MediaPipe Pose index convention: 33 points per frame,
//! x/y in normalized [0,1] image coordinates with y growing downward. The
//! detector runs upstream; this crate only consumes its per-frame output.

use serde::{Deserialize, Serialize};

pub mod validation;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

pub const LANDMARK_COUNT: usize = 33;

pub fn landmark_name(index: usize) -> &'static str {
    match index {
        NOSE => "nose",
        LEFT_SHOULDER => "left_shoulder",
        RIGHT_SHOULDER => "right_shoulder",
        LEFT_HIP => "left_hip",
        RIGHT_HIP => "right_hip",
        LEFT_KNEE => "left_knee",
        RIGHT_KNEE => "right_knee",
        LEFT_ANKLE => "left_ankle",
        RIGHT_ANKLE => "right_ankle",
        LEFT_HEEL => "left_heel",
        RIGHT_HEEL => "right_heel",
        LEFT_FOOT_INDEX => "left_foot_index",
        RIGHT_FOOT_INDEX => "right_foot_index",
        _ => "landmark",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub visibility: Option<f64>,
}

/// One detected pose: the landmark array for a single frame. Frames where
/// the detector found no pose are represented as `None` upstream, so an
/// existing `FrameLandmarks` always means "a pose was detected", even if
/// individual landmarks are unusable.
#[derive(Debug, Clone)]
pub struct FrameLandmarks {
    landmarks: Vec<Landmark>,
}

impl FrameLandmarks {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Coordinates of a landmark, or `None` when the landmark is absent
    /// (index out of range) or its coordinates are not finite numbers.
    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        let lm = self.landmarks.get(index)?;
        if lm.x.is_finite() && lm.y.is_finite() {
            Some((lm.x, lm.y))
        } else {
            None
        }
    }
}

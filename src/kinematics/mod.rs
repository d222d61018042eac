//! Per-frame angle extraction from pose landmarks.
//!
//! Bilateral joints are computed from the left and right landmark pairs
//! independently and averaged; a frame where either side is missing yields a
//! missing angle rather than a one-sided value. Asymmetry is the signed
//! right-minus-left difference in degrees.

use crate::pose::{self, FrameLandmarks};
use crate::series::AngleSeries;

pub mod angles;

#[derive(Debug, Clone)]
pub struct FormCalculation {
    pub torso: AngleSeries,
    pub quad: AngleSeries,
    pub ankle: AngleSeries,
    pub torso_asymmetry: AngleSeries,
    pub quad_asymmetry: AngleSeries,
    pub ankle_asymmetry: AngleSeries,
}

/// Landmark index pair defining one segment, ordered (from, to).
type SegmentPair = (usize, usize);

const TORSO_LEFT: SegmentPair = (pose::LEFT_HIP, pose::LEFT_SHOULDER);
const TORSO_RIGHT: SegmentPair = (pose::RIGHT_HIP, pose::RIGHT_SHOULDER);
const QUAD_LEFT: SegmentPair = (pose::LEFT_HIP, pose::LEFT_KNEE);
const QUAD_RIGHT: SegmentPair = (pose::RIGHT_HIP, pose::RIGHT_KNEE);
const ANKLE_LEFT: SegmentPair = (pose::LEFT_HEEL, pose::LEFT_KNEE);
const ANKLE_RIGHT: SegmentPair = (pose::RIGHT_HEEL, pose::RIGHT_KNEE);

pub fn calculate_squat_form(frames: &[Option<FrameLandmarks>]) -> FormCalculation {
    let (torso, torso_asymmetry) = bilateral_series(
        frames,
        TORSO_LEFT,
        TORSO_RIGHT,
        angles::segment_angle_from_vertical,
    );
    let (quad, quad_asymmetry) = bilateral_series(
        frames,
        QUAD_LEFT,
        QUAD_RIGHT,
        angles::segment_angle_from_vertical,
    );
    let (ankle, ankle_asymmetry) =
        bilateral_series(frames, ANKLE_LEFT, ANKLE_RIGHT, angles::shin_segment_angle);
    FormCalculation {
        torso,
        quad,
        ankle,
        torso_asymmetry,
        quad_asymmetry,
        ankle_asymmetry,
    }
}

/// Computes the averaged bilateral angle series and its right-minus-left
/// asymmetry series in one pass. Both are missing for a frame unless both
/// sides could be computed.
fn bilateral_series(
    frames: &[Option<FrameLandmarks>],
    left: SegmentPair,
    right: SegmentPair,
    angle_fn: fn((f64, f64), (f64, f64)) -> f64,
) -> (AngleSeries, AngleSeries) {
    let mut averaged = Vec::with_capacity(frames.len());
    let mut asymmetry = Vec::with_capacity(frames.len());
    for frame in frames {
        let left_angle = frame.as_ref().and_then(|f| side_angle(f, left, angle_fn));
        let right_angle = frame.as_ref().and_then(|f| side_angle(f, right, angle_fn));
        match (left_angle, right_angle) {
            (Some(l), Some(r)) => {
                averaged.push(Some((l + r) / 2.0));
                asymmetry.push(Some(r - l));
            }
            _ => {
                averaged.push(None);
                asymmetry.push(None);
            }
        }
    }
    (averaged, asymmetry)
}

fn side_angle(
    frame: &FrameLandmarks,
    pair: SegmentPair,
    angle_fn: fn((f64, f64), (f64, f64)) -> f64,
) -> Option<f64> {
    let p1 = frame.point(pair.0)?;
    let p2 = frame.point(pair.1)?;
    Some(angle_fn(p1, p2))
}

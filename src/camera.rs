//! Camera viewpoint estimation.
//!
//! The recording angle is inferred from how foreshortened the shoulder and
//! hip widths look relative to torso length: seen head-on both widths sit
//! near a fixed fraction of the torso, and they shrink with the cosine of
//! the rotation as the subject turns away from the camera. The per-frame
//! estimates are summarized with a median so a few bad pose frames cannot
//! swing the verdict.

use crate::math::stats;
use crate::pose::{self, FrameLandmarks};

/// Estimates beyond this many degrees from frontal are unusable for
/// measurement and reject the whole video.
pub const MAX_CAMERA_ANGLE_DEG: f64 = 25.0;

/// Front-view gate for the valgus analyzer.
pub const FRONT_VIEW_MAX_DEG: f64 = 10.0;

const FRONTAL_SHOULDER_RATIO: f64 = 0.65;
const FRONTAL_HIP_RATIO: f64 = 0.45;
const MIN_TORSO_LEN: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct CameraAngleInfo {
    pub angle_estimate: Option<f64>,
    pub should_reject: bool,
    pub message: String,
}

pub fn estimate_camera_angle(frames: &[Option<FrameLandmarks>]) -> CameraAngleInfo {
    let mut estimates: Vec<f64> = frames
        .iter()
        .filter_map(|frame| frame.as_ref().and_then(frame_estimate))
        .collect();
    if estimates.is_empty() {
        return CameraAngleInfo {
            angle_estimate: None,
            should_reject: false,
            message: "Camera angle could not be estimated (insufficient landmark data)."
                .to_string(),
        };
    }

    let angle = stats::median(&mut estimates);
    let (should_reject, message) = if angle > MAX_CAMERA_ANGLE_DEG {
        (
            true,
            format!(
                "Camera angle too extreme (estimated {:.1}° from frontal). Accurate measurement requires a near-frontal view.",
                angle
            ),
        )
    } else if angle <= FRONT_VIEW_MAX_DEG {
        (
            false,
            format!("Front view detected (estimated {:.1}° from frontal).", angle),
        )
    } else {
        (
            false,
            format!(
                "Oblique view detected (estimated {:.1}° from frontal). Measurements remain usable.",
                angle
            ),
        )
    };
    CameraAngleInfo {
        angle_estimate: Some(angle),
        should_reject,
        message,
    }
}

pub fn is_front_view(info: Option<&CameraAngleInfo>) -> bool {
    match info.and_then(|i| i.angle_estimate) {
        Some(angle) => angle.abs() <= FRONT_VIEW_MAX_DEG,
        None => false,
    }
}

fn frame_estimate(frame: &FrameLandmarks) -> Option<f64> {
    let ls = frame.point(pose::LEFT_SHOULDER)?;
    let rs = frame.point(pose::RIGHT_SHOULDER)?;
    let lh = frame.point(pose::LEFT_HIP)?;
    let rh = frame.point(pose::RIGHT_HIP)?;

    let shoulder_width = (ls.0 - rs.0).abs();
    let hip_width = (lh.0 - rh.0).abs();
    let shoulder_mid = ((ls.0 + rs.0) / 2.0, (ls.1 + rs.1) / 2.0);
    let hip_mid = ((lh.0 + rh.0) / 2.0, (lh.1 + rh.1) / 2.0);
    let torso_len =
        ((shoulder_mid.0 - hip_mid.0).powi(2) + (shoulder_mid.1 - hip_mid.1).powi(2)).sqrt();
    if torso_len < MIN_TORSO_LEN {
        return None;
    }

    let shoulder_angle = width_angle(shoulder_width / torso_len, FRONTAL_SHOULDER_RATIO);
    let hip_angle = width_angle(hip_width / torso_len, FRONTAL_HIP_RATIO);
    Some((shoulder_angle + hip_angle) / 2.0)
}

fn width_angle(ratio: f64, frontal_ratio: f64) -> f64 {
    (ratio / frontal_ratio).clamp(0.0, 1.0).acos().to_degrees()
}

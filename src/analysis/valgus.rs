//! Knee valgus/varus analyzer (front view only).
//!
//! The frontal plane projection angle (FPPA) at the knee is 180° for a
//! neutral leg; values below 180° mean the knee collapses inward (valgus),
//! above 180° outward (varus). The verdict is on the single largest
//! deviation from 180° across the in-rep frames. Varus at the same deviation
//! is scored more leniently than valgus: the injury evidence linking varus
//! to ACL risk is weaker, so it caps at warning.

use crate::analysis::{MetricStatus, ValgusMetric, round1};
use crate::camera::{self, CameraAngleInfo};
use crate::kinematics::angles;
use crate::phases::Rep;
use crate::pose::{self, FrameLandmarks};
use crate::series::AngleSeries;

const NEUTRAL_FPPA_DEG: f64 = 180.0;
const MINIMAL_DEVIATION_DEG: f64 = 4.0;
const MODERATE_DEVIATION_DEG: f64 = 8.0;

pub fn analyze_knee_valgus(
    frames: &[Option<FrameLandmarks>],
    reps: &[Rep],
    camera: Option<&CameraAngleInfo>,
) -> ValgusMetric {
    if !camera::is_front_view(camera) {
        return error("Knee valgus analysis requires a front camera view (within 10° of frontal)");
    }
    if frames.is_empty() || reps.is_empty() {
        return error("Missing landmarks or rep data");
    }

    let mut fppa_per_frame = fppa_series(frames);
    mask_outside_reps(&mut fppa_per_frame, reps);
    let mut worst: Option<(usize, f64, f64)> = None;
    for rep in reps {
        for frame in rep.start_frame..=rep.end_frame {
            let Some(fppa) = fppa_per_frame.get(frame).copied().flatten() else {
                continue;
            };
            let deviation = (NEUTRAL_FPPA_DEG - fppa).abs();
            if worst.map_or(true, |(_, _, d)| deviation > d) {
                worst = Some((frame, fppa, deviation));
            }
        }
    }
    let Some((frame, fppa, deviation)) = worst else {
        return ValgusMetric {
            status: MetricStatus::Error,
            score: None,
            max_deviation: None,
            fppa: None,
            frame: None,
            fppa_per_frame,
            message: "No valid FPPA data available".to_string(),
        };
    };

    let is_valgus = fppa < NEUTRAL_FPPA_DEG;
    let (status, score, message) = if deviation < MINIMAL_DEVIATION_DEG {
        (
            MetricStatus::Good,
            100.0,
            format!(
                "Minimal knee valgus/varus detected. FPPA: {:.1}° (deviation from 180°: {:.1}°). Research indicates this is within safe range.",
                round1(fppa),
                round1(deviation)
            ),
        )
    } else if deviation < MODERATE_DEVIATION_DEG {
        if is_valgus {
            (
                MetricStatus::Warning,
                75.0,
                format!(
                    "Moderate knee valgus detected. FPPA: {:.1}° (deviation: {:.1}°). Research suggests this may increase injury risk. Focus on hip abductor and external rotator strength.",
                    round1(fppa),
                    round1(deviation)
                ),
            )
        } else {
            (
                MetricStatus::Warning,
                75.0,
                format!(
                    "Moderate knee varus detected. FPPA: {:.1}° (deviation: {:.1}°). While less commonly associated with ACL injuries than valgus, varus alignment may indicate biomechanical issues. Consider addressing movement patterns.",
                    round1(fppa),
                    round1(deviation)
                ),
            )
        }
    } else if is_valgus {
        (
            MetricStatus::Poor,
            50.0,
            format!(
                "Significant knee valgus detected. FPPA: {:.1}° (knee inward, deviation: {:.1}°). Research indicates valgus significantly increases risk of ACL and patellofemoral injuries. Address hip abductor and external rotator weakness, and improve movement patterns.",
                round1(fppa),
                round1(deviation)
            ),
        )
    } else {
        (
            MetricStatus::Warning,
            75.0,
            format!(
                "Significant knee varus detected. FPPA: {:.1}° (knee outward, deviation: {:.1}°). While varus is less commonly associated with ACL injuries than valgus, significant varus may indicate biomechanical issues or compensation patterns. Consider addressing movement patterns and lower limb alignment.",
                round1(fppa),
                round1(deviation)
            ),
        )
    };

    ValgusMetric {
        status,
        score: Some(score),
        max_deviation: Some(round1(deviation)),
        fppa: Some(round1(fppa)),
        frame: Some(frame),
        fppa_per_frame,
        message,
    }
}

/// Frame-aligned FPPA series: the left and right knee angles averaged, or
/// missing unless both sides could be computed for the frame.
pub fn fppa_series(frames: &[Option<FrameLandmarks>]) -> AngleSeries {
    frames
        .iter()
        .map(|frame| frame.as_ref().and_then(frame_fppa))
        .collect()
}

/// The reported series only carries in-rep frames; everything between and
/// around the reps is masked to missing.
fn mask_outside_reps(series: &mut [Option<f64>], reps: &[Rep]) {
    for (frame, value) in series.iter_mut().enumerate() {
        let in_rep = reps
            .iter()
            .any(|rep| (rep.start_frame..=rep.end_frame).contains(&frame));
        if !in_rep {
            *value = None;
        }
    }
}

fn frame_fppa(frame: &FrameLandmarks) -> Option<f64> {
    let left = side_fppa(frame, pose::LEFT_HIP, pose::LEFT_KNEE, pose::LEFT_ANKLE)?;
    let right = side_fppa(frame, pose::RIGHT_HIP, pose::RIGHT_KNEE, pose::RIGHT_ANKLE)?;
    Some((left + right) / 2.0)
}

fn side_fppa(frame: &FrameLandmarks, hip: usize, knee: usize, ankle: usize) -> Option<f64> {
    let hip = frame.point(hip)?;
    let knee = frame.point(knee)?;
    let ankle = frame.point(ankle)?;
    angles::knee_fppa(hip, knee, ankle)
}

fn error(message: &str) -> ValgusMetric {
    ValgusMetric {
        status: MetricStatus::Error,
        score: None,
        max_deviation: None,
        fppa: None,
        frame: None,
        fppa_per_frame: Vec::new(),
        message: message.to_string(),
    }
}

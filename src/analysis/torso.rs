//! Torso lean analyzer.
//!
//! Gate on the worst (max) forward lean across the active frames, then rank
//! the average against the 35-43 degree research optimum.

use crate::analysis::{AngleMetric, MetricStatus, round1};
use crate::pose::validation::BatchValidation;
use crate::series::valid_values;

const MAX_LEAN_GOOD_DEG: f64 = 43.0;
const MAX_LEAN_WARN_DEG: f64 = 45.0;
const OPTIMAL_AVG_MIN_DEG: f64 = 35.0;
const OPTIMAL_AVG_MAX_DEG: f64 = 43.0;

pub fn analyze_torso_angle(
    active: &[Option<f64>],
    validation: Option<&BatchValidation>,
) -> AngleMetric {
    if let Some(batch) = validation {
        if !batch.overall_valid {
            return error(format!(
                "Insufficient pose detection ({:.0}% of frames). Please ensure person is fully visible.",
                batch.valid_frame_percentage * 100.0
            ));
        }
    }
    let values = valid_values(active);
    if values.is_empty() {
        return error("No torso angle data available".to_string());
    }

    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let avg = values.iter().sum::<f64>() / values.len() as f64;

    let (status, score, message) = if max <= MAX_LEAN_GOOD_DEG {
        if (OPTIMAL_AVG_MIN_DEG..=OPTIMAL_AVG_MAX_DEG).contains(&avg) {
            (
                MetricStatus::Good,
                100.0,
                format!(
                    "Excellent torso position. Average forward lean: {:.1}° (within research-based optimal range: 35-43°).",
                    round1(avg)
                ),
            )
        } else if avg < OPTIMAL_AVG_MIN_DEG {
            (
                MetricStatus::Good,
                95.0,
                format!(
                    "Good torso position. Average forward lean: {:.1}° (below optimal 35-43° range, but acceptable).",
                    round1(avg)
                ),
            )
        } else {
            (
                MetricStatus::Good,
                90.0,
                format!(
                    "Good torso position. Average forward lean: {:.1}° (within acceptable range, optimal: 35-43°).",
                    round1(avg)
                ),
            )
        }
    } else if max <= MAX_LEAN_WARN_DEG {
        (
            MetricStatus::Warning,
            75.0,
            format!(
                "Moderate forward lean detected. Max angle: {:.1}° (slightly above optimal 35-43° range). Maintain upright posture to optimize performance.",
                round1(max)
            ),
        )
    } else {
        (
            MetricStatus::Poor,
            50.0,
            format!(
                "Excessive forward lean detected. Max angle: {:.1}° (>45°). Research indicates this exceeds recommended range and may reduce squat effectiveness.",
                round1(max)
            ),
        )
    };

    AngleMetric {
        status,
        score: Some(score),
        max_angle: Some(round1(max)),
        avg_angle: Some(round1(avg)),
        message,
    }
}

fn error(message: String) -> AngleMetric {
    AngleMetric {
        status: MetricStatus::Error,
        score: None,
        max_angle: None,
        avg_angle: None,
        message,
    }
}

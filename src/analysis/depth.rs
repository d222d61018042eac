//! Squat depth analyzer.
//!
//! The maximum quad angle across the active frames is the deepest point of
//! the set; 70 degrees and up means the hip crease travelled below the knee.

use crate::analysis::{AngleMetric, MetricStatus, round1};
use crate::series::valid_values;

const FULL_DEPTH_DEG: f64 = 70.0;
const PARTIAL_DEPTH_DEG: f64 = 60.0;

pub fn analyze_squat_depth(active: &[Option<f64>]) -> AngleMetric {
    let values = valid_values(active);
    if values.is_empty() {
        return AngleMetric {
            status: MetricStatus::Error,
            score: None,
            max_angle: None,
            avg_angle: None,
            message: "No quad angle data available".to_string(),
        };
    }

    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let avg = values.iter().sum::<f64>() / values.len() as f64;

    let (status, score, message) = if max >= FULL_DEPTH_DEG {
        (
            MetricStatus::Good,
            100.0,
            format!(
                "Excellent squat depth. Maximum quad angle: {:.1}° (full depth achieved, hip crease below knee).",
                round1(max)
            ),
        )
    } else if max >= PARTIAL_DEPTH_DEG {
        (
            MetricStatus::Warning,
            75.0,
            format!(
                "Partial squat depth. Maximum quad angle: {:.1}° (hip crease at or slightly above knee). Aim for deeper squats (quad angle ≥70°) for optimal muscle activation.",
                round1(max)
            ),
        )
    } else {
        (
            MetricStatus::Poor,
            50.0,
            format!(
                "Insufficient squat depth. Maximum quad angle: {:.1}° (<60°). Research indicates full depth (hip crease below knee, quad angle ≥70°) is important for muscle development and safety.",
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

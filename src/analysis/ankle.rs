//! Ankle mobility analyzer.
//!
//! The shin angle drops as the knee travels forward over the foot, so the
//! minimum across the active frames is the deepest dorsiflexion reached.

use crate::analysis::{AnkleMetric, MetricStatus, round1};
use crate::series::valid_values;

const GOOD_MOBILITY_DEG: f64 = 60.0;
const MODERATE_MOBILITY_DEG: f64 = 70.0;

pub fn analyze_ankle_mobility(active: &[Option<f64>]) -> AnkleMetric {
    let values = valid_values(active);
    if values.is_empty() {
        return AnkleMetric {
            status: MetricStatus::Error,
            score: None,
            min_angle: None,
            avg_angle: None,
            message: "No ankle angle data available".to_string(),
        };
    }

    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let avg = values.iter().sum::<f64>() / values.len() as f64;

    let (status, score, message) = if min <= GOOD_MOBILITY_DEG {
        (
            MetricStatus::Good,
            100.0,
            format!(
                "Good ankle mobility. Minimum angle: {:.1}° (adequate dorsiflexion range observed).",
                round1(min)
            ),
        )
    } else if min <= MODERATE_MOBILITY_DEG {
        (
            MetricStatus::Warning,
            75.0,
            format!(
                "Moderate ankle mobility. Minimum angle: {:.1}° (may limit squat depth). Research indicates limited ankle dorsiflexion can restrict squat depth.",
                round1(min)
            ),
        )
    } else {
        (
            MetricStatus::Poor,
            50.0,
            format!(
                "Limited ankle mobility. Minimum angle: {:.1}° (>70°). Research shows restricted dorsiflexion can limit squat depth and cause compensation patterns.",
                round1(min)
            ),
        )
    };

    AnkleMetric {
        status,
        score: Some(score),
        min_angle: Some(round1(min)),
        avg_angle: Some(round1(avg)),
        message,
    }
}

//! Left/right asymmetry analyzer, shared by the torso, quad and ankle
//! asymmetry components. The series carries signed right-minus-left
//! differences; the verdict is on the largest absolute deviation.

use crate::analysis::{AsymmetryMetric, MetricStatus, round1};
use crate::series::valid_values;

const MINIMAL_ASYMMETRY_DEG: f64 = 5.0;
const MODERATE_ASYMMETRY_DEG: f64 = 10.0;

pub fn analyze_asymmetry(active: &[Option<f64>], side: &str) -> AsymmetryMetric {
    let values = valid_values(active);
    if values.is_empty() {
        return AsymmetryMetric {
            status: MetricStatus::Error,
            score: None,
            max_asymmetry: None,
            avg_asymmetry: None,
            message: format!("No {} asymmetry data available", side),
        };
    }

    let abs: Vec<f64> = values.iter().map(|v| v.abs()).collect();
    let max = abs.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let avg = abs.iter().sum::<f64>() / abs.len() as f64;

    let (status, score, message) = if max < MINIMAL_ASYMMETRY_DEG {
        (
            MetricStatus::Good,
            100.0,
            format!(
                "Minimal asymmetry detected. Maximum difference: {:.1}° (within acceptable range <5°).",
                round1(max)
            ),
        )
    } else if max < MODERATE_ASYMMETRY_DEG {
        (
            MetricStatus::Warning,
            75.0,
            format!(
                "Moderate {} asymmetry detected. Maximum difference: {:.1}° (5-10° range). Research indicates asymmetries >10% may require compensatory strategies.",
                side,
                round1(max)
            ),
        )
    } else {
        (
            MetricStatus::Poor,
            50.0,
            format!(
                "Significant {} asymmetry detected. Maximum difference: {:.1}° (>10°). Research shows asymmetries >10° can increase injury risk and impair performance.",
                side,
                round1(max)
            ),
        )
    };

    AsymmetryMetric {
        status,
        score: Some(score),
        max_asymmetry: Some(round1(max)),
        avg_asymmetry: Some(round1(avg)),
        message,
    }
}

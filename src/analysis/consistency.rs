//! Rep-to-rep consistency analyzer.
//!
//! Each rep is reduced to three summaries (deepest quad angle, average torso
//! lean, average signed quad asymmetry); the coefficient of variation of
//! each summary across reps drives a sub-verdict, and the overall score is
//! the unweighted mean of the sub-scores that could be computed.

use crate::analysis::{ConsistencyMetric, ConsistencySub, MetricStatus, round1};
use crate::kinematics::FormCalculation;
use crate::math::stats;
use crate::phases::Rep;

const CV_GOOD_PCT: f64 = 5.0;
const CV_WARN_PCT: f64 = 10.0;

const OVERALL_GOOD_SCORE: f64 = 90.0;
const OVERALL_WARN_SCORE: f64 = 60.0;

pub fn analyze_rep_consistency(calc: &FormCalculation, reps: &[Rep]) -> ConsistencyMetric {
    if reps.len() < 2 {
        return ConsistencyMetric {
            status: MetricStatus::Error,
            score: None,
            rep_count: reps.len(),
            depth: error_sub("depth"),
            torso: error_sub("torso"),
            asymmetry: error_sub("asymmetry"),
            message: "Need at least 2 reps for consistency analysis".to_string(),
        };
    }

    let depth_values = per_rep_values(&calc.quad, reps, |v| {
        v.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
    });
    let torso_values = per_rep_values(&calc.torso, reps, stats::mean);
    let asym_values = per_rep_values(&calc.quad_asymmetry, reps, stats::mean);

    let depth = consistency_sub(&depth_values, "depth");
    let torso = consistency_sub(&torso_values, "torso");
    let asymmetry = consistency_sub(&asym_values, "asymmetry");

    let sub_scores: Vec<f64> = [&depth, &torso, &asymmetry]
        .iter()
        .filter_map(|s| s.score)
        .collect();
    if sub_scores.is_empty() {
        return ConsistencyMetric {
            status: MetricStatus::Error,
            score: None,
            rep_count: reps.len(),
            depth,
            torso,
            asymmetry,
            message: "Insufficient data for consistency analysis".to_string(),
        };
    }

    let overall = stats::mean(&sub_scores).round();
    let (status, message) = if overall >= OVERALL_GOOD_SCORE {
        (
            MetricStatus::Good,
            format!(
                "Excellent rep-to-rep consistency across {} reps.",
                reps.len()
            ),
        )
    } else if overall >= OVERALL_WARN_SCORE {
        (
            MetricStatus::Warning,
            format!("Moderate rep-to-rep variability across {} reps.", reps.len()),
        )
    } else {
        (
            MetricStatus::Poor,
            format!("High rep-to-rep variability across {} reps.", reps.len()),
        )
    };

    ConsistencyMetric {
        status,
        score: Some(overall),
        rep_count: reps.len(),
        depth,
        torso,
        asymmetry,
        message,
    }
}

/// One summary value per rep; reps with no valid samples are skipped rather
/// than contributing a placeholder.
fn per_rep_values(series: &[Option<f64>], reps: &[Rep], summarize: fn(&[f64]) -> f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(reps.len());
    for rep in reps {
        let values: Vec<f64> = (rep.start_frame..=rep.end_frame)
            .filter_map(|i| series.get(i).copied().flatten())
            .collect();
        if !values.is_empty() {
            out.push(summarize(&values));
        }
    }
    out
}

fn consistency_sub(values: &[f64], name: &str) -> ConsistencySub {
    if values.len() < 2 {
        return error_sub(name);
    }
    let Some(cv) = stats::coefficient_of_variation(values) else {
        return ConsistencySub {
            status: MetricStatus::Error,
            score: None,
            cv: None,
            mean: Some(round1(stats::mean(values))),
            std: Some(round1(stats::population_std(values))),
            message: "Insufficient data for consistency analysis".to_string(),
        };
    };

    let (status, score, message) = if cv < CV_GOOD_PCT {
        (
            MetricStatus::Good,
            100.0,
            format!(
                "Excellent {} consistency (CV: {:.1}%). Reps are very consistent.",
                name,
                round1(cv)
            ),
        )
    } else if cv < CV_WARN_PCT {
        (
            MetricStatus::Warning,
            75.0,
            format!(
                "Moderate {} variability (CV: {:.1}%). Some inconsistency detected across reps.",
                name,
                round1(cv)
            ),
        )
    } else {
        (
            MetricStatus::Poor,
            50.0,
            format!(
                "Significant {} variability (CV: {:.1}%). High inconsistency suggests fatigue or form breakdown.",
                name,
                round1(cv)
            ),
        )
    };

    ConsistencySub {
        status,
        score: Some(score),
        cv: Some(round1(cv)),
        mean: Some(round1(stats::mean(values))),
        std: Some(round1(stats::population_std(values))),
        message,
    }
}

fn error_sub(name: &str) -> ConsistencySub {
    ConsistencySub {
        status: MetricStatus::Error,
        score: None,
        cv: None,
        mean: None,
        std: None,
        message: format!("No {} data", name),
    }
}

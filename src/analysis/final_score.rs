//! Weighted final score and letter grade.
//!
//! Components in error state carry no score and are excluded from both the
//! numerator and the denominator, so a video where only two components could
//! be measured is still graded on what was measured. The ankle angle and
//! knee valgus components are reported but carry no weight.

use std::collections::BTreeMap;

use crate::analysis::{FinalScoreResult, Grade};

pub const WEIGHTS: &[(&str, f64)] = &[
    ("torso_angle", 0.25),
    ("quad_angle", 0.25),
    ("glute_dominance", 0.12),
    ("rep_consistency", 0.18),
    ("torso_asymmetry", 0.08),
    ("quad_asymmetry", 0.07),
    ("ankle_asymmetry", 0.05),
];

const GRADE_EXCELLENT: f64 = 90.0;
const GRADE_GOOD: f64 = 75.0;
const GRADE_FAIR: f64 = 60.0;

pub fn calculate_final_score(components: &[(&str, Option<f64>)]) -> FinalScoreResult {
    let mut component_scores = BTreeMap::new();
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for &(name, score) in components {
        let Some(score) = score else { continue };
        component_scores.insert(name.to_string(), score);
        if let Some(&(_, weight)) = WEIGHTS.iter().find(|(n, _)| *n == name) {
            weighted_sum += score * weight;
            weight_sum += weight;
        }
    }

    // The reported weight table is the full configuration; renormalization
    // over the measured components stays internal.
    let weights: BTreeMap<String, f64> = WEIGHTS
        .iter()
        .map(|&(name, weight)| (name.to_string(), weight))
        .collect();

    let final_score = if weight_sum > 0.0 {
        (weighted_sum / weight_sum).round() as u32
    } else {
        0
    };

    let grade = if final_score as f64 >= GRADE_EXCELLENT {
        Grade::Excellent
    } else if final_score as f64 >= GRADE_GOOD {
        Grade::Good
    } else if final_score as f64 >= GRADE_FAIR {
        Grade::Fair
    } else {
        Grade::NeedsImprovement
    };

    FinalScoreResult {
        final_score,
        grade,
        component_scores,
        weights,
    }
}

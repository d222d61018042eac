//! Metric analyzers and score aggregation.
//!
//! Each analyzer maps one or more angle series (restricted to the active,
//! in-rep frames where that matters) to a status, a 0-100 score and a
//! human-readable message. Analyzers fail independently: missing data turns
//! into an error-status result, never into an aborted run. Thresholds are
//! fixed research-derived constants and live next to the analyzer that uses
//! them.

use std::collections::BTreeMap;

use crate::camera::CameraAngleInfo;
use crate::kinematics::FormCalculation;
use crate::phases::Rep;
use crate::pose::FrameLandmarks;
use crate::pose::validation::BatchValidation;
use crate::series::{self, AngleSeries};

pub mod ankle;
pub mod asymmetry;
pub mod consistency;
pub mod depth;
pub mod dominance;
pub mod final_score;
pub mod torso;
pub mod valgus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Good,
    Warning,
    Poor,
    Error,
}

impl MetricStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::Good => "good",
            MetricStatus::Warning => "warning",
            MetricStatus::Poor => "poor",
            MetricStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Fair => "Fair",
            Grade::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Torso and quad (depth) results: gated on the max angle, reported with the
/// average alongside.
#[derive(Debug, Clone)]
pub struct AngleMetric {
    pub status: MetricStatus,
    pub score: Option<f64>,
    pub max_angle: Option<f64>,
    pub avg_angle: Option<f64>,
    pub message: String,
}

/// Ankle mobility: the minimum angle is the deepest dorsiflexion seen.
#[derive(Debug, Clone)]
pub struct AnkleMetric {
    pub status: MetricStatus,
    pub score: Option<f64>,
    pub min_angle: Option<f64>,
    pub avg_angle: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AsymmetryMetric {
    pub status: MetricStatus,
    pub score: Option<f64>,
    pub max_asymmetry: Option<f64>,
    pub avg_asymmetry: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ConsistencySub {
    pub status: MetricStatus,
    pub score: Option<f64>,
    pub cv: Option<f64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ConsistencyMetric {
    pub status: MetricStatus,
    pub score: Option<f64>,
    pub rep_count: usize,
    pub depth: ConsistencySub,
    pub torso: ConsistencySub,
    pub asymmetry: ConsistencySub,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DominanceMetric {
    pub status: MetricStatus,
    pub score: Option<f64>,
    pub avg_timing_diff_ms: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValgusMetric {
    pub status: MetricStatus,
    pub score: Option<f64>,
    pub max_deviation: Option<f64>,
    pub fppa: Option<f64>,
    pub frame: Option<usize>,
    pub fppa_per_frame: AngleSeries,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FinalScoreResult {
    pub final_score: u32,
    pub grade: Grade,
    pub component_scores: BTreeMap<String, f64>,
    pub weights: BTreeMap<String, f64>,
}

/// The complete per-video analysis: all nine components plus the aggregate.
/// Every component is always present; failed ones carry error status and an
/// explanatory message rather than being omitted.
#[derive(Debug, Clone)]
pub struct FormAnalysis {
    pub torso_angle: AngleMetric,
    pub quad_angle: AngleMetric,
    pub ankle_angle: AnkleMetric,
    pub torso_asymmetry: AsymmetryMetric,
    pub quad_asymmetry: AsymmetryMetric,
    pub ankle_asymmetry: AsymmetryMetric,
    pub rep_consistency: ConsistencyMetric,
    pub glute_dominance: DominanceMetric,
    pub knee_valgus: ValgusMetric,
    pub final_score: FinalScoreResult,
}

impl FormAnalysis {
    pub fn error_components(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut push = |name, status: MetricStatus| {
            if status == MetricStatus::Error {
                out.push(name);
            }
        };
        push("torso_angle", self.torso_angle.status);
        push("quad_angle", self.quad_angle.status);
        push("ankle_angle", self.ankle_angle.status);
        push("torso_asymmetry", self.torso_asymmetry.status);
        push("quad_asymmetry", self.quad_asymmetry.status);
        push("ankle_asymmetry", self.ankle_asymmetry.status);
        push("rep_consistency", self.rep_consistency.status);
        push("glute_dominance", self.glute_dominance.status);
        push("knee_valgus", self.knee_valgus.status);
        out
    }
}

/// Runs every squat analyzer and aggregates the final score. Analyzers that
/// cannot run report error status; the aggregate excludes them from the
/// weighting instead of scoring them as zero.
pub fn analyze_squat_form(
    calc: &FormCalculation,
    reps: &[Rep],
    fps: f64,
    camera: Option<&CameraAngleInfo>,
    frames: &[Option<FrameLandmarks>],
    validation: Option<&BatchValidation>,
) -> FormAnalysis {
    let active_torso = series::active_phases(&calc.torso, reps);
    let active_quad = series::active_phases(&calc.quad, reps);
    let active_ankle = series::active_phases(&calc.ankle, reps);
    let active_torso_asym = series::active_phases(&calc.torso_asymmetry, reps);
    let active_quad_asym = series::active_phases(&calc.quad_asymmetry, reps);
    let active_ankle_asym = series::active_phases(&calc.ankle_asymmetry, reps);

    let torso_angle = torso::analyze_torso_angle(&active_torso, validation);
    let quad_angle = depth::analyze_squat_depth(&active_quad);
    let ankle_angle = ankle::analyze_ankle_mobility(&active_ankle);
    let torso_asymmetry = asymmetry::analyze_asymmetry(&active_torso_asym, "torso");
    let quad_asymmetry = asymmetry::analyze_asymmetry(&active_quad_asym, "quad");
    let ankle_asymmetry = asymmetry::analyze_asymmetry(&active_ankle_asym, "ankle");
    let rep_consistency = consistency::analyze_rep_consistency(calc, reps);
    let glute_dominance = dominance::analyze_glute_dominance(&calc.torso, &calc.quad, reps, fps);
    let knee_valgus = valgus::analyze_knee_valgus(frames, reps, camera);

    let final_score = final_score::calculate_final_score(&[
        ("torso_angle", torso_angle.score),
        ("quad_angle", quad_angle.score),
        ("ankle_angle", ankle_angle.score),
        ("torso_asymmetry", torso_asymmetry.score),
        ("quad_asymmetry", quad_asymmetry.score),
        ("ankle_asymmetry", ankle_asymmetry.score),
        ("rep_consistency", rep_consistency.score),
        ("glute_dominance", glute_dominance.score),
        ("knee_valgus", knee_valgus.score),
    ]);

    FormAnalysis {
        torso_angle,
        quad_angle,
        ankle_angle,
        torso_asymmetry,
        quad_asymmetry,
        ankle_asymmetry,
        rep_consistency,
        glute_dominance,
        knee_valgus,
        final_score,
    }
}

/// Reported numeric fields carry one decimal; threshold decisions always use
/// the unrounded values.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

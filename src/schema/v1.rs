//! Persisted report schema, version v1.
//!
//! The report is stored verbatim by downstream consumers and replayed to
//! rebuild plots and scores without recomputation, so the shape here is a
//! compatibility contract. Missing series entries and absent scores
//! serialize as `null`; maps are ordered so identical inputs produce
//! byte-identical files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Poor,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub source: Option<String>,
    pub frames: u64,
    pub fps: f64,
    pub frame_skip: u64,
    pub exercise_id: String,
    pub exercise_name: String,
}

/// Batch validation summary, without the per-frame breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validation {
    pub overall_valid: bool,
    pub valid_frame_count: u64,
    pub total_frame_count: u64,
    pub valid_frame_percentage: f64,
    pub quality_score: f64,
    pub missing_critical_frames: Vec<u64>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraAngle {
    pub angle_estimate: Option<f64>,
    pub should_reject: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnglesPerFrame {
    pub torso_angle: Vec<Option<f64>>,
    pub quad_angle: Vec<Option<f64>>,
    pub ankle_angle: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsymmetryPerFrame {
    pub torso_asymmetry: Vec<Option<f64>>,
    pub quad_asymmetry: Vec<Option<f64>>,
    pub ankle_asymmetry: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rep {
    pub start_frame: u64,
    pub bottom_frame: u64,
    pub end_frame: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phases {
    pub reps: Vec<Rep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleMetric {
    pub status: Status,
    pub score: Option<f64>,
    pub max_angle: Option<f64>,
    pub avg_angle: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnkleMetric {
    pub status: Status,
    pub score: Option<f64>,
    pub min_angle: Option<f64>,
    pub avg_angle: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsymmetryMetric {
    pub status: Status,
    pub score: Option<f64>,
    pub max_asymmetry: Option<f64>,
    pub avg_asymmetry: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencySub {
    pub status: Status,
    pub score: Option<f64>,
    pub cv: Option<f64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyMetric {
    pub status: Status,
    pub score: Option<f64>,
    pub rep_count: u64,
    pub depth: ConsistencySub,
    pub torso: ConsistencySub,
    pub asymmetry: ConsistencySub,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DominanceMetric {
    pub status: Status,
    pub score: Option<f64>,
    pub avg_timing_diff_ms: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValgusMetric {
    pub status: Status,
    pub score: Option<f64>,
    pub max_deviation: Option<f64>,
    pub fppa: Option<f64>,
    pub frame: Option<u64>,
    pub fppa_per_frame: Vec<Option<f64>>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalScore {
    pub final_score: u32,
    pub grade: Grade,
    pub component_scores: BTreeMap<String, f64>,
    pub weights: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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
    pub final_score: FinalScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub validation: Option<Validation>,
    pub camera_angle: Option<CameraAngle>,
    pub angles_per_frame: Option<AnglesPerFrame>,
    pub asymmetry_per_frame: Option<AsymmetryPerFrame>,
    pub phases: Option<Phases>,
    pub form_analysis: Option<FormAnalysis>,
}

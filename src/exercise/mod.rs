//! Per-exercise capability contract.
//!
//! The pipeline drives every exercise through the `Exercise` trait and never
//! branches on exercise identity beyond the initial dispatch. Known
//! exercises form the closed `ExerciseKind` enum; adding one means adding a
//! variant and its implementation, checked at compile time rather than
//! through a runtime registry.

use crate::analysis::{self, FormAnalysis};
use crate::camera::{self, CameraAngleInfo};
use crate::kinematics::{self, FormCalculation};
use crate::phases::{self, Phases};
use crate::pose::{self, FrameLandmarks};
use crate::pose::validation::BatchValidation;

pub trait Exercise {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn required_landmarks(&self) -> &'static [usize];
    /// What the user should keep in frame, shown when validation fails.
    fn visibility_recommendation(&self) -> &'static str;

    fn calculate_form(&self, frames: &[Option<FrameLandmarks>]) -> FormCalculation;
    fn detect_phases(&self, calc: &FormCalculation, fps: f64) -> Phases;
    fn analyze_form(
        &self,
        calc: &FormCalculation,
        phases: &Phases,
        fps: f64,
        camera: Option<&CameraAngleInfo>,
        frames: &[Option<FrameLandmarks>],
        validation: Option<&BatchValidation>,
    ) -> FormAnalysis;

    /// Exercises with no viewpoint requirement return `None`, which skips
    /// the camera gate entirely.
    fn estimate_camera_angle(&self, frames: &[Option<FrameLandmarks>]) -> Option<CameraAngleInfo>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    Squat,
}

impl ExerciseKind {
    pub const ALL: &'static [ExerciseKind] = &[ExerciseKind::Squat];

    pub fn implementation(&self) -> &'static dyn Exercise {
        match self {
            ExerciseKind::Squat => &Squat,
        }
    }
}

pub struct Squat;

const SQUAT_LANDMARKS: &[usize] = &[
    pose::LEFT_SHOULDER,
    pose::RIGHT_SHOULDER,
    pose::LEFT_HIP,
    pose::RIGHT_HIP,
    pose::LEFT_KNEE,
    pose::RIGHT_KNEE,
    pose::LEFT_ANKLE,
    pose::RIGHT_ANKLE,
    pose::LEFT_HEEL,
    pose::RIGHT_HEEL,
];

impl Exercise for Squat {
    fn id(&self) -> &'static str {
        "squat"
    }

    fn name(&self) -> &'static str {
        "Barbell Squat"
    }

    fn required_landmarks(&self) -> &'static [usize] {
        SQUAT_LANDMARKS
    }

    fn visibility_recommendation(&self) -> &'static str {
        "For squat analysis, ensure shoulders, hips, knees, and ankles are fully visible throughout the video."
    }

    fn calculate_form(&self, frames: &[Option<FrameLandmarks>]) -> FormCalculation {
        kinematics::calculate_squat_form(frames)
    }

    fn detect_phases(&self, calc: &FormCalculation, fps: f64) -> Phases {
        phases::detect_squat_phases(&calc.quad, fps)
    }

    fn analyze_form(
        &self,
        calc: &FormCalculation,
        phases: &Phases,
        fps: f64,
        camera: Option<&CameraAngleInfo>,
        frames: &[Option<FrameLandmarks>],
        validation: Option<&BatchValidation>,
    ) -> FormAnalysis {
        analysis::analyze_squat_form(calc, &phases.reps, fps, camera, frames, validation)
    }

    fn estimate_camera_angle(&self, frames: &[Option<FrameLandmarks>]) -> Option<CameraAngleInfo> {
        Some(camera::estimate_camera_angle(frames))
    }
}

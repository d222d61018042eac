//! Landmark presence validation.
//!
//! A frame is valid when a pose was detected and every required landmark has
//! finite coordinates. Coordinates are deliberately not range-checked:
//! slightly out-of-frame landmarks still carry usable geometry.

use crate::pose::FrameLandmarks;

/// Minimum fraction of valid frames for the batch to count as usable.
pub const VALID_FRACTION_THRESHOLD: f64 = 0.3;

const LOW_QUALITY_WARN_FRACTION: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct FrameValidation {
    pub is_valid: bool,
    pub has_pose: bool,
    pub missing_landmarks: Vec<usize>,
    pub validation_score: f64,
}

#[derive(Debug, Clone)]
pub struct BatchValidation {
    pub overall_valid: bool,
    pub valid_frame_count: usize,
    pub total_frame_count: usize,
    pub valid_frame_percentage: f64,
    pub per_frame: Vec<FrameValidation>,
    pub missing_critical_frames: Vec<usize>,
    pub quality_score: f64,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendation: Option<String>,
}

pub fn validate_frame(frame: Option<&FrameLandmarks>, required: &[usize]) -> FrameValidation {
    let Some(landmarks) = frame else {
        return FrameValidation {
            is_valid: false,
            has_pose: false,
            missing_landmarks: required.to_vec(),
            validation_score: 0.0,
        };
    };

    let missing: Vec<usize> = required
        .iter()
        .copied()
        .filter(|&idx| landmarks.point(idx).is_none())
        .collect();
    let score = if required.is_empty() {
        1.0
    } else {
        (1.0 - missing.len() as f64 / required.len() as f64).max(0.0)
    };
    FrameValidation {
        is_valid: missing.is_empty(),
        has_pose: true,
        missing_landmarks: missing,
        validation_score: score,
    }
}

pub fn validate_batch(frames: &[Option<FrameLandmarks>], required: &[usize]) -> BatchValidation {
    if frames.is_empty() {
        return BatchValidation {
            overall_valid: false,
            valid_frame_count: 0,
            total_frame_count: 0,
            valid_frame_percentage: 0.0,
            per_frame: Vec::new(),
            missing_critical_frames: Vec::new(),
            quality_score: 0.0,
            errors: vec!["No landmarks provided".to_string()],
            warnings: Vec::new(),
            recommendation: Some("No video frames to validate".to_string()),
        };
    }

    let mut per_frame = Vec::with_capacity(frames.len());
    let mut valid_count = 0usize;
    let mut missing_critical = Vec::new();
    let mut total_score = 0.0;
    for (i, frame) in frames.iter().enumerate() {
        let result = validate_frame(frame.as_ref(), required);
        if result.is_valid {
            valid_count += 1;
        } else if !required.is_empty() {
            missing_critical.push(i);
        }
        total_score += result.validation_score;
        per_frame.push(result);
    }

    let total = frames.len();
    let valid_percentage = valid_count as f64 / total as f64;
    let quality_score = total_score / total as f64;
    let overall_valid = valid_percentage >= VALID_FRACTION_THRESHOLD;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    if valid_percentage < VALID_FRACTION_THRESHOLD {
        errors.push(format!(
            "Only {:.0}% of frames have valid pose detection",
            valid_percentage * 100.0
        ));
    } else if valid_percentage < LOW_QUALITY_WARN_FRACTION {
        warnings.push(format!(
            "Low pose detection quality: {:.0}% of frames valid",
            valid_percentage * 100.0
        ));
    }
    let recommendation = if overall_valid {
        None
    } else {
        Some("Ensure person is fully visible throughout video".to_string())
    };

    BatchValidation {
        overall_valid,
        valid_frame_count: valid_count,
        total_frame_count: total,
        valid_frame_percentage: valid_percentage,
        per_frame,
        missing_critical_frames: missing_critical,
        quality_score,
        errors,
        warnings,
        recommendation,
    }
}

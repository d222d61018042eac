use formqc::pose::validation::{validate_batch, validate_frame};
use formqc::pose::{self, FrameLandmarks, Landmark};

fn landmark(x: f64, y: f64) -> Landmark {
    Landmark {
        x,
        y,
        visibility: Some(0.9),
    }
}

fn full_frame() -> FrameLandmarks {
    FrameLandmarks::new(vec![landmark(0.5, 0.5); pose::LANDMARK_COUNT])
}

const REQUIRED: &[usize] = &[pose::LEFT_HIP, pose::RIGHT_HIP, pose::LEFT_KNEE];

#[test]
fn frame_with_all_landmarks_is_valid() {
    let frame = full_frame();
    let result = validate_frame(Some(&frame), REQUIRED);
    assert!(result.is_valid);
    assert!(result.has_pose);
    assert!(result.missing_landmarks.is_empty());
    assert_eq!(result.validation_score, 1.0);
}

#[test]
fn missing_frame_fails_with_all_required_missing() {
    let result = validate_frame(None, REQUIRED);
    assert!(!result.is_valid);
    assert!(!result.has_pose);
    assert_eq!(result.missing_landmarks, REQUIRED);
    assert_eq!(result.validation_score, 0.0);
}

#[test]
fn non_finite_coordinates_count_as_missing() {
    let mut landmarks = vec![landmark(0.5, 0.5); pose::LANDMARK_COUNT];
    landmarks[pose::LEFT_HIP] = landmark(f64::NAN, 0.5);
    let frame = FrameLandmarks::new(landmarks);
    let result = validate_frame(Some(&frame), REQUIRED);
    assert!(!result.is_valid);
    assert_eq!(result.missing_landmarks, vec![pose::LEFT_HIP]);
    assert!((result.validation_score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn out_of_frame_coordinates_are_still_valid() {
    // Coordinates outside [0, 1] carry usable geometry and pass.
    let mut landmarks = vec![landmark(0.5, 0.5); pose::LANDMARK_COUNT];
    landmarks[pose::LEFT_KNEE] = landmark(-0.1, 1.3);
    let frame = FrameLandmarks::new(landmarks);
    let result = validate_frame(Some(&frame), REQUIRED);
    assert!(result.is_valid);
}

#[test]
fn batch_passes_at_thirty_percent_valid() {
    let mut frames: Vec<Option<FrameLandmarks>> = vec![None; 7];
    frames.extend((0..3).map(|_| Some(full_frame())));
    let batch = validate_batch(&frames, REQUIRED);
    assert!(batch.overall_valid);
    assert_eq!(batch.valid_frame_count, 3);
    assert_eq!(batch.total_frame_count, 10);
    assert!(batch.errors.is_empty());
    // 30% is usable but still below the 70% quality bar.
    assert_eq!(batch.warnings.len(), 1);
    assert!(batch.warnings[0].starts_with("Low pose detection quality: 30%"));
    assert!(batch.recommendation.is_none());
}

#[test]
fn batch_fails_below_thirty_percent() {
    let mut frames: Vec<Option<FrameLandmarks>> = vec![None; 8];
    frames.extend((0..2).map(|_| Some(full_frame())));
    let batch = validate_batch(&frames, REQUIRED);
    assert!(!batch.overall_valid);
    assert_eq!(batch.errors.len(), 1);
    assert_eq!(
        batch.errors[0],
        "Only 20% of frames have valid pose detection"
    );
    assert_eq!(
        batch.recommendation.as_deref(),
        Some("Ensure person is fully visible throughout video")
    );
    assert_eq!(batch.missing_critical_frames.len(), 8);
}

#[test]
fn clean_batch_has_no_warnings() {
    let frames: Vec<Option<FrameLandmarks>> = (0..10).map(|_| Some(full_frame())).collect();
    let batch = validate_batch(&frames, REQUIRED);
    assert!(batch.overall_valid);
    assert!(batch.errors.is_empty());
    assert!(batch.warnings.is_empty());
    assert_eq!(batch.quality_score, 1.0);
}

#[test]
fn empty_batch_is_invalid() {
    let batch = validate_batch(&[], REQUIRED);
    assert!(!batch.overall_valid);
    assert_eq!(batch.total_frame_count, 0);
    assert_eq!(batch.errors, vec!["No landmarks provided".to_string()]);
}

use formqc::analysis::MetricStatus;
use formqc::analysis::valgus::analyze_knee_valgus;
use formqc::camera::CameraAngleInfo;
use formqc::phases::Rep;
use formqc::pose::{self, FrameLandmarks, Landmark};

fn landmark(x: f64, y: f64) -> Landmark {
    Landmark {
        x,
        y,
        visibility: Some(1.0),
    }
}

/// Hips at x 0.4/0.6 with ankles straight below; each knee shifted
/// horizontally by its offset. A positive offset bends the knee toward +x.
fn leg_frame(left_knee_dx: f64, right_knee_dx: f64) -> FrameLandmarks {
    let mut landmarks = vec![landmark(0.5, 0.5); pose::LANDMARK_COUNT];
    landmarks[pose::LEFT_HIP] = landmark(0.4, 0.5);
    landmarks[pose::RIGHT_HIP] = landmark(0.6, 0.5);
    landmarks[pose::LEFT_KNEE] = landmark(0.4 + left_knee_dx, 0.7);
    landmarks[pose::RIGHT_KNEE] = landmark(0.6 + right_knee_dx, 0.7);
    landmarks[pose::LEFT_ANKLE] = landmark(0.4, 0.9);
    landmarks[pose::RIGHT_ANKLE] = landmark(0.6, 0.9);
    FrameLandmarks::new(landmarks)
}

fn front_camera() -> CameraAngleInfo {
    CameraAngleInfo {
        angle_estimate: Some(3.0),
        should_reject: false,
        message: String::new(),
    }
}

fn one_rep() -> Vec<Rep> {
    vec![Rep {
        start_frame: 0,
        bottom_frame: 1,
        end_frame: 2,
    }]
}

// A 0.02 horizontal knee shift over 0.2-long thigh and shin segments bends
// each vector atan(0.1) = 5.71 degrees off vertical, so the FPPA moves
// 11.42 degrees away from 180.

#[test]
fn straight_legs_are_minimal() {
    let frames = vec![Some(leg_frame(0.0, 0.0)); 3];
    let result = analyze_knee_valgus(&frames, &one_rep(), Some(&front_camera()));
    assert_eq!(result.status, MetricStatus::Good);
    assert_eq!(result.score, Some(100.0));
    assert_eq!(result.max_deviation, Some(0.0));
    assert_eq!(result.fppa, Some(180.0));
}

#[test]
fn significant_valgus_is_poor() {
    // Both knees shifted the same way keeps the two sides' FPPA readings
    // equal, so the bilateral average is the per-side value.
    let frames = vec![Some(leg_frame(0.02, 0.02)); 3];
    let result = analyze_knee_valgus(&frames, &one_rep(), Some(&front_camera()));
    assert_eq!(result.status, MetricStatus::Poor);
    assert_eq!(result.score, Some(50.0));
    assert_eq!(result.fppa, Some(168.6));
    assert_eq!(result.max_deviation, Some(11.4));
    assert!(result.message.starts_with("Significant knee valgus"));
}

#[test]
fn significant_varus_caps_at_warning() {
    let frames = vec![Some(leg_frame(-0.02, -0.02)); 3];
    let result = analyze_knee_valgus(&frames, &one_rep(), Some(&front_camera()));
    assert_eq!(result.status, MetricStatus::Warning);
    assert_eq!(result.score, Some(75.0));
    assert_eq!(result.fppa, Some(191.4));
    assert!(result.message.starts_with("Significant knee varus"));
}

#[test]
fn moderate_valgus_warns() {
    // One knee bent, one straight: the average deviation halves to 5.7.
    let frames = vec![Some(leg_frame(0.02, 0.0)); 3];
    let result = analyze_knee_valgus(&frames, &one_rep(), Some(&front_camera()));
    assert_eq!(result.status, MetricStatus::Warning);
    assert_eq!(result.max_deviation, Some(5.7));
    assert!(result.message.starts_with("Moderate knee valgus"));
}

#[test]
fn worst_frame_is_reported() {
    let frames = vec![
        Some(leg_frame(0.0, 0.0)),
        Some(leg_frame(0.02, 0.02)),
        Some(leg_frame(0.01, 0.01)),
    ];
    let result = analyze_knee_valgus(&frames, &one_rep(), Some(&front_camera()));
    assert_eq!(result.frame, Some(1));
    assert_eq!(result.fppa_per_frame.len(), 3);
}

#[test]
fn frames_outside_reps_are_masked_in_the_series() {
    let frames = vec![Some(leg_frame(0.0, 0.0)); 5];
    let reps = vec![Rep {
        start_frame: 1,
        bottom_frame: 2,
        end_frame: 3,
    }];
    let result = analyze_knee_valgus(&frames, &reps, Some(&front_camera()));
    assert_eq!(result.fppa_per_frame.len(), 5);
    assert_eq!(result.fppa_per_frame[0], None);
    assert_eq!(result.fppa_per_frame[4], None);
    for frame in 1..=3 {
        assert_eq!(result.fppa_per_frame[frame], Some(180.0));
    }
}

#[test]
fn requires_front_view() {
    let frames = vec![Some(leg_frame(0.02, 0.02)); 3];
    let oblique = CameraAngleInfo {
        angle_estimate: Some(20.0),
        should_reject: false,
        message: String::new(),
    };
    for camera in [None, Some(&oblique)] {
        let result = analyze_knee_valgus(&frames, &one_rep(), camera);
        assert_eq!(result.status, MetricStatus::Error);
        assert_eq!(
            result.message,
            "Knee valgus analysis requires a front camera view (within 10° of frontal)"
        );
    }
}

#[test]
fn no_reps_errors() {
    let frames = vec![Some(leg_frame(0.0, 0.0)); 3];
    let result = analyze_knee_valgus(&frames, &[], Some(&front_camera()));
    assert_eq!(result.status, MetricStatus::Error);
    assert_eq!(result.message, "Missing landmarks or rep data");
}

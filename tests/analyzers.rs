use formqc::analysis::MetricStatus;
use formqc::analysis::ankle::analyze_ankle_mobility;
use formqc::analysis::asymmetry::analyze_asymmetry;
use formqc::analysis::depth::analyze_squat_depth;
use formqc::analysis::torso::analyze_torso_angle;
use formqc::pose::validation::validate_batch;

fn series(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().map(|&v| Some(v)).collect()
}

#[test]
fn torso_in_optimal_range_scores_100() {
    // avg 39, max 41: inside the 35-43 window with the max gate satisfied.
    let result = analyze_torso_angle(&series(&[37.0, 41.0, 39.0]), None);
    assert_eq!(result.status, MetricStatus::Good);
    assert_eq!(result.score, Some(100.0));
    assert_eq!(result.max_angle, Some(41.0));
    assert_eq!(result.avg_angle, Some(39.0));
}

#[test]
fn torso_below_optimal_average_scores_95() {
    let result = analyze_torso_angle(&series(&[20.0, 30.0, 25.0]), None);
    assert_eq!(result.status, MetricStatus::Good);
    assert_eq!(result.score, Some(95.0));
}

#[test]
fn torso_moderate_max_warns() {
    let result = analyze_torso_angle(&series(&[40.0, 44.5, 38.0]), None);
    assert_eq!(result.status, MetricStatus::Warning);
    assert_eq!(result.score, Some(75.0));
}

#[test]
fn torso_excessive_max_is_poor() {
    let result = analyze_torso_angle(&series(&[40.0, 47.0, 38.0]), None);
    assert_eq!(result.status, MetricStatus::Poor);
    assert_eq!(result.score, Some(50.0));
}

#[test]
fn torso_empty_series_errors_without_score() {
    let result = analyze_torso_angle(&[None, None], None);
    assert_eq!(result.status, MetricStatus::Error);
    assert_eq!(result.score, None);
    assert_eq!(result.message, "No torso angle data available");
}

#[test]
fn torso_low_detection_reports_percentage() {
    // Batch below the 30% gate: the torso analyzer carries the detection
    // percentage even though some angle data exists.
    let frames = vec![None; 10];
    let batch = validate_batch(&frames, &[11, 12]);
    let result = analyze_torso_angle(&series(&[39.0]), Some(&batch));
    assert_eq!(result.status, MetricStatus::Error);
    assert!(result.message.starts_with("Insufficient pose detection (0%"));
}

#[test]
fn depth_thresholds() {
    let full = analyze_squat_depth(&series(&[40.0, 72.0, 50.0]));
    assert_eq!(full.status, MetricStatus::Good);
    assert_eq!(full.score, Some(100.0));

    let partial = analyze_squat_depth(&series(&[40.0, 65.0, 50.0]));
    assert_eq!(partial.status, MetricStatus::Warning);
    assert_eq!(partial.score, Some(75.0));

    let shallow = analyze_squat_depth(&series(&[40.0, 55.0, 50.0]));
    assert_eq!(shallow.status, MetricStatus::Poor);
    assert_eq!(shallow.score, Some(50.0));

    let missing = analyze_squat_depth(&[None]);
    assert_eq!(missing.status, MetricStatus::Error);
    assert_eq!(missing.message, "No quad angle data available");
}

#[test]
fn ankle_mobility_uses_minimum_angle() {
    let good = analyze_ankle_mobility(&series(&[90.0, 58.0, 75.0]));
    assert_eq!(good.status, MetricStatus::Good);
    assert_eq!(good.score, Some(100.0));
    assert_eq!(good.min_angle, Some(58.0));

    let moderate = analyze_ankle_mobility(&series(&[90.0, 65.0, 75.0]));
    assert_eq!(moderate.status, MetricStatus::Warning);

    let limited = analyze_ankle_mobility(&series(&[90.0, 80.0, 85.0]));
    assert_eq!(limited.status, MetricStatus::Poor);
    assert_eq!(limited.score, Some(50.0));
}

#[test]
fn asymmetry_uses_max_absolute_deviation() {
    // Deviation of 11 degrees (sign irrelevant) lands in the poor band.
    let result = analyze_asymmetry(&series(&[3.0, -2.0, 4.0, -11.0]), "quad");
    assert_eq!(result.status, MetricStatus::Poor);
    assert_eq!(result.score, Some(50.0));
    assert_eq!(result.max_asymmetry, Some(11.0));
}

#[test]
fn asymmetry_bands() {
    let minimal = analyze_asymmetry(&series(&[1.0, -3.0, 2.0]), "torso");
    assert_eq!(minimal.status, MetricStatus::Good);
    assert_eq!(minimal.score, Some(100.0));

    let moderate = analyze_asymmetry(&series(&[1.0, -7.0, 2.0]), "torso");
    assert_eq!(moderate.status, MetricStatus::Warning);
    assert!(moderate.message.contains("torso"));

    let error = analyze_asymmetry(&[None, None], "ankle");
    assert_eq!(error.status, MetricStatus::Error);
    assert_eq!(error.message, "No ankle asymmetry data available");
}

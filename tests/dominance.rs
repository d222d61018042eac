use formqc::analysis::MetricStatus;
use formqc::analysis::dominance::analyze_glute_dominance;
use formqc::phases::Rep;

/// Flat at `base` through `flat_until`, then rising `step` degrees per frame.
fn ramp(len: usize, flat_until: usize, base: f64, step: f64) -> Vec<Option<f64>> {
    (0..len)
        .map(|i| {
            if i <= flat_until {
                Some(base)
            } else {
                Some(base + step * (i - flat_until) as f64)
            }
        })
        .collect()
}

fn one_rep() -> Vec<Rep> {
    vec![Rep {
        start_frame: 0,
        bottom_frame: 30,
        end_frame: 40,
    }]
}

#[test]
fn hip_lead_scores_good() {
    // With a 2 deg/frame ramp the velocity gate passes immediately but the
    // 3-degree displacement gate trips one frame later, so a series flat
    // through frame N onsets at frame N + 2. Hip onset 12, knee onset 7:
    // (12 - 7) / 30 * 1000 = 167ms hip lead.
    let torso = ramp(41, 10, 10.0, 2.0);
    let quad = ramp(41, 5, 95.0, 2.0);
    let result = analyze_glute_dominance(&torso, &quad, &one_rep(), 30.0);
    let timing = result.avg_timing_diff_ms.unwrap();
    assert!((timing - 166.7).abs() < 0.1, "timing {}", timing);
    assert_eq!(result.status, MetricStatus::Good);
    assert_eq!(result.score, Some(100.0));
    assert!(result.message.starts_with("Hip-dominant pattern"));
}

#[test]
fn knee_lead_scores_poor() {
    let torso = ramp(41, 5, 10.0, 2.0); // onset at frame 7
    let quad = ramp(41, 10, 95.0, 2.0); // onset at frame 12
    let result = analyze_glute_dominance(&torso, &quad, &one_rep(), 30.0);
    assert_eq!(result.status, MetricStatus::Poor);
    assert_eq!(result.score, Some(50.0));
    assert!(result.message.starts_with("Quad-dominant pattern"));
}

#[test]
fn simultaneous_onset_is_a_mixed_pattern() {
    // Neither series ever clears the onset gates: both onsets fall back to
    // the rep start and the timing difference is zero.
    let torso = vec![Some(10.0); 41];
    let quad = vec![Some(95.0); 41];
    let result = analyze_glute_dominance(&torso, &quad, &one_rep(), 30.0);
    assert_eq!(result.status, MetricStatus::Warning);
    assert_eq!(result.score, Some(75.0));
    assert_eq!(result.avg_timing_diff_ms, Some(0.0));
    assert!(result.message.starts_with("Mixed pattern"));
}

#[test]
fn averages_across_reps() {
    // Two identical reps back to back: the average equals the per-rep value.
    let mut torso = ramp(41, 10, 10.0, 2.0);
    torso.extend(ramp(41, 10, 10.0, 2.0));
    let mut quad = ramp(41, 5, 95.0, 2.0);
    quad.extend(ramp(41, 5, 95.0, 2.0));
    let reps = vec![
        Rep {
            start_frame: 0,
            bottom_frame: 30,
            end_frame: 40,
        },
        Rep {
            start_frame: 41,
            bottom_frame: 71,
            end_frame: 81,
        },
    ];
    let result = analyze_glute_dominance(&torso, &quad, &reps, 30.0);
    assert!((result.avg_timing_diff_ms.unwrap() - 166.7).abs() < 0.1);
}

#[test]
fn missing_data_and_missing_reps_error() {
    let empty: Vec<Option<f64>> = vec![None; 41];
    let quad = vec![Some(95.0); 41];
    let result = analyze_glute_dominance(&empty, &quad, &one_rep(), 30.0);
    assert_eq!(result.status, MetricStatus::Error);
    assert_eq!(result.message, "Missing angle data");

    let torso = vec![Some(10.0); 41];
    let result = analyze_glute_dominance(&torso, &quad, &[], 30.0);
    assert_eq!(result.status, MetricStatus::Error);
    assert_eq!(result.message, "No reps available");
}

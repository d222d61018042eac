use formqc::phases::Rep;
use formqc::series::{active_phases, all_missing, valid_values};

#[test]
fn valid_values_drops_missing_entries() {
    let series = vec![Some(1.0), None, Some(3.0), None];
    assert_eq!(valid_values(&series), vec![1.0, 3.0]);
    assert!(valid_values(&[None, None]).is_empty());
}

#[test]
fn all_missing_detection() {
    assert!(all_missing(&[None, None]));
    assert!(all_missing(&[]));
    assert!(!all_missing(&[None, Some(1.0)]));
}

#[test]
fn active_phases_concatenates_rep_ranges() {
    let series: Vec<Option<f64>> = (0..10).map(|i| Some(i as f64)).collect();
    let reps = vec![
        Rep {
            start_frame: 1,
            bottom_frame: 2,
            end_frame: 3,
        },
        Rep {
            start_frame: 6,
            bottom_frame: 7,
            end_frame: 8,
        },
    ];
    let active = active_phases(&series, &reps);
    assert_eq!(
        active,
        vec![Some(1.0), Some(2.0), Some(3.0), Some(6.0), Some(7.0), Some(8.0)]
    );
}

#[test]
fn active_phases_without_reps_returns_the_whole_series() {
    let series = vec![Some(1.0), None, Some(3.0)];
    assert_eq!(active_phases(&series, &[]), series);
}

#[test]
fn active_phases_pads_out_of_range_frames_with_none() {
    let series = vec![Some(1.0), Some(2.0)];
    let reps = vec![Rep {
        start_frame: 1,
        bottom_frame: 2,
        end_frame: 3,
    }];
    assert_eq!(active_phases(&series, &reps), vec![Some(2.0), None, None]);
}

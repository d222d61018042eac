//! Frame-aligned angle sequences.
//!
//! Every per-frame measurement in the pipeline is an `AngleSeries`: one entry
//! per video frame, `None` where the source landmarks were absent or invalid.
//! Position in the vector is the frame index, so all series derived from one
//! video stay aligned with each other and with the landmark input.

use crate::phases::Rep;

pub type AngleSeries = Vec<Option<f64>>;

pub fn valid_values(series: &[Option<f64>]) -> Vec<f64> {
    series.iter().filter_map(|v| *v).collect()
}

pub fn all_missing(series: &[Option<f64>]) -> bool {
    series.iter().all(|v| v.is_none())
}

/// Restricts a series to the frames inside detected reps, concatenating the
/// start..=end range of every rep in order. Indices past the end of the
/// series yield `None`. With no reps the series is returned unchanged, so
/// rep-less videos still feed the series-based analyzers.
pub fn active_phases(series: &[Option<f64>], reps: &[Rep]) -> AngleSeries {
    if reps.is_empty() {
        return series.to_vec();
    }
    let mut active = Vec::new();
    for rep in reps {
        for i in rep.start_frame..=rep.end_frame {
            active.push(series.get(i).copied().flatten());
        }
    }
    active
}

//! Rep segmentation over the quad-angle series.
//!
//! The bottom of each squat shows up as a local maximum in the quad angle.
//! Peaks are detected against a per-video baseline, deduplicated by frame
//! distance, and merged when two close peaks are really one bouncing rep.
//! Start and end frames come from threshold crossings around each surviving
//! peak.

/// Degrees above the standing baseline a frame must reach to count as
/// squatting.
const SQUAT_THRESHOLD_OFFSET_DEG: f64 = 20.0;

/// Minimum frame distance between two distinct rep bottoms.
const MIN_PEAK_DISTANCE_FRAMES: usize = 30;

/// Valid samples taken from each end of the series for the baseline.
const BASELINE_SAMPLE_COUNT: usize = 10;

/// Candidate peaks must be strict maxima over this many samples on each side.
const PEAK_WINDOW_HALF: usize = 2;

const BOUNCE_WINDOW_SECS: f64 = 1.0;
const BOUNCE_AMPLITUDE_RATIO: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rep {
    pub start_frame: usize,
    pub bottom_frame: usize,
    pub end_frame: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Phases {
    pub reps: Vec<Rep>,
}

impl Phases {
    pub fn rep_count(&self) -> usize {
        self.reps.len()
    }
}

/// Segments the quad-angle series into squat repetitions. Zero reps is a
/// normal outcome for videos without a full squat, never an error.
pub fn detect_squat_phases(quad: &[Option<f64>], fps: f64) -> Phases {
    let valid: Vec<(usize, f64)> = quad
        .iter()
        .enumerate()
        .filter_map(|(frame, angle)| angle.map(|a| (frame, a)))
        .collect();
    if valid.is_empty() {
        return Phases::default();
    }

    let baseline = calculate_baseline(&valid);
    let threshold = baseline + SQUAT_THRESHOLD_OFFSET_DEG;
    let peaks = find_peaks(&valid, threshold, MIN_PEAK_DISTANCE_FRAMES);
    if peaks.is_empty() {
        return Phases::default();
    }

    let bounce_window = (fps * BOUNCE_WINDOW_SECS) as usize;
    let peaks = filter_bounce_reps(peaks, bounce_window);
    let mut reps = build_reps(&valid, &peaks, threshold);
    merge_overlapping(&mut reps, quad);
    Phases { reps }
}

/// Standing quad angle, taken as the minimum over the first and last valid
/// samples so mid-video depth cannot drag the baseline down. Falls back to
/// the global minimum for short series.
fn calculate_baseline(valid: &[(usize, f64)]) -> f64 {
    let angles: Box<dyn Iterator<Item = f64>> = if valid.len() >= 2 * BASELINE_SAMPLE_COUNT {
        Box::new(
            valid[..BASELINE_SAMPLE_COUNT]
                .iter()
                .chain(&valid[valid.len() - BASELINE_SAMPLE_COUNT..])
                .map(|&(_, a)| a),
        )
    } else {
        Box::new(valid.iter().map(|&(_, a)| a))
    };
    angles.fold(f64::INFINITY, f64::min)
}

/// Candidate peaks are strict local maxima at or above the threshold, then
/// deduplicated: a candidate closer than `min_distance` frames to the last
/// accepted peak replaces it, keeping the later frame.
fn find_peaks(valid: &[(usize, f64)], threshold: f64, min_distance: usize) -> Vec<(usize, f64)> {
    let mut peaks: Vec<(usize, f64)> = Vec::new();
    for pos in PEAK_WINDOW_HALF..valid.len().saturating_sub(PEAK_WINDOW_HALF) {
        if !is_local_max(valid, pos, threshold) {
            continue;
        }
        let candidate = valid[pos];
        match peaks.last_mut() {
            Some(last) if candidate.0 - last.0 < min_distance => *last = candidate,
            _ => peaks.push(candidate),
        }
    }
    peaks
}

fn is_local_max(valid: &[(usize, f64)], pos: usize, min_height: f64) -> bool {
    let curr = valid[pos].1;
    curr >= min_height
        && curr > valid[pos - 1].1
        && curr > valid[pos + 1].1
        && curr > valid[pos - 2].1
        && curr > valid[pos + 2].1
}

/// Two peaks within the bounce window where the later one keeps at least 90%
/// of the earlier amplitude are one bouncing rep; keep the later bottom.
fn filter_bounce_reps(peaks: Vec<(usize, f64)>, bounce_window: usize) -> Vec<(usize, f64)> {
    let mut filtered: Vec<(usize, f64)> = Vec::with_capacity(peaks.len());
    for peak in peaks {
        match filtered.last_mut() {
            Some(prev)
                if peak.0 - prev.0 < bounce_window
                    && peak.1 >= prev.1 * BOUNCE_AMPLITUDE_RATIO =>
            {
                *prev = peak;
            }
            _ => filtered.push(peak),
        }
    }
    filtered
}

fn build_reps(valid: &[(usize, f64)], peaks: &[(usize, f64)], threshold: f64) -> Vec<Rep> {
    let mut reps = Vec::with_capacity(peaks.len());
    for &(peak_frame, _) in peaks {
        let peak_pos = valid.partition_point(|&(frame, _)| frame < peak_frame);
        let (start_frame, end_frame) = find_rep_bounds(valid, peak_pos, threshold);
        if start_frame < end_frame {
            reps.push(Rep {
                start_frame,
                bottom_frame: peak_frame,
                end_frame,
            });
        }
    }
    reps
}

/// Scans outward from the peak for the nearest below-threshold samples; the
/// rep spans the valid samples just inside those crossings, or runs to the
/// series edge when the signal never drops back.
fn find_rep_bounds(valid: &[(usize, f64)], peak_pos: usize, threshold: f64) -> (usize, usize) {
    let mut start_frame = valid[0].0;
    for pos in (0..peak_pos).rev() {
        if valid[pos].1 < threshold {
            start_frame = valid[pos + 1].0;
            break;
        }
    }
    let mut end_frame = valid[valid.len() - 1].0;
    for pos in peak_pos + 1..valid.len() {
        if valid[pos].1 < threshold {
            end_frame = valid[pos - 1].0;
            break;
        }
    }
    (start_frame, end_frame)
}

/// When the signal never crosses back below threshold between two accepted
/// peaks, their scanned ranges overlap; collapse such runs into one rep,
/// keeping the deeper bottom.
fn merge_overlapping(reps: &mut Vec<Rep>, quad: &[Option<f64>]) {
    let depth_at = |frame: usize| quad.get(frame).copied().flatten().unwrap_or(f64::MIN);
    let mut merged: Vec<Rep> = Vec::with_capacity(reps.len());
    for rep in reps.drain(..) {
        match merged.last_mut() {
            Some(prev) if rep.start_frame <= prev.end_frame => {
                if depth_at(rep.bottom_frame) > depth_at(prev.bottom_frame) {
                    prev.bottom_frame = rep.bottom_frame;
                }
                prev.end_frame = prev.end_frame.max(rep.end_frame);
            }
            _ => merged.push(rep),
        }
    }
    *reps = merged;
}

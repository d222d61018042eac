//! Segment-angle geometry.
//!
//! All angles are degrees. Points are (x, y) in normalized image coordinates
//! with y growing downward, which is why the raw atan2 negates dy.

/// Angle of the p1->p2 segment measured from true vertical, folded into
/// [0, 90]. 0 means the segment is upright, 90 means horizontal. Used for
/// torso (hip->shoulder) and quad (hip->knee) segments.
pub fn segment_angle_from_vertical(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let v = wrapped_angle_from_horizontal(p1, p2);
    if v <= 90.0 {
        90.0 - v
    } else if v <= 180.0 {
        v - 90.0
    } else if v <= 270.0 {
        270.0 - v
    } else {
        v - 270.0
    }
}

/// Angle of the heel->knee segment, folded into [0, 90] with the opposite
/// orientation: 90 means an upright shin, smaller values mean the knee has
/// travelled forward over the foot (dorsiflexion).
pub fn shin_segment_angle(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let v = wrapped_angle_from_horizontal(p1, p2);
    if v <= 90.0 {
        v
    } else if v <= 180.0 {
        180.0 - v
    } else if v <= 270.0 {
        270.0 - v
    } else {
        360.0 - v
    }
}

fn wrapped_angle_from_horizontal(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    let mut angle = (-dy).atan2(dx).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Frontal plane projection angle at the knee: the angle between the
/// knee->hip and knee->ankle vectors, reflexed by the cross-product sign so
/// that 180 is a neutral leg, below 180 is valgus (knee collapsing inward)
/// and above 180 is varus. `None` when either vector has zero length.
pub fn knee_fppa(hip: (f64, f64), knee: (f64, f64), ankle: (f64, f64)) -> Option<f64> {
    let v1 = (hip.0 - knee.0, hip.1 - knee.1);
    let v2 = (ankle.0 - knee.0, ankle.1 - knee.1);
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();
    if mag1 == 0.0 || mag2 == 0.0 {
        return None;
    }
    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let cross = v1.0 * v2.1 - v1.1 * v2.0;
    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    let mut angle = cos_angle.acos();
    if cross > 0.0 {
        angle = 2.0 * std::f64::consts::PI - angle;
    }
    Some(angle.to_degrees())
}

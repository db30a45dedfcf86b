//! Conversions between physical units and OOXML internal units.
//!
//! Lengths are stored as twips (twentieths of a point, 1 mm = 56.7 twips);
//! font sizes as half-points (1 pt = 2 half-points). Internal units are
//! integral in the format, so "to internal" rounds to the nearest integer
//! and "from internal" returns floating point.

pub const TWIPS_PER_MM: f64 = 56.7;
pub const TWIPS_PER_CM: f64 = 567.0;
pub const HALF_POINTS_PER_PT: f64 = 2.0;

pub fn mm_to_twips(mm: f64) -> i64 {
    (mm * TWIPS_PER_MM).round() as i64
}

pub fn twips_to_mm(twips: i64) -> f64 {
    twips as f64 / TWIPS_PER_MM
}

pub fn cm_to_twips(cm: f64) -> i64 {
    (cm * TWIPS_PER_CM).round() as i64
}

pub fn twips_to_cm(twips: i64) -> f64 {
    twips as f64 / TWIPS_PER_CM
}

pub fn pt_to_half_points(pt: f64) -> i64 {
    (pt * HALF_POINTS_PER_PT).round() as i64
}

pub fn half_points_to_pt(half_points: i64) -> f64 {
    half_points as f64 / HALF_POINTS_PER_PT
}

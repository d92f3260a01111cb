//! Per-marker animation offset so pulse animations don't run in lockstep.

const PERIOD_SECS: f64 = 2.2;
const MAX_HUNDREDTHS: f64 = 219.0;

/// Deterministic pseudo-random delay in `[0, 2.2)` seconds, rounded to hundredths.
pub fn delay_seconds(lat: f64, lng: f64) -> f64 {
    let n = ((lat * 12.9898 + lng * 78.233).sin() * 43758.5453).abs();
    if !n.is_finite() {
        return 0.0;
    }
    // Rounding must not push the value onto the excluded upper bound.
    let hundredths = ((n % PERIOD_SECS) * 100.0).round().min(MAX_HUNDREDTHS);
    hundredths / 100.0
}

/// CSS time value for [`delay_seconds`], e.g. `"1.37s"`.
pub fn delay_from_coords(lat: f64, lng: f64) -> String {
    format!("{:.2}s", delay_seconds(lat, lng))
}

use crate::duration::{format_long, Locale};

/// Playback speeds covered by the fixed projection table.
pub const SPEEDS: [f64; 7] = [1.0, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0];

// One row of the speed projection table
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedDuration {
    pub speed: f64,
    pub label: String,
    pub seconds: u64,
    pub formatted: String,
}

/// Runtime at the given playback speed, rounded half-up to whole seconds.
///
/// Valid for the continuous speed range players actually offer (0.25 to
/// 4.0); nothing clamps the input.
pub fn seconds_at_speed(total_seconds: u64, speed: f64) -> u64 {
    (total_seconds as f64 / speed).round() as u64
}

/// Project a total runtime across the fixed speed table, labelling each row
/// like "1.25x".
pub fn project(total_seconds: u64, locale: Locale) -> Vec<SpeedDuration> {
    SPEEDS
        .iter()
        .map(|&speed| {
            let seconds = seconds_at_speed(total_seconds, speed);
            SpeedDuration {
                speed,
                label: format!("{}x", speed),
                seconds,
                formatted: format_long(seconds, locale),
            }
        })
        .collect()
}

pub mod draft;
pub mod insights;
pub mod map_stats;
pub mod player_stats;
pub mod rounds;
pub mod streaks;

/// Round to 2 decimals, matching the precision the report quotes rates at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

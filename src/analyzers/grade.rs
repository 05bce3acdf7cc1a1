/// Converts a 0–10 score into 4.0-scale grade points.
///
/// | Score range | Points |
/// |-------------|--------|
/// | >= 9.0      | 4.0    |
/// | >= 8.0      | 3.3    |
/// | >= 7.0      | 3.0    |
/// | >= 6.0      | 2.7    |
/// | >= 5.0      | 2.0    |
/// | < 5.0       | 0.0    |
///
/// Tier lower bounds are inclusive. Total over all inputs; no error case.
pub fn grade_points(score: f64) -> f64 {
    match score {
        s if s >= 9.0 => 4.0,
        s if s >= 8.0 => 3.3,
        s if s >= 7.0 => 3.0,
        s if s >= 6.0 => 2.7,
        s if s >= 5.0 => 2.0,
        _ => 0.0,
    }
}

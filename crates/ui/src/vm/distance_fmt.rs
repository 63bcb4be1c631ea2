/// Formats a step length for the list: `"40 m"`, `"1.3 km"`, `"120 km"`.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    let meters = if meters.is_finite() { meters.max(0.0) } else { 0.0 };
    if meters < 1_000.0 {
        let rounded = (meters / 10.0).round() * 10.0;
        if rounded >= 1_000.0 {
            return "1.0 km".to_owned();
        }
        return format!("{rounded:.0} m");
    }
    let km = meters / 1_000.0;
    if km < 100.0 {
        format!("{km:.1} km")
    } else {
        format!("{km:.0} km")
    }
}

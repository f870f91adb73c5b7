//! Display formatting for chart numbers. All functions are total: non-finite
//! input formats as zero.

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Strips the sign from values that round to zero so `-0.04` shows as `0.0`.
fn clean_zero(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    if (value * factor).round() == 0.0 {
        0.0
    } else {
        value
    }
}

/// Chart value label, one decimal place.
pub fn format_value(value: f64) -> String {
    format!("{:.1}", clean_zero(finite_or_zero(value), 1))
}

/// Percentage label from a fraction in `[0, 1]`, one decimal place.
pub fn format_percentage(fraction: f64) -> String {
    let pct = finite_or_zero(fraction) * 100.0;
    format!("{:.1}%", clean_zero(pct, 1))
}

/// Axis tick label: the value rounded to an integer.
pub fn format_tick(value: f64) -> String {
    let rounded = finite_or_zero(value).round();
    format!("{}", clean_zero(rounded, 0) as i64)
}

//! Text parsing and rounding for terminal output.

/// Message shown when the mandatory dimensions are unusable.
pub const INPUT_PROBLEM: &str = "There's a problem with the input.";

/// Message shown in place of a result the registry cannot produce.
pub const NOT_AVAILABLE: &str = "prediction not available";

/// Parse a number typed with optional thousands separators.
///
/// Empty, non-numeric and NaN text all yield `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Optional dimension: blank, unparseable or zero means "use the default".
pub fn parse_optional(text: Option<&str>) -> Option<f64> {
    text.and_then(parse_number).filter(|v| *v != 0.0)
}

/// Round to `digits` significant figures, ties away from zero.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let power = digits as i32 - 1 - magnitude;
    // divide rather than multiply by a fractional scale so ties stay exact
    if power >= 0 {
        let scale = 10f64.powi(power);
        (value * scale).round() / scale
    } else {
        let scale = 10f64.powi(-power);
        (value / scale).round() * scale
    }
}

/// Group the integer part in threes and keep at most three decimals.
pub fn group_thousands(value: f64) -> String {
    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((&text, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }
    grouped
}

/// Peak flow shown with two significant figures, e.g. `1,200`.
pub fn flow(value: f64) -> Option<String> {
    value
        .is_finite()
        .then(|| group_thousands(round_significant(value, 2)))
}

/// Duration in hours as `Nh`, `Nh Mm`, `Mm Ss` or `Ss`.
///
/// Minutes and seconds are rounded to one significant figure. A unit that
/// rounds up to 60 carries into the next one before the layout is chosen.
pub fn duration(hours_value: f64) -> Option<String> {
    if !hours_value.is_finite() {
        return None;
    }
    let mut hours = hours_value.floor();
    let minutes_exact = (hours_value - hours) * 60.0;
    let mut minutes_whole = minutes_exact.floor();
    let seconds_exact = (minutes_exact - minutes_whole) * 60.0;

    let mut seconds = round_significant(seconds_exact, 1);
    if seconds >= 60.0 {
        seconds = 0.0;
        minutes_whole += 1.0;
    }
    let mut minutes = round_significant(minutes_exact, 1);
    if minutes >= 60.0 {
        minutes = 0.0;
        hours += 1.0;
    }

    let text = if hours > 10.0 {
        format!("{}h", hours)
    } else if hours > 0.0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes_whole > 0.0 {
        format!("{}m {}s", minutes_whole, seconds)
    } else {
        format!("{}s", seconds_exact.floor())
    };
    Some(text)
}

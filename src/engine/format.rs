/// Renders a numeric result as its canonical display string.
///
/// A value with no fractional part is rendered as a plain integer string,
/// with no decimal point and no trailing zeros. Any other value is rounded
/// to 2 decimal places and rendered with up to 2 fractional digits, with
/// trailing zeros trimmed.
///
/// # Examples
/// ```
/// use numex::engine::format::format_value;
///
/// assert_eq!(format_value(36.0), "36");
/// assert_eq!(format_value(10.0 / 3.0), "3.33");
/// assert_eq!(format_value(0.1 + 0.2), "0.3");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Folds negative zero into positive zero, so (0-1)*0 renders as "0".
    let value = value + 0.0;

    if value == value.trunc() {
        // `{:.0}` stays exact beyond the i64 range, unlike a cast.
        return format!("{value:.0}");
    }

    let rounded = format!("{value:.2}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}

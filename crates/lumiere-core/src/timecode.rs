//! Millisecond to display-string conversion
//!
//! Shared by duration display and the timestamp overlay; pure and total.

/// Render a millisecond count as `MM:SS`, or `H:MM:SS` once hours are present
///
/// Negative input renders as `"00:00"` (engines report -1 for "no media").
/// Hours are unpadded; minutes and seconds are always two digits.
pub fn format_ms(millis: i64) -> String {
    if millis < 0 {
        return "00:00".to_string();
    }

    let seconds = millis / 1000;
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_renders_as_zero() {
        assert_eq!(format_ms(-1), "00:00");
        assert_eq!(format_ms(i64::MIN), "00:00");
    }

    #[test]
    fn sub_hour_uses_two_fields() {
        assert_eq!(format_ms(0), "00:00");
        assert_eq!(format_ms(999), "00:00");
        assert_eq!(format_ms(1_000), "00:01");
        assert_eq!(format_ms(65_000), "01:05");
        assert_eq!(format_ms(3_599_000), "59:59");
    }

    #[test]
    fn hours_are_unpadded() {
        assert_eq!(format_ms(3_600_000), "1:00:00");
        assert_eq!(format_ms(3_665_000), "1:01:05");
        assert_eq!(format_ms(36_000_000), "10:00:00");
    }
}

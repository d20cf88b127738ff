use chrono::Duration;

/// `m:ss`, clamped at zero.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let seconds = value.num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::seconds(65)), "1:05");
        assert_eq!(format_elapsed(Duration::seconds(600)), "10:00");
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_elapsed(Duration::seconds(-3)), "0:00");
    }
}

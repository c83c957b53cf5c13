//! Tick-based time converters.

/// The game advances 20 ticks per second.
const TICKS_PER_SECOND: i64 = 20;

pub fn seconds(raw: i64) -> String {
    plural(total_seconds(raw), "second")
}

pub fn minutes(raw: i64) -> String {
    plural(total_seconds(raw) / 60, "minute")
}

pub fn hours(raw: i64) -> String {
    plural(total_seconds(raw) / 3600, "hour")
}

pub fn hours_minutes(raw: i64) -> String {
    let total = total_seconds(raw);
    format!(
        "{} {}",
        plural(total / 3600, "hour"),
        plural(total % 3600 / 60, "minute")
    )
}

pub fn minutes_seconds(raw: i64) -> String {
    let total = total_seconds(raw);
    format!(
        "{} {}",
        plural(total / 60, "minute"),
        plural(total % 60, "second")
    )
}

pub fn hours_minutes_seconds(raw: i64) -> String {
    let total = total_seconds(raw);
    format!(
        "{} {} {}",
        plural(total / 3600, "hour"),
        plural(total % 3600 / 60, "minute"),
        plural(total % 60, "second")
    )
}

fn total_seconds(raw: i64) -> i64 {
    raw / TICKS_PER_SECOND
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_pluralization() {
        assert_eq!(seconds(20), "1 second");
        assert_eq!(seconds(40), "2 seconds");
        assert_eq!(seconds(0), "0 seconds");
        // Partial seconds truncate.
        assert_eq!(seconds(39), "1 second");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(minutes(60 * 20), "1 minute");
        assert_eq!(minutes(150 * 20), "2 minutes");
        assert_eq!(hours(3600 * 20), "1 hour");
        assert_eq!(hours(7200 * 20), "2 hours");
    }

    #[test]
    fn test_hours_minutes_composite() {
        // 1h 05m.
        assert_eq!(hours_minutes(3900 * 20), "1 hour 5 minutes");
        assert_eq!(hours_minutes(7260 * 20), "2 hours 1 minute");
    }

    #[test]
    fn test_minutes_seconds_composite() {
        // 65 seconds.
        assert_eq!(minutes_seconds(65 * 20), "1 minute 5 seconds");
        assert_eq!(minutes_seconds(121 * 20), "2 minutes 1 second");
    }

    #[test]
    fn test_hours_minutes_seconds_composite() {
        // 1h 1m 1s.
        assert_eq!(hours_minutes_seconds(3661 * 20), "1 hour 1 minute 1 second");
        assert_eq!(
            hours_minutes_seconds(7322 * 20),
            "2 hours 2 minutes 2 seconds"
        );
        assert_eq!(hours_minutes_seconds(0), "0 hours 0 minutes 0 seconds");
    }
}

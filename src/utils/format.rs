use chrono::{Local, NaiveDate, TimeZone};

/// The "YYYY-MM-DD" day key used for store keys, medals, and plan dates.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's day key in local time.
pub fn today_key() -> String {
    day_key(Local::now().date_naive())
}

/// Format a date for headers, e.g. "Sun, Aug 23 2026"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%a, %b %d %Y").to_string()
}

/// Format an epoch-milliseconds timestamp for list rows, local time.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Truncate a string to a maximum number of characters, adding ellipsis if
/// needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Anchor token for a section heading: lowercased, spaces joined by
/// hyphens, everything else dropped. "Sleep Hygiene" becomes "sleep-hygiene".
pub fn heading_slug(heading: &str) -> String {
    heading
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse "HH:MM" into minutes since midnight. Rejects out-of-range fields.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_key() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(day_key(date), "2026-08-23");
        assert_eq!(day_key(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()), "2026-01-05");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }

    #[test]
    fn test_heading_slug() {
        assert_eq!(heading_slug("Sleep Hygiene"), "sleep-hygiene");
        assert_eq!(heading_slug("  Hydration "), "hydration");
        assert_eq!(heading_slug("Evening Routine!"), "evening-routine");
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("06:30"), Some(390));
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("noon"), None);
    }
}

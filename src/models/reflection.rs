use serde::{Deserialize, Serialize};

use super::goal::Dimension;

/// A journal entry. `date` is the "YYYY-MM-DD" day key; `timestamp` is the
/// creation instant in epoch milliseconds, used for sorting and id derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    pub id: String,
    pub category: Dimension,
    pub title: String,
    pub text: String,
    pub date: String,
    pub timestamp: i64,
}

impl Reflection {
    /// First line of the body, shortened for list rows.
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.text.lines().next().unwrap_or("");
        if first_line.chars().count() <= max_chars {
            first_line.to_string()
        } else {
            let cut: String = first_line.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{}...", cut)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> Reflection {
        Reflection {
            id: "1".to_string(),
            category: Dimension::Mental,
            title: "t".to_string(),
            text: text.to_string(),
            date: "2026-08-23".to_string(),
            timestamp: 1,
        }
    }

    #[test]
    fn test_preview_short_text() {
        assert_eq!(entry("calm morning").preview(40), "calm morning");
    }

    #[test]
    fn test_preview_truncates_long_first_line() {
        let r = entry("a very long first line that should be cut\nsecond line");
        let p = r.preview(20);
        assert!(p.ends_with("..."));
        assert!(p.chars().count() <= 20);
    }
}

//! Utility functions for dates, keys, ids, and string formatting.

pub mod format;
pub mod ids;

// Re-export commonly used functions at module level
pub use format::{
    day_key, format_day, format_timestamp, heading_slug, parse_hhmm, today_key, truncate_string,
};
pub use ids::next_millis_id;

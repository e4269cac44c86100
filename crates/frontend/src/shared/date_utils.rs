//! Utilities for date and time formatting

use chrono::{DateTime, Local, Utc};

/// Format a timestamp as local wall-clock time for message bubbles
/// Example: 14:02:26
pub fn format_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_shape() {
        let ts = Utc::now();
        let formatted = format_time(&ts);
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.as_bytes()[2], b':');
        assert_eq!(formatted.as_bytes()[5], b':');
    }
}

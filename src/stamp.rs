use chrono::{DateTime, Local};

/// Formats a local timestamp as `YYYY-MM-DDTHH:MM:SS`, appending the
/// decimal microsecond fraction (a `.` and six digits, no leading zero
/// before the dot) when `microtime` is set.
pub fn format_timestamp(at: DateTime<Local>, microtime: bool) -> String {
    let mut time = at.format("%Y-%m-%dT%H:%M:%S").to_string();
    if microtime {
        time.push_str(&format!(".{:06}", at.timestamp_subsec_micros()));
    }
    time
}

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::domain::Timestamp;

/// JST is UTC+9
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> Timestamp {
    let now_jst: DateTime<FixedOffset> = Utc::now().with_timezone(&jst());
    Timestamp::new(now_jst.timestamp_millis())
}

/// Format a timestamp as RFC 3339 in JST. Out-of-range values fall back to the epoch.
pub fn timestamp_to_jst_rfc3339(timestamp: Timestamp) -> String {
    DateTime::from_timestamp_millis(timestamp.value())
        .unwrap_or_default()
        .with_timezone(&jst())
        .to_rfc3339()
}

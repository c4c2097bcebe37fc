use chrono::{Duration, Local, NaiveDate, NaiveTime};
use serde_json::{json, Value};

/// Date `days` before today in the server's local time zone
pub fn days_ago(days: i64) -> NaiveDate {
    Local::now().date_naive() - Duration::days(days)
}

/// Date `days` after today in the server's local time zone
pub fn days_ahead(days: i64) -> NaiveDate {
    Local::now().date_naive() + Duration::days(days)
}

/// Fixed calendar date, panicking on an invalid one since fixtures are static
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Whole-minute time of day
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid fixture time")
}

/// Chat completion body the scoring oracle returns
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

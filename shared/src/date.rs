//! 日期与时间戳工具
//!
//! 纯字符串层面的解析与格式化，不读取系统时钟，
//! 因此在 wasm 与宿主环境下行为一致。

use chrono::{DateTime, NaiveDate};

/// 校验 "YYYY-MM-DD" 日期字符串
pub fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// 将 RFC 3339 时间戳格式化为活动列表里展示的短格式，
/// 例如 "Mar 1, 2024 9:00 AM"。解析失败时原样返回。
pub fn format_timestamp(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_dates_and_rejects_garbage() {
        assert!(is_valid_date("2024-03-01"));
        assert!(is_valid_date("1999-12-31"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("01/03/2024"));
        assert!(!is_valid_date(""));
    }

    // 日期输入框编辑过程中的中间值都不能当作有效日期
    #[test]
    fn partially_edited_input_values_are_rejected() {
        assert!(!is_valid_date("2024"));
        assert!(!is_valid_date("2024-03"));
        assert!(!is_valid_date("2024-03-"));
    }

    #[test]
    fn formats_rfc3339_timestamps_for_display() {
        assert_eq!(
            format_timestamp("2024-03-01T09:00:00Z"),
            "Mar 1, 2024 9:00 AM"
        );
        assert_eq!(
            format_timestamp("2024-11-20T16:45:00+00:00"),
            "Nov 20, 2024 4:45 PM"
        );
    }

    #[test]
    fn unparsable_timestamps_pass_through_unchanged() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}

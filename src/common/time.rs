use chrono::{DateTime, Utc};

/// Format an origin-supplied RFC 3339 timestamp for display.
///
/// Timestamps are advisory only; input that does not parse is returned
/// unchanged rather than rejected.
pub fn format_room_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_room_timestamp_utc() {
        // テスト項目: RFC 3339 (Z) のタイムスタンプを表示形式に変換できる
        assert_eq!(
            format_room_timestamp("2024-05-01T12:30:00Z"),
            "2024-05-01 12:30:00 UTC"
        );
    }

    #[test]
    fn test_format_room_timestamp_with_offset() {
        // テスト項目: オフセット付きタイムスタンプは UTC に正規化される
        assert_eq!(
            format_room_timestamp("2024-05-01T21:30:00+09:00"),
            "2024-05-01 12:30:00 UTC"
        );
    }

    #[test]
    fn test_format_room_timestamp_unparseable_passthrough() {
        // テスト項目: 解釈できない入力はそのまま返される
        assert_eq!(format_room_timestamp("yesterday"), "yesterday");
    }
}

//! 预订日期类型
//!
//! `<input type="date">` 产生 `YYYY-MM-DD` 格式的字符串，
//! `BookingDate` 负责校验并保持这一格式用于传输。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date chosen for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// 解析 `YYYY-MM-DD`，前后空白会被忽略。
    ///
    /// 返回 None 如果解析失败
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s.trim(), BOOKING_DATE_FORMAT)
            .ok()
            .map(Self)
    }

    #[inline]
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BOOKING_DATE_FORMAT))
    }
}

impl From<NaiveDate> for BookingDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for BookingDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BookingDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid booking date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_date_format() {
        let date = BookingDate::parse(" 2024-03-15 ").unwrap();
        assert_eq!(date.to_string(), "2024-03-15");
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn rejects_other_formats_and_impossible_dates() {
        assert!(BookingDate::parse("").is_none());
        assert!(BookingDate::parse("15/03/2024").is_none());
        assert!(BookingDate::parse("2024-02-30").is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let date = BookingDate::parse("2025-01-02").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2025-01-02\"");
        let back: BookingDate = serde_json::from_str("\"2025-01-02\"").unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<BookingDate>("\"tomorrow\"").is_err());
    }
}

//! Calendar arithmetic for projection months and boundary date formatting

use chrono::{Months, NaiveDate};

/// Display format used at every output boundary (e.g. "05.02.2024")
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Calendar date of a 1-based projection month.
///
/// Month `k` falls `k - 1` months after `start`, keeping the day of month
/// where the target month has it and clamping to the month's last day otherwise.
/// Returns `None` if the date leaves chrono's supported range.
pub fn month_date(start: NaiveDate, month_index: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(month_index.saturating_sub(1)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter writing dates as `dd.mm.yyyy`
pub mod display_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2024, 2, 5)), "05.02.2024");
        assert_eq!(format_date(ymd(2031, 12, 31)), "31.12.2031");
    }

    #[test]
    fn test_month_dates() {
        let start = ymd(2024, 1, 15);
        assert_eq!(month_date(start, 1), Some(start));
        assert_eq!(month_date(start, 2), Some(ymd(2024, 2, 15)));
        assert_eq!(month_date(start, 13), Some(ymd(2025, 1, 15)));
    }

    #[test]
    fn test_month_end_clamping() {
        // Jan 31 + 1 month lands on the last day of February
        let start = ymd(2024, 1, 31);
        assert_eq!(month_date(start, 2), Some(ymd(2024, 2, 29)));
        assert_eq!(month_date(start, 3), Some(ymd(2024, 3, 31)));
        assert_eq!(month_date(start, 14), Some(ymd(2025, 2, 28)));
    }
}

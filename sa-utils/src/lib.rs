//! Shared utility functions for store analytics crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

    const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// The date `days` days before `today`.
    ///
    /// Saturates at the earliest representable date instead of failing.
    pub fn cutoff_date(today: &NaiveDate, days: u64) -> NaiveDate {
        today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
    }

    /// First day of the given month, or None for an out-of-range month.
    pub fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, 1)
    }

    /// Zero-padded "YYYY-MM" bucket key. Sorting these keys as strings
    /// gives chronological order for four-digit years.
    pub fn month_key(year: i32, month: u32) -> String {
        format!("{}-{:02}", year, month)
    }

    /// English month name for a 1-based month number.
    pub fn month_name(month: u32) -> Option<&'static str> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        MONTH_NAMES.get(idx).copied()
    }

    /// Parse a prediction date label.
    ///
    /// Accepts plain dates ("2024-05-01"), local date-times
    /// ("2024-05-01T10:00:00") and RFC 3339 timestamps.
    pub fn parse_label_date(label: &str) -> Option<NaiveDateTime> {
        let label = label.trim();
        if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(label, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt);
        }
        DateTime::parse_from_rfc3339(label)
            .ok()
            .map(|dt| dt.naive_utc())
    }

}

/// Number formatting for display widgets
pub mod format {
    /// Two-decimal fixed notation, e.g. `25.00`.
    pub fn fixed2(value: f64) -> String {
        format!("{:.2}", value)
    }

    /// A ratio (0.25) rendered as a percentage number (`25.00`), no sign.
    pub fn ratio_as_percent(ratio: f64) -> String {
        fixed2(ratio * 100.0)
    }

    /// A percent change with an explicit `+` for positive values: `+12.50%`, `-3.00%`, `0.00%`.
    pub fn signed_percent(change: f64) -> String {
        let sign = if change > 0.0 { "+" } else { "" };
        format!("{}{}%", sign, fixed2(change))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_fixed2() {
            assert_eq!(fixed2(25.0), "25.00");
            assert_eq!(fixed2(33.33333), "33.33");
            assert_eq!(fixed2(0.0), "0.00");
        }

        #[test]
        fn test_ratio_as_percent() {
            assert_eq!(ratio_as_percent(0.0525), "5.25");
        }

        #[test]
        fn test_signed_percent() {
            assert_eq!(signed_percent(12.5), "+12.50%");
            assert_eq!(signed_percent(-3.0), "-3.00%");
            assert_eq!(signed_percent(0.0), "0.00%");
        }
    }
}

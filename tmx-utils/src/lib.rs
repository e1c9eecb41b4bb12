//! Shared utility functions for temperature matrix crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// ISO date format used by the daily temperature CSV.
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Full month names, indexed by zero-based month.
    pub const MONTH_NAMES: [&str; 12] = [
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

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)?)
    }

    /// Month name for a zero-based month index. Out of range yields "".
    pub fn month_name(month0: u32) -> &'static str {
        MONTH_NAMES.get(month0 as usize).copied().unwrap_or("")
    }

    /// Format a year and zero-based month as "YYYY-MM".
    pub fn year_month_label(year: i32, month0: u32) -> String {
        format!("{}-{:02}", year, month0 + 1)
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// A value that could not be parsed from user input.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ParseError(pub String);

    impl fmt::Display for ParseError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Parse error: {}", self.0)
        }
    }

    impl std::error::Error for ParseError {}
}

// Test fixtures - reusable test data
// Provides consistent clocks and dates across all test files

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Mar 12, 2025
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    /// Monday, Jan 29, 2024; its week runs into February
    pub fn month_boundary_monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 29).unwrap()
    }

    /// Tuesday, Dec 30, 2025; its week runs into the next year
    pub fn year_boundary_tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 30).unwrap()
    }
}

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Local time on the Wednesday fixture
    pub fn wednesday_at(hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 12, hour, minute, 0)
            .single()
            .expect("fixture time is unambiguous")
    }
}

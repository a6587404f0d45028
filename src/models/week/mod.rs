// Week model
// The seven dates of the previewed week, Monday first

use chrono::{Datelike, Days, NaiveDate};

use crate::services::clock::Clock;

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// A concrete day of the displayed week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub date: NaiveDate,
    pub is_today: bool,
}

impl CalendarDate {
    /// 0 = Monday … 6 = Sunday
    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_monday() as usize
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday_index() >= 5
    }

    pub fn weekday_abbreviation(&self) -> &'static str {
        WEEKDAY_ABBREVIATIONS[self.weekday_index()]
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// Monday of the week containing `date`.
///
/// Counts back `(weekday + 6) % 7` days with Sunday as weekday 0.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as u64;
    let offset = (weekday + 6) % 7;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// The displayed week. Computed once per mount; it does not follow the
/// clock across midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    today: NaiveDate,
    days: Vec<CalendarDate>,
}

impl Week {
    pub fn containing(today: NaiveDate) -> Self {
        Self::for_dates(today, today)
    }

    /// The week containing `reference`, with `is_today` judged against `today`.
    pub fn for_dates(reference: NaiveDate, today: NaiveDate) -> Self {
        let days = monday_of(reference)
            .iter_days()
            .take(7)
            .map(|date| CalendarDate {
                date,
                is_today: date == today,
            })
            .collect();
        Self { today, days }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::containing(clock.now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    pub fn first(&self) -> Option<&CalendarDate> {
        self.days.first()
    }

    pub fn last(&self) -> Option<&CalendarDate> {
        self.days.last()
    }

    pub fn today_index(&self) -> Option<usize> {
        self.days.iter().position(|d| d.is_today)
    }

    /// Month heading for the week, e.g. `January – February 2025`.
    pub fn month_label(&self) -> String {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return String::new();
        };
        month_range_label(first.date, last.date)
    }
}

pub fn month_range_label(first: NaiveDate, last: NaiveDate) -> String {
    let first_month = first.format("%B");
    let last_month = last.format("%B");
    if first.year() != last.year() {
        format!("{} {} – {} {}", first_month, first.year(), last_month, last.year())
    } else if first.month() != last.month() {
        format!("{} – {} {}", first_month, last_month, first.year())
    } else {
        format!("{} {}", first_month, first.year())
    }
}

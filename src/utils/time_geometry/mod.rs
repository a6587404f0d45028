//! Vertical geometry and time labels for the 24-hour grid.
//!
//! Everything here is a pure function of its arguments. Hours are 0–23 and
//! minutes 0–59; other inputs are not supported.

/// Vertical space trimmed from every event block so stacked blocks stay apart.
pub const EVENT_GUTTER: f32 = 4.0;
/// Smallest block height that still fits a readable title.
pub const MIN_EVENT_HEIGHT: f32 = 24.0;
/// Blocks shorter than this only show their title.
pub const TIME_DETAIL_MIN_HEIGHT: f32 = 28.0;
pub const DEFAULT_HOUR_HEIGHT: f32 = 52.0;
pub const HOURS_PER_DAY: u32 = 24;

/// Maps instants and durations to pixel offsets inside a day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    hour_height: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(DEFAULT_HOUR_HEIGHT)
    }
}

impl TimeScale {
    pub fn new(hour_height: f32) -> Self {
        Self { hour_height }
    }

    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    /// Offset from the top of the grid for `hour:minute`.
    pub fn top(&self, hour: u32, minute: u32) -> f32 {
        (hour as f32 + minute as f32 / 60.0) * self.hour_height
    }

    /// Block height for a duration, floored at [`MIN_EVENT_HEIGHT`].
    pub fn block_height(&self, duration_minutes: u32) -> f32 {
        let raw = duration_minutes as f32 / 60.0 * self.hour_height - EVENT_GUTTER;
        raw.max(MIN_EVENT_HEIGHT)
    }

    pub fn grid_height(&self) -> f32 {
        HOURS_PER_DAY as f32 * self.hour_height
    }

    /// Scroll offset that leaves `lead_hours` of context above the current hour.
    pub fn initial_scroll_offset(&self, current_hour: u32, lead_hours: u32) -> f32 {
        let hours = current_hour.saturating_sub(lead_hours);
        hours as f32 * self.hour_height
    }
}

pub fn shows_time_detail(block_height: f32) -> bool {
    block_height >= TIME_DETAIL_MIN_HEIGHT
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    (display, period)
}

/// Label for the hour row in the time column.
///
/// Midnight gets no text: the top edge of the grid already marks it.
pub fn format_hour(hour: u32) -> String {
    if hour == 0 {
        return String::new();
    }
    let (display, period) = twelve_hour(hour);
    format!("{} {}", display, period)
}

/// Compact start time shown inside an event block, e.g. `9 AM` or `9:30 AM`.
pub fn format_time(hour: u32, minute: u32) -> String {
    let (display, period) = twelve_hour(hour);
    if minute == 0 {
        format!("{} {}", display, period)
    } else {
        format!("{}:{:02} {}", display, minute, period)
    }
}

/// Text of the current-time badge, e.g. `9:05AM`.
pub fn format_clock_badge(hour: u32, minute: u32) -> String {
    let (display, period) = twelve_hour(hour);
    format!("{}:{:02}{}", display, minute, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "" ; "midnight is blank")]
    #[test_case(1, "1 AM")]
    #[test_case(11, "11 AM")]
    #[test_case(12, "12 PM" ; "noon")]
    #[test_case(13, "1 PM")]
    #[test_case(23, "11 PM")]
    fn test_format_hour(hour: u32, expected: &str) {
        assert_eq!(format_hour(hour), expected);
    }

    #[test_case(9, 0, "9 AM")]
    #[test_case(9, 5, "9:05 AM")]
    #[test_case(13, 30, "1:30 PM")]
    #[test_case(0, 0, "12 AM" ; "midnight")]
    #[test_case(12, 0, "12 PM" ; "noon")]
    fn test_format_time(hour: u32, minute: u32, expected: &str) {
        assert_eq!(format_time(hour, minute), expected);
    }

    #[test_case(9, 5, "9:05AM")]
    #[test_case(0, 0, "12:00AM")]
    #[test_case(12, 45, "12:45PM")]
    #[test_case(23, 59, "11:59PM")]
    fn test_format_clock_badge(hour: u32, minute: u32, expected: &str) {
        assert_eq!(format_clock_badge(hour, minute), expected);
    }

    #[test]
    fn test_top_of_day_is_zero() {
        assert_eq!(TimeScale::default().top(0, 0), 0.0);
    }

    #[test]
    fn test_top_half_hour() {
        let scale = TimeScale::new(52.0);
        assert_eq!(scale.top(9, 30), 9.5 * 52.0);
    }

    #[test]
    fn test_block_height_subtracts_gutter() {
        let scale = TimeScale::new(52.0);
        assert_eq!(scale.block_height(60), 48.0);
        assert_eq!(scale.block_height(120), 100.0);
    }

    #[test]
    fn test_block_height_floor() {
        let scale = TimeScale::new(52.0);
        assert_eq!(scale.block_height(5), MIN_EVENT_HEIGHT);
        assert_eq!(scale.block_height(30), MIN_EVENT_HEIGHT);
    }

    #[test]
    fn test_initial_scroll_offset() {
        let scale = TimeScale::new(52.0);
        assert_eq!(scale.initial_scroll_offset(9, 2), 7.0 * 52.0);
        assert_eq!(scale.initial_scroll_offset(1, 2), 0.0);
        assert_eq!(scale.initial_scroll_offset(2, 2), 0.0);
    }

    #[test]
    fn test_time_detail_threshold() {
        let scale = TimeScale::new(52.0);
        // 45 minutes: 39 - 4 = 35
        assert!(shows_time_detail(scale.block_height(45)));
        // 30 minutes hits the floor
        assert!(!shows_time_detail(scale.block_height(30)));
    }
}

// Event module
// Read-only sample events shown in the week preview

use std::fmt;

use egui::Color32;

/// Base hue of an event. Values match the calendar app's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventColor {
    Graphite,
    Coral,
    Terracotta,
    Amber,
    Sage,
    Teal,
    Sky,
    Slate,
    Lavender,
    Plum,
    Rose,
}

impl EventColor {
    pub const ALL: [EventColor; 11] = [
        EventColor::Graphite,
        EventColor::Coral,
        EventColor::Terracotta,
        EventColor::Amber,
        EventColor::Sage,
        EventColor::Teal,
        EventColor::Sky,
        EventColor::Slate,
        EventColor::Lavender,
        EventColor::Plum,
        EventColor::Rose,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            EventColor::Graphite => "#64748b",
            EventColor::Coral => "#c93c35",
            EventColor::Terracotta => "#b85a15",
            EventColor::Amber => "#937115",
            EventColor::Sage => "#258a3e",
            EventColor::Teal => "#00858e",
            EventColor::Sky => "#0072c3",
            EventColor::Slate => "#4c6a9e",
            EventColor::Lavender => "#6050cc",
            EventColor::Plum => "#9848b2",
            EventColor::Rose => "#c43262",
        }
    }

    pub fn color32(self) -> Color32 {
        crate::utils::color::parse_hex(self.hex()).unwrap_or(Color32::from_rgb(100, 150, 200))
    }
}

/// Selection identity of a sample event.
///
/// Derived from the weekday and start time. Two events starting at the same
/// minute on the same weekday share an identity; the sample catalog never
/// does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId {
    pub weekday_index: usize,
    pub start_hour: u32,
    pub start_minute: u32,
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.weekday_index, self.start_hour, self.start_minute)
    }
}

/// A timed event pinned to a weekday of the displayed week.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleEvent {
    /// 0 = Monday … 6 = Sunday
    pub weekday_index: usize,
    pub start_hour: u32,
    pub start_minute: u32,
    pub duration_minutes: u32,
    pub title: &'static str,
    pub color: EventColor,
}

impl SampleEvent {
    pub const fn new(
        weekday_index: usize,
        start_hour: u32,
        start_minute: u32,
        duration_minutes: u32,
        title: &'static str,
        color: EventColor,
    ) -> Self {
        Self {
            weekday_index,
            start_hour,
            start_minute,
            duration_minutes,
            title,
            color,
        }
    }

    pub fn id(&self) -> EventId {
        EventId {
            weekday_index: self.weekday_index,
            start_hour: self.start_hour,
            start_minute: self.start_minute,
        }
    }

    /// Minutes from midnight to the start of the event.
    pub fn start_minute_of_day(&self) -> u32 {
        self.start_hour * 60 + self.start_minute
    }

    pub fn end_minute_of_day(&self) -> u32 {
        self.start_minute_of_day() + self.duration_minutes
    }
}

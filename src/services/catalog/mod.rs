//! Fixed sample events standing in for a real event provider.

use crate::models::event::{EventColor, SampleEvent};

use EventColor::*;

pub const SAMPLE_EVENTS: &[SampleEvent] = &[
    // Monday
    SampleEvent::new(0, 9, 0, 60, "Standup", Sky),
    SampleEvent::new(0, 11, 0, 90, "Design review", Lavender),
    SampleEvent::new(0, 14, 0, 60, "1:1 with Sarah", Teal),
    // Tuesday
    SampleEvent::new(1, 8, 30, 60, "Morning run", Sage),
    SampleEvent::new(1, 10, 0, 120, "Deep work", Slate),
    SampleEvent::new(1, 15, 0, 90, "Product sync", Sky),
    // Wednesday
    SampleEvent::new(2, 9, 30, 45, "Team standup", Sky),
    SampleEvent::new(2, 11, 0, 60, "Lunch with Alex", Terracotta),
    SampleEvent::new(2, 13, 30, 120, "Workshop", Plum),
    SampleEvent::new(2, 16, 0, 60, "Coffee chat", Amber),
    // Thursday
    SampleEvent::new(3, 9, 0, 60, "Standup", Sky),
    SampleEvent::new(3, 10, 30, 90, "Client call", Coral),
    SampleEvent::new(3, 13, 0, 60, "Dentist", Graphite),
    SampleEvent::new(3, 15, 30, 90, "Code review", Lavender),
    // Friday
    SampleEvent::new(4, 9, 0, 45, "Standup", Sky),
    SampleEvent::new(4, 10, 0, 120, "Focus time", Teal),
    SampleEvent::new(4, 14, 0, 60, "Retro", Rose),
    // Saturday
    SampleEvent::new(5, 10, 0, 90, "Yoga", Sage),
    SampleEvent::new(5, 13, 0, 120, "Museum visit", Terracotta),
    // Sunday
    SampleEvent::new(6, 11, 0, 60, "Brunch", Amber),
    SampleEvent::new(6, 15, 0, 90, "Read & relax", Slate),
];

/// Read-only, ordered event collection.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCatalog {
    events: Vec<SampleEvent>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl EventCatalog {
    pub fn new(events: Vec<SampleEvent>) -> Self {
        Self { events }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_EVENTS.to_vec())
    }

    pub fn events(&self) -> &[SampleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events on weekday `weekday_index` (0 = Monday), in catalog order.
    pub fn events_for_weekday(
        &self,
        weekday_index: usize,
    ) -> impl Iterator<Item = &SampleEvent> + '_ {
        self.events
            .iter()
            .filter(move |event| event.weekday_index == weekday_index)
    }

    pub fn count_for_weekday(&self, weekday_index: usize) -> usize {
        self.events_for_weekday(weekday_index).count()
    }

    /// Collapsed all-day row text: empty for a free day, `"{N} events"` otherwise.
    pub fn all_day_summary(&self, weekday_index: usize) -> String {
        match self.count_for_weekday(weekday_index) {
            0 => String::new(),
            count => format!("{} events", count),
        }
    }
}

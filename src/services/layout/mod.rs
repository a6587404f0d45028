//! Week-grid layout: turns the week, the catalog, the selection and the
//! current instant into positioned blocks.
//!
//! The output is plain data in grid coordinates (y = 0 is midnight at the top
//! of the scrolling grid). The egui view only translates and paints it, so
//! every frame's picture is a pure function of these inputs.

use chrono::{DateTime, Local, Timelike};

use crate::models::event::{EventId, SampleEvent};
use crate::models::week::{CalendarDate, Week};
use crate::services::catalog::EventCatalog;
use crate::services::selection::SelectionState;
use crate::utils::time_geometry::{format_clock_badge, format_time, shows_time_detail, TimeScale};

/// Inset of a block from the left edge of its day column.
pub const BLOCK_INSET_LEFT: f32 = 1.0;
/// Inset of a block from the right edge, leaving room to click the column.
pub const BLOCK_INSET_RIGHT: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTint {
    Today,
    Weekend,
    Plain,
}

impl ColumnTint {
    /// Today wins over weekend.
    pub fn for_date(date: &CalendarDate) -> Self {
        if date.is_today {
            ColumnTint::Today
        } else if date.is_weekend() {
            ColumnTint::Weekend
        } else {
            ColumnTint::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock<'a> {
    pub event: &'a SampleEvent,
    pub id: EventId,
    pub top: f32,
    pub height: f32,
    pub show_time: bool,
    pub time_label: String,
    pub selected: bool,
}

impl<'a> EventBlock<'a> {
    pub fn new(event: &'a SampleEvent, scale: TimeScale, selection: &SelectionState) -> Self {
        let id = event.id();
        let height = scale.block_height(event.duration_minutes);
        Self {
            event,
            id,
            top: scale.top(event.start_hour, event.start_minute),
            height,
            show_time: shows_time_detail(height),
            time_label: format_time(event.start_hour, event.start_minute),
            selected: selection.is_selected(id),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumnLayout<'a> {
    pub date: CalendarDate,
    pub tint: ColumnTint,
    /// Text of the collapsed all-day row
    pub summary: String,
    pub blocks: Vec<EventBlock<'a>>,
}

impl<'a> DayColumnLayout<'a> {
    /// Unselected blocks in catalog order.
    pub fn resting_blocks(&self) -> impl Iterator<Item = &EventBlock<'a>> {
        self.blocks.iter().filter(|block| !block.selected)
    }

    pub fn selected_block(&self) -> Option<&EventBlock<'a>> {
        self.blocks.iter().find(|block| block.selected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTimeMarker {
    pub top: f32,
    pub badge: String,
    /// Column of today, or `None` when the week does not contain today
    pub day_index: Option<usize>,
}

impl CurrentTimeMarker {
    pub fn new(now: DateTime<Local>, week: &Week, scale: TimeScale) -> Self {
        Self {
            top: scale.top(now.hour(), now.minute()),
            badge: format_clock_badge(now.hour(), now.minute()),
            day_index: week.today_index(),
        }
    }

    pub fn shows_line(&self) -> bool {
        self.day_index.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout<'a> {
    pub month_label: String,
    pub columns: Vec<DayColumnLayout<'a>>,
    pub marker: CurrentTimeMarker,
    pub grid_height: f32,
}

impl<'a> WeekLayout<'a> {
    pub fn blocks(&self) -> impl Iterator<Item = &EventBlock<'a>> {
        self.columns.iter().flat_map(|column| column.blocks.iter())
    }

    pub fn selected_count(&self) -> usize {
        self.blocks().filter(|block| block.selected).count()
    }
}

/// Lay out the whole week.
pub fn layout_week<'a>(
    week: &Week,
    catalog: &'a EventCatalog,
    selection: &SelectionState,
    now: DateTime<Local>,
    scale: TimeScale,
) -> WeekLayout<'a> {
    let columns = week
        .days()
        .iter()
        .map(|date| {
            let weekday = date.weekday_index();
            DayColumnLayout {
                date: *date,
                tint: ColumnTint::for_date(date),
                summary: catalog.all_day_summary(weekday),
                blocks: catalog
                    .events_for_weekday(weekday)
                    .map(|event| EventBlock::new(event, scale, selection))
                    .collect(),
            }
        })
        .collect();

    WeekLayout {
        month_label: week.month_label(),
        columns,
        marker: CurrentTimeMarker::new(now, week, scale),
        grid_height: scale.grid_height(),
    }
}

/// Horizontal split of the grid: a fixed time column, then seven equal day columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    pub left: f32,
    pub time_column_width: f32,
    pub column_width: f32,
}

impl ColumnGeometry {
    pub fn new(left: f32, total_width: f32, time_column_width: f32, day_count: usize) -> Self {
        let days = day_count.max(1) as f32;
        let column_width = ((total_width - time_column_width) / days).max(0.0);
        Self {
            left,
            time_column_width,
            column_width,
        }
    }

    pub fn days_left(&self) -> f32 {
        self.left + self.time_column_width
    }

    /// Left and right edge of day column `index`.
    pub fn column_span(&self, index: usize) -> (f32, f32) {
        let start = self.days_left() + index as f32 * self.column_width;
        (start, start + self.column_width)
    }

    /// Left and right edge of a block inside day column `index`.
    pub fn block_span(&self, index: usize) -> (f32, f32) {
        let (start, end) = self.column_span(index);
        let left = start + BLOCK_INSET_LEFT;
        (left, (end - BLOCK_INSET_RIGHT).max(left))
    }
}

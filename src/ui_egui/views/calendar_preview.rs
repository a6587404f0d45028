//! The calendar week-view preview.
//!
//! Owns everything the preview needs for one mount: the week, the sample
//! catalog, the selection and the live clock. Each frame it lays the week out
//! with [`layout_week`] and paints, top to bottom, the month label, the
//! weekday header, the collapsed all-day row and the scrolling hour grid.

use std::sync::Arc;

use chrono::{DateTime, Local, Timelike};
use egui::scroll_area::ScrollBarVisibility;
use egui::{
    Align2, CursorIcon, FontId, Pos2, Rect, Response, Rounding, Sense, Stroke, Vec2,
};

use super::event_chip::{paint_event_chip, ChipStyle};
use crate::models::settings::{GridSettings, PreviewSettings};
use crate::models::week::Week;
use crate::services::catalog::EventCatalog;
use crate::services::clock::{Clock, LiveClock};
use crate::services::layout::{layout_week, ColumnGeometry, ColumnTint, EventBlock, WeekLayout};
use crate::services::selection::{GridInteraction, SelectionState};
use crate::ui_egui::theme::PreviewTheme;
use crate::utils::time_geometry::{format_hour, TimeScale, HOURS_PER_DAY};

const LABEL_SIZE: f32 = 10.0;
const HEADER_SIZE: f32 = 13.0;
const MONTH_SIZE: f32 = 15.0;
const MARKER_DOT_RADIUS: f32 = 3.5;

pub struct CalendarPreview {
    id: egui::Id,
    week: Week,
    catalog: EventCatalog,
    selection: SelectionState,
    live_clock: Option<LiveClock>,
    mounted_at: DateTime<Local>,
    grid: GridSettings,
    scale: TimeScale,
    pending_scroll: Option<f32>,
}

impl CalendarPreview {
    /// Build the preview and start its clock.
    ///
    /// The week and the initial scroll position come from a single clock read;
    /// the timer wakes `ctx` on every tick.
    pub fn mount(ctx: &egui::Context, clock: Arc<dyn Clock>, settings: &PreviewSettings) -> Self {
        Self::mount_with_catalog(ctx, clock, settings, EventCatalog::sample())
    }

    pub fn mount_with_catalog(
        ctx: &egui::Context,
        clock: Arc<dyn Clock>,
        settings: &PreviewSettings,
        catalog: EventCatalog,
    ) -> Self {
        let repaint_ctx = ctx.clone();
        let live_clock = match LiveClock::mount(clock.clone(), settings.clock.tick_interval(), move || {
            repaint_ctx.request_repaint();
        }) {
            Ok(live_clock) => Some(live_clock),
            Err(err) => {
                log::error!("Current-time indicator will not refresh: {:#}", err);
                None
            }
        };

        let mounted_at = live_clock
            .as_ref()
            .map(LiveClock::now)
            .unwrap_or_else(|| clock.now());
        let week = Week::containing(mounted_at.date_naive());
        let scale = settings.grid.time_scale();
        let pending_scroll =
            Some(scale.initial_scroll_offset(mounted_at.hour(), settings.grid.scroll_lead_hours));

        log::info!(
            "Calendar preview mounted for {} with {} events",
            week.month_label(),
            catalog.len()
        );

        Self {
            id: egui::Id::new("calendar_preview"),
            week,
            catalog,
            selection: SelectionState::new(),
            live_clock,
            mounted_at,
            grid: settings.grid.clone(),
            scale,
            pending_scroll,
        }
    }

    /// Distinguish several previews in one window.
    pub fn with_id_source(mut self, source: impl std::hash::Hash) -> Self {
        self.id = egui::Id::new(source);
        self
    }

    pub fn week(&self) -> &Week {
        &self.week
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn now(&self) -> DateTime<Local> {
        self.live_clock
            .as_ref()
            .map(LiveClock::now)
            .unwrap_or(self.mounted_at)
    }

    pub fn is_clock_running(&self) -> bool {
        self.live_clock.as_ref().is_some_and(LiveClock::is_running)
    }

    /// Scroll offset still waiting to be applied on the first frame.
    pub fn pending_scroll(&self) -> Option<f32> {
        self.pending_scroll
    }

    /// Stop the clock timer. Also happens when the preview is dropped.
    pub fn unmount(&mut self) {
        if let Some(live_clock) = self.live_clock.as_mut() {
            live_clock.unmount();
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &PreviewTheme) -> GridInteraction {
        if let Some(live_clock) = self.live_clock.as_mut() {
            live_clock.poll();
        }
        let now = self.now();
        let initial_scroll = self.pending_scroll.take();

        let interaction = {
            let layout = layout_week(&self.week, &self.catalog, &self.selection, now, self.scale);
            egui::Frame::none()
                .fill(theme.surface)
                .rounding(Rounding::same(8.0))
                .stroke(Stroke::new(1.0, theme.border_light))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    paint_month_label(ui, &layout, &self.grid, theme);
                    paint_weekday_header(ui, &layout, &self.grid, theme);
                    paint_all_day_row(ui, &layout, &self.grid, theme);

                    let mut scroll = egui::ScrollArea::vertical()
                        .id_source(self.id.with("grid_scroll"))
                        .max_height(self.grid.viewport_height())
                        .auto_shrink([false, false])
                        .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden);
                    if let Some(offset) = initial_scroll {
                        scroll = scroll.vertical_scroll_offset(offset);
                    }
                    scroll
                        .show(ui, |ui| {
                            ui.spacing_mut().item_spacing = Vec2::ZERO;
                            show_time_grid(ui, &layout, &self.grid, theme, self.id)
                        })
                        .inner
                })
                .inner
        };

        self.selection.apply(interaction);
        interaction
    }
}

fn paint_month_label(ui: &mut egui::Ui, layout: &WeekLayout<'_>, grid: &GridSettings, theme: &PreviewTheme) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), grid.month_label_height),
        Sense::hover(),
    );
    ui.painter().text(
        Pos2::new(rect.left() + 12.0, rect.bottom() - 4.0),
        Align2::LEFT_BOTTOM,
        &layout.month_label,
        FontId::proportional(MONTH_SIZE),
        theme.fg,
    );
}

fn paint_weekday_header(ui: &mut egui::Ui, layout: &WeekLayout<'_>, grid: &GridSettings, theme: &PreviewTheme) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, grid.header_height), Sense::hover());
    let painter = ui.painter();
    let columns = ColumnGeometry::new(rect.left(), width, grid.time_column_width, layout.columns.len());

    for (index, column) in layout.columns.iter().enumerate() {
        let (left, right) = columns.column_span(index);
        let center = Pos2::new((left + right) / 2.0, rect.center().y);
        let is_today = column.date.is_today;
        let name_color = if is_today { theme.today } else { theme.fg_muted };
        let day_color = if is_today { theme.surface } else { theme.fg_muted };

        let name = painter.layout_no_wrap(
            column.date.weekday_abbreviation().to_string(),
            FontId::proportional(HEADER_SIZE),
            name_color,
        );
        let day = painter.layout_no_wrap(
            column.date.day().to_string(),
            FontId::proportional(HEADER_SIZE),
            day_color,
        );

        let badge_padding = if is_today { Vec2::new(6.0, 3.0) } else { Vec2::ZERO };
        let gap = 4.0;
        let total = name.size().x + gap + day.size().x + badge_padding.x * 2.0;
        let start = center.x - total / 2.0;

        let name_pos = Pos2::new(start, center.y - name.size().y / 2.0);
        let day_box = Rect::from_min_size(
            Pos2::new(
                start + name.size().x + gap,
                center.y - day.size().y / 2.0 - badge_padding.y,
            ),
            day.size() + badge_padding * 2.0,
        );
        if is_today {
            painter.rect_filled(day_box, Rounding::same(4.0), theme.today);
        }
        painter.galley(name_pos, name, name_color);
        painter.galley(day_box.min + badge_padding, day, day_color);
    }

    painter.hline(rect.x_range(), rect.bottom() - 0.5, Stroke::new(1.0, theme.border));
}

fn paint_expand_glyph(painter: &egui::Painter, center: Pos2, color: egui::Color32) {
    // 14px chevrons-up-down glyph drawn on a 24-unit grid
    let unit = 14.0 / 24.0;
    let p = |x: f32, y: f32| Pos2::new(center.x + (x - 12.0) * unit, center.y + (y - 12.0) * unit);
    let stroke = Stroke::new(1.5, color);
    painter.add(egui::Shape::line(vec![p(7.0, 15.0), p(12.0, 20.0), p(17.0, 15.0)], stroke));
    painter.add(egui::Shape::line(vec![p(7.0, 9.0), p(12.0, 4.0), p(17.0, 9.0)], stroke));
}

fn paint_all_day_row(ui: &mut egui::Ui, layout: &WeekLayout<'_>, grid: &GridSettings, theme: &PreviewTheme) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, grid.all_day_height), Sense::hover());
    let painter = ui.painter();
    let columns = ColumnGeometry::new(rect.left(), width, grid.time_column_width, layout.columns.len());
    let divider = Stroke::new(1.0, theme.border);

    paint_expand_glyph(
        painter,
        Pos2::new(columns.days_left() - 8.0 - 7.0, rect.center().y),
        theme.fg_muted,
    );
    painter.vline(columns.days_left() - 0.5, rect.y_range(), divider);

    for (index, column) in layout.columns.iter().enumerate() {
        let (left, right) = columns.column_span(index);
        painter.vline(right - 0.5, rect.y_range(), divider);
        if !column.summary.is_empty() {
            painter.text(
                Pos2::new(left + 6.0, rect.center().y),
                Align2::LEFT_CENTER,
                &column.summary,
                FontId::proportional(LABEL_SIZE),
                theme.fg_muted,
            );
        }
    }

    painter.hline(rect.x_range(), rect.bottom() - 0.5, divider);
}

fn paint_time_column(
    painter: &egui::Painter,
    rect: Rect,
    columns: &ColumnGeometry,
    layout: &WeekLayout<'_>,
    grid: &GridSettings,
    theme: &PreviewTheme,
) {
    let column = Rect::from_min_max(rect.min, Pos2::new(columns.days_left(), rect.bottom()));
    painter.rect_filled(column, 0.0, theme.surface);
    painter.vline(column.right() - 0.5, column.y_range(), Stroke::new(1.0, theme.border));

    for hour in 0..HOURS_PER_DAY {
        let label = format_hour(hour);
        if label.is_empty() {
            continue;
        }
        painter.text(
            Pos2::new(column.right() - 8.0, rect.top() + hour as f32 * grid.hour_height - 5.0),
            Align2::RIGHT_TOP,
            label,
            FontId::proportional(LABEL_SIZE),
            theme.fg_muted,
        );
    }

    let badge = painter.layout_no_wrap(
        layout.marker.badge.clone(),
        FontId::proportional(LABEL_SIZE),
        theme.surface,
    );
    let padding = Vec2::new(10.0, 3.0);
    let size = badge.size() + padding * 2.0;
    let marker_y = rect.top() + layout.marker.top;
    let badge_rect = Rect::from_min_size(
        Pos2::new(column.right() - size.x, marker_y - size.y / 2.0),
        size,
    );
    painter.rect_filled(badge_rect, Rounding::same(2.0), theme.today);
    painter.galley(badge_rect.min + padding, badge, theme.surface);
}

fn paint_day_columns(
    painter: &egui::Painter,
    rect: Rect,
    columns: &ColumnGeometry,
    layout: &WeekLayout<'_>,
    grid: &GridSettings,
    theme: &PreviewTheme,
) {
    let line = Stroke::new(1.0, theme.border);
    for (index, column) in layout.columns.iter().enumerate() {
        let (left, right) = columns.column_span(index);
        let column_rect = Rect::from_min_max(Pos2::new(left, rect.top()), Pos2::new(right, rect.bottom()));

        match column.tint {
            ColumnTint::Today => {
                painter.rect_filled(column_rect, 0.0, theme.today_tint);
            }
            ColumnTint::Weekend => {
                painter.rect_filled(column_rect, 0.0, theme.surface_weekend);
            }
            ColumnTint::Plain => {}
        }

        if index > 0 {
            painter.vline(left + 0.5, column_rect.y_range(), line);
        }

        for hour in 1..HOURS_PER_DAY {
            let y = rect.top() + hour as f32 * grid.hour_height;
            painter.hline(column_rect.x_range(), y + 0.5, line);
        }
    }
}

fn paint_current_time_line(
    painter: &egui::Painter,
    rect: Rect,
    columns: &ColumnGeometry,
    layout: &WeekLayout<'_>,
    theme: &PreviewTheme,
) {
    let Some(day_index) = layout.marker.day_index else {
        return;
    };
    let y = rect.top() + layout.marker.top;
    painter.hline(columns.days_left()..=rect.right(), y, Stroke::new(1.0, theme.today));
    let (today_left, _) = columns.column_span(day_index);
    painter.circle_filled(Pos2::new(today_left, y + 0.5), MARKER_DOT_RADIUS, theme.today);
}

/// Paint the scrolling grid and report what was clicked.
fn show_time_grid(
    ui: &mut egui::Ui,
    layout: &WeekLayout<'_>,
    grid: &GridSettings,
    theme: &PreviewTheme,
    id: egui::Id,
) -> GridInteraction {
    let width = ui.available_width();
    let (rect, background) = ui.allocate_exact_size(Vec2::new(width, layout.grid_height), Sense::click());
    let columns = ColumnGeometry::new(rect.left(), width, grid.time_column_width, layout.columns.len());

    // Register blocks after the background so they win the hit test, and
    // before painting so each chip knows whether it is hovered.
    let mut chips: Vec<(&EventBlock<'_>, Rect, Response)> = Vec::new();
    for (index, column) in layout.columns.iter().enumerate() {
        let (left, right) = columns.block_span(index);
        for block in column.resting_blocks().chain(column.selected_block()) {
            let block_rect = Rect::from_min_max(
                Pos2::new(left, rect.top() + block.top),
                Pos2::new(right, rect.top() + block.bottom()),
            );
            let response = ui
                .interact(block_rect, id.with(("event", block.id)), Sense::click())
                .on_hover_cursor(CursorIcon::PointingHand);
            chips.push((block, block_rect, response));
        }
    }

    let painter = ui.painter().clone();
    paint_time_column(&painter, rect, &columns, layout, grid, theme);
    paint_day_columns(&painter, rect, &columns, layout, grid, theme);

    let paint_chip = |(block, block_rect, response): &(&EventBlock<'_>, Rect, Response)| {
        let style = ChipStyle::resolve(block.event.color.color32(), theme, block.selected, response.hovered());
        paint_event_chip(ui, *block_rect, block, style);
    };
    chips.iter().filter(|(block, _, _)| !block.selected).for_each(&paint_chip);
    paint_current_time_line(&painter, rect, &columns, layout, theme);
    chips.iter().filter(|(block, _, _)| block.selected).for_each(&paint_chip);

    let clicked_block = chips
        .iter()
        .find(|(_, _, response)| response.clicked())
        .map(|(block, _, _)| block.id);

    match clicked_block {
        Some(id) => GridInteraction::BlockClicked(id),
        None if background.clicked() => GridInteraction::BackgroundClicked,
        None => GridInteraction::None,
    }
}

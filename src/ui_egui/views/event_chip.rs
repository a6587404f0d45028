//! Painting of a single event block ("chip") in the week grid.
//!
//! Colours come from [`ChipStyle::resolve`], a pure function of the event's
//! hue, the theme and the block's selected/hovered state.

use egui::text::{LayoutJob, TextFormat, TextWrapping};
use egui::{Color32, FontId, Pos2, Rect, Rounding, Stroke, Vec2};

use crate::services::layout::EventBlock;
use crate::ui_egui::theme::PreviewTheme;
use crate::utils::color::mix;

const RIBBON_WIDTH: f32 = 4.0;
const CORNER_RADIUS: f32 = 4.0;
const PADDING: Vec2 = Vec2::new(4.0, 3.0);
const TITLE_SIZE: f32 = 13.0;
const TIME_SIZE: f32 = 10.0;

/// Percentage of the event hue mixed into the surface for resting chips.
pub const RESTING_MIX: f32 = 14.0;
pub const HOVER_MIX: f32 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipStyle {
    pub fill: Color32,
    pub text: Color32,
    pub ribbon: Color32,
    pub border: Option<Color32>,
}

impl ChipStyle {
    pub fn resolve(color: Color32, theme: &PreviewTheme, selected: bool, hovered: bool) -> Self {
        if selected {
            return Self {
                fill: color,
                text: Color32::WHITE,
                ribbon: mix(color, 80.0, Color32::BLACK),
                border: None,
            };
        }

        let strength = if hovered { HOVER_MIX } else { RESTING_MIX };
        Self {
            fill: mix(color, strength, theme.surface),
            text: color,
            ribbon: color,
            border: Some(theme.border_light),
        }
    }
}

fn single_line(text: &str, size: f32, color: Color32, max_width: f32) -> LayoutJob {
    let mut job = LayoutJob::single_section(
        text.to_owned(),
        TextFormat::simple(FontId::proportional(size), color),
    );
    job.wrap = TextWrapping {
        max_width,
        max_rows: 1,
        break_anywhere: true,
        ..Default::default()
    };
    job
}

/// Paint `block` into `rect` (screen coordinates).
pub fn paint_event_chip(
    ui: &egui::Ui,
    rect: Rect,
    block: &EventBlock<'_>,
    style: ChipStyle,
) {
    let painter = ui.painter().with_clip_rect(rect.intersect(ui.clip_rect()));
    let rounding = Rounding::same(CORNER_RADIUS);

    painter.rect_filled(rect, rounding, style.fill);

    let ribbon = Rect::from_min_size(rect.min, Vec2::new(RIBBON_WIDTH.min(rect.width()), rect.height()));
    painter.rect_filled(
        ribbon,
        Rounding {
            nw: CORNER_RADIUS,
            sw: CORNER_RADIUS,
            ne: 0.0,
            se: 0.0,
        },
        style.ribbon,
    );

    if let Some(border) = style.border {
        painter.rect_stroke(rect, rounding, Stroke::new(1.0, border));
    }

    let content_left = ribbon.right() + PADDING.x;
    let content_width = (rect.right() - content_left - PADDING.x).max(0.0);
    let title = ui.fonts(|fonts| {
        fonts.layout_job(single_line(block.event.title, TITLE_SIZE, style.text, content_width))
    });
    let title_pos = Pos2::new(content_left, rect.top() + PADDING.y);
    let title_height = title.size().y;
    painter.galley(title_pos, title, style.text);

    if block.show_time {
        let time_color = if block.selected {
            style.text.gamma_multiply(0.9)
        } else {
            style.text.gamma_multiply(0.8)
        };
        let time = ui.fonts(|fonts| {
            fonts.layout_job(single_line(&block.time_label, TIME_SIZE, time_color, content_width))
        });
        painter.galley(
            Pos2::new(content_left, title_pos.y + title_height + 2.0),
            time,
            time_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventColor;

    #[test]
    fn test_resting_chip_is_tinted() {
        let theme = PreviewTheme::light();
        let sky = EventColor::Sky.color32();
        let style = ChipStyle::resolve(sky, &theme, false, false);
        assert_eq!(style.fill, mix(sky, RESTING_MIX, theme.surface));
        assert_eq!(style.text, sky);
        assert_eq!(style.ribbon, sky);
        assert_eq!(style.border, Some(theme.border_light));
    }

    #[test]
    fn test_hover_intensifies_tint() {
        let theme = PreviewTheme::light();
        let coral = EventColor::Coral.color32();
        let resting = ChipStyle::resolve(coral, &theme, false, false);
        let hovered = ChipStyle::resolve(coral, &theme, false, true);
        // Green and blue channels move toward the hue as the mix grows.
        assert!(hovered.fill.g() < resting.fill.g());
        assert!(hovered.fill.b() < resting.fill.b());
    }

    #[test]
    fn test_selected_chip_inverts() {
        let theme = PreviewTheme::light();
        let plum = EventColor::Plum.color32();
        let style = ChipStyle::resolve(plum, &theme, true, false);
        assert_eq!(style.fill, plum);
        assert_eq!(style.text, Color32::WHITE);
        assert_eq!(style.ribbon, mix(plum, 80.0, Color32::BLACK));
        assert_eq!(style.border, None);
        // Hover does not change a selected chip.
        assert_eq!(ChipStyle::resolve(plum, &theme, true, true), style);
    }
}

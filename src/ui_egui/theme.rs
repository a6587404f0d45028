//! Theme module for the landing page
//!
//! Defines the PreviewTheme color tokens used by the calendar preview and
//! the waitlist form.

use egui::Color32;

use crate::utils::color::with_alpha;

/// Light-theme tokens of the calendar app
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewTheme {
    /// Page and grid background
    pub surface: Color32,

    /// Weekend day column background
    pub surface_weekend: Color32,

    /// Primary text color
    pub fg: Color32,

    /// Secondary text color (labels, weekday names)
    pub fg_muted: Color32,

    /// Column and row dividers
    pub border: Color32,

    /// Outline of unselected event blocks and the preview frame
    pub border_light: Color32,

    /// Today accent: header badge, current-time line and badge
    pub today: Color32,

    /// Faint wash over today's column
    pub today_tint: Color32,

    /// Page background around the preview
    pub page_background: Color32,
}

impl PreviewTheme {
    pub fn light() -> Self {
        let today = Color32::from_rgb(0x2d, 0x6b, 0x8a);
        Self {
            surface: Color32::from_rgb(0xfc, 0xfc, 0xfc),
            surface_weekend: Color32::from_rgb(0xf7, 0xf6, 0xf6),
            fg: Color32::from_rgb(0x21, 0x20, 0x20),
            fg_muted: Color32::from_rgb(0x71, 0x70, 0x70),
            border: Color32::from_rgb(0xe0, 0xdf, 0xdf),
            border_light: Color32::from_rgb(0xeb, 0xea, 0xea),
            today,
            // rgba(45, 107, 138, 0.025)
            today_tint: with_alpha(today, 6),
            page_background: Color32::from_rgb(0xf4, 0xf2, 0xee),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.page_background;
        visuals.panel_fill = self.page_background;
        visuals.extreme_bg_color = self.surface;
        visuals.override_text_color = Some(self.fg);

        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_stroke.color = self.border;
        visuals.widgets.hovered.bg_stroke.color = self.fg_muted;
        visuals.widgets.active.bg_stroke.color = self.fg;
        visuals.selection.bg_fill = with_alpha(self.today, 60);
        visuals.selection.stroke.color = self.today;

        ctx.set_visuals(visuals);
    }
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self::light()
    }
}

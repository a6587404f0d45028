use std::sync::Arc;

use egui::RichText;

use crate::models::settings::PreviewSettings;
use crate::services::clock::SystemClock;
use crate::services::waitlist::{transport_or_unavailable, LoopsClient};
use crate::ui_egui::theme::PreviewTheme;
use crate::ui_egui::views::calendar_preview::CalendarPreview;
use crate::ui_egui::views::waitlist_form::WaitlistFormView;

const PAGE_MAX_WIDTH: f32 = 960.0;
const PAGE_MARGIN: f32 = 32.0;

const HEADLINE: &str = "Your week, without the clutter.";
const TAGLINE: &str =
    "A calendar that stays out of the way. Join the waitlist to hear when it ships.";

/// The landing page: headline, live week preview and waitlist form.
pub struct LandingApp {
    theme: PreviewTheme,
    preview: CalendarPreview,
    waitlist: WaitlistFormView,
}

impl LandingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: PreviewSettings) -> Self {
        let theme = PreviewTheme::light();
        theme.apply_to_context(&cc.egui_ctx);

        let preview = CalendarPreview::mount(&cc.egui_ctx, Arc::new(SystemClock), &settings);
        let transport = transport_or_unavailable(LoopsClient::new(&settings.waitlist));

        Self {
            theme,
            preview,
            waitlist: WaitlistFormView::new(transport),
        }
    }

    fn show_page(&mut self, ui: &mut egui::Ui) {
        ui.add_space(PAGE_MARGIN * 1.5);
        ui.label(RichText::new(HEADLINE).size(40.0).strong().color(self.theme.fg));
        ui.add_space(12.0);
        ui.label(RichText::new(TAGLINE).size(18.0).color(self.theme.fg_muted));
        ui.add_space(PAGE_MARGIN);

        self.waitlist.show(ui, &self.theme);
        ui.add_space(PAGE_MARGIN);

        self.preview.show(ui, &self.theme);
        ui.add_space(PAGE_MARGIN);
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.page_background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("landing_page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let width = ui.available_width().min(PAGE_MAX_WIDTH);
                        let side = ((ui.available_width() - width) / 2.0).max(PAGE_MARGIN);
                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width((width - PAGE_MARGIN * 2.0).max(320.0));
                                self.show_page(ui);
                            });
                        });
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.preview.unmount();
        log::info!("Landing page closed");
    }
}

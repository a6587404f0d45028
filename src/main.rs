// Calendar preview landing page
// Main entry point

use calendar_preview::services::settings::load_settings_or_default;
use calendar_preview::ui_egui::LandingApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting calendar preview landing page");

    let settings = load_settings_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar")
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Preview",
        options,
        Box::new(move |cc| Ok(Box::new(LandingApp::new(cc, settings)))),
    )
}

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use egui::{Button, Color32, RichText, Rounding, Stroke, TextEdit, Vec2};

use crate::services::waitlist::{WaitlistError, WaitlistForm, WaitlistStatus, WaitlistTransport};
use crate::ui_egui::theme::PreviewTheme;

pub const SUCCESS_MESSAGE: &str = "You're on the list.";
const EMAIL_HINT: &str = "your@email.com";
const FIELD_HEIGHT: f32 = 40.0;

/// The waitlist signup form.
///
/// Requests run on a worker thread; the result comes back over a channel and
/// is applied by [`Self::poll`] on the UI thread.
pub struct WaitlistFormView {
    form: WaitlistForm,
    transport: Arc<dyn WaitlistTransport>,
    in_flight: Option<Receiver<Result<(), WaitlistError>>>,
}

impl WaitlistFormView {
    pub fn new(transport: Arc<dyn WaitlistTransport>) -> Self {
        Self {
            form: WaitlistForm::new(),
            transport,
            in_flight: None,
        }
    }

    pub fn form(&self) -> &WaitlistForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut WaitlistForm {
        &mut self.form
    }

    /// Validate the current input and, if it passes, start the request.
    /// `ctx` is woken when the response arrives.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let Some(email) = self.form.begin_submit() else {
            return;
        };

        let (tx, rx) = mpsc::channel();
        let transport = Arc::clone(&self.transport);
        let wake = ctx.clone();
        let spawned = thread::Builder::new()
            .name("waitlist-submit".to_string())
            .spawn(move || {
                let result = transport.submit(&email);
                let _ = tx.send(result);
                wake.request_repaint();
            });

        match spawned {
            Ok(_) => self.in_flight = Some(rx),
            Err(err) => {
                log::error!("Failed to start waitlist request: {}", err);
                self.form.finish(Err(WaitlistError::Interrupted));
            }
        }
    }

    /// Apply a finished request, if any. Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.in_flight.as_ref() else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(WaitlistError::Interrupted),
        };
        self.in_flight = None;
        self.form.finish(result);
        true
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &PreviewTheme) {
        self.poll();

        if self.form.status() == &WaitlistStatus::Success {
            ui.label(
                RichText::new(SUCCESS_MESSAGE.to_uppercase())
                    .size(13.0)
                    .color(theme.fg.gamma_multiply(0.5)),
            );
            return;
        }

        let loading = self.form.is_loading();
        let mut submit = false;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(12.0, 0.0);
            let field_width = (ui.available_width() - 150.0).max(180.0);
            let field = ui.add(
                TextEdit::singleline(self.form.email_mut())
                    .hint_text(EMAIL_HINT)
                    .desired_width(field_width)
                    .min_size(Vec2::new(field_width, FIELD_HEIGHT))
                    .vertical_align(egui::Align::Center)
                    .font(egui::FontId::proportional(16.0)),
            );
            if field.changed() {
                self.form.on_email_edited();
            }
            if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            let label = if loading { "Joining..." } else { "Join waitlist" };
            let button = Button::new(RichText::new(label).size(16.0).color(theme.page_background))
                .fill(theme.fg)
                .stroke(Stroke::NONE)
                .rounding(Rounding::same(4.0))
                .min_size(Vec2::new(0.0, FIELD_HEIGHT));
            if ui.add_enabled(!loading, button).clicked() {
                submit = true;
            }
        });

        if let Some(message) = self.form.error_message() {
            ui.add_space(8.0);
            ui.label(
                RichText::new(message)
                    .size(13.0)
                    .color(error_text_color(theme)),
            );
        }

        if submit {
            self.submit(ui.ctx());
        }
    }
}

impl std::fmt::Debug for WaitlistFormView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistFormView")
            .field("form", &self.form)
            .field("in_flight", &self.in_flight.is_some())
            .finish()
    }
}

/// Error text colour on the page background.
pub fn error_text_color(theme: &PreviewTheme) -> Color32 {
    theme.fg.gamma_multiply(0.6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::waitlist::{MockWaitlistTransport, INVALID_EMAIL_MESSAGE, RETRY_MESSAGE};
    use std::time::{Duration, Instant};

    fn wait_for_result(view: &mut WaitlistFormView) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !view.poll() {
            assert!(Instant::now() < deadline, "request never finished");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_successful_submit_on_worker() {
        let mut transport = MockWaitlistTransport::new();
        transport.expect_submit().times(1).returning(|_| Ok(()));
        let mut view = WaitlistFormView::new(Arc::new(transport));
        let ctx = egui::Context::default();

        view.form_mut().set_email("me@example.com");
        view.submit(&ctx);
        assert!(view.form().is_loading());

        wait_for_result(&mut view);
        assert_eq!(view.form().status(), &WaitlistStatus::Success);
    }

    #[test]
    fn test_failure_shows_retry_message() {
        let mut transport = MockWaitlistTransport::new();
        transport
            .expect_submit()
            .returning(|_| Err(WaitlistError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)));
        let mut view = WaitlistFormView::new(Arc::new(transport));
        let ctx = egui::Context::default();

        view.form_mut().set_email("me@example.com");
        view.submit(&ctx);
        wait_for_result(&mut view);
        assert_eq!(view.form().error_message(), Some(RETRY_MESSAGE));
    }

    #[test]
    fn test_invalid_email_is_rejected_locally() {
        let mut transport = MockWaitlistTransport::new();
        transport.expect_submit().never();
        let mut view = WaitlistFormView::new(Arc::new(transport));
        let ctx = egui::Context::default();

        view.form_mut().set_email("nope");
        view.submit(&ctx);
        assert!(!view.poll());
        assert_eq!(view.form().error_message(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_headless_render() {
        let transport = MockWaitlistTransport::new();
        let mut view = WaitlistFormView::new(Arc::new(transport));
        let ctx = egui::Context::default();
        let theme = PreviewTheme::light();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| view.show(ui, &theme));
        });
        assert_eq!(view.form().status(), &WaitlistStatus::Idle);
        assert_eq!(error_text_color(&theme), theme.fg.gamma_multiply(0.6));
    }
}

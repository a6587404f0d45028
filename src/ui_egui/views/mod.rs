pub mod calendar_preview;
pub mod event_chip;
pub mod waitlist_form;

pub use calendar_preview::CalendarPreview;
pub use waitlist_form::WaitlistFormView;

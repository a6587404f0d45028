pub mod event;
pub mod settings;
pub mod week;

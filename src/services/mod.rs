pub mod catalog;
pub mod clock;
pub mod layout;
pub mod selection;
pub mod settings;
pub mod waitlist;

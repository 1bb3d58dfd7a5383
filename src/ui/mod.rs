pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod theme;
pub mod waitlist_dialog;

pub use icon::{Icon, icons};
pub use waitlist_dialog::WaitlistDialog;

//! Utility modules.

pub mod notify;

pub use notify::{ConsoleNotifier, Level, Notifier};

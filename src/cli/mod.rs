//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `login` / `logout` / `status` / `register` - Session management
//! - `dashboard` - Summary counters and recent activity
//! - `clients` / `rooms` / `reservations` - Resource management
//! - `theme` - Light/dark output

pub mod args;

pub use args::{Cli, Commands};

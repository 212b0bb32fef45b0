//! Shared types used across services and commands.

mod pagination;
pub mod timestamp;

pub use pagination::PageParams;

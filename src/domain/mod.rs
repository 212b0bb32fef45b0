//! Domain layer - entities exchanged with the hotel API
//!
//! Session token and theme are client-side value objects; the remaining
//! modules mirror the API's resources.

pub mod account;
pub mod client;
pub mod dashboard;
pub mod reservation;
pub mod room;
pub mod theme;
pub mod token;

pub use account::{RegisterRequest, RegisteredUser, TokenResponse};
pub use client::{Client, ClientCreate, ClientUpdate};
pub use dashboard::{DashboardActivity, DashboardStats, DashboardSummary};
pub use reservation::{Reservation, ReservationCreate, ReservationFilter, ReservationUpdate};
pub use room::{Room, RoomCalendar, RoomCalendarDay, RoomCreate, RoomStatus, RoomType, RoomUpdate};
pub use theme::ThemeMode;
pub use token::{ExpiryCheck, SessionToken};

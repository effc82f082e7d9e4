//! Factories for creating test entities with sensible defaults.

pub mod booking;
pub mod car;
pub mod category;
pub mod helpers;
pub mod notification;
pub mod user;

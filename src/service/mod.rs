//! Business logic layer orchestrating between controllers and the data layer.
//!
//! Services own the domain rules: the availability predicate with its cleaning
//! buffer, the rate-tier pricing, the booking lifecycle and its notification
//! fan-out, and account management. Controllers hand them parameter models and
//! receive domain models back.

pub mod admin_code;
pub mod availability;
pub mod booking;
pub mod car;
pub mod category;
pub mod notification;
pub mod password;
pub mod pricing;
pub mod user;

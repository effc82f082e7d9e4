//! HTTP request handlers.
//!
//! Controllers validate access through `AuthGuard`, convert DTOs into
//! parameter models, call the matching service, and convert domain models
//! back into DTOs. Each handler carries its `utoipa::path` annotation for the
//! generated OpenAPI document.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod car;
pub mod category;
pub mod dashboard;
pub mod notification;

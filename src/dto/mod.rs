//! Request and response types for the REST API.
//!
//! These are the wire-format structs: serde for JSON, `ToSchema` for the
//! OpenAPI document. Conversion to and from domain models happens in the
//! `model` layer (`into_dto` / `from_dto`).

pub mod api;
pub mod auth;
pub mod booking;
pub mod car;
pub mod category;
pub mod dashboard;
pub mod notification;

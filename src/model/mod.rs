//! Domain models and operation parameter types.
//!
//! Each submodule defines the domain representation of one resource along with
//! the parameter structs used by services and repositories. Entity models from
//! the `entity` crate are converted into these types at the repository boundary
//! and converted into DTOs at the controller boundary.

pub mod booking;
pub mod car;
pub mod category;
pub mod notification;
pub mod user;

//! Shared task model for taskboard.
//!
//! Both the server-side store and the client-side state container speak in
//! terms of the types defined here, so the wire contract lives in exactly one
//! place:
//! - [`Task`] / [`TaskInput`] and the closed enums [`Category`], [`Status`],
//!   [`Priority`]
//! - [`ValidationError`] and [`TaskInput::from_json`], the schema check every
//!   write goes through
//! - [`timestamp`], the `createdAt` wire format

pub mod task;
pub mod timestamp;
pub mod validate;

pub use task::{Category, Priority, Status, Task, TaskInput};
pub use validate::ValidationError;

/// `strftime` pattern of a calendar date as used by the `date` list filter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

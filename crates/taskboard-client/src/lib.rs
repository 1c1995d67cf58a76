//! Client-side state container for taskboard.
//!
//! [`TaskClient`] keeps a cache of the server's tasks plus the active
//! [`FilterSelection`], talks to the server through a [`TaskApi`]
//! implementation ([`HttpTaskApi`] in production), and derives the filtered
//! view on demand. The cache is a mirror: every state change is a
//! [`TaskAction`] applied only after the server answered successfully.

pub mod api;
pub mod container;
pub mod error;
pub mod filter;
pub mod form;
pub mod state;

pub use api::{HttpTaskApi, ListQuery, TaskApi};
pub use container::TaskClient;
pub use error::ClientError;
pub use filter::{FilterPatch, FilterSelection};
pub use form::{FormError, TaskForm};
pub use state::{TaskAction, TaskState};

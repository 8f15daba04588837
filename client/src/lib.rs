//! Typed client for the SSDA service and the workflows behind the student and
//! employee pages: loading and filtering solicitations, updating their status
//! and estimated completion date, commenting, and editing student records.
//!
//! Every workflow method issues at most one request, mutates local page state
//! only after the server acknowledged it, and reports the outcome as a
//! [`Notification`].

#[macro_use]
extern crate tracing;

pub mod api;
pub mod credentials;
pub mod date;
pub mod error;
pub mod filter;
pub mod model;
pub mod notification;
pub mod pages;
mod sequence;
pub mod validation;

pub use api::{Api, HttpApi};
pub use credentials::CredentialProvider;
pub use error::ApiError;
pub use filter::SolicitationFilter;
pub use notification::{Notification, NotificationKind};

#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{
    days_from_today, employee,
    request::*,
    response::*,
    setup::{setup, student_json, Env},
    today, Employee,
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use serde_json::{json, Value};
pub use ssda_backend::error;

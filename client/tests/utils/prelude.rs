#![allow(unused_imports)]

pub use super::{
    comment, detail, fake::{Call, FakeApi, Failure}, item, student, today,
};
pub use serde_json::{json, Value};
pub use ssda_client::{
    api::Scope,
    model::Status,
    notification::{NotificationKind, SERVER_ERROR},
    pages::{EditStudent, SolicitationDetails, SolicitationList, SolicitationView, SubmitOutcome},
    Notification, SolicitationFilter,
};
pub use std::sync::Arc;

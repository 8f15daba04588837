//! Page workflows. Each page owns its local state behind async mutexes; every
//! action takes `&self` so it can be fired again while a request is in flight.

mod edit_student;
mod solicitation_details;
mod solicitation_list;
mod solicitation_view;

pub use edit_student::{EditStudent, SubmitOutcome};
pub use solicitation_details::SolicitationDetails;
pub use solicitation_list::SolicitationList;
pub use solicitation_view::SolicitationView;

use crate::{
    error::ApiError,
    notification::{self, Notification},
};

/// Notification for a failed request: transport failures always get the
/// generic server error, HTTP rejections get `rejected`.
fn failure(error: &ApiError, rejected: Notification) -> Notification {
    if error.is_transport() {
        warn!(%error, "request failed");
        notification::SERVER_ERROR
    } else {
        info!(%error, code = ?error.code(), "request rejected");
        rejected
    }
}

mod create;
mod get;
mod list;
mod update;

use crate::state::StateTrait;
use axum::{routing::get, Router};

/// Routes for the solicitation lifecycle
///
/// # Student actions
/// POST /solicitations
/// GET  /solicitations/:id
///
/// # Employee actions
/// GET  /solicitations?document_name&ra&priority
/// GET  /finished-solicitations?document_name&ra&priority
/// PUT  /solicitations/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/solicitations",
            get(list::list_open::<S>).post(create::create_solicitation::<S>),
        )
        .route(
            "/solicitations/:id",
            get(get::get_solicitation::<S>).put(update::update_solicitation::<S>),
        )
        .route("/finished-solicitations", get(list::list_finished::<S>))
}

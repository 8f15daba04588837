mod create;
mod list;

use crate::state::StateTrait;
use axum::{routing::get, Router};

/// Routes for the document catalogue
///
/// GET  /documents
/// POST /documents
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new().route(
        "/",
        get(list::list_documents::<S>).post(create::create_document::<S>),
    )
}

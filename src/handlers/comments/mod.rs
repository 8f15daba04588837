mod create;
mod delete;
mod list;

use crate::state::StateTrait;
use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use entity::comments;
use serde::Serialize;

/// Routes for solicitation comments
///
/// GET    /comments/:solicitation_id
/// POST   /comments/:solicitation_id  (employee token required)
/// DELETE /comments/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new().route(
        "/:id",
        get(list::list_comments::<S>)
            .post(create::create_comment::<S>)
            .delete(delete::delete_comment::<S>),
    )
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    id: i32,
    description: String,
    comment_date: DateTime<Utc>,
    employee_name: String,
}

impl From<comments::Model> for CommentResponse {
    fn from(comment: comments::Model) -> Self {
        CommentResponse {
            id: comment.id,
            description: comment.description,
            comment_date: comment.comment_date,
            employee_name: comment.employee_name,
        }
    }
}

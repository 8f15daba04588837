use super::CommentResponse;
use crate::{
    error::Result,
    extractors::{Json, Path},
    StateTrait,
};
use axum::extract::State;
use entity::comments;

pub async fn list_comments<S: StateTrait>(
    State(state): State<S>,
    Path(solicitation_id): Path<i32>,
) -> Result<Json<Vec<CommentResponse>>> {
    let comments = comments::Entity::find_by_solicitation(solicitation_id)
        .all(state.db())
        .await?;

    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

use crate::{
    error::{self, Result},
    extractors::Path,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::comments;
use sea_orm::EntityTrait;

pub async fn delete_comment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let res = comments::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::COMMENT_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}

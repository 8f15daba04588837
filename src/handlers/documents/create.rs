use crate::{
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::documents;
use sea_orm::{ActiveValue::NotSet, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    name: String,
    #[validate(length(min = 1))]
    description: String,
    #[validate(range(min = 0))]
    attendance_deadline: i32,
}

#[derive(Debug, Serialize)]
pub struct Response {
    id: i32,
}

pub async fn create_document<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let document = documents::ActiveModel {
        id: NotSet,
        name: Set(request.name),
        description: Set(request.description),
        attendance_deadline: Set(request.attendance_deadline),
    };

    let res = documents::Entity::insert(document).exec(state.db()).await?;

    info!(document = res.last_insert_id, "document created");

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id: res.last_insert_id,
        }),
    ))
}

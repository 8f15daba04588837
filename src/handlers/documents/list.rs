use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::State;
use entity::documents;
use sea_orm::{EntityTrait, FromQueryResult, QueryOrder};
use serde::Serialize;

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Response {
    id: i32,
    name: String,
    description: String,
    attendance_deadline: i32,
}

pub async fn list_documents<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<Response>>> {
    let documents = documents::Entity::find()
        .order_by_asc(documents::Column::Name)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(documents))
}

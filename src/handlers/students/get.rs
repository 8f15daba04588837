use super::StudentResponse;
use crate::{
    error::{self, Result},
    extractors::{Json, Path},
    StateTrait,
};
use axum::extract::State;
use entity::students;
use sea_orm::{EntityTrait, QueryOrder};

pub async fn get_student<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<StudentResponse>> {
    let student = students::Entity::find_by_id(id)
        .into_model::<StudentResponse>()
        .one(state.db())
        .await?
        .ok_or(error::STUDENT_NOT_FOUND)?;

    Ok(Json(student))
}

pub async fn list_students<S: StateTrait>(
    State(state): State<S>,
) -> Result<Json<Vec<StudentResponse>>> {
    let students = students::Entity::find()
        .order_by_asc(students::Column::Name)
        .into_model::<StudentResponse>()
        .all(state.db())
        .await?;

    Ok(Json(students))
}

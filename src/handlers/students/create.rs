use super::StudentRequest;
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::students::{self, constraints::*};
use sea_orm::{ActiveValue::NotSet, EntityTrait};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    id: i32,
}

pub async fn create_student<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<StudentRequest>,
) -> Result<(StatusCode, Json<Response>)> {
    let student = request.into_active_model(NotSet);

    let res = students::Entity::insert(student).exec(state.db()).await;

    let res = match res {
        Err(err) if err.unique_violation(UC_STUDENTS_RA) => return Err(error::STUDENT_RA_EXISTS),
        r => r?,
    };

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id: res.last_insert_id,
        }),
    ))
}

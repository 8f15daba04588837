use super::StudentRequest;
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Path, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::students::{self, constraints::*};
use sea_orm::{EntityTrait, QuerySelect, Set, TransactionTrait};

pub async fn update_student<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<StudentRequest>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    students::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::STUDENT_NOT_FOUND)?;

    let res = students::Entity::update(request.into_active_model(Set(id)))
        .exec(&txn)
        .await;

    match res {
        Err(err) if err.unique_violation(UC_STUDENTS_RA) => return Err(error::STUDENT_RA_EXISTS),
        r => r?,
    };

    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

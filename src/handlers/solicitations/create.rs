use crate::{
    error::{self, DatabaseError, Result},
    extractors::Json,
    utils::date,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Days;
use entity::{
    documents,
    solicitations::{self, constraints::*, Status},
};
use sea_orm::{ActiveValue::NotSet, EntityTrait, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Request {
    student_id: i32,
    document_id: i32,
    #[serde(default)]
    priority: bool,
}

#[derive(Debug, Serialize)]
pub struct Response {
    id: i32,
}

pub async fn create_solicitation<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let document = documents::Entity::find_by_id(request.document_id)
        .one(state.db())
        .await?
        .ok_or(error::DOCUMENT_NOT_FOUND)?;

    let today = date::today();
    let estimated = u64::try_from(document.attendance_deadline)
        .ok()
        .and_then(|days| today.checked_add_days(Days::new(days)));

    let solicitation = solicitations::ActiveModel {
        id: NotSet,
        solicitation_date: Set(today),
        estimated_completion_date: Set(estimated),
        conclusion_date: Set(None),
        status: Set(Status::Created),
        priority: Set(request.priority),
        student_id: Set(request.student_id),
        document_id: Set(document.id),
    };

    let res = solicitations::Entity::insert(solicitation)
        .exec(state.db())
        .await;

    let res = match res {
        Err(err) if err.foreign_key_violation(FK_SOLICITATIONS_STUDENT) => {
            return Err(error::STUDENT_NOT_FOUND)
        }
        Err(err) if err.foreign_key_violation(FK_SOLICITATIONS_DOCUMENT) => {
            return Err(error::DOCUMENT_NOT_FOUND)
        }
        r => r?,
    };

    info!(solicitation = res.last_insert_id, "solicitation created");

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id: res.last_insert_id,
        }),
    ))
}

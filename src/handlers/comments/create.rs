use super::CommentResponse;
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Employee, Json, Path, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::comments::{self, constraints::*};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(custom(function = "not_blank"))]
    description: String,
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

pub async fn create_comment<S: StateTrait>(
    State(state): State<S>,
    Path(solicitation_id): Path<i32>,
    employee: Employee,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    let comment = comments::ActiveModel {
        id: NotSet,
        description: Set(request.description),
        comment_date: Set(Utc::now()),
        employee_name: Set(employee.name),
        solicitation_id: Set(solicitation_id),
    };

    let res = comment.insert(state.db()).await;

    let comment = match res {
        Err(err) if err.foreign_key_violation(FK_COMMENTS_SOLICITATION) => {
            return Err(error::SOLICITATION_NOT_FOUND)
        }
        r => r?,
    };

    info!(
        comment = comment.id,
        solicitation = solicitation_id,
        employee = %employee.id,
        "comment created"
    );

    Ok((StatusCode::CREATED, Json(comment.into())))
}

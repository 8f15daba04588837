use crate::{
    error::{self, Result},
    extractors::{Json, Path},
    utils::{date, set_option},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use entity::solicitations::{self, Status};
use sea_orm::{EntityTrait, QuerySelect, Set, TransactionTrait};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Request {
    status: Option<Status>,
    #[serde(default, with = "date::option")]
    estimated_completion_date: Option<NaiveDate>,
}

pub async fn update_solicitation<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(request): Json<Request>,
) -> Result<StatusCode> {
    if request.status.is_none() && request.estimated_completion_date.is_none() {
        return Ok(StatusCode::NO_CONTENT);
    }

    let today = date::today();

    if let Some(estimated) = request.estimated_completion_date {
        if estimated < today {
            return Err(error::DATE_IN_THE_PAST);
        }
    }

    let txn = state.db().begin().await?;

    let solicitation = solicitations::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::SOLICITATION_NOT_FOUND)?;

    let mut active_model = solicitations::ActiveModel {
        id: Set(solicitation.id),
        estimated_completion_date: set_option(request.estimated_completion_date.map(Some)),
        ..Default::default()
    };

    if let Some(status) = request.status {
        if !solicitation.status.can_transition_to(status) {
            debug!(
                solicitation = solicitation.id,
                from = ?solicitation.status,
                to = ?status,
                "rejected status transition"
            );
            return Err(error::INVALID_STATUS_TRANSITION);
        }

        active_model.status = Set(status);
        active_model.conclusion_date = match status {
            Status::Finished => Set(Some(today)),
            _ => Set(None),
        };

        info!(
            solicitation = solicitation.id,
            from = ?solicitation.status,
            to = ?status,
            "solicitation status changed"
        );
    }

    solicitations::Entity::update(active_model)
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

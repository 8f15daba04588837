use crate::{
    error::{self, Result},
    extractors::{Json, Path},
    utils::date,
    StateTrait,
};
use axum::extract::State;
use chrono::NaiveDate;
use entity::{
    documents,
    solicitations::{self, Status},
    students,
};
use sea_orm::{EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait};
use serde::Serialize;

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Response {
    solicitation_id: i32,
    #[serde(with = "date")]
    solicitation_date: NaiveDate,
    #[serde(with = "date::option")]
    estimated_completion_date: Option<NaiveDate>,
    #[serde(with = "date::option")]
    conclusion_date: Option<NaiveDate>,
    status: Status,
    priority: bool,
    document_name: String,
    description: String,
    student_id: i32,
    ra: String,
    name: String,
    email: String,
    course: String,
    period: i32,
}

pub async fn get_solicitation<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Response>> {
    let solicitation = solicitations::Entity::find_by_id(id)
        .select_only()
        .column_as(solicitations::Column::Id, "solicitation_id")
        .columns([
            solicitations::Column::SolicitationDate,
            solicitations::Column::EstimatedCompletionDate,
            solicitations::Column::ConclusionDate,
            solicitations::Column::Status,
            solicitations::Column::Priority,
            solicitations::Column::StudentId,
        ])
        .column_as(documents::Column::Name, "document_name")
        .column_as(documents::Column::Description, "description")
        .column_as(students::Column::Ra, "ra")
        .column_as(students::Column::Name, "name")
        .column_as(students::Column::Email, "email")
        .column_as(students::Column::Course, "course")
        .column_as(students::Column::Period, "period")
        .join(JoinType::InnerJoin, solicitations::Relation::Student.def())
        .join(JoinType::InnerJoin, solicitations::Relation::Document.def())
        .into_model::<Response>()
        .one(state.db())
        .await?
        .ok_or(error::SOLICITATION_NOT_FOUND)?;

    Ok(Json(solicitation))
}

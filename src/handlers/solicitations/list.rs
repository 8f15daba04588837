use crate::{
    error::Result,
    extractors::{Json, Query},
    utils::{date, deserialize_flag},
    StateTrait,
};
use axum::extract::State;
use chrono::NaiveDate;
use entity::{
    documents,
    solicitations::{self, Status},
    students,
};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

/// List filters. Every parameter may be sent bare (`?document_name&ra&priority`)
/// which is the same as leaving it out.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct Filter {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    document_name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    ra: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    priority: Option<bool>,
}

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Response {
    id: i32,
    #[serde(with = "date")]
    solicitation_date: NaiveDate,
    #[serde(with = "date::option")]
    estimated_completion_date: Option<NaiveDate>,
    #[serde(with = "date::option")]
    conclusion_date: Option<NaiveDate>,
    status: Status,
    priority: bool,
    ra: String,
    name: String,
    course: String,
    period: i32,
    document_name: String,
}

pub async fn list_open<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
) -> Result<Json<Vec<Response>>> {
    let res = filtered(filter)
        .filter(solicitations::Column::Status.ne(Status::Finished))
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}

pub async fn list_finished<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
) -> Result<Json<Vec<Response>>> {
    let res = filtered(filter)
        .filter(solicitations::Column::Status.eq(Status::Finished))
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}

fn filtered(filter: Filter) -> Select<solicitations::Entity> {
    let mut query = solicitations::Entity::find()
        .select_only()
        .columns([
            solicitations::Column::Id,
            solicitations::Column::SolicitationDate,
            solicitations::Column::EstimatedCompletionDate,
            solicitations::Column::ConclusionDate,
            solicitations::Column::Status,
            solicitations::Column::Priority,
        ])
        .column_as(students::Column::Ra, "ra")
        .column_as(students::Column::Name, "name")
        .column_as(students::Column::Course, "course")
        .column_as(students::Column::Period, "period")
        .column_as(documents::Column::Name, "document_name")
        .join(JoinType::InnerJoin, solicitations::Relation::Student.def())
        .join(JoinType::InnerJoin, solicitations::Relation::Document.def());

    if let Some(document_name) = filter.document_name {
        query = query.filter(documents::Column::Name.eq(document_name));
    }

    if let Some(ra) = filter.ra {
        query = query.filter(students::Column::Ra.eq(ra));
    }

    if let Some(priority) = filter.priority {
        query = query.filter(solicitations::Column::Priority.eq(priority));
    }

    query
        .order_by_desc(solicitations::Column::Priority)
        .order_by_asc(solicitations::Column::SolicitationDate)
        .order_by_asc(solicitations::Column::Id)
}

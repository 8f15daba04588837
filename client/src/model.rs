//! Wire types exchanged with the service.

use crate::date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use common::status::Status;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub attendance_deadline: i32,
}

/// A row of the open and finished solicitation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolicitationItem {
    pub id: i32,
    #[serde(with = "date")]
    pub solicitation_date: NaiveDate,
    #[serde(with = "date::option")]
    pub estimated_completion_date: Option<NaiveDate>,
    #[serde(with = "date::option")]
    pub conclusion_date: Option<NaiveDate>,
    pub status: Status,
    pub priority: bool,
    pub ra: String,
    pub name: String,
    pub course: String,
    pub period: i32,
    pub document_name: String,
}

/// A solicitation joined with its document and student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolicitationDetail {
    pub solicitation_id: i32,
    #[serde(with = "date")]
    pub solicitation_date: NaiveDate,
    #[serde(with = "date::option")]
    pub estimated_completion_date: Option<NaiveDate>,
    #[serde(with = "date::option")]
    pub conclusion_date: Option<NaiveDate>,
    pub status: Status,
    pub priority: bool,
    pub document_name: String,
    pub description: String,
    pub student_id: i32,
    pub ra: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub period: i32,
}

/// Body of `PUT /solicitations/:id`. Only the field being changed is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SolicitationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "date::option::serialize"
    )]
    pub estimated_completion_date: Option<NaiveDate>,
}

impl SolicitationUpdate {
    pub fn status(status: Status) -> Self {
        SolicitationUpdate {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn estimated_completion_date(date: NaiveDate) -> Self {
        SolicitationUpdate {
            estimated_completion_date: Some(date),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub description: String,
    pub comment_date: DateTime<Utc>,
    pub employee_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub ra: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cellphone: Option<String>,
    pub course: String,
    pub period: i32,
}

mod create;
mod get;
mod update;

use crate::{state::StateTrait, utils::PHONE_REGEX};
use axum::{routing::get, Router};
use entity::students;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Routes for student records
///
/// GET  /students
/// POST /students
/// GET  /students/:id
/// PUT  /students/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(get::list_students::<S>).post(create::create_student::<S>),
        )
        .route(
            "/:id",
            get(get::get_student::<S>).put(update::update_student::<S>),
        )
}

/// Full student record, as accepted on create and update.
#[derive(Debug, Deserialize, Validate)]
pub struct StudentRequest {
    #[validate(length(min = 1, max = 32))]
    ra: String,
    #[validate(length(min = 1))]
    name: String,
    #[validate(email)]
    email: String,
    #[validate(regex(path = *PHONE_REGEX))]
    phone: String,
    #[serde(default)]
    cellphone: Option<String>,
    #[validate(length(min = 1))]
    course: String,
    #[validate(range(min = 1))]
    period: i32,
}

impl StudentRequest {
    fn into_active_model(self, id: sea_orm::ActiveValue<i32>) -> students::ActiveModel {
        use sea_orm::Set;

        students::ActiveModel {
            id,
            ra: Set(self.ra.trim().to_owned()),
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
            cellphone: Set(self.cellphone.filter(|cellphone| !cellphone.trim().is_empty())),
            course: Set(self.course),
            period: Set(self.period),
        }
    }
}

#[derive(Debug, Serialize, FromQueryResult)]
pub struct StudentResponse {
    id: i32,
    ra: String,
    name: String,
    email: String,
    phone: String,
    cellphone: Option<String>,
    course: String,
    period: i32,
}

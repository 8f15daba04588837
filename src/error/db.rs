use sea_orm::{DbErr, RuntimeErr};
use sqlx::{postgres::PgDatabaseError, Error as SqlxError};
use std::borrow::Cow;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Inspection of postgres constraint failures by constraint name.
pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
    fn foreign_key_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        violates(self, UNIQUE_VIOLATION, constraint)
    }

    fn foreign_key_violation(&self, constraint: &str) -> bool {
        violates(self, FOREIGN_KEY_VIOLATION, constraint)
    }
}

#[allow(clippy::borrowed_box)]
fn sqlx_database_error(err: &DbErr) -> Option<&Box<dyn sqlx::error::DatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err)))
        | DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}

fn violates(err: &DbErr, code: &str, constraint: &str) -> bool {
    let Some(db_err) = sqlx_database_error(err) else {
        return false;
    };

    if !db_err.as_error().is::<PgDatabaseError>() {
        warn!("constraint check on a non-postgres connection");
        return false;
    }

    db_err.code() == Some(Cow::Borrowed(code)) && db_err.constraint() == Some(constraint)
}

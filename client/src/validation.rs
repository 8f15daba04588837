//! Student form validation, mirroring what the service enforces.

use crate::model::Student;
use std::{borrow::Cow, collections::BTreeMap};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

pub use common::validation::PHONE_REGEX;

/// Editable copy of a student record.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, Validate)]
pub struct StudentForm {
    #[validate(length(min = 1, message = "RA obrigatório"))]
    pub ra: String,
    #[validate(length(min = 1, message = "Nome obrigatório"))]
    pub name: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
    #[validate(custom(function = "check_phone"))]
    pub phone: String,
    pub cellphone: Option<String>,
    #[validate(length(min = 1, message = "Curso obrigatório"))]
    pub course: String,
    #[validate(range(min = 1, message = "Insira um período válido"))]
    pub period: i32,
}

impl From<Student> for StudentForm {
    fn from(student: Student) -> Self {
        StudentForm {
            ra: student.ra,
            name: student.name,
            email: student.email,
            phone: student.phone,
            cellphone: student.cellphone,
            course: student.course,
            period: student.period,
        }
    }
}

/// Field name to the first message reported for it.
pub type FieldErrors = BTreeMap<String, String>;

pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            let message = errors.first()?.message.as_ref()?;
            Some((field.to_string(), message.to_string()))
        })
        .collect()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(error("required", "E-mail obrigatório"));
    }

    if !email.validate_email() {
        return Err(error("email", "Este e-mail não é válido"));
    }

    Ok(())
}

fn check_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(error("required", "Telefone obrigatório"));
    }

    if !PHONE_REGEX.is_match(phone) {
        return Err(error("phone", "Este número não é válido"));
    }

    Ok(())
}

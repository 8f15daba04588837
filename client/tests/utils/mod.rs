#![allow(dead_code)]

pub mod fake;
pub mod prelude;

use chrono::{NaiveDate, TimeZone, Utc};
use ssda_client::model::{Comment, SolicitationDetail, SolicitationItem, Status, Student};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 11, 10).unwrap()
}

pub fn detail(id: i32, status: Status) -> SolicitationDetail {
    SolicitationDetail {
        solicitation_id: id,
        solicitation_date: NaiveDate::from_ymd_opt(2020, 11, 2).unwrap(),
        estimated_completion_date: NaiveDate::from_ymd_opt(2020, 11, 12),
        conclusion_date: None,
        status,
        priority: false,
        document_name: "Histórico escolar".to_owned(),
        description: "Histórico com todas as disciplinas cursadas".to_owned(),
        student_id: 1,
        ra: "1234567".to_owned(),
        name: "Ana Souza".to_owned(),
        email: "ana@example.com".to_owned(),
        course: "ADS".to_owned(),
        period: 4,
    }
}

pub fn comment(id: i32, description: &str) -> Comment {
    Comment {
        id,
        description: description.to_owned(),
        comment_date: Utc.with_ymd_and_hms(2020, 11, 3, 12, 0, id as u32).unwrap(),
        employee_name: "Maria Silva".to_owned(),
    }
}

pub fn item(id: i32, ra: &str) -> SolicitationItem {
    SolicitationItem {
        id,
        solicitation_date: NaiveDate::from_ymd_opt(2020, 11, 2).unwrap(),
        estimated_completion_date: None,
        conclusion_date: NaiveDate::from_ymd_opt(2020, 11, 9),
        status: Status::Finished,
        priority: false,
        ra: ra.to_owned(),
        name: "Ana Souza".to_owned(),
        course: "ADS".to_owned(),
        period: 4,
        document_name: "Histórico escolar".to_owned(),
    }
}

pub fn student(id: i32) -> Student {
    Student {
        id,
        ra: "1234567".to_owned(),
        name: "Ana Souza".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "(11) 3456-7890".to_owned(),
        cellphone: Some("(11) 98765-4321".to_owned()),
        course: "ADS".to_owned(),
        period: 4,
    }
}

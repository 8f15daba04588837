use super::{comments, documents, students};
use sea_orm::entity::prelude::*;

pub use common::status::Status;

pub mod constraints {
    pub const PK_SOLICITATIONS: &str = "PK_solicitations";
    pub const FK_SOLICITATIONS_STUDENT: &str = "FK_solicitations_student";
    pub const FK_SOLICITATIONS_DOCUMENT: &str = "FK_solicitations_document";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "solicitations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub solicitation_date: Date,
    pub estimated_completion_date: Option<Date>,
    pub conclusion_date: Option<Date>,
    pub status: Status,
    pub priority: bool,
    pub student_id: i32,
    pub document_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Document,
    Comments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(students::Entity)
                .from(Column::StudentId)
                .to(students::Column::Id)
                .into(),
            Self::Document => Entity::belongs_to(documents::Entity)
                .from(Column::DocumentId)
                .to(documents::Column::Id)
                .into(),
            Self::Comments => Entity::has_many(comments::Entity).into(),
        }
    }
}

impl Related<students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl Related<comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use super::solicitations;
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_DOCUMENTS: &str = "PK_documents";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Expected number of days to fulfil a solicitation for this document.
    pub attendance_deadline: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Solicitations,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Solicitations => Entity::has_many(solicitations::Entity).into(),
        }
    }
}

impl Related<solicitations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Solicitations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

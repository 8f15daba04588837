use super::solicitations;
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_STUDENTS: &str = "PK_students";
    pub const UC_STUDENTS_RA: &str = "UC_students_ra";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub ra: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cellphone: Option<String>,
    pub course: String,
    pub period: i32,
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

impl Entity {
    #[inline]
    pub fn find_by_ra(ra: &str) -> Select<Entity> {
        Self::find().filter(Column::Ra.eq(ra))
    }
}

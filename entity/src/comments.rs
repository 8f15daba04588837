use super::solicitations;
use sea_orm::{entity::prelude::*, QueryOrder};

pub mod constraints {
    pub const PK_COMMENTS: &str = "PK_comments";
    pub const FK_COMMENTS_SOLICITATION: &str = "FK_comments_solicitation";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub comment_date: DateTimeUtc,
    pub employee_name: String,
    pub solicitation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Solicitation,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Solicitation => Entity::belongs_to(solicitations::Entity)
                .from(Column::SolicitationId)
                .to(solicitations::Column::Id)
                .into(),
        }
    }
}

impl Related<solicitations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Solicitation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_solicitation(solicitation_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::SolicitationId.eq(solicitation_id))
            .order_by_asc(Column::CommentDate)
            .order_by_asc(Column::Id)
    }
}

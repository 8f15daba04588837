use entity::{
    comments::{self, constraints::*},
    solicitations,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(comments::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(comments::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(comments::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(comments::Column::CommentDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(comments::Column::EmployeeName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(comments::Column::SolicitationId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_COMMENTS).col(comments::Column::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENTS_SOLICITATION)
                            .from(comments::Entity, comments::Column::SolicitationId)
                            .to(solicitations::Entity, solicitations::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(comments::Entity).to_owned())
            .await
    }
}

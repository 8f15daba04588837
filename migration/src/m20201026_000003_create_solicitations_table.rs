use entity::{
    documents,
    solicitations::{self, constraints::*},
    students,
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
                    .table(solicitations::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(solicitations::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(solicitations::Column::SolicitationDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(solicitations::Column::EstimatedCompletionDate)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(solicitations::Column::ConclusionDate)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(solicitations::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(solicitations::Column::Priority)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(solicitations::Column::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(solicitations::Column::DocumentId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_SOLICITATIONS)
                            .col(solicitations::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOLICITATIONS_STUDENT)
                            .from(solicitations::Entity, solicitations::Column::StudentId)
                            .to(students::Entity, students::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOLICITATIONS_DOCUMENT)
                            .from(solicitations::Entity, solicitations::Column::DocumentId)
                            .to(documents::Entity, documents::Column::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(solicitations::Entity).to_owned())
            .await
    }
}

use entity::students::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(students::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(students::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(students::Column::Ra)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(students::Column::Name).string().not_null())
                    .col(ColumnDef::new(students::Column::Email).string().not_null())
                    .col(
                        ColumnDef::new(students::Column::Phone)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(students::Column::Cellphone)
                            .string_len(32)
                            .null(),
                    )
                    .col(ColumnDef::new(students::Column::Course).string().not_null())
                    .col(
                        ColumnDef::new(students::Column::Period)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_STUDENTS).col(students::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_STUDENTS_RA)
                            .col(students::Column::Ra)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(students::Entity).to_owned())
            .await
    }
}

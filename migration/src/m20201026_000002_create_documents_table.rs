use entity::documents::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(documents::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(documents::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(documents::Column::Name).string().not_null())
                    .col(
                        ColumnDef::new(documents::Column::Description)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(documents::Column::AttendanceDeadline)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_DOCUMENTS)
                            .col(documents::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(documents::Entity).to_owned())
            .await
    }
}

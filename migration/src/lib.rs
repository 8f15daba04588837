pub use sea_orm_migration::prelude::*;

mod m20201026_000001_create_students_table;
mod m20201026_000002_create_documents_table;
mod m20201026_000003_create_solicitations_table;
mod m20201026_000004_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20201026_000001_create_students_table::Migration),
            Box::new(m20201026_000002_create_documents_table::Migration),
            Box::new(m20201026_000003_create_solicitations_table::Migration),
            Box::new(m20201026_000004_create_comments_table::Migration),
        ]
    }
}

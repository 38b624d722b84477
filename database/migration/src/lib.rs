use sea_orm_migration::{
    prelude::*,
    sea_orm::{Database, DbErr},
};

mod m20241001_0900_create_table;
mod m20241001_0930_seed_lookup;

pub use m20241001_0900_create_table::REQUIREMENT_CODE_SEQUENCE;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_0900_create_table::Migration),
            Box::new(m20241001_0930_seed_lookup::Migration),
        ]
    }
}

impl Migrator {
    pub async fn migration_up(db_con: &str) -> Result<(), DbErr> {
        Migrator::up(&Database::connect(db_con).await?, None).await
    }

    pub async fn migration_down(db_con: &str) -> Result<(), DbErr> {
        Migrator::down(&Database::connect(db_con).await?, None).await
    }
}

use database_model::{category, priority, requirement_type, role, sea_orm::ConnectionTrait};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{ActiveValue::Set, EntityTrait},
};

pub struct Migration;

const REQUIREMENT_TYPES: [(i32, &str); 3] = [(1, "Hardware"), (2, "Software"), (3, "Maintenance")];

const CATEGORIES: [(i32, &str, i32); 5] = [
    (1, "Hardware Malfunction", 1),
    (2, "Network Issue", 1),
    (3, "Software Bug", 2),
    (4, "Database Maintenance", 2),
    (5, "Routine Check", 3),
];

const PRIORITIES: [(i32, &str); 4] = [(1, "Alta"), (2, "Media"), (3, "Baja"), (4, "Urgente")];

const ROLES: [&str; 3] = ["Admin", "Interno", "Externo"];

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20241001_0930_seed_lookup"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        role::Entity::insert_many(ROLES.map(|name| role::ActiveModel {
            name: Set(name.to_string()),
        }))
        .exec(db)
        .await?;

        requirement_type::Entity::insert_many(REQUIREMENT_TYPES.map(|(id, name)| {
            requirement_type::ActiveModel {
                id: Set(id),
                name: Set(name.to_string()),
            }
        }))
        .exec(db)
        .await?;

        category::Entity::insert_many(CATEGORIES.map(|(id, name, requirement_type_id)| {
            category::ActiveModel {
                id: Set(id),
                name: Set(name.to_string()),
                requirement_type_id: Set(requirement_type_id),
            }
        }))
        .exec(db)
        .await?;

        priority::Entity::insert_many(PRIORITIES.map(|(id, name)| priority::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        }))
        .exec(db)
        .await?;

        // Explicit ids bypass the serial sequences, move them past the seeds.
        for table in ["requirement_type", "category", "priority"] {
            db.execute_unprepared(&format!(
                "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
                 (SELECT MAX(id) FROM {table}))"
            ))
            .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for table in ["category", "requirement_type", "priority", "role"] {
            db.execute_unprepared(&format!("DELETE FROM {table}")).await?;
        }
        Ok(())
    }
}

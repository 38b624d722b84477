use database_model::{prelude::*, sea_orm::ConnectionTrait};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{DbBackend, EntityTrait, Schema},
};

pub struct Migration;

/// Backs requirement code generation, `nextval` is atomic across connections.
pub const REQUIREMENT_CODE_SEQUENCE: &str = "requirement_code_seq";

fn get_seaorm_create_stmt<E: EntityTrait>(e: E) -> TableCreateStatement {
    let schema = Schema::new(DbBackend::Postgres);
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

fn get_seaorm_drop_stmt<E: EntityTrait>(e: E) -> TableDropStatement {
    Table::drop().table(e).if_exists().to_owned()
}

fn foreign_key(
    name: &str,
    from: (impl IntoIden + 'static, impl IntoIden + 'static),
    to: (impl IntoIden + 'static, impl IntoIden + 'static),
    on_delete: ForeignKeyAction,
) -> ForeignKeyCreateStatement {
    sea_query::ForeignKey::create()
        .name(name)
        .from(from.0, from.1)
        .to(to.0, to.1)
        .on_delete(on_delete)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

/// Child rows go away with their parent.
fn cascade_fk(
    name: &str,
    from: (impl IntoIden + 'static, impl IntoIden + 'static),
    to: (impl IntoIden + 'static, impl IntoIden + 'static),
) -> ForeignKeyCreateStatement {
    foreign_key(name, from, to, ForeignKeyAction::Cascade)
}

/// Lookup rows cannot be deleted while something references them.
fn restrict_fk(
    name: &str,
    from: (impl IntoIden + 'static, impl IntoIden + 'static),
    to: (impl IntoIden + 'static, impl IntoIden + 'static),
) -> ForeignKeyCreateStatement {
    foreign_key(name, from, to, ForeignKeyAction::Restrict)
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20241001_0900_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let stmts = vec![
            get_seaorm_create_stmt(RoleEntity),
            get_seaorm_create_stmt(UserEntity),
            get_seaorm_create_stmt(InternalUserEntity),
            get_seaorm_create_stmt(ExternalUserEntity),
            get_seaorm_create_stmt(AdminUserEntity),
            get_seaorm_create_stmt(RequirementTypeEntity),
            get_seaorm_create_stmt(CategoryEntity),
            get_seaorm_create_stmt(PriorityEntity),
            get_seaorm_create_stmt(RequirementEntity),
            get_seaorm_create_stmt(RequirementAssignmentEntity),
            get_seaorm_create_stmt(RequirementRelationEntity),
            get_seaorm_create_stmt(RequirementActionLogEntity),
            get_seaorm_create_stmt(NotificationEntity),
            get_seaorm_create_stmt(UserNotificationEntity),
            get_seaorm_create_stmt(CommentEntity),
            get_seaorm_create_stmt(AttachmentEntity),
        ];
        for stmt in stmts {
            manager.create_table(stmt.to_owned()).await?;
        }

        let fks = vec![
            cascade_fk(
                "FK_InternalUser_User",
                (InternalUserEntity, InternalUserColumn::Id),
                (UserEntity, UserColumn::Id),
            ),
            cascade_fk(
                "FK_ExternalUser_User",
                (ExternalUserEntity, ExternalUserColumn::Id),
                (UserEntity, UserColumn::Id),
            ),
            cascade_fk(
                "FK_AdminUser_User",
                (AdminUserEntity, AdminUserColumn::Id),
                (UserEntity, UserColumn::Id),
            ),
            restrict_fk(
                "FK_Category_RequirementType",
                (CategoryEntity, CategoryColumn::RequirementTypeId),
                (RequirementTypeEntity, RequirementTypeColumn::Id),
            ),
            restrict_fk(
                "FK_Requirement_RequirementType",
                (RequirementEntity, RequirementColumn::RequirementTypeId),
                (RequirementTypeEntity, RequirementTypeColumn::Id),
            ),
            restrict_fk(
                "FK_Requirement_Category",
                (RequirementEntity, RequirementColumn::CategoryId),
                (CategoryEntity, CategoryColumn::Id),
            ),
            restrict_fk(
                "FK_Requirement_Priority",
                (RequirementEntity, RequirementColumn::PriorityId),
                (PriorityEntity, PriorityColumn::Id),
            ),
            cascade_fk(
                "FK_RequirementAssignment_Requirement",
                (RequirementAssignmentEntity, RequirementAssignmentColumn::RequirementId),
                (RequirementEntity, RequirementColumn::Id),
            ),
            cascade_fk(
                "FK_RequirementAssignment_User",
                (RequirementAssignmentEntity, RequirementAssignmentColumn::UserId),
                (UserEntity, UserColumn::Id),
            ),
            cascade_fk(
                "FK_RequirementRelation_Requirement",
                (RequirementRelationEntity, RequirementRelationColumn::RequirementId),
                (RequirementEntity, RequirementColumn::Id),
            ),
            cascade_fk(
                "FK_RequirementRelation_Related",
                (RequirementRelationEntity, RequirementRelationColumn::RelatedRequirementId),
                (RequirementEntity, RequirementColumn::Id),
            ),
            cascade_fk(
                "FK_RequirementActionLog_Requirement",
                (RequirementActionLogEntity, RequirementActionLogColumn::RequirementId),
                (RequirementEntity, RequirementColumn::Id),
            ),
            cascade_fk(
                "FK_UserNotification_User",
                (UserNotificationEntity, UserNotificationColumn::UserId),
                (UserEntity, UserColumn::Id),
            ),
            cascade_fk(
                "FK_Comment_Requirement",
                (CommentEntity, CommentColumn::RequirementId),
                (RequirementEntity, RequirementColumn::Id),
            ),
            cascade_fk(
                "FK_Attachment_Requirement",
                (AttachmentEntity, AttachmentColumn::RequirementId),
                (RequirementEntity, RequirementColumn::Id),
            ),
            cascade_fk(
                "FK_Attachment_Comment",
                (AttachmentEntity, AttachmentColumn::CommentId),
                (CommentEntity, CommentColumn::Id),
            ),
        ];
        for fk in fks {
            manager.create_foreign_key(fk).await?;
        }

        manager
            .create_index(
                Index::create()
                    .name("IX_RequirementActionLog_RequirementId")
                    .table(RequirementActionLogEntity)
                    .col(RequirementActionLogColumn::RequirementId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE SEQUENCE IF NOT EXISTS {REQUIREMENT_CODE_SEQUENCE} START 1"
            ))
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!("DROP SEQUENCE IF EXISTS {REQUIREMENT_CODE_SEQUENCE}"))
            .await?;
        let stmts = vec![
            get_seaorm_drop_stmt(AttachmentEntity),
            get_seaorm_drop_stmt(CommentEntity),
            get_seaorm_drop_stmt(UserNotificationEntity),
            get_seaorm_drop_stmt(NotificationEntity),
            get_seaorm_drop_stmt(RequirementActionLogEntity),
            get_seaorm_drop_stmt(RequirementRelationEntity),
            get_seaorm_drop_stmt(RequirementAssignmentEntity),
            get_seaorm_drop_stmt(RequirementEntity),
            get_seaorm_drop_stmt(PriorityEntity),
            get_seaorm_drop_stmt(CategoryEntity),
            get_seaorm_drop_stmt(RequirementTypeEntity),
            get_seaorm_drop_stmt(AdminUserEntity),
            get_seaorm_drop_stmt(ExternalUserEntity),
            get_seaorm_drop_stmt(InternalUserEntity),
            get_seaorm_drop_stmt(UserEntity),
            get_seaorm_drop_stmt(RoleEntity),
        ];
        for stmt in stmts {
            manager.drop_table(stmt).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keys_restrict_delete() {
        let sql = restrict_fk(
            "FK_Requirement_Category",
            (RequirementEntity, RequirementColumn::CategoryId),
            (CategoryEntity, CategoryColumn::Id),
        )
        .to_string(PostgresQueryBuilder);
        assert!(sql.contains("ON DELETE RESTRICT"), "{sql}");
    }

    #[test]
    fn test_child_rows_cascade() {
        let sql = cascade_fk(
            "FK_Comment_Requirement",
            (CommentEntity, CommentColumn::RequirementId),
            (RequirementEntity, RequirementColumn::Id),
        )
        .to_string(PostgresQueryBuilder);
        assert!(sql.contains("ON DELETE CASCADE"), "{sql}");
    }
}

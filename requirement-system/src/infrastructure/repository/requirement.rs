use std::collections::HashMap;

use architecture::MutableRepository;
use async_trait::async_trait;
use database_migration::REQUIREMENT_CODE_SEQUENCE;
use database_model::{
    prelude::*,
    requirement::{ActiveModel as RequirementActiveModel, Model as RequirementModel},
    requirement_assignment, requirement_relation,
};
use domain_requirement::{
    model::{entity::Requirement, vo::LookupRef},
    repository::RequirementRepo,
};
use sea_orm::{prelude::*, PaginatorTrait, QueryOrder, QueryTrait, Select, Set, Statement};

use crate::infrastructure::database::OrmRepo;

impl OrmRepo {
    /// Load the assignment and relation rows of the requirements.
    async fn with_links(&self, models: Vec<RequirementModel>) -> anyhow::Result<Vec<Requirement>> {
        let conn = self.db.get_connection();
        let ids = models.iter().map(|el| el.id).collect::<Vec<_>>();
        let mut assigned: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for el in RequirementAssignmentEntity::find()
            .filter(RequirementAssignmentColumn::RequirementId.is_in(ids.clone()))
            .all(conn)
            .await?
        {
            assigned.entry(el.requirement_id).or_default().push(el.user_id);
        }
        let mut related: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for el in RequirementRelationEntity::find()
            .filter(RequirementRelationColumn::RequirementId.is_in(ids))
            .all(conn)
            .await?
        {
            related.entry(el.requirement_id).or_default().push(el.related_requirement_id);
        }
        Ok(models
            .into_iter()
            .map(|model| {
                let assigned_user_ids = assigned.remove(&model.id).unwrap_or_default();
                let related_requirement_ids = related.remove(&model.id).unwrap_or_default();
                Requirement {
                    id: model.id,
                    code: model.code,
                    subject: model.subject,
                    description: model.description,
                    requirement_type_id: model.requirement_type_id,
                    category_id: model.category_id,
                    priority_id: model.priority_id,
                    status: model.status.into(),
                    created_by: model.created_by,
                    created_time: model.created_time,
                    is_deleted: model.is_deleted,
                    restored_time: model.restored_time,
                    assigned_user_ids,
                    related_requirement_ids,
                }
            })
            .collect())
    }

    async fn find_requirements(
        &self,
        select: Select<RequirementEntity>,
        include_deleted: bool,
    ) -> anyhow::Result<Vec<Requirement>> {
        let select = if include_deleted {
            select
        } else {
            select.filter(RequirementColumn::IsDeleted.eq(false))
        };
        let models = select
            .order_by_desc(RequirementColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?;
        self.with_links(models).await
    }
}

fn to_active_model(entity: &Requirement) -> RequirementActiveModel {
    let entity = entity.to_owned();
    RequirementActiveModel {
        id: Set(entity.id),
        code: Set(entity.code),
        subject: Set(entity.subject),
        description: Set(entity.description),
        requirement_type_id: Set(entity.requirement_type_id),
        category_id: Set(entity.category_id),
        priority_id: Set(entity.priority_id),
        status: Set(entity.status.to_string()),
        created_by: Set(entity.created_by),
        created_time: Set(entity.created_time),
        is_deleted: Set(entity.is_deleted),
        restored_time: Set(entity.restored_time),
    }
}

#[async_trait]
impl RequirementRepo for OrmRepo {
    async fn get(&self, id: Uuid, include_deleted: bool) -> anyhow::Result<Option<Requirement>> {
        let select = RequirementEntity::find().filter(RequirementColumn::Id.eq(id));
        Ok(self.find_requirements(select, include_deleted).await?.pop())
    }

    async fn list(&self, include_deleted: bool) -> anyhow::Result<Vec<Requirement>> {
        self.find_requirements(RequirementEntity::find(), include_deleted).await
    }

    async fn list_deleted(&self) -> anyhow::Result<Vec<Requirement>> {
        let select = RequirementEntity::find().filter(RequirementColumn::IsDeleted.eq(true));
        self.find_requirements(select, true).await
    }

    async fn get_assigned_to_user(
        &self,
        user_id: Uuid,
        include_deleted: bool,
    ) -> anyhow::Result<Vec<Requirement>> {
        let ids = RequirementAssignmentEntity::find()
            .filter(RequirementAssignmentColumn::UserId.eq(user_id))
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(|el| el.requirement_id)
            .collect::<Vec<_>>();
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let select = RequirementEntity::find().filter(RequirementColumn::Id.is_in(ids));
        self.find_requirements(select, include_deleted).await
    }

    async fn get_created_by_user(
        &self,
        user_id: Uuid,
        include_deleted: bool,
    ) -> anyhow::Result<Vec<Requirement>> {
        let select = RequirementEntity::find().filter(RequirementColumn::CreatedBy.eq(user_id));
        self.find_requirements(select, include_deleted).await
    }

    async fn next_sequence(&self) -> anyhow::Result<i64> {
        let stmt = Statement::from_string(
            self.backend(),
            format!("SELECT nextval('{REQUIREMENT_CODE_SEQUENCE}') AS seq"),
        );
        let row = self
            .db
            .get_connection()
            .query_one(stmt)
            .await?
            .ok_or(anyhow::anyhow!("Sequence {REQUIREMENT_CODE_SEQUENCE} returned no row"))?;
        Ok(row.try_get::<i64>("", "seq")?)
    }

    async fn is_lookup_in_use(&self, lookup: LookupRef) -> anyhow::Result<bool> {
        let condition = match lookup {
            LookupRef::RequirementType(id) => RequirementColumn::RequirementTypeId.eq(id),
            LookupRef::Category(id) => RequirementColumn::CategoryId.eq(id),
            LookupRef::Priority(id) => RequirementColumn::PriorityId.eq(id),
        };
        let count = RequirementEntity::find()
            .filter(condition)
            .count(self.db.get_connection())
            .await?;
        Ok(count > 0)
    }
}

#[async_trait]
impl MutableRepository<Requirement> for OrmRepo {
    async fn insert(&self, entity: &Requirement) -> anyhow::Result<Uuid> {
        let backend = self.backend();
        let mut stmts = vec![RequirementEntity::insert(to_active_model(entity)).build(backend)];
        if !entity.assigned_user_ids.is_empty() {
            stmts.push(
                RequirementAssignmentEntity::insert_many(entity.assigned_user_ids.iter().map(
                    |user_id| requirement_assignment::ActiveModel {
                        requirement_id: Set(entity.id),
                        user_id: Set(*user_id),
                    },
                ))
                .build(backend),
            );
        }
        if !entity.related_requirement_ids.is_empty() {
            stmts.push(
                RequirementRelationEntity::insert_many(entity.related_requirement_ids.iter().map(
                    |related| requirement_relation::ActiveModel {
                        requirement_id: Set(entity.id),
                        related_requirement_id: Set(*related),
                    },
                ))
                .build(backend),
            );
        }
        self.push(stmts).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &Requirement) -> anyhow::Result<()> {
        let mut model = to_active_model(entity);
        model.id = sea_orm::ActiveValue::NotSet;
        model.code = sea_orm::ActiveValue::NotSet;
        model.created_by = sea_orm::ActiveValue::NotSet;
        model.created_time = sea_orm::ActiveValue::NotSet;
        let stmt = RequirementEntity::update_many()
            .set(model)
            .filter(RequirementColumn::Id.eq(entity.id))
            .build(self.backend());
        self.push([stmt]).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

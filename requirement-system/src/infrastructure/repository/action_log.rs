use architecture::MutableRepository;
use async_trait::async_trait;
use database_model::{prelude::*, requirement_action_log};
use domain_requirement::{
    model::{entity::RequirementActionLog, vo::RequirementAction},
    repository::RequirementActionLogRepo,
};
use num_traits::{FromPrimitive, ToPrimitive};
use sea_orm::{prelude::*, QueryOrder, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl RequirementActionLogRepo for OrmRepo {
    async fn get_by_requirement(
        &self,
        requirement_id: Uuid,
    ) -> anyhow::Result<Vec<RequirementActionLog>> {
        RequirementActionLogEntity::find()
            .filter(RequirementActionLogColumn::RequirementId.eq(requirement_id))
            .order_by_asc(RequirementActionLogColumn::Timestamp)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(|model| {
                Ok(RequirementActionLog {
                    id: model.id,
                    requirement_id: model.requirement_id,
                    action: RequirementAction::from_i32(model.action)
                        .ok_or(anyhow::anyhow!("Unknown requirement action {}", model.action))?,
                    performed_by: model.performed_by,
                    details: model.details,
                    timestamp: model.timestamp,
                })
            })
            .collect()
    }
}

/// Audit rows are only ever inserted.
#[async_trait]
impl MutableRepository<RequirementActionLog> for OrmRepo {
    async fn insert(&self, entity: &RequirementActionLog) -> anyhow::Result<Uuid> {
        let entity2 = entity.to_owned();
        let stmt = RequirementActionLogEntity::insert(requirement_action_log::ActiveModel {
            id: Set(entity2.id),
            requirement_id: Set(entity2.requirement_id),
            action: Set(entity2.action.to_i32().unwrap_or_default()),
            performed_by: Set(entity2.performed_by),
            details: Set(entity2.details),
            timestamp: Set(entity2.timestamp),
        })
        .build(self.backend());
        self.push([stmt]).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

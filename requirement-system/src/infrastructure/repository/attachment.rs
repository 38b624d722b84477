use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use database_model::{attachment, prelude::*};
use domain_requirement::{model::entity::Attachment, repository::AttachmentRepo};
use sea_orm::{prelude::*, PaginatorTrait, QueryOrder, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

fn to_attachment(model: attachment::Model) -> Attachment {
    Attachment {
        id: model.id,
        requirement_id: model.requirement_id,
        comment_id: model.comment_id,
        file_name: model.file_name,
        file_path: model.file_path,
        uploaded_time: model.uploaded_time,
    }
}

#[async_trait]
impl AttachmentRepo for OrmRepo {
    async fn get_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<Vec<Attachment>> {
        Ok(AttachmentEntity::find()
            .filter(AttachmentColumn::RequirementId.eq(requirement_id))
            .order_by_asc(AttachmentColumn::UploadedTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_attachment)
            .collect())
    }

    async fn count_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<u64> {
        Ok(AttachmentEntity::find()
            .filter(AttachmentColumn::RequirementId.eq(requirement_id))
            .count(self.db.get_connection())
            .await?)
    }
}

#[async_trait]
impl ReadOnlyRepository<Attachment> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Attachment>> {
        Ok(AttachmentEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(to_attachment))
    }
}

#[async_trait]
impl MutableRepository<Attachment> for OrmRepo {
    async fn insert(&self, entity: &Attachment) -> anyhow::Result<Uuid> {
        let entity2 = entity.to_owned();
        let stmt = AttachmentEntity::insert(attachment::ActiveModel {
            id: Set(entity2.id),
            requirement_id: Set(entity2.requirement_id),
            comment_id: Set(entity2.comment_id),
            file_name: Set(entity2.file_name),
            file_path: Set(entity2.file_path),
            uploaded_time: Set(entity2.uploaded_time),
        })
        .build(self.backend());
        self.push([stmt]).await;
        Ok(entity.id)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        let stmt = AttachmentEntity::delete_many()
            .filter(AttachmentColumn::Id.eq(id))
            .build(self.backend());
        self.push([stmt]).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Attachment> for OrmRepo {}

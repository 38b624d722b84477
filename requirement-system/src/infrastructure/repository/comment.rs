use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use database_model::{comment, prelude::*};
use domain_requirement::{model::entity::Comment, repository::CommentRepo};
use sea_orm::{prelude::*, sea_query::Expr, QueryOrder, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

fn to_comment(model: comment::Model) -> Comment {
    Comment {
        id: model.id,
        requirement_id: model.requirement_id,
        user_id: model.user_id,
        user_name: model.user_name,
        description: model.description,
        created_time: model.created_time,
    }
}

#[async_trait]
impl CommentRepo for OrmRepo {
    async fn get_by_requirement(&self, requirement_id: Uuid) -> anyhow::Result<Vec<Comment>> {
        Ok(CommentEntity::find()
            .filter(CommentColumn::RequirementId.eq(requirement_id))
            .order_by_asc(CommentColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_comment)
            .collect())
    }
}

#[async_trait]
impl ReadOnlyRepository<Comment> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Comment>> {
        Ok(CommentEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(to_comment))
    }
}

#[async_trait]
impl MutableRepository<Comment> for OrmRepo {
    async fn insert(&self, entity: &Comment) -> anyhow::Result<Uuid> {
        let entity2 = entity.to_owned();
        let stmt = CommentEntity::insert(comment::ActiveModel {
            id: Set(entity2.id),
            requirement_id: Set(entity2.requirement_id),
            user_id: Set(entity2.user_id),
            user_name: Set(entity2.user_name),
            description: Set(entity2.description),
            created_time: Set(entity2.created_time),
        })
        .build(self.backend());
        self.push([stmt]).await;
        Ok(entity.id)
    }

    /// Only the text of a comment can change.
    async fn update(&self, entity: &Comment) -> anyhow::Result<()> {
        let stmt = CommentEntity::update_many()
            .col_expr(CommentColumn::Description, Expr::value(entity.description.to_owned()))
            .filter(CommentColumn::Id.eq(entity.id))
            .build(self.backend());
        self.push([stmt]).await;
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        let stmt = CommentEntity::delete_many()
            .filter(CommentColumn::Id.eq(id))
            .build(self.backend());
        self.push([stmt]).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Comment> for OrmRepo {}

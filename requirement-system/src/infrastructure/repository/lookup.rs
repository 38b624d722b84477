//! Seeded lookup tables. Their keys are generated by the database, so writes are executed
//! immediately instead of being buffered.
use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use database_model::{category, prelude::*, priority, requirement_type};
use domain_requirement::{
    model::entity::{Category, Priority, RequirementType},
    repository::CategoryRepo,
};
use sea_orm::{prelude::*, sea_query::Expr, ActiveValue::NotSet, QueryOrder, Set};

use crate::infrastructure::database::OrmRepo;

fn to_category(model: category::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        requirement_type_id: model.requirement_type_id,
    }
}

fn to_requirement_type(model: requirement_type::Model) -> RequirementType {
    RequirementType {
        id: model.id,
        name: model.name,
    }
}

fn to_priority(model: priority::Model) -> Priority {
    Priority {
        id: model.id,
        name: model.name,
    }
}

#[async_trait]
impl CategoryRepo for OrmRepo {
    async fn get_by_requirement_type(
        &self,
        requirement_type_id: i32,
    ) -> anyhow::Result<Vec<Category>> {
        Ok(CategoryEntity::find()
            .filter(CategoryColumn::RequirementTypeId.eq(requirement_type_id))
            .order_by_asc(CategoryColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_category)
            .collect())
    }
}

#[async_trait]
impl ReadOnlyRepository<Category> for OrmRepo {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Category>> {
        Ok(CategoryEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(to_category))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Category>> {
        Ok(CategoryEntity::find()
            .order_by_asc(CategoryColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_category)
            .collect())
    }
}

#[async_trait]
impl MutableRepository<Category> for OrmRepo {
    async fn insert(&self, entity: &Category) -> anyhow::Result<i32> {
        let result = CategoryEntity::insert(category::ActiveModel {
            id: NotSet,
            name: Set(entity.name.to_owned()),
            requirement_type_id: Set(entity.requirement_type_id),
        })
        .exec(self.db.get_connection())
        .await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, entity: &Category) -> anyhow::Result<()> {
        CategoryEntity::update_many()
            .set(category::ActiveModel {
                id: NotSet,
                name: Set(entity.name.to_owned()),
                requirement_type_id: Set(entity.requirement_type_id),
            })
            .filter(CategoryColumn::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        CategoryEntity::delete_by_id(id).exec(self.db.get_connection()).await?;
        Ok(())
    }
}

impl DBRepository<Category> for OrmRepo {}

#[async_trait]
impl ReadOnlyRepository<RequirementType> for OrmRepo {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<RequirementType>> {
        Ok(RequirementTypeEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(to_requirement_type))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<RequirementType>> {
        Ok(RequirementTypeEntity::find()
            .order_by_asc(RequirementTypeColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_requirement_type)
            .collect())
    }
}

#[async_trait]
impl MutableRepository<RequirementType> for OrmRepo {
    async fn insert(&self, entity: &RequirementType) -> anyhow::Result<i32> {
        let result = RequirementTypeEntity::insert(requirement_type::ActiveModel {
            id: NotSet,
            name: Set(entity.name.to_owned()),
        })
        .exec(self.db.get_connection())
        .await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, entity: &RequirementType) -> anyhow::Result<()> {
        RequirementTypeEntity::update_many()
            .col_expr(RequirementTypeColumn::Name, Expr::value(entity.name.to_owned()))
            .filter(RequirementTypeColumn::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        RequirementTypeEntity::delete_by_id(id).exec(self.db.get_connection()).await?;
        Ok(())
    }
}

impl DBRepository<RequirementType> for OrmRepo {}

#[async_trait]
impl ReadOnlyRepository<Priority> for OrmRepo {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Priority>> {
        Ok(PriorityEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(to_priority))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Priority>> {
        Ok(PriorityEntity::find()
            .order_by_asc(PriorityColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(to_priority)
            .collect())
    }
}

#[async_trait]
impl MutableRepository<Priority> for OrmRepo {
    async fn insert(&self, entity: &Priority) -> anyhow::Result<i32> {
        let result = PriorityEntity::insert(priority::ActiveModel {
            id: NotSet,
            name: Set(entity.name.to_owned()),
        })
        .exec(self.db.get_connection())
        .await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, entity: &Priority) -> anyhow::Result<()> {
        PriorityEntity::update_many()
            .col_expr(PriorityColumn::Name, Expr::value(entity.name.to_owned()))
            .filter(PriorityColumn::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        PriorityEntity::delete_by_id(id).exec(self.db.get_connection()).await?;
        Ok(())
    }
}

impl DBRepository<Priority> for OrmRepo {}

use std::sync::Arc;

use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_requirement::{
    command::CategoryCommand,
    exception::{RequirementException, RequirementResult},
    model::{
        entity::{Category, Priority, RequirementType},
        vo::LookupRef,
    },
    repository::{CategoryRepo, RequirementRepo},
    service::{CategoryService, PriorityService, RequirementTypeService},
};
use typed_builder::TypedBuilder;

fn validate_name(name: &str) -> RequirementResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RequirementException::Validation {
            message: "Name is required.".to_string(),
        });
    }
    Ok(name.to_string())
}

/// Lookup rows stay while any requirement, deleted or not, points at them.
async fn ensure_unused(
    requirement_repo: &dyn RequirementRepo,
    lookup: LookupRef,
) -> RequirementResult<()> {
    if requirement_repo.is_lookup_in_use(lookup).await? {
        return Err(RequirementException::LookupInUse {
            lookup: lookup.kind(),
            id: lookup.id(),
        });
    }
    Ok(())
}

#[derive(TypedBuilder)]
pub struct CategoryServiceImpl {
    category_repo: Arc<dyn CategoryRepo>,
    requirement_type_repo: Arc<dyn ReadOnlyRepository<RequirementType>>,
    requirement_repo: Arc<dyn RequirementRepo>,
}

impl CategoryServiceImpl {
    async fn check_requirement_type(&self, id: i32) -> RequirementResult<()> {
        match self.requirement_type_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(RequirementException::InvalidRequirementType { id }),
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn create_category(&self, command: CategoryCommand) -> RequirementResult<Category> {
        let name = validate_name(&command.name)?;
        self.check_requirement_type(command.requirement_type_id).await?;
        let mut category = Category {
            id: 0,
            name,
            requirement_type_id: command.requirement_type_id,
        };
        category.id = self.category_repo.insert(&category).await?;
        Ok(category)
    }

    async fn update_category(
        &self,
        id: i32,
        command: CategoryCommand,
    ) -> RequirementResult<Category> {
        let mut category = self.get_category(id).await?;
        category.name = validate_name(&command.name)?;
        self.check_requirement_type(command.requirement_type_id).await?;
        category.requirement_type_id = command.requirement_type_id;
        self.category_repo.update(&category).await?;
        Ok(category)
    }

    async fn delete_category(&self, id: i32) -> RequirementResult<()> {
        self.get_category(id).await?;
        ensure_unused(self.requirement_repo.as_ref(), LookupRef::Category(id)).await?;
        Ok(self.category_repo.delete_by_id(id).await?)
    }

    async fn get_category(&self, id: i32) -> RequirementResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or(RequirementException::CategoryNotFound { id })
    }

    async fn get_all_categories(&self) -> RequirementResult<Vec<Category>> {
        Ok(self.category_repo.get_all().await?)
    }

    async fn get_categories_by_requirement_type(
        &self,
        requirement_type_id: i32,
    ) -> RequirementResult<Vec<Category>> {
        if self.requirement_type_repo.find_by_id(requirement_type_id).await?.is_none() {
            return Err(RequirementException::RequirementTypeNotFound {
                id: requirement_type_id,
            });
        }
        Ok(self.category_repo.get_by_requirement_type(requirement_type_id).await?)
    }
}

#[derive(TypedBuilder)]
pub struct RequirementTypeServiceImpl {
    requirement_type_repo: Arc<dyn DBRepository<RequirementType>>,
    category_repo: Arc<dyn CategoryRepo>,
    requirement_repo: Arc<dyn RequirementRepo>,
}

#[async_trait]
impl RequirementTypeService for RequirementTypeServiceImpl {
    async fn create_requirement_type(&self, name: &str) -> RequirementResult<RequirementType> {
        let mut requirement_type = RequirementType {
            id: 0,
            name: validate_name(name)?,
        };
        requirement_type.id = self.requirement_type_repo.insert(&requirement_type).await?;
        Ok(requirement_type)
    }

    async fn update_requirement_type(
        &self,
        id: i32,
        name: &str,
    ) -> RequirementResult<RequirementType> {
        let mut requirement_type = self.get_requirement_type(id).await?;
        requirement_type.name = validate_name(name)?;
        self.requirement_type_repo.update(&requirement_type).await?;
        Ok(requirement_type)
    }

    async fn delete_requirement_type(&self, id: i32) -> RequirementResult<()> {
        self.get_requirement_type(id).await?;
        let lookup = LookupRef::RequirementType(id);
        if !self.category_repo.get_by_requirement_type(id).await?.is_empty() {
            return Err(RequirementException::LookupInUse {
                lookup: lookup.kind(),
                id,
            });
        }
        ensure_unused(self.requirement_repo.as_ref(), lookup).await?;
        Ok(self.requirement_type_repo.delete_by_id(id).await?)
    }

    async fn get_requirement_type(&self, id: i32) -> RequirementResult<RequirementType> {
        self.requirement_type_repo
            .find_by_id(id)
            .await?
            .ok_or(RequirementException::RequirementTypeNotFound { id })
    }

    async fn get_all_requirement_types(&self) -> RequirementResult<Vec<RequirementType>> {
        Ok(self.requirement_type_repo.get_all().await?)
    }
}

#[derive(TypedBuilder)]
pub struct PriorityServiceImpl {
    priority_repo: Arc<dyn DBRepository<Priority>>,
    requirement_repo: Arc<dyn RequirementRepo>,
}

#[async_trait]
impl PriorityService for PriorityServiceImpl {
    async fn create_priority(&self, name: &str) -> RequirementResult<Priority> {
        let mut priority = Priority {
            id: 0,
            name: validate_name(name)?,
        };
        priority.id = self.priority_repo.insert(&priority).await?;
        Ok(priority)
    }

    async fn update_priority(&self, id: i32, name: &str) -> RequirementResult<Priority> {
        let mut priority = self.get_priority(id).await?;
        priority.name = validate_name(name)?;
        self.priority_repo.update(&priority).await?;
        Ok(priority)
    }

    async fn delete_priority(&self, id: i32) -> RequirementResult<()> {
        self.get_priority(id).await?;
        ensure_unused(self.requirement_repo.as_ref(), LookupRef::Priority(id)).await?;
        Ok(self.priority_repo.delete_by_id(id).await?)
    }

    async fn get_priority(&self, id: i32) -> RequirementResult<Priority> {
        self.priority_repo
            .find_by_id(id)
            .await?
            .ok_or(RequirementException::PriorityNotFound { id })
    }

    async fn get_all_priorities(&self) -> RequirementResult<Vec<Priority>> {
        Ok(self.priority_repo.get_all().await?)
    }
}

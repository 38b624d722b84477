use async_trait::async_trait;

use crate::{
    command::CategoryCommand,
    exception::RequirementResult,
    model::entity::{Category, Priority, RequirementType},
};

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create_category(&self, command: CategoryCommand) -> RequirementResult<Category>;

    async fn update_category(&self, id: i32, command: CategoryCommand)
        -> RequirementResult<Category>;

    async fn delete_category(&self, id: i32) -> RequirementResult<()>;

    async fn get_category(&self, id: i32) -> RequirementResult<Category>;

    async fn get_all_categories(&self) -> RequirementResult<Vec<Category>>;

    async fn get_categories_by_requirement_type(
        &self,
        requirement_type_id: i32,
    ) -> RequirementResult<Vec<Category>>;
}

#[async_trait]
pub trait RequirementTypeService: Send + Sync {
    async fn create_requirement_type(&self, name: &str) -> RequirementResult<RequirementType>;

    async fn update_requirement_type(&self, id: i32, name: &str)
        -> RequirementResult<RequirementType>;

    async fn delete_requirement_type(&self, id: i32) -> RequirementResult<()>;

    async fn get_requirement_type(&self, id: i32) -> RequirementResult<RequirementType>;

    async fn get_all_requirement_types(&self) -> RequirementResult<Vec<RequirementType>>;
}

#[async_trait]
pub trait PriorityService: Send + Sync {
    async fn create_priority(&self, name: &str) -> RequirementResult<Priority>;

    async fn update_priority(&self, id: i32, name: &str) -> RequirementResult<Priority>;

    async fn delete_priority(&self, id: i32) -> RequirementResult<()>;

    async fn get_priority(&self, id: i32) -> RequirementResult<Priority>;

    async fn get_all_priorities(&self) -> RequirementResult<Vec<Priority>>;
}

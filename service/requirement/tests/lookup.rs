use std::sync::Arc;

use domain_requirement::{
    command::CategoryCommand,
    exception::RequirementException,
    mock::{MockCategoryRepo, MockPriorityRepo, MockRequirementRepo, MockRequirementTypeRepo},
    model::{
        entity::{Category, Priority, RequirementType},
        vo::LookupRef,
    },
    service::{CategoryService, PriorityService, RequirementTypeService},
};
use service_requirement::{CategoryServiceImpl, PriorityServiceImpl, RequirementTypeServiceImpl};

#[tokio::test]
async fn test_category_requires_existing_type() {
    let mut category_repo = MockCategoryRepo::new();
    category_repo.expect_insert().never();
    let mut requirement_type_repo = MockRequirementTypeRepo::new();
    requirement_type_repo.expect_find_by_id().returning(|_| Ok(None));
    let service = CategoryServiceImpl::builder()
        .category_repo(Arc::new(category_repo))
        .requirement_type_repo(Arc::new(requirement_type_repo))
        .requirement_repo(Arc::new(MockRequirementRepo::new()))
        .build();

    let error = service
        .create_category(CategoryCommand {
            name: "Printers".to_string(),
            requirement_type_id: 9,
        })
        .await
        .unwrap_err();
    assert!(matches!(error, RequirementException::InvalidRequirementType { id: 9 }));
}

#[tokio::test]
async fn test_create_category_returns_generated_id() {
    let mut category_repo = MockCategoryRepo::new();
    category_repo
        .expect_insert()
        .withf(|el: &Category| el.name == "Printers" && el.requirement_type_id == 1)
        .returning(|_| Ok(6));
    let mut requirement_type_repo = MockRequirementTypeRepo::new();
    requirement_type_repo.expect_find_by_id().returning(|id| {
        Ok(Some(RequirementType {
            id,
            name: "Hardware".to_string(),
        }))
    });
    let service = CategoryServiceImpl::builder()
        .category_repo(Arc::new(category_repo))
        .requirement_type_repo(Arc::new(requirement_type_repo))
        .requirement_repo(Arc::new(MockRequirementRepo::new()))
        .build();

    let category = service
        .create_category(CategoryCommand {
            name: "  Printers ".to_string(),
            requirement_type_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(category.id, 6);
    assert_eq!(category.name, "Printers");
}

#[tokio::test]
async fn test_categories_of_unknown_type() {
    let mut requirement_type_repo = MockRequirementTypeRepo::new();
    requirement_type_repo.expect_find_by_id().returning(|_| Ok(None));
    let service = CategoryServiceImpl::builder()
        .category_repo(Arc::new(MockCategoryRepo::new()))
        .requirement_type_repo(Arc::new(requirement_type_repo))
        .requirement_repo(Arc::new(MockRequirementRepo::new()))
        .build();

    let error = service.get_categories_by_requirement_type(4).await.unwrap_err();
    assert!(matches!(error, RequirementException::RequirementTypeNotFound { id: 4 }));
}

#[tokio::test]
async fn test_delete_missing_priority() {
    let mut priority_repo = MockPriorityRepo::new();
    priority_repo.expect_find_by_id().returning(|_| Ok(None));
    priority_repo.expect_delete_by_id().never();
    let service = PriorityServiceImpl::builder()
        .priority_repo(Arc::new(priority_repo))
        .requirement_repo(Arc::new(MockRequirementRepo::new()))
        .build();

    let error = service.delete_priority(8).await.unwrap_err();
    assert!(matches!(error, RequirementException::PriorityNotFound { id: 8 }));
}

#[tokio::test]
async fn test_priority_name_required() {
    let mut priority_repo = MockPriorityRepo::new();
    priority_repo.expect_insert().never();
    let service = PriorityServiceImpl::builder()
        .priority_repo(Arc::new(priority_repo))
        .requirement_repo(Arc::new(MockRequirementRepo::new()))
        .build();

    let error = service.create_priority("   ").await.unwrap_err();
    assert!(matches!(error, RequirementException::Validation { .. }));
}

fn hardware_type(id: i32) -> RequirementType {
    RequirementType {
        id,
        name: "Hardware".to_string(),
    }
}

fn category_service(
    category_repo: MockCategoryRepo,
    requirement_repo: MockRequirementRepo,
) -> CategoryServiceImpl {
    CategoryServiceImpl::builder()
        .category_repo(Arc::new(category_repo))
        .requirement_type_repo(Arc::new(MockRequirementTypeRepo::new()))
        .requirement_repo(Arc::new(requirement_repo))
        .build()
}

fn network_category(id: i32) -> Option<Category> {
    Some(Category {
        id,
        name: "Network Issue".to_string(),
        requirement_type_id: 1,
    })
}

#[tokio::test]
async fn test_delete_category_in_use_rejected() {
    let mut category_repo = MockCategoryRepo::new();
    category_repo.expect_find_by_id().returning(|id| Ok(network_category(id)));
    category_repo.expect_delete_by_id().never();
    let mut requirement_repo = MockRequirementRepo::new();
    requirement_repo
        .expect_is_lookup_in_use()
        .withf(|lookup| *lookup == LookupRef::Category(2))
        .returning(|_| Ok(true));
    let service = category_service(category_repo, requirement_repo);

    let error = service.delete_category(2).await.unwrap_err();
    assert!(matches!(
        error,
        RequirementException::LookupInUse {
            lookup: "Category",
            id: 2
        }
    ));
    assert_eq!(error.code(), "LOOKUP_IN_USE");
}

#[tokio::test]
async fn test_delete_unused_category() {
    let mut category_repo = MockCategoryRepo::new();
    category_repo.expect_find_by_id().returning(|id| Ok(network_category(id)));
    category_repo.expect_delete_by_id().withf(|id| *id == 2).times(1).returning(|_| Ok(()));
    let mut requirement_repo = MockRequirementRepo::new();
    requirement_repo.expect_is_lookup_in_use().returning(|_| Ok(false));
    let service = category_service(category_repo, requirement_repo);

    service.delete_category(2).await.unwrap();
}

#[tokio::test]
async fn test_delete_requirement_type_with_categories_rejected() {
    let mut requirement_type_repo = MockRequirementTypeRepo::new();
    requirement_type_repo.expect_find_by_id().returning(|id| Ok(Some(hardware_type(id))));
    requirement_type_repo.expect_delete_by_id().never();
    let mut category_repo = MockCategoryRepo::new();
    category_repo
        .expect_get_by_requirement_type()
        .returning(|_| Ok(network_category(2).into_iter().collect()));
    let mut requirement_repo = MockRequirementRepo::new();
    requirement_repo.expect_is_lookup_in_use().never();
    let service = RequirementTypeServiceImpl::builder()
        .requirement_type_repo(Arc::new(requirement_type_repo))
        .category_repo(Arc::new(category_repo))
        .requirement_repo(Arc::new(requirement_repo))
        .build();

    let error = service.delete_requirement_type(1).await.unwrap_err();
    assert!(matches!(error, RequirementException::LookupInUse { id: 1, .. }));
}

#[tokio::test]
async fn test_delete_priority_in_use_rejected() {
    let mut priority_repo = MockPriorityRepo::new();
    priority_repo.expect_find_by_id().returning(|id| {
        Ok(Some(Priority {
            id,
            name: "Alta".to_string(),
        }))
    });
    priority_repo.expect_delete_by_id().never();
    let mut requirement_repo = MockRequirementRepo::new();
    requirement_repo
        .expect_is_lookup_in_use()
        .withf(|lookup| *lookup == LookupRef::Priority(1))
        .returning(|_| Ok(true));
    let service = PriorityServiceImpl::builder()
        .priority_repo(Arc::new(priority_repo))
        .requirement_repo(Arc::new(requirement_repo))
        .build();

    let error = service.delete_priority(1).await.unwrap_err();
    assert!(matches!(error, RequirementException::LookupInUse { id: 1, .. }));
}

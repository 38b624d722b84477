use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use architecture::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_requirement::{
    command::{CreateRequirementCommand, UpdateRequirementCommand},
    exception::{RequirementException, RequirementResult},
    model::{
        entity::{Notification, Priority, Requirement, RequirementActionLog, RequirementType},
        vo::{
            AssignedUser, FieldChange, NotificationPayload, RequirementAction, RequirementStatus,
            RequirementView,
        },
    },
    repository::{CategoryRepo, NotificationRepo, RequirementActionLogRepo, RequirementRepo},
    service::{RequirementNotifier, RequirementService},
};
use domain_user::{
    model::{entity::User, vo::ProfileKind},
    repository::UserRepo,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct RequirementServiceImpl {
    requirement_repo: Arc<dyn RequirementRepo>,
    category_repo: Arc<dyn CategoryRepo>,
    requirement_type_repo: Arc<dyn ReadOnlyRepository<RequirementType>>,
    priority_repo: Arc<dyn ReadOnlyRepository<Priority>>,
    user_repo: Arc<dyn UserRepo>,
    action_log_repo: Arc<dyn RequirementActionLogRepo>,
    notification_repo: Arc<dyn NotificationRepo>,
    notifier: Arc<dyn RequirementNotifier>,
    /// Shown for assigned users without a profile image.
    #[builder(setter(into))]
    default_image: String,
}

#[async_trait]
impl RequirementService for RequirementServiceImpl {
    async fn create_requirement(
        &self,
        command: CreateRequirementCommand,
        creator_id: Uuid,
    ) -> RequirementResult<Requirement> {
        let category = self.category_repo.find_by_id(command.category_id).await?;
        if !category.is_some_and(|el| el.belongs_to(command.requirement_type_id)) {
            return Err(RequirementException::CategoryTypeMismatch {
                category_id: command.category_id,
                requirement_type_id: command.requirement_type_id,
            });
        }
        if let Some(priority_id) = command.priority_id {
            if self.priority_repo.find_by_id(priority_id).await?.is_none() {
                return Err(RequirementException::InvalidPriority { id: priority_id });
            }
        }
        let assigned_users = self.existing_users(&command.assigned_user_ids).await?;
        for related_id in command.related_requirement_ids.iter() {
            if self.requirement_repo.get(*related_id, true).await?.is_none() {
                return Err(RequirementException::Validation {
                    message: format!("Related requirement {related_id} does not exist."),
                });
            }
        }

        let sequence = self.requirement_repo.next_sequence().await?;
        let requirement = Requirement::new(command, creator_id, sequence);
        self.requirement_repo.insert(&requirement).await?;
        self.action_log_repo
            .insert(&RequirementActionLog::new(
                requirement.id,
                RequirementAction::Created,
                creator_id,
                "Requirement created successfully.",
            ))
            .await?;
        self.requirement_repo.save_changed().await?;
        tracing::info!("Requirement {} created by {creator_id}.", requirement.code);

        self.notify_created(&requirement, &assigned_users).await;
        Ok(requirement)
    }

    async fn update_requirement(
        &self,
        id: Uuid,
        command: UpdateRequirementCommand,
        user_id: Uuid,
    ) -> RequirementResult<Requirement> {
        let mut requirement = self.get_active(id).await?;
        let mut changes = vec![];

        if let Some(subject) = command.subject.filter(|el| !el.is_empty()) {
            if let Some(change) = FieldChange::diff("Subject", &requirement.subject, &subject) {
                changes.push(change);
                requirement.subject = subject;
            }
        }
        if let Some(description) = command.description.filter(|el| !el.is_empty()) {
            if let Some(change) =
                FieldChange::diff("Description", &requirement.description, &description)
            {
                changes.push(change);
                requirement.description = description;
            }
        }
        if let Some(priority_id) = command.priority_id {
            if requirement.priority_id != Some(priority_id) {
                let new = self
                    .priority_repo
                    .find_by_id(priority_id)
                    .await?
                    .ok_or(RequirementException::InvalidPriority { id: priority_id })?;
                let old = match requirement.priority_id {
                    Some(old_id) => self
                        .priority_repo
                        .find_by_id(old_id)
                        .await?
                        .map(|el| el.name)
                        .unwrap_or_else(|| old_id.to_string()),
                    None => "None".to_string(),
                };
                changes.push(FieldChange {
                    field: "Priority",
                    old,
                    new: new.name,
                });
                requirement.priority_id = Some(priority_id);
            }
        }
        if let Some(status) = command.status.filter(|el| !el.is_empty()) {
            let status = RequirementStatus::from(status);
            if let Some(change) =
                FieldChange::diff("Status", requirement.status.as_str(), status.as_str())
            {
                changes.push(change);
                requirement.status = status;
            }
        }

        let details = if changes.is_empty() {
            "No changes.".to_string()
        } else {
            FieldChange::join(&changes, "; ")
        };
        if !changes.is_empty() {
            self.requirement_repo.update(&requirement).await?;
        }
        self.action_log_repo
            .insert(&RequirementActionLog::new(
                id,
                RequirementAction::Updated,
                user_id,
                details,
            ))
            .await?;
        self.requirement_repo.save_changed().await?;

        let content = format!(
            "The requirement '{}' has been updated. Details:\n{}",
            requirement.subject,
            FieldChange::join(&changes, "\n")
        );
        self.notify_assigned(&requirement, "Requirement Updated", &content).await;
        Ok(requirement)
    }

    async fn delete_requirement(&self, id: Uuid, user_id: Uuid) -> RequirementResult<()> {
        let mut requirement = self.get_active(id).await?;
        requirement.soft_delete();
        self.requirement_repo.update(&requirement).await?;
        self.action_log_repo
            .insert(&RequirementActionLog::new(
                id,
                RequirementAction::Deleted,
                user_id,
                format!("Requirement '{}' marked as deleted.", requirement.code),
            ))
            .await?;
        self.requirement_repo.save_changed().await?;
        tracing::info!("Requirement {} deleted by {user_id}.", requirement.code);
        Ok(())
    }

    async fn restore_requirement(&self, id: Uuid, user_id: Uuid) -> RequirementResult<()> {
        let mut requirement = self
            .requirement_repo
            .get(id, true)
            .await?
            .filter(|el| el.is_deleted)
            .ok_or(RequirementException::NotDeleted { id })?;
        requirement.restore();
        self.requirement_repo.update(&requirement).await?;
        self.action_log_repo
            .insert(&RequirementActionLog::new(
                id,
                RequirementAction::Restored,
                user_id,
                format!("Requirement '{}' marked as restored.", requirement.code),
            ))
            .await?;
        self.requirement_repo.save_changed().await?;
        tracing::info!("Requirement {} restored by {user_id}.", requirement.code);
        Ok(())
    }

    async fn get_requirement(&self, id: Uuid) -> RequirementResult<RequirementView> {
        let requirement = self.get_active(id).await?;
        let mut views = self.to_views(vec![requirement]).await?;
        views.pop().ok_or(RequirementException::RequirementNotFound { id })
    }

    async fn get_all_requirements_with_users(&self) -> RequirementResult<Vec<RequirementView>> {
        let requirements = self.requirement_repo.list(false).await?;
        self.to_views(requirements).await
    }

    async fn get_deleted_requirements(&self) -> RequirementResult<Vec<RequirementView>> {
        let requirements = self.requirement_repo.list_deleted().await?;
        self.to_views(requirements).await
    }

    async fn get_assigned_requirements_by_user_id(
        &self,
        user_id: Uuid,
    ) -> RequirementResult<Vec<RequirementView>> {
        let requirements = self.requirement_repo.get_assigned_to_user(user_id, false).await?;
        self.to_views(requirements).await
    }

    async fn get_requirements_created_by_user_id(
        &self,
        user_id: Uuid,
    ) -> RequirementResult<Vec<RequirementView>> {
        let requirements = self.requirement_repo.get_created_by_user(user_id, false).await?;
        self.to_views(requirements).await
    }

    async fn get_users_assigned_to_requirement(
        &self,
        id: Uuid,
    ) -> RequirementResult<Vec<AssignedUser>> {
        let requirement = self.get_active(id).await?;
        let users = self.user_repo.get_by_ids(&requirement.assigned_user_ids).await?;
        Ok(users.iter().map(|el| AssignedUser::from_user(el, &self.default_image)).collect())
    }

    async fn get_requirement_logs(&self, id: Uuid) -> RequirementResult<Vec<RequirementActionLog>> {
        if self.requirement_repo.get(id, true).await?.is_none() {
            return Err(RequirementException::RequirementNotFound { id });
        }
        Ok(self.action_log_repo.get_by_requirement(id).await?)
    }
}

impl RequirementServiceImpl {
    async fn get_active(&self, id: Uuid) -> RequirementResult<Requirement> {
        self.requirement_repo
            .get(id, false)
            .await?
            .ok_or(RequirementException::RequirementNotFound { id })
    }

    /// Every id must name an existing user.
    async fn existing_users(&self, ids: &[Uuid]) -> RequirementResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let users = self.user_repo.get_by_ids(ids).await?;
        let found: HashSet<Uuid> = users.iter().map(|el| el.id).collect();
        if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
            return Err(RequirementException::UserNotFound { id: *missing });
        }
        Ok(users)
    }

    async fn to_views(
        &self,
        requirements: Vec<Requirement>,
    ) -> RequirementResult<Vec<RequirementView>> {
        if requirements.is_empty() {
            return Ok(vec![]);
        }
        let types: HashMap<i32, RequirementType> = self
            .requirement_type_repo
            .get_all()
            .await?
            .into_iter()
            .map(|el| (el.id, el))
            .collect();
        let categories: HashMap<i32, _> =
            self.category_repo.get_all().await?.into_iter().map(|el| (el.id, el)).collect();
        let priorities: HashMap<i32, Priority> =
            self.priority_repo.get_all().await?.into_iter().map(|el| (el.id, el)).collect();

        let user_ids: Vec<Uuid> = requirements
            .iter()
            .flat_map(|el| el.assigned_user_ids.iter().copied())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let users: HashMap<Uuid, User> = self
            .user_repo
            .get_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|el| (el.id, el))
            .collect();

        Ok(requirements
            .into_iter()
            .map(|requirement| {
                let assigned_users = requirement
                    .assigned_user_ids
                    .iter()
                    .filter_map(|id| users.get(id))
                    .map(|el| AssignedUser::from_user(el, &self.default_image))
                    .collect();
                let requirement_type = types.get(&requirement.requirement_type_id);
                let category = categories.get(&requirement.category_id);
                let priority = requirement.priority_id.and_then(|id| priorities.get(&id));
                RequirementView::new(
                    requirement,
                    requirement_type,
                    category,
                    priority,
                    assigned_users,
                )
            })
            .collect())
    }

    async fn notify_created(&self, requirement: &Requirement, assigned_users: &[User]) {
        let internal_users = match self.user_repo.get_by_profile_kind(ProfileKind::Internal).await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!("Failed to load internal users: {e:?}");
                vec![]
            }
        };

        let notification = Notification::new(
            format!("New requirement created: {}", requirement.subject),
            requirement
                .assigned_user_ids
                .iter()
                .copied()
                .chain(internal_users.iter().map(|el| el.id)),
        );
        if !notification.recipient_ids.is_empty() {
            if let Err(e) = self.save_notification(&notification).await {
                tracing::error!(
                    "Failed to save notification for requirement {}: {e:?}",
                    requirement.code
                );
            }
        }

        for user in assigned_users {
            if user.email.is_empty() {
                tracing::warn!("Assigned user {} has no valid email.", user.id);
                continue;
            }
            let payload = NotificationPayload::Email {
                requirement_id: requirement.id,
                to: user.email.clone(),
                subject: "Requirement Assigned".to_string(),
                content: format!(
                    "You have been assigned to the requirement: {}.",
                    requirement.subject
                ),
            };
            self.notifier.notify_all("Requirement Assigned", &payload).await;
        }

        if internal_users.is_empty() {
            tracing::debug!("No internal users to notify.");
            return;
        }
        let payload = NotificationPayload::Internal {
            requirement_id: requirement.id,
            user_ids: internal_users.iter().map(|el| el.id).collect(),
            content: format!(
                "A new requirement titled '{}' has been created.",
                requirement.subject
            ),
        };
        self.notifier.notify_all("New Requirement Created", &payload).await;
    }

    async fn notify_assigned(&self, requirement: &Requirement, subject: &str, content: &str) {
        if requirement.assigned_user_ids.is_empty() {
            return;
        }
        let users = match self.user_repo.get_by_ids(&requirement.assigned_user_ids).await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!("Failed to load users of requirement {}: {e:?}", requirement.code);
                return;
            }
        };
        for user in users.into_iter().filter(|el| !el.email.is_empty()) {
            let payload = NotificationPayload::Email {
                requirement_id: requirement.id,
                to: user.email,
                subject: subject.to_string(),
                content: content.to_string(),
            };
            self.notifier.notify_all(subject, &payload).await;
        }
    }

    async fn save_notification(&self, notification: &Notification) -> anyhow::Result<()> {
        self.notification_repo.insert(notification).await?;
        self.notification_repo.save_changed().await?;
        Ok(())
    }
}

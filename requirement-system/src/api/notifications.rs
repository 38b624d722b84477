use std::sync::Arc;

use actix_web::{get, post, web};
use domain_requirement::{model::vo::UserNotificationView, service::NotificationService};
use uuid::Uuid;

use super::{dtos::PagingQuery, extract_uuid, ApiError, ApiResponder, ApiResponderResult, ApiResult};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

/// Notifications are readable by their recipient and by administrators.
fn check_owner(user_info: &UserInfo, user_id: Uuid) -> ApiResult<()> {
    if user_info.id == user_id || user_info.is_admin() {
        return Ok(());
    }
    Err(ApiError::Forbidden("Notifications of another user are not accessible.".to_string()))
}

#[get("api/Notifications/user/{user_id}")]
pub async fn get_user_notifications(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    user_id: web::Path<String>,
    query: web::Query<PagingQuery>,
) -> ApiResponderResult<Vec<UserNotificationView>> {
    let user_id = extract_uuid(&user_id)?;
    check_owner(&user_info, user_id)?;
    let service: Arc<dyn NotificationService> = sp.provide();
    Ok(ApiResponder::ok(service.get_user_notifications(user_id, query.page, query.size).await?))
}

#[post("api/Notifications/user/{user_id}/mark-as-read/{notification_id}")]
pub async fn mark_as_read(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    path: web::Path<(String, String)>,
) -> ApiResponderResult<()> {
    let (user_id, notification_id) = path.into_inner();
    let user_id = extract_uuid(&user_id)?;
    check_owner(&user_info, user_id)?;
    let service: Arc<dyn NotificationService> = sp.provide();
    service.mark_as_read(user_id, extract_uuid(&notification_id)?).await?;
    Ok(ApiResponder::message("Notification marked as read."))
}

#[cfg(test)]
mod tests {
    use domain_user::model::vo::Role;

    use super::*;

    fn caller(roles: Vec<Role>) -> UserInfo {
        UserInfo {
            id: Uuid::new_v4(),
            user_name: "ana".to_string(),
            email: "ana@example.com".to_string(),
            roles,
        }
    }

    #[test]
    fn test_owner_or_admin_only() {
        let owner = caller(vec![Role::External]);
        assert!(check_owner(&owner, owner.id).is_ok());
        assert!(matches!(check_owner(&owner, Uuid::new_v4()), Err(ApiError::Forbidden(_))));
        assert!(check_owner(&caller(vec![Role::Admin]), owner.id).is_ok());
    }
}

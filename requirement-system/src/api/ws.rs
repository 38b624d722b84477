use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};

use super::extract_uuid;
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProvider, WsManager};

/// Join the comment feed of one requirement.
pub async fn comments_ws_handler(
    sp: web::Data<ServiceProvider>,
    user_info: UserInfo,
    requirement_id: web::Path<String>,
    req: HttpRequest,
    body: web::Payload,
) -> Result<HttpResponse, actix_web::Error> {
    let requirement_id = extract_uuid(&requirement_id)?;
    tracing::info!("Websocket request of {} for requirement {requirement_id}", user_info.email);
    let ws_manager: Arc<WsManager> = sp.provide();
    ws_manager.open_session(req, body, requirement_id)
}

use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use domain_user::model::vo::Role;
use futures::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use uuid::Uuid;

use crate::{api::ApiError, infrastructure::service::prelude::JwtIdentityProvider};

const ACCESS_TOKEN_QUERY: &str = "access_token";

/// Caller resolved from a valid bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl UserInfo {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Fails with 403 unless the caller holds one of `roles`.
    pub fn require_any_role(&self, roles: &[Role]) -> Result<(), ApiError> {
        if roles.iter().any(|el| self.has_role(*el)) {
            return Ok(());
        }
        Err(ApiError::Forbidden(format!(
            "Requires one of the roles: {}.",
            roles.iter().map(|el| el.as_str()).collect::<Vec<_>>().join(", ")
        )))
    }
}

impl FromRequest for UserInfo {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<UserInfo>().cloned().ok_or(ApiError::Unauthorized))
    }
}

/// Puts the [`UserInfo`] of a valid token into the request extensions. Requests without
/// one pass through untouched; handlers asking for [`UserInfo`] answer them with 401.
pub struct JwtValidation {
    identity: Arc<JwtIdentityProvider>,
}

impl JwtValidation {
    pub fn new(identity: Arc<JwtIdentityProvider>) -> Self {
        Self { identity }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtValidation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtValidationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtValidationMiddleware {
            service: Rc::new(service),
            identity: self.identity.clone(),
        }))
    }
}

pub struct JwtValidationMiddleware<S> {
    service: Rc<S>,
    identity: Arc<JwtIdentityProvider>,
}

impl<S, B> Service<ServiceRequest> for JwtValidationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let identity = self.identity.clone();
        Box::pin(async move {
            match read_token(&req) {
                Some(token) => match identity.decode_access_token(&token) {
                    Ok(user_info) => {
                        req.extensions_mut().insert(user_info);
                    }
                    Err(e) => tracing::debug!("Rejected bearer token: {e}"),
                },
                None => tracing::debug!("No Token."),
            }
            service.call(req).await
        })
    }
}

/// Bearer header first; browsers cannot set headers on websocket upgrades, so the
/// `access_token` query parameter is accepted too.
fn read_token(req: &ServiceRequest) -> Option<String> {
    if let Some(value) = req.headers().get("Authorization").and_then(|el| el.to_str().ok()) {
        let mut parts = value.split_whitespace();
        return match (parts.next(), parts.next()) {
            (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("Bearer") => {
                Some(token.to_string())
            }
            _ => None,
        };
    }
    url::form_urlencoded::parse(req.query_string().as_bytes())
        .find(|(key, _)| key == ACCESS_TOKEN_QUERY)
        .map(|(_, value)| value.into_owned())
}

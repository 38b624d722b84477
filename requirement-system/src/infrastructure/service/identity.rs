use std::str::FromStr;

use anyhow::Context;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use domain_user::{
    model::{
        entity::User,
        vo::{Role, TokenPurpose},
    },
    service::IdentityProvider,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::infrastructure::{config::JwtConfig, middleware::UserInfo};

/// Bearer token claims.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: String,
    name: String,
    email: String,
    roles: Vec<String>,
    iss: String,
    aud: String,
    exp: i64,
}

/// Claims of confirmation and reset tokens.
#[derive(Debug, Serialize, Deserialize)]
struct PurposeClaims {
    sub: String,
    purpose: String,
    /// Fingerprint of the password hash the token was issued against.
    fp: String,
    iss: String,
    aud: String,
    exp: i64,
}

/// Argon2 password hashing and HS256 tokens.
pub struct JwtIdentityProvider {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtIdentityProvider {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            config,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = *self.config.leeway();
        validation.set_issuer(&[self.config.issuer()]);
        validation.set_audience(&[self.config.audience()]);
        validation
    }

    fn expires_in(&self, seconds: i64) -> i64 {
        Utc::now().timestamp() + seconds
    }

    /// Check a bearer token and read the caller from it.
    pub fn decode_access_token(&self, token: &str) -> anyhow::Result<UserInfo> {
        let claims = decode::<AccessClaims>(token, &self.decoding_key, &self.validation())?.claims;
        let roles = claims
            .roles
            .iter()
            .map(|el| Role::from_str(el))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(UserInfo {
            id: Uuid::from_str(&claims.sub).context("Token subject is not a user id")?,
            user_name: claims.name,
            email: claims.email,
            roles,
        })
    }
}

fn fingerprint(password_hash: &str) -> String {
    blake3::hash(password_hash.as_bytes()).to_hex().to_string()
}

impl IdentityProvider for JwtIdentityProvider {
    fn hash_password(&self, password: &str) -> anyhow::Result<String> {
        let mut salt = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);
        let salt = SaltString::encode_b64(&salt).map_err(|e| anyhow::anyhow!("{e}"))?;
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Cannot hash password: {e}"))?;
        Ok(hash.to_string())
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> anyhow::Result<bool> {
        let parsed =
            PasswordHash::new(password_hash).map_err(|e| anyhow::anyhow!("Bad hash: {e}"))?;
        Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
    }

    fn issue_access_token(&self, user: &User) -> anyhow::Result<String> {
        let claims = AccessClaims {
            sub: user.id.to_string(),
            name: user.user_name.to_owned(),
            email: user.email.to_owned(),
            roles: user.role().into_iter().map(|el| el.to_string()).collect(),
            iss: self.config.issuer().to_owned(),
            aud: self.config.audience().to_owned(),
            exp: self.expires_in(*self.config.lifetime()),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    fn issue_purpose_token(&self, user: &User, purpose: TokenPurpose) -> anyhow::Result<String> {
        let claims = PurposeClaims {
            sub: user.id.to_string(),
            purpose: purpose.as_str().to_string(),
            fp: fingerprint(&user.password_hash),
            iss: self.config.issuer().to_owned(),
            aud: self.config.audience().to_owned(),
            exp: self.expires_in(*self.config.purpose_lifetime()),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    fn validate_purpose_token(
        &self,
        user: &User,
        purpose: TokenPurpose,
        token: &str,
    ) -> anyhow::Result<bool> {
        let claims = match decode::<PurposeClaims>(token, &self.decoding_key, &self.validation()) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("Rejected {} token: {e}", purpose.as_str());
                return Ok(false);
            }
        };
        Ok(claims.sub == user.id.to_string()
            && claims.purpose == purpose.as_str()
            && claims.fp == fingerprint(&user.password_hash))
    }
}

//! Request authentication: a single operator shared secret (spec §5.3,
//! `lib_auth::apikey`), not the per-user JWT/role system the teacher used.

use crate::error::{Error, Result};
use axum::extract::FromRequestParts;
use axum::http::{Request, request::Parts};
use axum::{body::Body, middleware::Next, response::Response};
use lib_auth::apikey::{check_api_key, extract_bearer};
use lib_core::ctx::Ctx;
use serde::{Deserialize, Serialize};
use tower_governor::{errors::GovernorError, key_extractor::KeyExtractor};
use uuid::Uuid;

/// Rate-limits by bearer token when one is present, falling back to a fresh
/// key per request otherwise — an unauthenticated caller still gets
/// throttled, just not grouped with anyone else's requests.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct UserToken;
impl KeyExtractor for UserToken {
    type Key = String;

    fn extract<B>(&self, req: &Request<B>) -> std::result::Result<Self::Key, GovernorError> {
        let key = req
            .headers()
            .get("Authorization")
            .and_then(|token| token.to_str().ok())
            .and_then(|token| extract_bearer(token).ok())
            .map(|token| token.to_owned())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Ok(key)
    }
    fn key_name(&self, key: &Self::Key) -> Option<String> {
        Some(key.to_string())
    }
    fn name(&self) -> &'static str {
        "API_Key"
    }
}

/// A resolved per-request context, carried from `ctx_resolver` to handlers
/// and on into the response-logging middleware.
#[derive(Debug, Clone)]
pub struct Ctm(pub Ctx);

impl<S: Send + Sync> FromRequestParts<S> for Ctm {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Result<Ctm>>()
            .ok_or(Error::UnableToExtractKey)?
            .clone()
    }
}

/// Route-layer gate: rejects the request before it reaches a handler if
/// `ctx_resolver` could not establish a valid context.
pub async fn request_auth(ctx: Result<Ctm>, req: Request<Body>, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}

/// Checks the caller's bearer token against the configured operator secret
/// (a no-op when none is configured, per `lib_auth::apikey::check_api_key`)
/// and stores the resulting `Ctm` in request extensions for downstream
/// extraction.
pub async fn ctx_resolver(mut req: Request<Body>, next: Next) -> Result<Response> {
    let provided = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| extract_bearer(v).ok())
        .unwrap_or("");

    let resolved: Result<Ctm> = check_api_key(provided)
        .map_err(Error::from)
        .and_then(|_| Ok(Ctm(Ctx::new(Uuid::new_v4().to_string())?)));

    req.extensions_mut().insert(resolved);
    Ok(next.run(req).await)
}

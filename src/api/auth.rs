// =============================================================================
// Auth API
// =============================================================================
// 1. Request Types
// 2. Auth Functions
// =============================================================================

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, Method, RequestBody, RequestOptions};
use crate::error::{ApiError, ApiResult};
use crate::models::User;

// -----------------------------------------------------------------------------
// 1. Request Types
// -----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Token and user pulled out of an auth response
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// `{token, user}` at the top level or under `data`
fn session_from(value: Value) -> ApiResult<Session> {
    let value = if value.get("token").is_none() {
        value.get("data").cloned().unwrap_or(value)
    } else {
        value
    };
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Decode("response carried no token".to_string()))?
        .to_string();
    let user = value
        .get("user")
        .cloned()
        .ok_or_else(|| ApiError::Decode("response carried no user".to_string()))
        .and_then(|user| serde_json::from_value(user).map_err(|e| ApiError::Decode(e.to_string())))?;
    Ok(Session { token, user })
}

// -----------------------------------------------------------------------------
// 2. Auth Functions
// -----------------------------------------------------------------------------

async fn authenticate<T: Serialize>(client: &ApiClient, endpoint: &str, request: &T) -> ApiResult<Session> {
    let options = RequestOptions::new(Method::Post).with_body(RequestBody::json(request)?);
    let value: Value = client.fetch_json(endpoint, options).await?;
    let session = session_from(value)?;
    client.session().save(&session.token, &session.user);
    log::info!("[auth] signed in as {}", session.user.email);
    Ok(session)
}

/// Sign in and persist the session
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ApiResult<Session> {
    authenticate(client, "/auth/login", &LoginRequest { email: email.trim(), password }).await
}

/// Create an account and persist the session
pub async fn register(client: &ApiClient, name: &str, email: &str, password: &str) -> ApiResult<Session> {
    let request = RegisterRequest {
        name: name.trim(),
        email: email.trim(),
        password,
    };
    authenticate(client, "/auth/register", &request).await
}

pub fn logout(client: &ApiClient) {
    client.session().clear();
    log::info!("[auth] signed out");
}

/// Message for a failed sign-in
pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid email or password".to_string(),
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        other => other.to_string(),
    }
}

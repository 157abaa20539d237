//! Test doubles for the API seams

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ApiClient, ApiResponse, HttpRequest, Method, Redirect, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::User;
use crate::session::MemorySession;

pub const BASE: &str = "http://api.test";

/// Answers requests from a fixed script and records what was sent
#[derive(Default)]
pub struct ScriptedTransport {
    script: Vec<(Method, String, ApiResult<ApiResponse>)>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        let response = ApiResponse { status, body: body.to_string() };
        self.script.push((method, format!("{}{}", BASE, path), Ok(response)));
        self
    }

    pub fn fail(mut self, method: Method, path: &str, message: &str) -> Self {
        let error = ApiError::Network(message.to_string());
        self.script.push((method, format!("{}{}", BASE, path), Err(error)));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.sent().iter().filter(|r| r.method == method).count()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<ApiResponse> {
        let answer = self
            .script
            .iter()
            .find(|(method, url, _)| *method == request.method && *url == request.url)
            .map(|(_, _, answer)| answer.clone())
            .unwrap_or_else(|| Ok(ApiResponse { status: 404, body: String::new() }));
        self.sent.lock().unwrap().push(request);
        answer
    }
}

#[derive(Default)]
pub struct CountingRedirect {
    count: AtomicUsize,
}

impl CountingRedirect {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Redirect for CountingRedirect {
    fn to_login(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn admin() -> User {
    User {
        id: "u1".to_string(),
        name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: Some("admin".to_string()),
    }
}

pub fn client_with(
    transport: Arc<ScriptedTransport>,
    session: Arc<MemorySession>,
    redirect: Arc<CountingRedirect>,
) -> ApiClient {
    ApiClient::new(BASE, transport, session, redirect)
}

/// Signed-in client over `transport`
pub fn signed_in(transport: Arc<ScriptedTransport>) -> ApiClient {
    client_with(
        transport,
        Arc::new(MemorySession::signed_in("token", admin())),
        Arc::new(CountingRedirect::default()),
    )
}

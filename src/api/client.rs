//! Remote Data Client
//!
//! Attaches the bearer token, defaults the content type and signs the user
//! out when an authenticated request comes back 401.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{has_header, ApiResponse, BrowserRedirect, FetchTransport, HttpRequest, Redirect, RequestOptions, Transport};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::session::{self, SessionStore};

/// Shared handle to the API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
    redirect: Arc<dyn Redirect>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionStore>,
        redirect: Arc<dyn Redirect>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            session,
            redirect,
        }
    }

    /// Client wired to fetch, local storage and page navigation
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(
            config.api_url.clone(),
            Arc::new(FetchTransport),
            session::browser_store(),
            Arc::new(BrowserRedirect),
        )
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Send one request. Only transport failures are errors here; a non-2xx
    /// status comes back as a response for the caller to check.
    pub async fn call(&self, endpoint: &str, options: RequestOptions) -> ApiResult<ApiResponse> {
        let RequestOptions { method, mut headers, body } = options;

        let token = self.session.token();
        if let Some(token) = &token {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        if !body.is_multipart() && !has_header(&headers, "content-type") {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let url = self.url(endpoint);
        log::debug!("[api] {} {}", method, url);
        let response = self
            .transport
            .send(HttpRequest { method, url, headers, body })
            .await
            .map_err(|e| {
                log::error!("[api] {} {} failed: {}", method, endpoint, e);
                e
            })?;

        if response.status == 401 && token.is_some() {
            log::warn!("[api] {} {} rejected the session, signing out", method, endpoint);
            self.session.clear();
            self.redirect.to_login();
        }

        Ok(response)
    }

    /// `call`, then check the status and parse the JSON body
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<T> {
        self.call(endpoint, options).await?.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{admin, client_with, CountingRedirect, ScriptedTransport, BASE};
    use crate::api::{Method, MultipartForm, RequestBody};
    use crate::error::ApiError;
    use crate::session::MemorySession;

    #[tokio::test]
    async fn test_bearer_and_json_headers() {
        let transport = Arc::new(ScriptedTransport::new().respond(Method::Get, "/jobs", 200, "[]"));
        let session = Arc::new(MemorySession::signed_in("t0k3n", admin()));
        let client = client_with(transport.clone(), session, Arc::new(CountingRedirect::default()));

        let response = client.call("/jobs", RequestOptions::get()).await.unwrap();
        assert!(response.ok());

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, format!("{}/jobs", BASE));
        assert_eq!(sent[0].header("authorization"), Some("Bearer t0k3n"));
        assert_eq!(sent[0].header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let transport = Arc::new(ScriptedTransport::new().respond(Method::Get, "/skills", 200, "[]"));
        let client = client_with(transport.clone(), Arc::new(MemorySession::default()), Arc::new(CountingRedirect::default()));

        client.call("skills", RequestOptions::get()).await.unwrap();
        assert_eq!(transport.sent()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_content_type_left_alone_for_multipart_and_explicit() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(Method::Post, "/companies", 201, "{}")
                .respond(Method::Put, "/companies/c1", 200, "{}"),
        );
        let client = client_with(transport.clone(), Arc::new(MemorySession::default()), Arc::new(CountingRedirect::default()));

        let form = MultipartForm::default().text("name", "Acme");
        let options = RequestOptions::new(Method::Post).with_body(RequestBody::Multipart(form));
        client.call("/companies", options).await.unwrap();

        let options = RequestOptions::new(Method::Put)
            .header("content-type", "text/plain")
            .with_body(RequestBody::Json("x".to_string()));
        client.call("/companies/c1", options).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].header("Content-Type"), None);
        assert_eq!(sent[1].header("Content-Type"), Some("text/plain"));
        assert_eq!(sent[1].headers.len(), 1);
    }

    #[tokio::test]
    async fn test_401_clears_session_and_redirects_once() {
        let transport = Arc::new(ScriptedTransport::new().respond(Method::Get, "/mentors", 401, ""));
        let session = Arc::new(MemorySession::signed_in("expired", admin()));
        let redirect = Arc::new(CountingRedirect::default());
        let client = client_with(transport, session.clone(), redirect.clone());

        let response = client.call("/mentors", RequestOptions::get()).await.unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
        assert_eq!(redirect.count(), 1);

        let err = client.fetch_json::<serde_json::Value>("/mentors", RequestOptions::get()).await;
        assert_eq!(err, Err(ApiError::Unauthorized));
        // the session was already gone, nothing left to sign out of
        assert_eq!(redirect.count(), 1);
    }

    #[tokio::test]
    async fn test_401_on_each_authenticated_call_redirects_each_time() {
        let transport = Arc::new(ScriptedTransport::new().respond(Method::Delete, "/team/t1", 401, ""));
        let session = Arc::new(MemorySession::signed_in("expired", admin()));
        let redirect = Arc::new(CountingRedirect::default());
        let client = client_with(transport, session.clone(), redirect.clone());

        client.call("/team/t1", RequestOptions::delete()).await.unwrap();
        session.save("again", &admin());
        client.call("/team/t1", RequestOptions::delete()).await.unwrap();
        assert_eq!(redirect.count(), 2);
    }

    #[tokio::test]
    async fn test_network_failure_is_returned() {
        let transport = Arc::new(ScriptedTransport::new().fail(Method::Get, "/jobs", "offline"));
        let client = client_with(transport, Arc::new(MemorySession::default()), Arc::new(CountingRedirect::default()));

        let result = client.call("/jobs", RequestOptions::get()).await;
        assert_eq!(result, Err(ApiError::Network("offline".to_string())));
    }

    #[tokio::test]
    async fn test_fetch_json_checks_status_before_parsing() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(Method::Get, "/jobs", 500, r#"{"message":"db down"}"#)
                .respond(Method::Get, "/skills", 200, "not json"),
        );
        let client = client_with(transport, Arc::new(MemorySession::default()), Arc::new(CountingRedirect::default()));

        let err = client.fetch_json::<serde_json::Value>("/jobs", RequestOptions::get()).await;
        assert_eq!(err, Err(ApiError::Status { status: 500, message: "db down".to_string() }));

        let err = client.fetch_json::<serde_json::Value>("/skills", RequestOptions::get()).await;
        assert!(matches!(err, Err(ApiError::Decode(_))));
    }
}

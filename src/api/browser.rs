//! Browser Implementations
//!
//! `fetch` via gloo-net and `location.href` navigation.

use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

use super::{ApiResponse, FormValue, HttpRequest, Method, MultipartForm, Redirect, RequestBody, Transport};
use crate::config::LOGIN_ROUTE;
use crate::error::{ApiError, ApiResult};

/// Transport backed by the browser's fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<ApiResponse> {
        let HttpRequest { method, url, headers, body } = request;

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        let request = match body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(text) => builder.body(text),
            RequestBody::Multipart(form) => builder.body(form_data(&form)?),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Encode(format!("{:?}", e))
}

fn form_data(form: &MultipartForm) -> ApiResult<web_sys::FormData> {
    let data = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in form.parts() {
        match value {
            FormValue::Text(text) => data.append_with_str(name, text).map_err(js_error)?,
            FormValue::File { file_name, content_type, bytes } => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(
                    &js_sys::Array::of1(&array),
                    &options,
                )
                .map_err(js_error)?;
                data.append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(js_error)?;
            }
        }
    }
    Ok(data)
}

/// Full page navigation to the login view
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRedirect;

impl Redirect for BrowserRedirect {
    fn to_login(&self) {
        let Some(win) = web_sys::window() else {
            return;
        };
        if let Err(e) = win.location().set_href(LOGIN_ROUTE) {
            log::error!("[api] redirect to login failed: {:?}", e);
        }
    }
}

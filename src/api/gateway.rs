//! HTTP gateway to the hotel API.
//!
//! Every authenticated call goes through [`HttpGateway::request`], which
//! attaches the bearer token and reacts to `401` by ending the session.
//! The token endpoint is the one exception: it is called without
//! credentials and with a form-url-encoded body.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{AUTH_TOKEN_PATH, CONTENT_TYPE_FORM, CONTENT_TYPE_JSON};
use crate::domain::TokenResponse;
use crate::errors::{AppError, AppResult};
use crate::services::AuthService;

/// Per-request options
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Caller headers; override the defaults on conflict
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// JSON body. `None` sends no body at all.
    pub fn json<B: Serialize + ?Sized>(mut self, payload: Option<&B>) -> AppResult<Self> {
        self.body = payload.map(serde_json::to_value).transpose()?;
        Ok(self)
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }
}

/// Authenticated JSON client for the hotel API
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    auth: Arc<dyn AuthService>,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, auth: Arc<dyn AuthService>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, auth)
    }

    /// Gateway over a preconfigured HTTP client
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path; a missing leading `/` is added
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers, then the session's `Authorization`, then caller headers
    fn build_headers(&self, overrides: HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

        if let Some(bearer) = self.auth.auth_header() {
            match HeaderValue::from_str(&bearer) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Session token is not a valid header value, sending request without it"),
            }
        }

        // insert (not append) so the caller's value replaces ours
        for (name, value) in overrides.iter() {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    /// Perform an authenticated request and decode the JSON response.
    ///
    /// A `401` ends the session before [`AppError::Unauthorized`] is returned.
    /// Other non-2xx statuses come back as [`AppError::Http`] with the body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> AppResult<T> {
        let url = self.url(path);
        debug!(method = %options.method, %url, "API request");

        let mut builder = self
            .client
            .request(options.method, &url)
            .headers(self.build_headers(options.headers));
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = options.body {
            builder = builder.body(serde_json::to_vec(&body)?);
        }

        let response = builder.send().await?;
        let status = response.status();

        // The body is never read on 401, so a broken body cannot skip the logout
        if status == StatusCode::UNAUTHORIZED {
            warn!(%url, "API rejected credentials, ending session");
            self.auth.logout();
            return Err(AppError::Unauthorized);
        }

        let body = response.text().await?;
        decode_response(status, &body)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> AppResult<T> {
        self.request(path, RequestOptions::new(Method::GET).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, payload: Option<&B>) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(path, RequestOptions::new(Method::POST).json(payload)?)
            .await
    }

    pub async fn put<T, B>(&self, path: &str, payload: Option<&B>) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(path, RequestOptions::new(Method::PUT).json(payload)?)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.request(path, RequestOptions::new(Method::DELETE)).await
    }

    /// Exchange credentials for a token at the token endpoint.
    ///
    /// Sent as `application/x-www-form-urlencoded`, without any session
    /// header. A `401` here means bad credentials and does not end a session.
    pub async fn login_request(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let url = self.url(AUTH_TOKEN_PATH);
        debug!(%url, username, "Requesting session token");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Map a non-2xx status to [`AppError::Http`], otherwise decode the body.
/// An empty body decodes as JSON `null`.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> AppResult<T> {
    if !status.is_success() {
        return Err(AppError::Http {
            status,
            body: body.to_string(),
        });
    }

    if body.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockAuthService;

    fn gateway(base: &str, header: Option<&'static str>) -> HttpGateway {
        let mut auth = MockAuthService::new();
        auth.expect_auth_header()
            .returning(move || header.map(str::to_string));
        HttpGateway::new(base, Arc::new(auth))
    }

    #[test]
    fn test_url_joining() {
        let gw = gateway("http://localhost:8000/", None);
        assert_eq!(gw.base_url(), "http://localhost:8000");
        assert_eq!(gw.url("/api/v1/clients/"), "http://localhost:8000/api/v1/clients/");
        assert_eq!(gw.url("api/v1/clients/"), "http://localhost:8000/api/v1/clients/");
    }

    #[test]
    fn test_header_merge_order() {
        let gw = gateway("http://localhost", Some("Bearer T"));

        let headers = gw.build_headers(HeaderMap::new());
        assert_eq!(headers[CONTENT_TYPE], CONTENT_TYPE_JSON);
        assert_eq!(headers[AUTHORIZATION], "Bearer T");

        let mut overrides = HeaderMap::new();
        overrides.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
        overrides.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let headers = gw.build_headers(overrides);
        assert_eq!(headers[AUTHORIZATION], "Bearer other");
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
    }

    #[test]
    fn test_no_authorization_without_session() {
        let gw = gateway("http://localhost", None);
        assert!(!gw.build_headers(HeaderMap::new()).contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_decode_response() {
        let value: Value = decode_response(StatusCode::OK, r#"{"id":1}"#).unwrap();
        assert_eq!(value["id"], 1);

        let empty: Option<Value> = decode_response(StatusCode::NO_CONTENT, "").unwrap();
        assert!(empty.is_none());
        let _: () = decode_response(StatusCode::NO_CONTENT, "").unwrap();

        match decode_response::<Value>(StatusCode::NOT_FOUND, r#"{"detail":"nope"}"#) {
            Err(AppError::Http { status, body }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, r#"{"detail":"nope"}"#);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_options_without_payload_have_no_body() {
        let options = RequestOptions::new(Method::POST)
            .json::<Value>(None)
            .unwrap();
        assert!(options.body.is_none());
    }
}

//! # Backend client — one configured HTTP client for every endpoint
//!
//! All portal data comes from the CEPRE backend through `POST` requests with JSON
//! bodies. [`Backend`] is the seam the domain services are written against;
//! [`HttpBackend`] is the real implementation on top of [`reqwest`], and tests
//! substitute an in-memory mock.
//!
//! ## Authentication
//!
//! [`HttpBackend`] holds a handle on the session store and reads the token before
//! each request. When a token is present the request carries
//! `Authorization: Bearer <token>`; otherwise it is sent without credentials and
//! the backend decides what to do.
//!
//! ## Failure normalisation
//!
//! Transport errors, non-success statuses and undecodable bodies are all folded into
//! [`ApiError`], so services never see a raw `reqwest::Error`. Each request is sent
//! once: there is no retry, timeout or cancellation.

use serde::Serialize;
use serde_json::Value;
use store::{SessionStore, Sessions};

use crate::error::ApiError;

/// Something that can answer JSON `POST` requests.
pub trait Backend {
    fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> impl std::future::Future<Output = Result<Value, ApiError>>;
}

/// The CEPRE backend reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend<S: SessionStore> {
    client: reqwest::Client,
    base_url: String,
    sessions: Sessions<S>,
}

impl<S: SessionStore> HttpBackend<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            sessions: Sessions::new(store),
        }
    }

    /// Join the base URL and an endpoint path with exactly one slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build the request for `path`, attaching the bearer token if one is stored.
    pub fn request<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Request, ApiError> {
        let mut builder = self.client.post(self.url(path)).json(body);
        if let Some(token) = self.sessions.token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder.build()?)
    }
}

impl<S: SessionStore> Backend for HttpBackend<S> {
    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        let request = self.request(path, body)?;
        tracing::debug!("POST {}", request.url());

        let response = self.client.execute(request).await?;
        let status = response.status();
        let text = response.text().await?;
        let parsed = parse_body(&text);

        if !status.is_success() {
            tracing::debug!("POST {} -> {}", path, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: parsed,
            });
        }

        match parsed {
            Some(Value::String(_)) | None => Err(ApiError::Decode(format!(
                "expected a JSON body from {path}"
            ))),
            Some(value) => Ok(value),
        }
    }
}

/// JSON when possible, the raw text as a JSON string otherwise, `None` when empty.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}


#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;
    use store::{MemoryStore, Profile};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its base URL.
    async fn serve_once(status_line: &str, content_type: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let backend = HttpBackend::new("https://api.cepre.pe/", MemoryStore::new());
        assert_eq!(
            backend.url("/administrador/recursos/listar-recursos"),
            "https://api.cepre.pe/administrador/recursos/listar-recursos"
        );
        let backend = HttpBackend::new("https://api.cepre.pe", MemoryStore::new());
        assert_eq!(backend.url("a/b"), "https://api.cepre.pe/a/b");
    }

    #[test]
    fn test_request_without_token_is_unauthenticated() {
        let backend = HttpBackend::new("http://localhost:3000", MemoryStore::new());
        let request = backend.request("/x", &json!({"dni": "1"})).unwrap();
        assert_eq!(request.method(), reqwest::Method::POST);
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_carries_stored_bearer_token() {
        let store = MemoryStore::new();
        Sessions::new(store.clone())
            .set_session(Profile::default(), Some("abc".to_string()))
            .unwrap();

        let backend = HttpBackend::new("http://localhost:3000", store);
        let request = backend.request("/x", &json!({})).unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc"
        );
        assert_eq!(
            request.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_token_is_read_per_request() {
        let store = MemoryStore::new();
        let backend = HttpBackend::new("http://localhost:3000", store.clone());
        let sessions = Sessions::new(store);

        sessions.set_session(Profile::default(), Some("first".to_string())).unwrap();
        let first = backend.request("/x", &json!({})).unwrap();
        assert_eq!(first.headers().get(AUTHORIZATION).unwrap(), "Bearer first");

        sessions.clear_session();
        let second = backend.request("/x", &json!({})).unwrap();
        assert!(second.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("  "), None);
        assert_eq!(parse_body(r#"{"ok":true}"#), Some(json!({"ok": true})));
        assert_eq!(parse_body("<html>"), Some(json!("<html>")));
    }

    #[tokio::test]
    async fn test_post_returns_json_body() {
        let url = serve_once("200 OK", "application/json", r#"{"ok":true,"data":[]}"#).await;
        let backend = HttpBackend::new(url, MemoryStore::new());
        let value = backend.post("/x", &json!({})).await.unwrap();
        assert_eq!(value, json!({"ok": true, "data": []}));
    }

    #[tokio::test]
    async fn test_post_error_status_keeps_json_body() {
        let url = serve_once(
            "401 Unauthorized",
            "application/json",
            r#"{"ok":false,"message":"Estudiante no encontrado"}"#,
        )
        .await;
        let backend = HttpBackend::new(url, MemoryStore::new());
        let err = backend.post("/x", &json!({})).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                body: Some(json!({"ok": false, "message": "Estudiante no encontrado"})),
            }
        );
    }

    #[tokio::test]
    async fn test_post_error_status_with_empty_body() {
        let url = serve_once("503 Service Unavailable", "text/plain", "").await;
        let backend = HttpBackend::new(url, MemoryStore::new());
        let err = backend.post("/x", &json!({})).await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 503, body: None });
    }

    #[tokio::test]
    async fn test_post_non_json_success_is_decode_error() {
        let url = serve_once("200 OK", "text/html", "<html>Mantenimiento</html>").await;
        let backend = HttpBackend::new(url, MemoryStore::new());
        let err = backend.post("/x", &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_post_closed_port_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(format!("http://{addr}"), MemoryStore::new());
        let err = backend.post("/x", &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}

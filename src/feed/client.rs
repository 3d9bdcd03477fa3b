// src/feed/client.rs

//! REST API project source.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::feed::{ProjectQuery, ProjectSource};
use crate::models::{ApiConfig, Project, Session};
use crate::utils::{endpoint, http};

const SESSION_PATH: &str = "/api/auth/session";
const PROJECTS_PATH: &str = "/api/projects";

/// Project source backed by the showcase HTTP API.
pub struct HttpProjectSource {
    base_url: String,
    client: Client,
}

impl HttpProjectSource {
    /// Create a source with a client configured from `config`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_client(
            &config.base_url,
            http::create_async_client(config)?,
        ))
    }

    /// Create a source around an existing client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = endpoint(&self.base_url, path)?;
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(path, format!("status {status}")));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    async fn session(&self) -> Result<Session> {
        // An anonymous visitor gets `{}` or `null`.
        let session: Option<Session> = self.get_json(SESSION_PATH, &[]).await?;
        Ok(session.unwrap_or_default())
    }

    async fn projects(&self, query: &ProjectQuery) -> Result<Vec<Project>> {
        self.get_json(PROJECTS_PATH, &query_params(query)).await
    }
}

fn query_params(query: &ProjectQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("limit", query.limit.to_string())];
    if let Some(author) = &query.author {
        params.push(("author", author.clone()));
    }
    params
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn test_query_params_recent() {
        assert_eq!(
            query_params(&ProjectQuery::recent(8)),
            vec![("limit", "8".to_string())]
        );
    }

    #[test]
    fn test_query_params_by_author() {
        assert_eq!(
            query_params(&ProjectQuery::by_author(100, "u42")),
            vec![("limit", "100".to_string()), ("author", "u42".to_string())]
        );
    }

    #[test]
    fn test_new_from_default_config() {
        assert!(HttpProjectSource::new(&ApiConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..ApiConfig::default()
        };
        let source = HttpProjectSource::new(&config).unwrap();
        assert!(source.projects(&ProjectQuery::recent(8)).await.is_err());
    }

    /// Serve a single canned HTTP response on a local port and return its base URL.
    async fn serve_once(response: impl Into<String>) -> String {
        let response = response.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    fn source_for(base_url: String) -> HttpProjectSource {
        let config = ApiConfig {
            base_url,
            timeout_secs: 5,
            ..ApiConfig::default()
        };
        HttpProjectSource::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_error_status_is_fetch_error() {
        let base = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let result = source_for(base).projects(&ProjectQuery::recent(8)).await;
        match result {
            Err(AppError::Fetch { context, message }) => {
                assert_eq!(context, PROJECTS_PATH);
                assert!(message.contains("503"));
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_null_session_is_anonymous() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 4\r\nConnection: close\r\n\r\nnull",
        )
        .await;
        let session = source_for(base).session().await.unwrap();
        assert_eq!(session.user_id(), None);
    }

    #[tokio::test]
    async fn test_empty_session_object_is_anonymous() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        )
        .await;
        let session = source_for(base).session().await.unwrap();
        assert_eq!(session.user_id(), None);
    }

    #[tokio::test]
    async fn test_projects_with_null_fields_decode() {
        const BODY: &str = r#"[{"id":1,"title":"T","liveUrl":null,"tags":null}]"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            BODY.len(),
            BODY
        );
        let base = serve_once(response).await;
        let projects = source_for(base)
            .projects(&ProjectQuery::recent(8))
            .await
            .unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "1");
        assert_eq!(projects[0].live_url, "");
    }
}

//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, signing users in and
//! making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tale_api::{create_app, create_app_state, AppState};
use tale_common::{
    AppConfig, AppSettings, CorsConfig, Environment, JwtConfig, RateLimitConfig, ServerConfig,
    SnowflakeConfig, StoreBackend, StoreConfig,
};
use tale_core::Snowflake;
use tale_service::dto::ExternalProfile;
use tale_service::AuthService;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;

/// A signed-in user and their access token
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Snowflake,
    pub access_token: String,
    pub refresh_token: String,
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state.clone())?;

        // Ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Sign a new user in as the external identity provider would
    pub async fn sign_in(&self, name: &str) -> Result<Session> {
        let suffix = unique_suffix();
        let profile = ExternalProfile {
            email: format!("{name}{suffix}@example.com"),
            username: format!("{name}{suffix}"),
        };
        let auth = AuthService::new(self.state.service_context())
            .sign_in(profile)
            .await?;

        Ok(Session {
            user_id: auth.user.id.parse().context("user id")?,
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
        })
    }

    /// Sign in a new user and grant them the admin flag
    pub async fn sign_in_admin(&self, name: &str) -> Result<Session> {
        let session = self.sign_in(name).await?;
        let repo = self.state.service_context().user_repo();
        let mut user = repo
            .find_by_id(session.user_id)
            .await?
            .context("admin user vanished")?;
        user.is_admin = true;
        repo.update(&user).await?;
        Ok(session)
    }

    fn authed(builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.bearer_auth(&session.access_token)
    }

    /// Make an anonymous GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make an anonymous POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a GET request as a signed-in user
    pub async fn get_as(&self, session: &Session, path: &str) -> Result<Response> {
        let request = Self::authed(self.client.get(self.url(path)), session);
        Ok(request.send().await?)
    }

    /// Make a POST request with JSON body as a signed-in user
    pub async fn post_as<T: Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let request = Self::authed(self.client.post(self.url(path)), session).json(body);
        Ok(request.send().await?)
    }

    /// Make a PUT request with JSON body as a signed-in user
    pub async fn put_as<T: Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let request = Self::authed(self.client.put(self.url(path)), session).json(body);
        Ok(request.send().await?)
    }

    /// Make a DELETE request as a signed-in user
    pub async fn delete_as(&self, session: &Session, path: &str) -> Result<Response> {
        let request = Self::authed(self.client.delete(self.url(path)), session);
        Ok(request.send().await?)
    }

    /// Make a GET request with a raw bearer token
    pub async fn get_with_token(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Configuration for an in-memory server with generous rate limits
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "tale-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        store: StoreConfig {
            backend: StoreBackend::Memory,
        },
        database: None,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 3600,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1,
            burst: 10_000,
        },
        cors: CorsConfig::default(),
        snowflake: SnowflakeConfig { worker_id: 7 },
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .context("error body without a code")
}

//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tale_common::{AppConfig, AppError, JwtService, StoreBackend};
use tale_core::SnowflakeGenerator;
use tale_db::{create_pool, run_migrations, InMemoryStore, PoolOptions};
use tale_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the middleware settings are invalid.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// # Errors
/// Returns an error if the database cannot be reached or migrated.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::from_config(&config.jwt, config.app.name.clone()));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    match config.store.backend {
        StoreBackend::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("database settings are required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolOptions::new(db_config))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            let ctx = ServiceContext::postgres(pool.clone(), jwt_service, snowflake_generator);
            Ok(AppState::new(ctx, config, Some(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            let ctx =
                ServiceContext::in_memory(InMemoryStore::new(), jwt_service, snowflake_generator);
            Ok(AppState::new(ctx, config, None))
        }
    }
}

/// Serve the application on an already bound listener
///
/// # Errors
/// Returns an error if the server stops abnormally.
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup fails or the server stops abnormally.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tale_common::{
        AppSettings, CorsConfig, Environment, JwtConfig, RateLimitConfig, ServerConfig,
        SnowflakeConfig, StoreConfig,
    };
    use tower::ServiceExt;

    fn memory_config() -> AppConfig {
        AppConfig {
            app: AppSettings {
                name: "tale".to_string(),
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
                secret: "server-test-secret".to_string(),
                access_token_expiry: 900,
                refresh_token_expiry: 3600,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: 1,
                burst: 1000,
            },
            cors: CorsConfig::default(),
            snowflake: SnowflakeConfig { worker_id: 3 },
        }
    }

    async fn app() -> Router {
        let state = create_app_state(memory_config()).await.unwrap();
        create_app(state).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_served() {
        let response = app()
            .await
            .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_requires_auth() {
        let response = app()
            .await
            .oneshot(Request::get("/api/v1/bots").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "MISSING_AUTH");
    }

    #[tokio::test]
    async fn test_postgres_backend_needs_database_settings() {
        let mut config = memory_config();
        config.store.backend = StoreBackend::Postgres;
        let err = create_app_state(config).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = app()
            .await
            .oneshot(Request::get("/api/v1/guilds").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

//! Friday HTTP server.
//!
//! Loads configuration from `FRIDAY__*` environment variables, wires the
//! storage adapters and serves the API until interrupted.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use friday::adapters::http::{api_router, AuthState, MoodAppState, MoodSettings};
use friday::adapters::{
    InMemoryActivityReader, InMemoryMoodProfileRepository, JwtConfig, JwtSessionValidator,
    PostgresActivityReader, PostgresMoodProfileRepository,
};
use friday::config::{AppConfig, ServerConfig};
use friday::ports::{ActivityReader, MoodProfileRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        environment = ?config.server.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting friday"
    );

    let (repository, activity) = storage(&config).await?;

    let settings = MoodSettings {
        default_days_back: config.mood.lookback_days()?,
        history_days: config.mood.history_days,
        weights: config.mood.fusion_weights()?,
    };
    let state = MoodAppState::new(repository, activity, settings);

    let mut jwt = JwtConfig::new(config.auth.jwt_secret.clone()).with_leeway(config.auth.leeway_secs);
    if let Some(issuer) = &config.auth.issuer {
        jwt = jwt.with_issuer(issuer.clone());
    }
    let auth: AuthState = Arc::new(JwtSessionValidator::new(jwt));

    let app = with_http_layers(api_router(state, auth, &config.server.api_prefix), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.use_json_logs() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .init();
    }
}

type Storage = (Arc<dyn MoodProfileRepository>, Arc<dyn ActivityReader>);

async fn storage(config: &AppConfig) -> Result<Storage, Box<dyn Error>> {
    let Some(database) = &config.database else {
        warn!("No database configured; using in-memory storage");
        return Ok((
            Arc::new(InMemoryMoodProfileRepository::new()),
            Arc::new(InMemoryActivityReader::new()),
        ));
    };

    let pool = database.pool_options().connect(&database.url).await?;
    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    Ok((
        Arc::new(PostgresMoodProfileRepository::new(pool.clone())),
        Arc::new(PostgresActivityReader::new(pool)),
    ))
}

fn with_http_layers(router: Router, server: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(server.request_timeout()))
            .layer(CompressionLayer::new())
            .layer(cors_layer(server)),
    )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

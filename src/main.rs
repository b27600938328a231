//! FPGD Cadastro server binary.

use std::error::Error;
use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use fpgd_cadastro::adapters::{
    app_router, AppState, BrasilApiLookup, CoalescingCompanyLookup, InMemoryRegistryStore,
    PostgresRegistryStore, PostgrestConfig, PostgrestRegistryStore,
};
use fpgd_cadastro::config::{AppConfig, ServerConfig, StoreBackend, ValidationError};
use fpgd_cadastro::ports::{CompanyLookup, RegistryStore};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        store = ?config.store.backend,
        "Starting FPGD Cadastro"
    );

    let store = build_store(&config).await?;
    let lookup = build_lookup(&config)?;

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let app = app_router(AppState::new(lookup, store)).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(e.into());
        }
    };

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if server.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn RegistryStore>, Box<dyn Error>> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory registry store; registrations are lost on restart");
            Ok(Arc::new(InMemoryRegistryStore::new()))
        }
        StoreBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or(ValidationError::MissingRequired("DATABASE__URL"))?;

            let pool = PgPoolOptions::new()
                .min_connections(database.min_connections)
                .max_connections(database.max_connections)
                .acquire_timeout(database.acquire_timeout())
                .idle_timeout(database.idle_timeout())
                .max_lifetime(database.max_lifetime())
                .connect(database.url.expose_secret())
                .await?;

            if database.run_migrations {
                tracing::info!("Running database migrations");
                sqlx::migrate!("./migrations").run(&pool).await?;
            }

            Ok(Arc::new(PostgresRegistryStore::new(pool)))
        }
        StoreBackend::Postgrest => {
            let url = config
                .store
                .postgrest_url
                .clone()
                .ok_or(ValidationError::MissingRequired("STORE__POSTGREST_URL"))?;
            let api_key = config
                .store
                .postgrest_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("STORE__POSTGREST_API_KEY"))?;

            let postgrest = PostgrestConfig::new(url, api_key)
                .with_table(config.store.table.clone())
                .with_timeout(config.store.timeout());
            Ok(Arc::new(PostgrestRegistryStore::new(postgrest)?))
        }
    }
}

fn build_lookup(config: &AppConfig) -> Result<Arc<dyn CompanyLookup>, Box<dyn Error>> {
    let registry: Arc<dyn CompanyLookup> =
        Arc::new(BrasilApiLookup::new(config.lookup.brasil_api())?);

    if config.lookup.coalesce {
        Ok(Arc::new(CoalescingCompanyLookup::new(registry)))
    } else {
        Ok(registry)
    }
}

/// Permissive in development when no origins are configured; otherwise only
/// the listed origins.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() && !server.is_production() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

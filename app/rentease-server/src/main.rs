use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use rentease_api::{
    handlers::{auth, health, properties, tenants},
    state::AppState,
};
use rentease_core::services::{AuthService, PropertyService, TenantService};
use rentease_infrastructure::database::connection;
use rentease_infrastructure::{PgPropertyRepository, PgTenantRepository, PgUserRepository};
use rentease_security::{PasswordService, TokenService};
use rentease_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    rentease_shared::telemetry::init_telemetry();

    info!("RentEase server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    info!("Connecting to database...");
    let pool = connection::create_pool(&config.database.url, config.database.max_connections).await?;
    connection::run_migrations(&pool).await?;
    info!("Database connection established.");

    // Repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let property_repo = Arc::new(PgPropertyRepository::new(pool.clone()));
    let tenant_repo = Arc::new(PgTenantRepository::new(pool));

    // Security services; secret and hash cost are fixed for the process lifetime
    let tokens = Arc::new(TokenService::new(config.jwt.secret.clone(), config.jwt.token_expiry));
    let passwords = Arc::new(PasswordService::new(&config.password)?);

    // Application state
    let state = AppState {
        auth: Arc::new(AuthService::new(user_repo.clone(), tokens.clone(), passwords)),
        properties: Arc::new(PropertyService::new(property_repo.clone(), user_repo)),
        tenants: Arc::new(TenantService::new(tenant_repo, property_repo)),
        tokens,
    };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // Property routes
        .route(
            "/api/properties",
            post(properties::create_property).get(properties::get_all_properties),
        )
        .route("/api/properties/my-properties", get(properties::get_my_properties))
        .route(
            "/api/properties/{id}",
            get(properties::get_property_by_id)
                .put(properties::update_property)
                .delete(properties::delete_property),
        )
        // Tenant routes
        .route(
            "/api/tenants",
            post(tenants::create_tenant).get(tenants::get_all_tenants),
        )
        .route(
            "/api/tenants/property/{property_id}",
            get(tenants::get_tenants_by_property),
        )
        .route(
            "/api/tenants/{id}",
            get(tenants::get_tenant_by_id)
                .put(tenants::update_tenant)
                .delete(tenants::delete_tenant),
        )
        // Add state
        .with_state(state)
        // Add CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::net::SocketAddr;

use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use boxoffice_server::auth::{self, AuthPolicy};
use boxoffice_server::config::{apply_security_headers, security, Config};
use boxoffice_server::routes::create_routes;
use boxoffice_server::state::AppState;
use boxoffice_server::store::Store;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let store = Store::new(pool);

    // Bootstrap never blocks startup: failures are logged and the server
    // comes up against whatever state the store is in.
    store.seed_if_empty().await;
    if config.auth_policy == AuthPolicy::RequireLogin {
        store
            .ensure_admin_user(&config.admin_username, &config.admin_email, &config.admin_password)
            .await;
    }

    let state = AppState {
        store,
        sessions: auth::new_session_map(),
        policy: config.auth_policy,
    };

    let app = apply_security_headers(create_routes(state), security::hsts_from_env());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}

use std::env;

pub mod security;

pub use security::apply_security_headers;

use crate::auth::AuthPolicy;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub auth_policy: AuthPolicy,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/boxoffice".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let auth_policy = match env::var("AUTH_MODE") {
            Ok(mode) => AuthPolicy::parse(&mode),
            Err(_) => AuthPolicy::RequireLogin,
        };

        let admin_username =
            env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());
        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            if auth_policy == AuthPolicy::RequireLogin {
                tracing::warn!(
                    "ADMIN_PASSWORD not set, falling back to the default development credentials"
                );
            }
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        Self {
            database_url,
            port,
            auth_policy,
            admin_username,
            admin_email,
            admin_password,
        }
    }
}

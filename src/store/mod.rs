mod attendees;
mod bootstrap;
mod events;
mod organizers;
pub mod pagination;
mod stats;
mod tickets;
mod users;

use sqlx::PgPool;

use crate::utils::error::AppError;

/// All database access behind one handle. Each call draws a connection
/// from the pool for the duration of its queries and releases it on drop,
/// on every exit path. PostgreSQL's constraints are the single arbiter of
/// consistency; there is no application-level locking or retry.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A unique-violation on an email column is user input conflicting with an
/// existing row, not a store failure.
pub(crate) fn map_email_conflict(err: sqlx::Error, message: &'static str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Validation(message.to_string());
        }
    }
    AppError::Database(err)
}

use uuid::Uuid;

use crate::models::{Attendee, Ticket};
use crate::store::Store;
use crate::utils::error::AppError;

impl Store {
    /// Inserts a ticket. A duplicate (event_id, attendee_id) pair fails
    /// with `DuplicateRegistration`.
    pub async fn register(&self, event_id: Uuid, attendee_id: Uuid) -> Result<Ticket, AppError> {
        sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (event_id, attendee_id)
            VALUES ($1, $2)
            RETURNING id, event_id, attendee_id, registered_at
            "#,
        )
        .bind(event_id)
        .bind(attendee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_ticket_insert)
    }

    /// Deletes the matching ticket if present; a missing pair is a no-op.
    pub async fn unregister(&self, event_id: Uuid, attendee_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM tickets WHERE event_id = $1 AND attendee_id = $2")
            .bind(event_id)
            .bind(attendee_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Attendees already holding a ticket for the event, name ascending.
    pub async fn registered_attendees(&self, event_id: Uuid) -> Result<Vec<Attendee>, AppError> {
        let attendees = sqlx::query_as::<_, Attendee>(
            r#"
            SELECT a.id, a.name, a.email, a.phone, a.created_at
            FROM attendees a
            JOIN tickets t ON a.id = t.attendee_id
            WHERE t.event_id = $1
            ORDER BY a.name ASC, a.id
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(attendees)
    }

    /// Set-difference: all attendees minus those already registered for
    /// the event, name ascending.
    pub async fn available_attendees(&self, event_id: Uuid) -> Result<Vec<Attendee>, AppError> {
        let attendees = sqlx::query_as::<_, Attendee>(
            r#"
            SELECT id, name, email, phone, created_at
            FROM attendees
            WHERE id NOT IN (SELECT attendee_id FROM tickets WHERE event_id = $1)
            ORDER BY name ASC, id
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(attendees)
    }

    pub async fn ticket_count_for_event(&self, event_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tickets WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

/// Translates constraint violations on ticket insert into their user-level
/// meaning instead of letting them propagate as generic store errors.
fn map_ticket_insert(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::DuplicateRegistration;
        }
        if db_err.is_foreign_key_violation() {
            let entity = match db_err.constraint() {
                Some(name) if name.contains("attendee") => "Attendee",
                _ => "Event",
            };
            return AppError::NotFound(entity);
        }
    }
    AppError::Database(err)
}

use uuid::Uuid;

use crate::models::{Attendee, AttendeeOverview, Event, NewAttendee};
use crate::store::pagination::{self, Page, LIST_PAGE_SIZE};
use crate::store::{map_email_conflict, Store};
use crate::utils::error::AppError;

impl Store {
    pub async fn count_attendees(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendees")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One listing page, name ascending, each row carrying how many events
    /// the attendee is registered for.
    pub async fn list_attendees_page(&self, page: i64) -> Result<Page<AttendeeOverview>, AppError> {
        let total_count = self.count_attendees().await?;
        let items = sqlx::query_as::<_, AttendeeOverview>(
            r#"
            SELECT a.id, a.name, a.email, a.phone, a.created_at,
                   COUNT(t.event_id) AS event_count
            FROM attendees a
            LEFT JOIN tickets t ON a.id = t.attendee_id
            GROUP BY a.id
            ORDER BY a.name ASC, a.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(LIST_PAGE_SIZE)
        .bind(pagination::offset(page, LIST_PAGE_SIZE))
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(items, page, total_count, LIST_PAGE_SIZE))
    }

    pub async fn get_attendee(&self, id: Uuid) -> Result<Option<Attendee>, AppError> {
        let attendee = sqlx::query_as::<_, Attendee>(
            "SELECT id, name, email, phone, created_at FROM attendees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(attendee)
    }

    pub async fn create_attendee(&self, new: &NewAttendee) -> Result<Attendee, AppError> {
        sqlx::query_as::<_, Attendee>(
            r#"
            INSERT INTO attendees (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_email_conflict(e, "An attendee with this email already exists!"))
    }

    pub async fn update_attendee(&self, id: Uuid, new: &NewAttendee) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE attendees SET name = $2, email = $3, phone = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| map_email_conflict(e, "An attendee with this email already exists!"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Attendee"));
        }
        Ok(())
    }

    /// Refused while the attendee holds tickets; the row is left untouched.
    pub async fn delete_attendee(&self, id: Uuid) -> Result<(), AppError> {
        let ticket_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tickets WHERE attendee_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if ticket_count > 0 {
            return Err(AppError::HasDependents(
                "⚠️ Cannot delete this attendee: they are registered for events.".to_string(),
            ));
        }

        sqlx::query("DELETE FROM attendees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Events the attendee holds a ticket for, soonest first.
    pub async fn attendee_events(&self, attendee_id: Uuid) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.name, e.date, e.location, e.description, e.created_at, e.organizer_id
            FROM events e
            JOIN tickets t ON e.id = t.event_id
            WHERE t.attendee_id = $1
            ORDER BY e.date ASC, e.id
            "#,
        )
        .bind(attendee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }
}

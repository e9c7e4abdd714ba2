use uuid::Uuid;

use crate::models::{Event, EventSummary, NewEvent};
use crate::store::pagination::{self, Page, HOME_PAGE_SIZE, LIST_PAGE_SIZE};
use crate::store::Store;
use crate::utils::error::AppError;

const EVENT_SUMMARY_SELECT: &str = r#"
    SELECT e.id, e.name, e.date, e.location, e.description, e.created_at,
           e.organizer_id, o.name AS organizer_name
    FROM events e
    JOIN organizers o ON e.organizer_id = o.id
"#;

impl Store {
    pub async fn count_events(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Home listing: five events per page, soonest first.
    pub async fn home_events_page(&self, page: i64) -> Result<Page<EventSummary>, AppError> {
        let total_count = self.count_events().await?;
        let items = sqlx::query_as::<_, EventSummary>(&format!(
            "{EVENT_SUMMARY_SELECT} ORDER BY e.date ASC, e.id LIMIT $1 OFFSET $2"
        ))
        .bind(HOME_PAGE_SIZE)
        .bind(pagination::offset(page, HOME_PAGE_SIZE))
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(items, page, total_count, HOME_PAGE_SIZE))
    }

    /// Full listing: ten events per page, most recent date first.
    pub async fn list_events_page(&self, page: i64) -> Result<Page<EventSummary>, AppError> {
        let total_count = self.count_events().await?;
        let items = sqlx::query_as::<_, EventSummary>(&format!(
            "{EVENT_SUMMARY_SELECT} ORDER BY e.date DESC, e.id LIMIT $1 OFFSET $2"
        ))
        .bind(LIST_PAGE_SIZE)
        .bind(pagination::offset(page, LIST_PAGE_SIZE))
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(items, page, total_count, LIST_PAGE_SIZE))
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, name, date, location, description, created_at, organizer_id FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    pub async fn get_event_summary(&self, id: Uuid) -> Result<Option<EventSummary>, AppError> {
        let event = sqlx::query_as::<_, EventSummary>(&format!(
            "{EVENT_SUMMARY_SELECT} WHERE e.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    pub async fn create_event(&self, new: &NewEvent) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, date, location, description, organizer_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, date, location, description, created_at, organizer_id
            "#,
        )
        .bind(&new.name)
        .bind(new.date)
        .bind(&new.location)
        .bind(&new.description)
        .bind(new.organizer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_organizer_fk)
    }

    pub async fn update_event(&self, id: Uuid, new: &NewEvent) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $2, date = $3, location = $4, description = $5, organizer_id = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(new.date)
        .bind(&new.location)
        .bind(&new.description)
        .bind(new.organizer_id)
        .execute(&self.pool)
        .await
        .map_err(map_organizer_fk)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event"));
        }
        Ok(())
    }

    /// Unconditional; the schema cascades the event's tickets away.
    pub async fn delete_event(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// An event pointing at a missing organizer is a stale form submission.
fn map_organizer_fk(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound("Organizer");
        }
    }
    AppError::Database(err)
}

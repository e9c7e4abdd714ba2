use uuid::Uuid;

use crate::models::{NewOrganizer, Organizer, OrganizerOverview};
use crate::store::pagination::{self, Page, LIST_PAGE_SIZE};
use crate::store::{map_email_conflict, Store};
use crate::utils::error::AppError;

impl Store {
    pub async fn count_organizers(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM organizers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One listing page, name ascending, each row carrying the organizer's
    /// event count.
    pub async fn list_organizers_page(&self, page: i64) -> Result<Page<OrganizerOverview>, AppError> {
        let total_count = self.count_organizers().await?;
        let items = sqlx::query_as::<_, OrganizerOverview>(
            r#"
            SELECT o.id, o.name, o.email, o.phone, o.created_at,
                   COUNT(e.id) AS event_count
            FROM organizers o
            LEFT JOIN events e ON o.id = e.organizer_id
            GROUP BY o.id
            ORDER BY o.name ASC, o.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(LIST_PAGE_SIZE)
        .bind(pagination::offset(page, LIST_PAGE_SIZE))
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(items, page, total_count, LIST_PAGE_SIZE))
    }

    /// Every organizer, name ascending, for the event form's select box.
    pub async fn list_organizers(&self) -> Result<Vec<Organizer>, AppError> {
        let organizers = sqlx::query_as::<_, Organizer>(
            "SELECT id, name, email, phone, created_at FROM organizers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(organizers)
    }

    pub async fn get_organizer(&self, id: Uuid) -> Result<Option<Organizer>, AppError> {
        let organizer = sqlx::query_as::<_, Organizer>(
            "SELECT id, name, email, phone, created_at FROM organizers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(organizer)
    }

    pub async fn create_organizer(&self, new: &NewOrganizer) -> Result<Organizer, AppError> {
        sqlx::query_as::<_, Organizer>(
            r#"
            INSERT INTO organizers (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_email_conflict(e, "An organizer with this email already exists!"))
    }

    pub async fn update_organizer(&self, id: Uuid, new: &NewOrganizer) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE organizers SET name = $2, email = $3, phone = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| map_email_conflict(e, "An organizer with this email already exists!"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Organizer"));
        }
        Ok(())
    }

    /// Refused while events reference the organizer; the row is left
    /// untouched. With no events the delete is unconditional.
    pub async fn delete_organizer(&self, id: Uuid) -> Result<(), AppError> {
        let event_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM events WHERE organizer_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if event_count > 0 {
            return Err(AppError::HasDependents(
                "⚠️ Cannot delete this organizer: events are still attached.".to_string(),
            ));
        }

        sqlx::query("DELETE FROM organizers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

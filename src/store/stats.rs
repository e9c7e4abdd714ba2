use crate::models::{Dashboard, EventPopularity, MonthlyRegistrations, OrganizerEventCount};
use crate::store::Store;
use crate::utils::error::AppError;

impl Store {
    /// Computes every dashboard figure on demand. Nothing is cached or
    /// precomputed; each call reflects the store at that moment.
    pub async fn dashboard(&self) -> Result<Dashboard, AppError> {
        let total_events = self.count_events().await?;
        let total_attendees = self.count_attendees().await?;
        let total_organizers = self.count_organizers().await?;

        let events_per_organizer = sqlx::query_as::<_, OrganizerEventCount>(
            r#"
            SELECT o.name, COUNT(e.id) AS event_count
            FROM organizers o
            LEFT JOIN events e ON o.id = e.organizer_id
            GROUP BY o.id, o.name
            ORDER BY o.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // A zero-ticket event can only appear here when fewer than five
        // events outrank it; the LIMIT is what drops it, not a filter.
        let popular_events = sqlx::query_as::<_, EventPopularity>(
            r#"
            SELECT e.name, COUNT(t.id) AS ticket_count
            FROM events e
            LEFT JOIN tickets t ON e.id = t.event_id
            GROUP BY e.id, e.name
            ORDER BY COUNT(t.id) DESC, e.name
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // Months without events in the trailing year are omitted; a month
        // whose events drew no registrations reports zero.
        let monthly_registrations = sqlx::query_as::<_, MonthlyRegistrations>(
            r#"
            SELECT date_trunc('month', e.date)::date AS month,
                   COUNT(DISTINCT t.attendee_id) AS attendee_count
            FROM events e
            LEFT JOIN tickets t ON e.id = t.event_id
            WHERE e.date >= CURRENT_DATE - INTERVAL '1 year'
            GROUP BY date_trunc('month', e.date)
            ORDER BY date_trunc('month', e.date)
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(Dashboard {
            total_events,
            total_attendees,
            total_organizers,
            events_per_organizer,
            popular_events,
            monthly_registrations,
        })
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Events run by one organizer; organizers with zero events are included.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrganizerEventCount {
    pub name: String,
    pub event_count: i64,
}

/// One of the top-5 events ranked by ticket count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventPopularity {
    pub name: String,
    pub ticket_count: i64,
}

/// Distinct attendees registered to events in one calendar month.
/// `month` is the event date truncated to the first of the month.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MonthlyRegistrations {
    pub month: NaiveDate,
    pub attendee_count: i64,
}

/// Everything the dashboard page renders, computed on demand.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub total_events: i64,
    pub total_attendees: i64,
    pub total_organizers: i64,
    pub events_per_organizer: Vec<OrganizerEventCount>,
    pub popular_events: Vec<EventPopularity>,
    pub monthly_registrations: Vec<MonthlyRegistrations>,
}

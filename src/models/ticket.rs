use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Join entity: one attendee's registration to one event. The pair
/// (event_id, attendee_id) is unique across all tickets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub event_id: Uuid,
    pub attendee_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing row: an attendee plus how many events they are registered for.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AttendeeOverview {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub event_count: i64,
}

/// Validated payload for inserts and updates.
#[derive(Debug, Clone)]
pub struct NewAttendee {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Raw form fields as submitted by the browser.
#[derive(Debug, Deserialize)]
pub struct AttendeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl AttendeeForm {
    pub fn parse(self) -> Result<NewAttendee, String> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        if name.is_empty() || email.is_empty() {
            return Err("Name and email are required!".to_string());
        }
        let phone = self.phone.trim();
        Ok(NewAttendee {
            name,
            email,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub organizer_id: Uuid,
}

/// Listing/detail row: an event joined with its organizer's name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub organizer_id: Uuid,
    pub organizer_name: String,
}

/// Validated payload for inserts and updates.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: Option<String>,
    pub organizer_id: Uuid,
}

/// Raw form fields as submitted by the browser. The date arrives in the
/// `<input type="date">` wire format and the organizer as a uuid string.
#[derive(Debug, Deserialize)]
pub struct EventForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organizer_id: String,
}

impl EventForm {
    pub fn parse(self) -> Result<NewEvent, String> {
        let name = self.name.trim().to_string();
        let location = self.location.trim().to_string();
        if name.is_empty() || self.date.trim().is_empty() || location.is_empty() || self.organizer_id.trim().is_empty() {
            return Err("All fields except description are required!".to_string());
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Invalid event date".to_string())?;
        let organizer_id = Uuid::parse_str(self.organizer_id.trim())
            .map_err(|_| "Invalid organizer".to_string())?;
        let description = self.description.trim();
        Ok(NewEvent {
            name,
            date,
            location,
            description: (!description.is_empty()).then(|| description.to_string()),
            organizer_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EventForm {
        EventForm {
            name: "Tech Conference 2024".to_string(),
            date: "2024-12-15".to_string(),
            location: "San Francisco, CA".to_string(),
            description: String::new(),
            organizer_id: Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let parsed = filled_form().parse().unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn test_parse_requires_all_but_description() {
        let mut form = filled_form();
        form.location = String::new();
        let err = form.parse().unwrap_err();
        assert!(err.contains("required"));
    }

    #[test]
    fn test_parse_rejects_malformed_date() {
        let mut form = filled_form();
        form.date = "15/12/2024".to_string();
        assert!(form.parse().is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_organizer_id() {
        let mut form = filled_form();
        form.organizer_id = "42".to_string();
        assert!(form.parse().is_err());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organizer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing row: an organizer plus how many events they run.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrganizerOverview {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub event_count: i64,
}

/// Validated payload for inserts and updates.
#[derive(Debug, Clone)]
pub struct NewOrganizer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Raw form fields as submitted by the browser.
#[derive(Debug, Deserialize)]
pub struct OrganizerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl OrganizerForm {
    pub fn parse(self) -> Result<NewOrganizer, String> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        if name.is_empty() || email.is_empty() {
            return Err("Name and email are required!".to_string());
        }
        let phone = self.phone.trim();
        Ok(NewOrganizer {
            name,
            email,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_optional_phone() {
        let form = OrganizerForm {
            name: "John Smith".to_string(),
            email: "john@email.com".to_string(),
            phone: String::new(),
        };
        let parsed = form.parse().unwrap();
        assert_eq!(parsed.name, "John Smith");
        assert_eq!(parsed.phone, None);
    }

    #[test]
    fn test_parse_rejects_missing_email() {
        let form = OrganizerForm {
            name: "John Smith".to_string(),
            email: "   ".to_string(),
            phone: "+1234567890".to_string(),
        };
        assert!(form.parse().is_err());
    }
}

//! Deterministic fixture data for an empty store.
//!
//! Seeding runs once at startup, before the listener binds. Each entity
//! batch commits in its own transaction: a failing batch rolls back only
//! itself, gets logged, and aborts the batches after it. Nothing here ever
//! propagates to the caller; a half-seeded or unseeded store must not keep
//! the server from starting.

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::auth;
use crate::store::Store;
use crate::utils::error::AppError;

/// (name, email, phone)
const ORGANIZERS: [(&str, &str, &str); 10] = [
    ("John Smith", "john@email.com", "+1234567890"),
    ("Sarah Johnson", "sarah@email.com", "+1234567891"),
    ("Mike Wilson", "mike@email.com", "+1234567892"),
    ("Emily Brown", "emily@email.com", "+1234567893"),
    ("David Davis", "david@email.com", "+1234567894"),
    ("Lisa Garcia", "lisa@email.com", "+1234567895"),
    ("Tom Martinez", "tom@email.com", "+1234567896"),
    ("Anna Taylor", "anna@email.com", "+1234567897"),
    ("Chris Anderson", "chris@email.com", "+1234567898"),
    ("Maria Rodriguez", "maria@email.com", "+1234567899"),
];

/// (name, date, location, description); event i belongs to organizer i.
const EVENTS: [(&str, &str, &str, &str); 10] = [
    ("Tech Conference 2024", "2024-12-15", "San Francisco, CA", "Annual technology conference featuring the latest innovations"),
    ("Music Festival", "2024-11-20", "Austin, TX", "Three-day music festival with top artists"),
    ("Business Summit", "2024-12-05", "New York, NY", "Networking event for business professionals"),
    ("Art Exhibition", "2024-11-30", "Los Angeles, CA", "Contemporary art exhibition by emerging artists"),
    ("Food & Wine Festival", "2024-12-10", "Portland, OR", "Celebration of local cuisine and wines"),
    ("Marathon 2024", "2024-11-25", "Chicago, IL", "Annual city marathon for all skill levels"),
    ("Book Fair", "2024-12-01", "Seattle, WA", "Independent authors and publishers showcase"),
    ("Gaming Convention", "2024-11-28", "Las Vegas, NV", "Gaming enthusiasts convention with competitions"),
    ("Science Fair", "2024-12-08", "Boston, MA", "Student science projects and demonstrations"),
    ("Fashion Week", "2024-12-12", "Miami, FL", "Latest fashion trends and designer showcases"),
];

/// (name, email, phone)
const ATTENDEES: [(&str, &str, &str); 15] = [
    ("Alice Cooper", "alice@email.com", "+1111111111"),
    ("Bob Miller", "bob@email.com", "+2222222222"),
    ("Carol White", "carol@email.com", "+3333333333"),
    ("Daniel Lee", "daniel@email.com", "+4444444444"),
    ("Emma Wilson", "emma@email.com", "+5555555555"),
    ("Frank Thompson", "frank@email.com", "+6666666666"),
    ("Grace Kim", "grace@email.com", "+7777777777"),
    ("Henry Clark", "henry@email.com", "+8888888888"),
    ("Ivy Chen", "ivy@email.com", "+9999999999"),
    ("Jack Robinson", "jack@email.com", "+1010101010"),
    ("Kate Adams", "kate@email.com", "+1111111110"),
    ("Liam Murphy", "liam@email.com", "+1212121212"),
    ("Maya Patel", "maya@email.com", "+1313131313"),
    ("Noah Johnson", "noah@email.com", "+1414141414"),
    ("Olivia Brown", "olivia@email.com", "+1515151515"),
];

/// (event index, attendee index) pairs; every pair distinct.
const TICKETS: [(usize, usize); 16] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 3),
    (2, 4),
    (2, 5),
    (3, 6),
    (3, 7),
    (4, 8),
    (4, 9),
    (5, 10),
    (6, 11),
    (7, 12),
    (8, 13),
    (9, 14),
];

impl Store {
    /// Populates an empty store with the fixture data; a no-op whenever
    /// organizers already exist.
    pub async fn seed_if_empty(&self) {
        let organizer_count = match self.count_organizers().await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "Bootstrap: could not inspect the store, skipping seed");
                return;
            }
        };
        if organizer_count > 0 {
            debug!("Bootstrap: store already populated, skipping seed");
            return;
        }

        info!("Bootstrap: seeding fixture data");

        let organizer_ids = match self.seed_organizers().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Bootstrap: organizer batch failed, rolled back");
                return;
            }
        };
        let event_ids = match self.seed_events(&organizer_ids).await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Bootstrap: event batch failed, rolled back");
                return;
            }
        };
        let attendee_ids = match self.seed_attendees().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Bootstrap: attendee batch failed, rolled back");
                return;
            }
        };
        if let Err(e) = self.seed_tickets(&event_ids, &attendee_ids).await {
            error!(error = %e, "Bootstrap: ticket batch failed, rolled back");
            return;
        }

        info!(
            organizers = ORGANIZERS.len(),
            events = EVENTS.len(),
            attendees = ATTENDEES.len(),
            tickets = TICKETS.len(),
            "Bootstrap: fixture data seeded"
        );
    }

    /// Creates the admin login when no user exists yet.
    pub async fn ensure_admin_user(&self, username: &str, email: &str, password: &str) {
        let user_count = match self.count_users().await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "Bootstrap: could not inspect users, skipping admin setup");
                return;
            }
        };
        if user_count > 0 {
            return;
        }

        let password_hash = match auth::hash_password(password).await {
            Ok(hash) => hash,
            Err(e) => {
                error!(error = %e, "Bootstrap: could not hash the admin password");
                return;
            }
        };
        match self.create_user(username, email, &password_hash).await {
            Ok(_) => info!(username, "Bootstrap: created admin user"),
            Err(e) => warn!(error = %e, "Bootstrap: could not create the admin user"),
        }
    }

    async fn seed_organizers(&self) -> Result<Vec<Uuid>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(ORGANIZERS.len());
        for (name, email, phone) in ORGANIZERS {
            let id = sqlx::query_scalar::<_, Uuid>(
                "INSERT INTO organizers (name, email, phone) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(name)
            .bind(email)
            .bind(phone)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }
        tx.commit().await?;
        Ok(ids)
    }

    async fn seed_events(&self, organizer_ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(EVENTS.len());
        for (position, (name, date, location, description)) in EVENTS.iter().enumerate() {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| AppError::Validation(format!("invalid fixture date {date}")))?;
            let id = sqlx::query_scalar::<_, Uuid>(
                r#"
                INSERT INTO events (name, date, location, description, organizer_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
                "#,
            )
            .bind(name)
            .bind(date)
            .bind(location)
            .bind(description)
            .bind(organizer_ids[position])
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }
        tx.commit().await?;
        Ok(ids)
    }

    async fn seed_attendees(&self) -> Result<Vec<Uuid>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(ATTENDEES.len());
        for (name, email, phone) in ATTENDEES {
            let id = sqlx::query_scalar::<_, Uuid>(
                "INSERT INTO attendees (name, email, phone) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(name)
            .bind(email)
            .bind(phone)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }
        tx.commit().await?;
        Ok(ids)
    }

    async fn seed_tickets(&self, event_ids: &[Uuid], attendee_ids: &[Uuid]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for (event_position, attendee_position) in TICKETS {
            sqlx::query("INSERT INTO tickets (event_id, attendee_id) VALUES ($1, $2)")
                .bind(event_ids[event_position])
                .bind(attendee_ids[attendee_position])
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

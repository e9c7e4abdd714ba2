pub mod attendee;
pub mod event;
pub mod organizer;
pub mod stats;
pub mod ticket;
pub mod user;

pub use attendee::{Attendee, AttendeeForm, AttendeeOverview, NewAttendee};
pub use event::{Event, EventForm, EventSummary, NewEvent};
pub use organizer::{NewOrganizer, Organizer, OrganizerForm, OrganizerOverview};
pub use stats::{Dashboard, EventPopularity, MonthlyRegistrations, OrganizerEventCount};
pub use ticket::Ticket;
pub use user::{LoginForm, User};

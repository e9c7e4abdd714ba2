use crate::models::{Attendee, Event, EventSummary, Organizer};
use crate::store::pagination::Page;
use crate::views::{escape, pager};

pub fn home(page: &Page<EventSummary>) -> String {
    let mut body = String::from(
        "<p><a href=\"/create_event\">Create event</a></p>\
         <table><tr><th>Name</th><th>Date</th><th>Location</th><th>Organizer</th></tr>",
    );
    for event in &page.items {
        body.push_str(&format!(
            "<tr><td><a href=\"/events/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>",
            event.id,
            escape(&event.name),
            event.date,
            escape(&event.location),
            escape(&event.organizer_name)
        ));
    }
    body.push_str("</table>");
    body.push_str(&pager("/", page.number, page.total_pages));
    body
}

pub fn listing(page: &Page<EventSummary>) -> String {
    let mut body = String::from(
        "<p><a href=\"/create_event\">Create event</a></p>\
         <table><tr><th>Name</th><th>Date</th><th>Location</th><th>Organizer</th><th></th></tr>",
    );
    for event in &page.items {
        body.push_str(&format!(
            "<tr><td><a href=\"/events/{id}\">{name}</a></td><td>{date}</td><td>{location}</td>\
             <td>{organizer}</td>\
             <td><a href=\"/events/update/{id}\">Edit</a> \
             <a href=\"/events/delete/{id}\">Delete</a> \
             <a href=\"/register_event/{id}\">Register</a></td></tr>",
            id = event.id,
            name = escape(&event.name),
            date = event.date,
            location = escape(&event.location),
            organizer = escape(&event.organizer_name)
        ));
    }
    body.push_str("</table>");
    body.push_str(&pager("/events", page.number, page.total_pages));
    body
}

pub fn detail(event: &EventSummary, registered: &[Attendee]) -> String {
    let description = event
        .description
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| "—".to_string());

    let mut body = format!(
        "<p><strong>Date:</strong> {}<br><strong>Location:</strong> {}<br>\
         <strong>Organizer:</strong> {}<br><strong>Description:</strong> {}</p>\
         <p><a href=\"/register_event/{}\">Register an attendee</a> \
         <a href=\"/events/update/{}\">Edit</a> \
         <a href=\"/events/delete/{}\">Delete</a></p>\
         <h2>Registered attendees ({})</h2>",
        event.date,
        escape(&event.location),
        escape(&event.organizer_name),
        description,
        event.id,
        event.id,
        event.id,
        registered.len()
    );

    if registered.is_empty() {
        body.push_str("<p>No registrations yet.</p>");
    } else {
        body.push_str("<ul>");
        for attendee in registered {
            body.push_str(&format!(
                "<li><a href=\"/attendees/{}\">{}</a> \
                 <a href=\"/unregister_event/{}/{}\">Unregister</a></li>",
                attendee.id,
                escape(&attendee.name),
                event.id,
                attendee.id
            ));
        }
        body.push_str("</ul>");
    }
    body
}

/// Create and edit share the form; `event` prefills the edit variant.
pub fn form(action: &str, organizers: &[Organizer], event: Option<&Event>) -> String {
    let name = event.map(|e| escape(&e.name)).unwrap_or_default();
    let date = event.map(|e| e.date.to_string()).unwrap_or_default();
    let location = event.map(|e| escape(&e.location)).unwrap_or_default();
    let description = event
        .and_then(|e| e.description.as_deref())
        .map(escape)
        .unwrap_or_default();

    let mut options = String::new();
    for organizer in organizers {
        let selected = if event.is_some_and(|e| e.organizer_id == organizer.id) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            organizer.id,
            selected,
            escape(&organizer.name)
        ));
    }

    format!(
        "<form method=\"post\" action=\"{action}\">\
         <label>Name <input name=\"name\" value=\"{name}\"></label>\
         <label>Date <input type=\"date\" name=\"date\" value=\"{date}\"></label>\
         <label>Location <input name=\"location\" value=\"{location}\"></label>\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\
         <label>Organizer <select name=\"organizer_id\"><option value=\"\"></option>{options}</select></label>\
         <button type=\"submit\">Save</button></form>"
    )
}

pub fn register(event: &Event, available: &[Attendee], registered: &[Attendee]) -> String {
    let mut options = String::new();
    for attendee in available {
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            attendee.id,
            escape(&attendee.name)
        ));
    }

    let mut body = format!(
        "<p>{} — {}</p>\
         <form method=\"post\" action=\"/register_event/{}\">\
         <label>Attendee <select name=\"attendee_id\"><option value=\"\"></option>{}</select></label>\
         <button type=\"submit\">Register</button></form>\
         <h2>Already registered ({})</h2>",
        event.date,
        escape(&event.location),
        event.id,
        options,
        registered.len()
    );

    if registered.is_empty() {
        body.push_str("<p>No registrations yet.</p>");
    } else {
        body.push_str("<ul>");
        for attendee in registered {
            body.push_str(&format!(
                "<li>{} <a href=\"/unregister_event/{}/{}\">Unregister</a></li>",
                escape(&attendee.name),
                event.id,
                attendee.id
            ));
        }
        body.push_str("</ul>");
    }
    body
}

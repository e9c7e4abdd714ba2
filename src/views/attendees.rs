use crate::models::{Attendee, AttendeeOverview, Event};
use crate::store::pagination::Page;
use crate::views::{escape, pager};

pub fn listing(page: &Page<AttendeeOverview>) -> String {
    let mut body = String::from(
        "<p><a href=\"/create_attendee\">Create attendee</a></p>\
         <table><tr><th>Name</th><th>Email</th><th>Phone</th><th>Events</th><th></th></tr>",
    );
    for attendee in &page.items {
        body.push_str(&format!(
            "<tr><td><a href=\"/attendees/{id}\">{name}</a></td><td>{email}</td>\
             <td>{phone}</td><td>{events}</td>\
             <td><a href=\"/attendees/update/{id}\">Edit</a> \
             <form method=\"post\" action=\"/attendees/delete/{id}\" style=\"display:inline\">\
             <button type=\"submit\">Delete</button></form></td></tr>",
            id = attendee.id,
            name = escape(&attendee.name),
            email = escape(&attendee.email),
            phone = attendee.phone.as_deref().map(escape).unwrap_or_else(|| "—".to_string()),
            events = attendee.event_count
        ));
    }
    body.push_str("</table>");
    body.push_str(&pager("/attendees", page.number, page.total_pages));
    body
}

pub fn detail(attendee: &Attendee, events: &[Event]) -> String {
    let mut body = format!(
        "<p><strong>Email:</strong> {}<br><strong>Phone:</strong> {}</p>\
         <h2>Registered events ({})</h2>",
        escape(&attendee.email),
        attendee.phone.as_deref().map(escape).unwrap_or_else(|| "—".to_string()),
        events.len()
    );

    if events.is_empty() {
        body.push_str("<p>No registrations yet.</p>");
    } else {
        body.push_str("<ul>");
        for event in events {
            body.push_str(&format!(
                "<li><a href=\"/events/{}\">{}</a> — {} \
                 <a href=\"/unregister_event/{}/{}\">Unregister</a></li>",
                event.id,
                escape(&event.name),
                event.date,
                event.id,
                attendee.id
            ));
        }
        body.push_str("</ul>");
    }
    body
}

/// Create and edit share the form; `attendee` prefills the edit variant.
pub fn form(action: &str, attendee: Option<&Attendee>) -> String {
    let name = attendee.map(|a| escape(&a.name)).unwrap_or_default();
    let email = attendee.map(|a| escape(&a.email)).unwrap_or_default();
    let phone = attendee
        .and_then(|a| a.phone.as_deref())
        .map(escape)
        .unwrap_or_default();

    format!(
        "<form method=\"post\" action=\"{action}\">\
         <label>Name <input name=\"name\" value=\"{name}\"></label>\
         <label>Email <input type=\"email\" name=\"email\" value=\"{email}\"></label>\
         <label>Phone <input name=\"phone\" value=\"{phone}\"></label>\
         <button type=\"submit\">Save</button></form>"
    )
}

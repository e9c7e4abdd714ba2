use crate::models::{Organizer, OrganizerOverview};
use crate::store::pagination::Page;
use crate::views::{escape, pager};

pub fn listing(page: &Page<OrganizerOverview>) -> String {
    let mut body = String::from(
        "<p><a href=\"/create_organizer\">Create organizer</a></p>\
         <table><tr><th>Name</th><th>Email</th><th>Phone</th><th>Events</th><th></th></tr>",
    );
    for organizer in &page.items {
        body.push_str(&format!(
            "<tr><td>{name}</td><td>{email}</td><td>{phone}</td><td>{events}</td>\
             <td><a href=\"/organizers/update/{id}\">Edit</a> \
             <a href=\"/organizers/delete/{id}\">Delete</a></td></tr>",
            id = organizer.id,
            name = escape(&organizer.name),
            email = escape(&organizer.email),
            phone = organizer.phone.as_deref().map(escape).unwrap_or_else(|| "—".to_string()),
            events = organizer.event_count
        ));
    }
    body.push_str("</table>");
    body.push_str(&pager("/organizers", page.number, page.total_pages));
    body
}

/// Create and edit share the form; `organizer` prefills the edit variant.
pub fn form(action: &str, organizer: Option<&Organizer>) -> String {
    let name = organizer.map(|o| escape(&o.name)).unwrap_or_default();
    let email = organizer.map(|o| escape(&o.email)).unwrap_or_default();
    let phone = organizer
        .and_then(|o| o.phone.as_deref())
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

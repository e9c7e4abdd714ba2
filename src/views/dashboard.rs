use crate::models::Dashboard;
use crate::views::escape;

pub fn dashboard(stats: &Dashboard) -> String {
    let mut body = format!(
        "<p><strong>Events:</strong> {} &nbsp; <strong>Attendees:</strong> {} &nbsp; \
         <strong>Organizers:</strong> {}</p>",
        stats.total_events, stats.total_attendees, stats.total_organizers
    );

    body.push_str("<h2>Events per organizer</h2><table><tr><th>Organizer</th><th>Events</th></tr>");
    for row in &stats.events_per_organizer {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&row.name),
            row.event_count
        ));
    }
    body.push_str("</table>");

    body.push_str("<h2>Most popular events</h2><table><tr><th>Event</th><th>Tickets</th></tr>");
    for row in &stats.popular_events {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&row.name),
            row.ticket_count
        ));
    }
    body.push_str("</table>");

    body.push_str(
        "<h2>Registrations by month (trailing year)</h2>\
         <table><tr><th>Month</th><th>Distinct attendees</th></tr>",
    );
    for row in &stats.monthly_registrations {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            row.month.format("%B %Y"),
            row.attendee_count
        ));
    }
    body.push_str("</table>");

    body
}

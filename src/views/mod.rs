//! Server-rendered page glue. The pages are deliberately plain HTML built
//! with `format!`; the data-access layer is where the behavior lives.

pub mod attendees;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod organizers;

use crate::utils::flash::Level;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem}\
nav a{margin-right:1rem}table{border-collapse:collapse;width:100%}\
td,th{border:1px solid #ccc;padding:.4rem .6rem;text-align:left}\
.flash{padding:.6rem 1rem;border-radius:4px}.flash-success{background:#e6f4ea}\
.flash-info{background:#e8f0fe}.flash-warning{background:#fef7e0}.flash-danger{background:#fce8e6}\
form label{display:block;margin:.5rem 0}.pager{margin:1rem 0}";

/// Wraps a page body in the shared chrome: nav, flash banner, styling.
pub fn layout(title: &str, flash: Option<&(Level, String)>, body: &str) -> String {
    let banner = flash
        .map(|(level, message)| {
            format!(
                "<p class=\"flash flash-{}\">{}</p>",
                level.as_str(),
                escape(message)
            )
        })
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} · Boxoffice</title>\n<style>{}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a><a href=\"/events\">Events</a>\
         <a href=\"/organizers\">Organizers</a><a href=\"/attendees\">Attendees</a>\
         <a href=\"/dashboard\">Dashboard</a></nav>\n{}\n<main>\n<h1>{}</h1>\n{}\n</main>\n\
         </body>\n</html>",
        escape(title),
        STYLE,
        banner,
        escape(title),
        body
    )
}

/// Minimal HTML entity escaping for interpolated user data.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prev / next navigation for a paged listing. Hidden entirely for a
/// single page; a page past the end simply has no further link.
pub fn pager(base: &str, page: i64, total_pages: i64) -> String {
    if total_pages <= 1 {
        return String::new();
    }
    let mut out = String::from("<p class=\"pager\">");
    if page > 1 {
        out.push_str(&format!("<a href=\"{}?page={}\">&laquo; Prev</a> ", base, page - 1));
    }
    out.push_str(&format!("Page {page} of {total_pages}"));
    if page < total_pages {
        out.push_str(&format!(" <a href=\"{}?page={}\">Next &raquo;</a>", base, page + 1));
    }
    out.push_str("</p>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>alert('x & y')</script>"),
            "&lt;script&gt;alert(&#39;x &amp; y&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_layout_renders_flash_banner() {
        let flash = (Level::Success, "Event added successfully!".to_string());
        let html = layout("Events", Some(&flash), "<p>body</p>");
        assert!(html.contains("flash-success"));
        assert!(html.contains("Event added successfully!"));
    }

    #[test]
    fn test_pager_edges() {
        assert_eq!(pager("/events", 1, 1), "");
        assert_eq!(pager("/events", 1, 0), "");

        let first = pager("/events", 1, 3);
        assert!(!first.contains("Prev"));
        assert!(first.contains("/events?page=2"));

        let last = pager("/events", 3, 3);
        assert!(last.contains("/events?page=2"));
        assert!(!last.contains("Next"));

        // A page past the end renders without links crashing or looping.
        let beyond = pager("/events", 9, 3);
        assert!(beyond.contains("Page 9 of 3"));
        assert!(!beyond.contains("Next"));
    }
}

use crate::modules::appointments::use_cases::relay_notification::handler::RelayRequest;

const NOT_SPECIFIED: &str = "Not specified";
const NO_NOTES: &str = "—";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn full_name(request: &RelayRequest) -> String {
    [request.first_name.trim(), request.last_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_not_specified(value: &str) -> String {
    match value.trim() {
        "" => NOT_SPECIFIED.to_string(),
        v => escape_html(v),
    }
}

pub fn compose_subject(request: &RelayRequest) -> String {
    format!(
        "Appointment Request: {} ({})",
        full_name(request),
        request.phone.trim()
    )
}

/// Notification body sent to the clinic inbox.
pub fn compose_html(request: &RelayRequest, clinic_name: &str) -> String {
    let notes = match request.notes.trim() {
        "" => NO_NOTES.to_string(),
        n => escape_html(n).replace("\r\n", "<br/>").replace('\n', "<br/>"),
    };

    [
        "<h2>New Appointment Request</h2>".to_string(),
        format!("<p><strong>Name:</strong> {}</p>", escape_html(&full_name(request))),
        format!("<p><strong>Phone:</strong> {}</p>", escape_html(request.phone.trim())),
        format!("<p><strong>Email:</strong> {}</p>", escape_html(request.email.trim())),
        format!("<p><strong>Preferred Date:</strong> {}</p>", or_not_specified(&request.date)),
        format!("<p><strong>Preferred Time:</strong> {}</p>", or_not_specified(&request.time)),
        format!("<p><strong>Notes:</strong><br/>{notes}</p>"),
        "<hr/>".to_string(),
        format!("<p>Sent from {} website</p>", escape_html(clinic_name)),
    ]
    .join("\n")
}

// Human readable message shared by the messaging and mail deep links.

use crate::modules::appointments::core::record::AppointmentRecord;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const MESSAGE_HEADER: &str = "New Appointment Request";
pub const MESSAGE_CLOSING: &str = "Thank you!";

/// Characters left as-is by a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn compose_message(record: &AppointmentRecord) -> String {
    let mut lines = vec![
        MESSAGE_HEADER.to_string(),
        String::new(),
        format!("Name: {}", record.full_name()),
        format!("Phone: {}", record.phone()),
    ];
    push_optional(&mut lines, "Email", record.email());
    push_optional(&mut lines, "Preferred Date", record.date());
    push_optional(&mut lines, "Preferred Time", record.time());
    lines.push(String::new());
    lines.push(format!("Visit Type: {}", record.visit_type().label()));
    lines.push(String::new());
    let notes = if record.notes().is_empty() {
        "-"
    } else {
        record.notes()
    };
    lines.push(format!("Notes: {notes}"));
    lines.push(String::new());
    lines.push(MESSAGE_CLOSING.to_string());
    lines.join("\n")
}

fn push_optional(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

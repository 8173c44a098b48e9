use crate::modules::appointments::core::record::{AppointmentRecord, RecordField, VisitType};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use thiserror::Error;

pub type RawFields = HashMap<String, String>;

/// Raw key of the service the visitor picked before opening the form.
pub const SERVICE_KEY: &str = "service";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("missing required field")]
    MissingRequiredField,

    #[error("invalid format")]
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {field}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: RecordField,
}

impl ValidationError {
    fn missing(field: RecordField) -> Self {
        Self {
            kind: ValidationErrorKind::MissingRequiredField,
            field,
        }
    }

    fn invalid(field: RecordField) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidFormat,
            field,
        }
    }
}

pub fn validate(raw: &RawFields) -> Result<AppointmentRecord, ValidationError> {
    let read = |key: &str| raw.get(key).map(|v| v.trim()).unwrap_or_default().to_string();
    let field = |field: RecordField| read(field.key());

    let first_name = field(RecordField::FirstName);
    if first_name.is_empty() {
        return Err(ValidationError::missing(RecordField::FirstName));
    }
    let phone = field(RecordField::Phone);
    if phone.is_empty() {
        return Err(ValidationError::missing(RecordField::Phone));
    }

    let date = field(RecordField::Date);
    if !date.is_empty() && NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        return Err(ValidationError::invalid(RecordField::Date));
    }
    let time = field(RecordField::Time);
    if !time.is_empty() && !is_iso_time(&time) {
        return Err(ValidationError::invalid(RecordField::Time));
    }

    let notes = with_service_line(&read(SERVICE_KEY), field(RecordField::Notes));

    Ok(AppointmentRecord {
        first_name,
        last_name: field(RecordField::LastName),
        phone,
        email: field(RecordField::Email),
        date,
        time,
        visit_type: VisitType::parse(&field(RecordField::VisitType)),
        notes,
    })
}

fn is_iso_time(value: &str) -> bool {
    NaiveTime::parse_from_str(value, "%H:%M").is_ok()
        || NaiveTime::parse_from_str(value, "%H:%M:%S").is_ok()
}

fn with_service_line(service: &str, notes: String) -> String {
    match (service.is_empty(), notes.is_empty()) {
        (true, _) => notes,
        (false, true) => format!("Service: {service}"),
        (false, false) => format!("Service: {service}\n{notes}"),
    }
}

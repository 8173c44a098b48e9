use serde::Serialize;
use std::fmt;

/// Logical fields captured by the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    FirstName,
    LastName,
    Phone,
    Email,
    Date,
    Time,
    VisitType,
    Notes,
}

impl RecordField {
    pub const ALL: [RecordField; 8] = [
        RecordField::FirstName,
        RecordField::LastName,
        RecordField::Phone,
        RecordField::Email,
        RecordField::Date,
        RecordField::Time,
        RecordField::VisitType,
        RecordField::Notes,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            RecordField::FirstName => "firstName",
            RecordField::LastName => "lastName",
            RecordField::Phone => "phone",
            RecordField::Email => "email",
            RecordField::Date => "date",
            RecordField::Time => "time",
            RecordField::VisitType => "visitType",
            RecordField::Notes => "notes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitType {
    #[default]
    FirstTime,
    Repeat,
}

impl VisitType {
    /// Unrecognized values fall back to a first visit.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "repeat" => VisitType::Repeat,
            _ => VisitType::FirstTime,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            VisitType::FirstTime => "first_time",
            VisitType::Repeat => "repeat",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            VisitType::FirstTime => "First time",
            VisitType::Repeat => "Repeat visit",
        }
    }
}

/// A validated appointment request. Only the validator builds one, so a
/// record in hand always has a first name and a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRecord {
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) phone: String,
    pub(super) email: String,
    pub(super) date: String,
    pub(super) time: String,
    pub(super) visit_type: VisitType,
    pub(super) notes: String,
}

impl AppointmentRecord {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn visit_type(&self) -> VisitType {
        self.visit_type
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::FirstName => &self.first_name,
            RecordField::LastName => &self.last_name,
            RecordField::Phone => &self.phone,
            RecordField::Email => &self.email,
            RecordField::Date => &self.date,
            RecordField::Time => &self.time,
            RecordField::VisitType => self.visit_type.as_str(),
            RecordField::Notes => &self.notes,
        }
    }

    /// Structured shape sent to the server endpoint.
    pub fn payload(&self) -> AppointmentPayload<'_> {
        AppointmentPayload {
            first_name: &self.first_name,
            last_name: &self.last_name,
            phone: &self.phone,
            email: &self.email,
            date: &self.date,
            time: &self.time,
            notes: &self.notes,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub notes: &'a str,
}

#[cfg(test)]
mod appointment_record_tests {
    use super::*;
    use crate::tests::fixtures::raw_fields::RawFieldsBuilder;
    use rstest::rstest;

    #[rstest]
    #[case("repeat", VisitType::Repeat)]
    #[case(" Repeat ", VisitType::Repeat)]
    #[case("first_time", VisitType::FirstTime)]
    #[case("walk_in", VisitType::FirstTime)]
    #[case("", VisitType::FirstTime)]
    fn it_should_parse_the_visit_type(#[case] raw: &str, #[case] expected: VisitType) {
        assert_eq!(VisitType::parse(raw), expected);
    }

    #[rstest]
    fn it_should_resolve_every_field_key() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::from_key(field.key()), Some(field));
        }
        assert_eq!(RecordField::from_key("service"), None);
    }

    #[rstest]
    fn it_should_join_the_full_name_without_trailing_space() {
        let record = RawFieldsBuilder::new().last_name("").validate();
        assert_eq!(record.full_name(), "Asha");

        let record = RawFieldsBuilder::new().validate();
        assert_eq!(record.full_name(), "Asha Rao");
    }

    #[rstest]
    fn it_should_serialize_the_payload_in_camel_case_without_visit_type() {
        let record = RawFieldsBuilder::new().notes("Back pain").validate();
        let json = serde_json::to_value(record.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Asha",
                "lastName": "Rao",
                "phone": "9876543210",
                "email": "",
                "date": "2024-05-01",
                "time": "10:00",
                "notes": "Back pain",
            })
        );
    }
}

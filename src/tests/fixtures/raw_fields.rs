// Shared test fixture for the raw booking form fields.

use crate::modules::appointments::core::record::AppointmentRecord;
use crate::modules::appointments::core::validate::{RawFields, validate};

#[derive(Debug, Clone)]
pub struct RawFieldsBuilder {
    inner: RawFields,
}

impl Default for RawFieldsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RawFieldsBuilder {
    /// Asha Rao, first visit, no email and no notes.
    pub fn new() -> Self {
        let inner = [
            ("firstName", "Asha"),
            ("lastName", "Rao"),
            ("phone", "9876543210"),
            ("email", ""),
            ("date", "2024-05-01"),
            ("time", "10:00"),
            ("notes", ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { inner }
    }

    fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.inner.insert(key.to_string(), value.into());
        self
    }

    pub fn first_name(self, v: impl Into<String>) -> Self {
        self.set("firstName", v)
    }

    pub fn last_name(self, v: impl Into<String>) -> Self {
        self.set("lastName", v)
    }

    pub fn phone(self, v: impl Into<String>) -> Self {
        self.set("phone", v)
    }

    pub fn email(self, v: impl Into<String>) -> Self {
        self.set("email", v)
    }

    pub fn date(self, v: impl Into<String>) -> Self {
        self.set("date", v)
    }

    pub fn time(self, v: impl Into<String>) -> Self {
        self.set("time", v)
    }

    pub fn visit_type(self, v: impl Into<String>) -> Self {
        self.set("visitType", v)
    }

    pub fn notes(self, v: impl Into<String>) -> Self {
        self.set("notes", v)
    }

    pub fn service(self, v: impl Into<String>) -> Self {
        self.set("service", v)
    }

    pub fn build(self) -> RawFields {
        self.inner
    }

    pub fn validate(self) -> AppointmentRecord {
        validate(&self.inner).expect("fixture fields should validate")
    }
}

#[cfg(test)]
mod raw_fields_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(RawFieldsBuilder::default().build(), RawFieldsBuilder::new().build());
    }

    #[rstest]
    fn setters_override_fields() {
        let raw = RawFieldsBuilder::new()
            .first_name("Meera")
            .service("Scan")
            .build();
        assert_eq!(raw.get("firstName").map(String::as_str), Some("Meera"));
        assert_eq!(raw.get("service").map(String::as_str), Some("Scan"));
        assert!(!raw.contains_key("visitType"));
    }
}

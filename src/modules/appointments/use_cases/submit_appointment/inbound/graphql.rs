use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result as GqlResult};

use crate::modules::appointments::core::record::RecordField;
use crate::modules::appointments::core::validate::{RawFields, SERVICE_KEY};
use crate::modules::appointments::use_cases::submit_appointment::view::SubmissionView;
use crate::shell::state::AppState;

#[derive(InputObject, Default)]
pub struct AppointmentInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub visit_type: Option<String>,
    pub notes: Option<String>,
    pub service: Option<String>,
}

impl From<AppointmentInput> for RawFields {
    fn from(input: AppointmentInput) -> Self {
        [
            (RecordField::FirstName.key(), input.first_name),
            (RecordField::LastName.key(), input.last_name),
            (RecordField::Phone.key(), input.phone),
            (RecordField::Email.key(), input.email),
            (RecordField::Date.key(), input.date),
            (RecordField::Time.key(), input.time),
            (RecordField::VisitType.key(), input.visit_type),
            (RecordField::Notes.key(), input.notes),
            (SERVICE_KEY, input.service),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Liveness probe for the booking API.
    async fn health(&self) -> &'static str {
        "ok"
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_appointment(
        &self,
        context: &Context<'_>,
        input: AppointmentInput,
    ) -> GqlResult<SubmissionView> {
        let state = context.data_unchecked::<AppState>();
        let raw = RawFields::from(input);

        let receipt = state.submit_handler.handle(&raw).await.map_err(|e| {
            async_graphql::Error::new(e.to_string()).extend_with(|_, ext| {
                ext.set("field", e.field.key());
                ext.set("kind", e.kind.to_string());
            })
        })?;

        Ok(receipt.into())
    }
}

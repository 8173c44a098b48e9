// Composition root for the booking API.
//
// Responsibilities
// - Wire configuration into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod graphql;
pub mod http;
pub mod state;

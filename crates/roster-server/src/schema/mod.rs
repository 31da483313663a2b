//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization; wire
//! field names are camelCase. Response bodies for individual records reuse
//! the row types from `roster-storage`, so this module only defines the
//! request payloads and the envelopes unique to the HTTP layer.

pub mod employees;

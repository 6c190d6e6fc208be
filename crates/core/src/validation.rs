//! Request validation helpers.
//!
//! Handlers call these before touching persistence: path identifiers go
//! through [`parse_entity_id`], request bodies through [`validate_input`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::EntityId;

/// Message returned for any identifier that is not a hyphenated UUID.
pub const INVALID_UUID: &str = "Invalid UUID";

/// Length of the canonical hyphenated UUID form (`8-4-4-4-12`).
const HYPHENATED_UUID_LEN: usize = 36;

/// Parse a path identifier into an [`EntityId`].
///
/// Only the canonical hyphenated form is accepted. The braced, URN, and
/// simple (no hyphens) forms that [`uuid::Uuid::try_parse`] tolerates are
/// rejected so that every entity has exactly one addressable spelling.
pub fn parse_entity_id(raw: &str) -> Result<EntityId, CoreError> {
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(CoreError::Validation(INVALID_UUID.to_string()));
    }
    uuid::Uuid::try_parse(raw).map_err(|_| CoreError::Validation(INVALID_UUID.to_string()))
}

/// Run the derived `validator` rules of `input`, flattening any failures
/// into a single [`CoreError::Validation`].
///
/// Messages are reported in field-name order, e.g.
/// `"duration is required; name must not be empty"`. A rule without a
/// message falls back to `"<field>: <rule code>"`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Unwrap a field that the derived rules already declared `required`.
///
/// Lets DTO conversions move validated values out without `unwrap()`.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                err.message
                    .as_ref()
                    .map_or_else(|| format!("{field}: {}", err.code), ToString::to_string)
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

//! Binding raw form fields onto a [`Visit`] and validating the result.
//!
//! Binding never fails outright: a value that cannot be converted leaves the
//! target field untouched and is recorded as a `typeMismatch` field error, so
//! the form can be shown again with everything the user typed.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::Visit;

/// Fields that are never bound from request input.
pub const DISALLOWED_FIELDS: &[&str] = &["id"];

/// Longest accepted visit description.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Date format accepted for the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single rejected field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    /// Error code (e.g., "typeMismatch", "NotEmpty")
    pub code: String,
    pub message: String,
    /// The raw value as submitted, when there was one
    pub rejected_value: Option<String>,
}

/// Outcome of binding and validating a form.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct BindingResult {
    errors: Vec<FieldError>,
}

impl BindingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors recorded against one field.
    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_errors(field).next().is_some()
    }

    /// Record an error against a field.
    pub fn reject_value(
        &mut self,
        field: &str,
        code: &str,
        message: impl Into<String>,
        rejected_value: Option<String>,
    ) {
        self.errors.push(FieldError {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
            rejected_value,
        });
    }
}

/// Apply submitted fields onto `target`.
///
/// Recognised fields are `date`, `description`, `petId` and `canceled`.
/// Disallowed fields are dropped; anything else is ignored.
pub fn bind_visit(fields: &HashMap<String, String>, target: &mut Visit) -> BindingResult {
    let mut result = BindingResult::new();

    for (name, value) in fields {
        if DISALLOWED_FIELDS.contains(&name.as_str()) {
            debug!(field = %name, "dropping disallowed field");
            continue;
        }

        match name.as_str() {
            "date" => match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
                Ok(date) => target.date = date,
                Err(_) => result.reject_value(
                    "date",
                    "typeMismatch",
                    "must be a date in the form YYYY-MM-DD",
                    Some(value.clone()),
                ),
            },
            "description" => target.description = value.clone(),
            "petId" => match value.trim().parse::<i64>() {
                Ok(pet_id) => target.pet_id = pet_id,
                Err(_) => result.reject_value(
                    "petId",
                    "typeMismatch",
                    "must be a number",
                    Some(value.clone()),
                ),
            },
            "canceled" => match parse_flag(value) {
                Some(flag) => target.canceled = flag,
                None => result.reject_value(
                    "canceled",
                    "typeMismatch",
                    "must be true or false",
                    Some(value.clone()),
                ),
            },
            _ => {}
        }
    }

    result
}

/// Check a bound visit against its field constraints.
pub fn validate_visit(visit: &Visit, result: &mut BindingResult) {
    if visit.description.trim().is_empty() {
        result.reject_value("description", "NotEmpty", "must not be empty", None);
    } else if visit.description.chars().count() > MAX_DESCRIPTION_LEN {
        result.reject_value(
            "description",
            "Size",
            format!("must be at most {MAX_DESCRIPTION_LEN} characters"),
            Some(visit.description.clone()),
        );
    }
}

/// Parse a checkbox-style boolean.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_bind_all_fields() {
        let mut visit = Visit::new();
        let result = bind_visit(
            &fields(&[
                ("date", "2024-01-05"),
                ("description", "checkup"),
                ("petId", "7"),
                ("canceled", "on"),
            ]),
            &mut visit,
        );

        assert!(!result.has_errors());
        assert_eq!(visit.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(visit.description, "checkup");
        assert_eq!(visit.pet_id, 7);
        assert!(visit.canceled);
    }

    #[test]
    fn test_id_is_dropped() {
        let mut visit = Visit::new();
        let result = bind_visit(&fields(&[("id", "99"), ("description", "x")]), &mut visit);

        assert!(!result.has_errors());
        assert_eq!(visit.id(), None);
    }

    #[test]
    fn test_type_mismatch_keeps_previous_value() {
        let mut visit = Visit::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        visit.pet_id = 7;

        let result = bind_visit(
            &fields(&[("date", "05/01/2024"), ("petId", "seven")]),
            &mut visit,
        );

        assert!(result.has_field_error("date"));
        assert!(result.has_field_error("petId"));
        assert_eq!(visit.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(visit.pet_id, 7);

        let date_error = result.field_errors("date").next().unwrap();
        assert_eq!(date_error.code, "typeMismatch");
        assert_eq!(date_error.rejected_value.as_deref(), Some("05/01/2024"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut visit = Visit::new();
        let result = bind_visit(&fields(&[("vetId", "2"), ("color", "blue")]), &mut visit);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_bad_canceled_flag() {
        let mut visit = Visit::new();
        let result = bind_visit(&fields(&[("canceled", "maybe")]), &mut visit);
        assert!(result.has_field_error("canceled"));
        assert!(!visit.canceled);
    }

    #[test]
    fn test_validate_blank_description() {
        let mut visit = Visit::new();
        visit.description = "   ".into();

        let mut result = BindingResult::new();
        validate_visit(&visit, &mut result);

        let error = result.field_errors("description").next().unwrap();
        assert_eq!(error.code, "NotEmpty");
    }

    #[test]
    fn test_validate_long_description() {
        let mut visit = Visit::new();
        visit.description = "a".repeat(MAX_DESCRIPTION_LEN + 1);

        let mut result = BindingResult::new();
        validate_visit(&visit, &mut result);
        assert_eq!(result.errors()[0].code, "Size");

        visit.description.pop();
        let mut result = BindingResult::new();
        validate_visit(&visit, &mut result);
        assert!(!result.has_errors());
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::ValidationStatus;

/// Validation state of one field: its name, outcome and a human readable message.
///
/// A passive record. Nothing here checks the values it is given; the caller
/// that ran the validation decides what goes in.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatedField {
    field_name: String,
    status: Option<ValidationStatus>,
    message: String,
}

impl ValidatedField {
    pub fn new(
        field_name: impl Into<String>,
        status: ValidationStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn valid(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field_name, ValidationStatus::Valid, message)
    }

    pub fn warning(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field_name, ValidationStatus::Warning, message)
    }

    pub fn error(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field_name, ValidationStatus::Error, message)
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn set_field_name(&mut self, field_name: impl Into<String>) {
        self.field_name = field_name.into();
    }

    /// `None` until a status has been assigned.
    pub fn status(&self) -> Option<ValidationStatus> {
        self.status
    }

    pub fn set_status(&mut self, status: ValidationStatus) {
        self.status = Some(status);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl fmt::Debug for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status.map_or("<unset>", |s| s.label());
        f.debug_struct("ValidatedField")
            .field("field_name", &self.field_name)
            .field("status", &format_args!("{status}"))
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let field = ValidatedField::default();
        assert_eq!(field.field_name(), "");
        assert_eq!(field.status(), None);
        assert_eq!(field.message(), "");
    }

    #[test]
    fn setters_are_independent() {
        let mut field = ValidatedField::default();
        field.set_field_name("username");
        assert_eq!(field.status(), None);
        field.set_status(ValidationStatus::Error);
        field.set_message("A username is required.");
        assert_eq!(field.field_name(), "username");
        assert_eq!(field.status(), Some(ValidationStatus::Error));
        assert_eq!(field.message(), "A username is required.");

        field.set_status(ValidationStatus::Valid);
        assert_eq!(field.field_name(), "username");
        assert_eq!(field.message(), "A username is required.");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let field = ValidatedField::warning("password", "weak");
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "fieldName": "password", "status": "warning", "message": "weak" })
        );
    }

    #[test]
    fn unset_status_is_null() {
        let value = serde_json::to_value(ValidatedField::default()).unwrap();
        assert_eq!(value["status"], serde_json::Value::Null);
    }

    #[test]
    fn debug_lists_every_field() {
        let field = ValidatedField::error("email", "bad");
        assert_eq!(
            format!("{field:?}"),
            r#"ValidatedField { field_name: "email", status: error, message: "bad" }"#
        );
        let unset = format!("{:?}", ValidatedField::default());
        assert!(unset.contains("status: <unset>"));
    }
}

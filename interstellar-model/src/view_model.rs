use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::ValidatedField;
use crate::status::ValidationStatus;

/// Combines a model object with the validation state of its fields.
///
/// Serializes as `{"model": ..., "validatedFields": [...]}`. Fields keep the
/// order they were added in. The field list is created empty with the view
/// model, so adding to a fresh instance never fails.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel<T> {
    model: T,
    #[serde(default)]
    validated_fields: Vec<ValidatedField>,
}

impl<T> ViewModel<T> {
    pub fn new(model: T) -> Self {
        Self {
            model,
            validated_fields: Vec::new(),
        }
    }

    pub fn model(&self) -> &T {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut T {
        &mut self.model
    }

    pub fn set_model(&mut self, model: T) {
        self.model = model;
    }

    pub fn into_model(self) -> T {
        self.model
    }

    pub fn validated_fields(&self) -> &[ValidatedField] {
        &self.validated_fields
    }

    /// Direct handle on the field list; edits through it are visible on the view model.
    pub fn validated_fields_mut(&mut self) -> &mut Vec<ValidatedField> {
        &mut self.validated_fields
    }

    pub fn set_validated_fields(&mut self, validated_fields: Vec<ValidatedField>) {
        self.validated_fields = validated_fields;
    }

    pub fn add_validated_field(&mut self, validated_field: ValidatedField) {
        self.validated_fields.push(validated_field);
    }

    /// First field reported under `field_name`. Names are not deduplicated.
    pub fn field(&self, field_name: &str) -> Option<&ValidatedField> {
        self.validated_fields
            .iter()
            .find(|f| f.field_name() == field_name)
    }

    /// Worst status across all fields. Fields without a status are skipped.
    pub fn overall_status(&self) -> ValidationStatus {
        ValidationStatus::worst(self.statuses())
    }

    pub fn has_errors(&self) -> bool {
        self.statuses().any(|s| s.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.statuses().any(|s| s.is_warning())
    }

    fn statuses(&self) -> impl Iterator<Item = ValidationStatus> + '_ {
        self.validated_fields.iter().filter_map(ValidatedField::status)
    }
}

impl<T> From<T> for ViewModel<T> {
    fn from(model: T) -> Self {
        Self::new(model)
    }
}

impl<T: fmt::Debug> fmt::Debug for ViewModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModel")
            .field("model", &self.model)
            .field("validated_fields", &self.validated_fields)
            .finish()
    }
}

use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

/// First validation message for each invalid form field, keyed by field name.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();

        for (field, errors) in errors.field_errors() {
            let Some(first) = errors.first() else {
                continue;
            };

            let message = match &first.message {
                Some(message) => message.to_string(),
                None => match first.code.as_ref() {
                    "email" => "Please enter a valid email address".to_owned(),
                    "length" => "This field is required".to_owned(),
                    code => format!("Invalid value ({code})"),
                },
            };

            fields.insert(field.to_string(), message);
        }

        fields
    }
}

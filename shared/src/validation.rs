//! Client-side form validation
//!
//! Field rules run before anything reaches the network. Each field carries at
//! most one message: the first rule that fails for it.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::resource::FieldSpec;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles")
});

static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-() ]*$").expect("phone pattern compiles"));

/// Raw text of every input in a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    /// Every field present and empty.
    pub fn blank(fields: &[FieldSpec]) -> Self {
        Self(fields.iter().map(|f| (f.name, String::new())).collect())
    }

    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Trimmed text of a field.
    pub fn text(&self, field: &str) -> String {
        self.get(field).trim().to_string()
    }
}

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    PHONE_CHARS.is_match(value)
}

/// Parse a selection control's value: empty means "none selected".
pub fn parse_reference(value: &str) -> Result<Option<i64>, std::num::ParseIntError> {
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Fluent validator over a set of form values.
pub struct Validator<'a> {
    values: &'a FormValues,
    errors: FieldErrors,
}

impl<'a> Validator<'a> {
    pub fn new(values: &'a FormValues) -> Self {
        Self {
            values,
            errors: FieldErrors::default(),
        }
    }

    /// Record an error unless the field already has one.
    pub fn error(mut self, field: &'static str, message: &str) -> Self {
        self.errors
            .0
            .entry(field)
            .or_insert_with(|| message.to_string());
        self
    }

    pub fn error_if(self, condition: bool, field: &'static str, message: &str) -> Self {
        if condition {
            self.error(field, message)
        } else {
            self
        }
    }

    /// Non-empty after trimming.
    pub fn required(self, field: &'static str, message: &str) -> Self {
        let blank = self.values.get(field).trim().is_empty();
        self.error_if(blank, field, message)
    }

    /// Email shape; blank values are left to `required`.
    pub fn email(self, field: &'static str, message: &str) -> Self {
        let value = self.values.get(field).trim();
        let bad = !value.is_empty() && !is_email(value);
        self.error_if(bad, field, message)
    }

    /// Phone character set.
    pub fn phone(self, field: &'static str, message: &str) -> Self {
        let bad = !is_phone(self.values.get(field).trim());
        self.error_if(bad, field, message)
    }

    /// Optional numeric identifier from a selection control.
    pub fn reference(self, field: &'static str, message: &str) -> Self {
        let bad = parse_reference(self.values.get(field)).is_err();
        self.error_if(bad, field, message)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Build the normalized payload only when every rule passed.
    pub fn finish_with<T>(self, build: impl FnOnce(&FormValues) -> T) -> Result<T, FieldErrors> {
        let values = self.values;
        self.finish()?;
        Ok(build(values))
    }
}

//! Error types for problem validation.
//!
//! # Design
//! The store never fails: a missing id is reported as `None` or `false`.
//! The only error the core produces is a rejected `ProblemModel`, which
//! carries every failed rule keyed by the camelCase field name so the HTTP
//! layer can return them all at once.

use std::collections::BTreeMap;

use thiserror::Error;

/// One or more validation rules failed for a `ProblemModel`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("one or more validation errors occurred: {}", summary(.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

fn summary(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .values()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

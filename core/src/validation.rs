//! Write-time rules for incoming `ProblemModel` bodies.

use crate::error::ValidationErrors;
use crate::types::ProblemModel;

pub const DESCRIPTION_REQUIRED: &str = "A problem must have a description.";
pub const TITLE_REQUIRED: &str = "A problem must have title.";

/// Check a model submitted for create or update.
///
/// Title and description must both be present and contain something other
/// than whitespace. Every failing rule is collected before returning.
pub fn validate_problem(model: &ProblemModel) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if is_blank(model.description.as_deref()) {
        errors.add("description", DESCRIPTION_REQUIRED);
    }
    if is_blank(model.title.as_deref()) {
        errors.add("title", TITLE_REQUIRED);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

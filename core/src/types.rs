//! Problem entity and its wire model.
//!
//! # Design
//! `Problem` is what the store holds. `ProblemModel` is what crosses the HTTP
//! boundary. The two are structurally identical today but are kept as
//! separate types so the JSON schema can evolve without touching the store.
//! Conversions are plain `From` impls in both directions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A problem as held by `ProblemsService`.
///
/// `id` is empty until the service assigns one on create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl Problem {
    pub fn new(title: &str, description: &str, active: bool) -> Self {
        Self {
            id: String::new(),
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            active,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn to_model(&self) -> ProblemModel {
        ProblemModel::from(self)
    }
}

/// JSON representation of a problem exchanged with clients.
///
/// Absent optional fields are left out of the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemModel {
    /// Assigned by the server; ignored on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(read_only)]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl ProblemModel {
    pub fn to_entity(&self) -> Problem {
        Problem::from(self)
    }
}

impl From<&Problem> for ProblemModel {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.has_id().then(|| problem.id.clone()),
            title: problem.title.clone(),
            description: problem.description.clone(),
            is_active: problem.active,
        }
    }
}

impl From<Problem> for ProblemModel {
    fn from(problem: Problem) -> Self {
        Self::from(&problem)
    }
}

impl From<&ProblemModel> for Problem {
    fn from(model: &ProblemModel) -> Self {
        Self {
            id: model.id.clone().unwrap_or_default(),
            title: model.title.clone(),
            description: model.description.clone(),
            active: model.is_active,
        }
    }
}

impl From<ProblemModel> for Problem {
    fn from(model: ProblemModel) -> Self {
        Self {
            id: model.id.unwrap_or_default(),
            title: model.title,
            description: model.description,
            active: model.is_active,
        }
    }
}

/// Convert a slice of stored problems into wire models, preserving order.
pub fn to_models<'a, I>(problems: I) -> Vec<ProblemModel>
where
    I: IntoIterator<Item = &'a Problem>,
{
    problems.into_iter().map(ProblemModel::from).collect()
}

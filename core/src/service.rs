//! In-memory store for problems.
//!
//! # Design
//! `ProblemsService` exclusively owns every `Problem`. It performs no
//! locking itself; callers that share it across tasks wrap it in a single
//! lock (the server uses `Arc<RwLock<ProblemsService>>`). None of the
//! operations fail. A missing id shows up as `None`, `false`, or an omitted
//! entry, and callers decide whether that is an error.
//!
//! Ids are unique within the store. Every lookup asserts that at most one
//! entry matches in debug builds.

use tracing::debug;
use uuid::Uuid;

use crate::types::Problem;

#[derive(Debug, Default)]
pub struct ProblemsService {
    problems: Vec<Problem>,
}

impl ProblemsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `problem` under a freshly generated id and return the stored copy.
    ///
    /// Any id already on `problem` is overwritten.
    pub fn create(&mut self, mut problem: Problem) -> &Problem {
        problem.id = Uuid::new_v4().to_string();
        debug!(id = %problem.id, "creating problem");
        let index = self.problems.len();
        self.problems.push(problem);
        &self.problems[index]
    }

    pub fn exists(&self, id: &str) -> bool {
        self.problems.iter().any(|problem| problem.id == id)
    }

    /// Every stored problem in insertion order.
    pub fn get_all(&self) -> &[Problem] {
        &self.problems
    }

    /// Look up each id in turn. Ids with no match are skipped.
    pub fn get_by_ids<I, S>(&self, ids: I) -> Vec<&Problem>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| self.get_by_id(id.as_ref()))
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Problem> {
        self.position(id).map(|index| &self.problems[index])
    }

    /// Delete the stored problem with the same id as `problem`.
    ///
    /// Returns `false` without touching the store if there is none.
    pub fn remove(&mut self, problem: &Problem) -> bool {
        match self.position(&problem.id) {
            Some(index) => {
                self.problems.remove(index);
                debug!(id = %problem.id, "removed problem");
                true
            }
            None => false,
        }
    }

    /// Overwrite title, description and active flag of the stored problem
    /// matching `entity.id`. The stored id never changes.
    ///
    /// Returns `false` without touching the store if there is no match.
    pub fn update(&mut self, entity: Problem) -> bool {
        let Some(index) = self.position(&entity.id) else {
            return false;
        };
        let stored = &mut self.problems[index];
        stored.title = entity.title;
        stored.description = entity.description;
        stored.active = entity.active;
        debug!(id = %stored.id, "updated problem");
        true
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        let index = self.problems.iter().position(|problem| problem.id == id)?;
        debug_assert!(
            !self.problems[index + 1..].iter().any(|problem| problem.id == id),
            "duplicate problem id {id}"
        );
        Some(index)
    }
}

//! Problem resource core: entity, wire model, validation, and store.
//!
//! # Overview
//! Everything here is synchronous and free of I/O. The HTTP layer converts
//! request bodies into `ProblemModel`, validates them, and drives a
//! `ProblemsService` it keeps behind a lock.
//!
//! # Design
//! - `Problem` (stored) and `ProblemModel` (wire) are distinct types joined
//!   by `From` impls.
//! - `ProblemsService` never errors; "not found" is an `Option` or `bool`.
//! - Validation lives beside the model, not in the store.

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

pub use error::ValidationErrors;
pub use service::ProblemsService;
pub use types::{to_models, Problem, ProblemModel};
pub use validation::validate_problem;

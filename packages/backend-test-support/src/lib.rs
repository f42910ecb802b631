//! Test helpers shared by the backend's unit and integration tests.
//!
//! Nothing here depends on backend types, so the crate can sit in
//! `[dev-dependencies]` without a cycle.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details, ProblemDetailsLike};

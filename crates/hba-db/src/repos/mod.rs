//! Repository modules implementing the tracker operations.
//!
//! Each module adds methods to `TrackerService` via `impl TrackerService`
//! blocks. Every method is one parameterized statement and one result read.

pub mod grade;
pub mod project;
pub mod student;

//! Entity structs for the tracker domain objects.
//!
//! Each entity maps to one table in the libSQL database. All structs derive
//! `Serialize` and `Deserialize` for JSON roundtrip.

mod grade;
mod project;
mod student;

pub use grade::GradeRecord;
pub use project::Project;
pub use student::Student;

use serde::{Deserialize, Serialize};

/// The grade one student received on one project.
///
/// Composite key `(student_github, project_title)`: at most one grade row
/// exists per student/project pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradeRecord {
    pub student_github: String,
    pub project_title: String,
    pub grade: i64,
}

use serde::{Deserialize, Serialize};

/// A student enrolled in the class. The github handle is the primary key
/// and is how every other table refers to the student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub github: String,
}

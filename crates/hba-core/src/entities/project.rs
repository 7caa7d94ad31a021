use serde::{Deserialize, Serialize};

/// A class project students are graded on, keyed by title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub max_grade: i64,
}

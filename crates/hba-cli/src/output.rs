//! Rendered output lines for every tracker command.
//!
//! Handlers build their full response as a `String` and the loop prints it,
//! so every message here is testable without capturing stdout.

use hba_core::entities::{GradeRecord, Project, Student};

pub fn student_info(student: &Student) -> String {
    format!(
        "Student: {} {}\nGithub account: {}",
        student.first_name, student.last_name, student.github
    )
}

pub fn student_not_found(github: &str) -> String {
    format!("No student found with github {github}.")
}

pub fn student_added(first_name: &str, last_name: &str, github: &str) -> String {
    format!("Successfully added student: {first_name} {last_name} with github {github}")
}

pub fn project_info(project: &Project) -> String {
    format!(
        "Project {}: {}\nMax grade: {}",
        project.title, project.description, project.max_grade
    )
}

pub fn project_not_found(title: &str) -> String {
    format!("No project found with title {title}.")
}

pub fn project_added(title: &str, description: &str, max_grade: i64) -> String {
    format!("Successfully added project {title}: {description}, with max grade {max_grade}.")
}

pub fn grade_info(record: &GradeRecord) -> String {
    format!(
        "Student {} received a grade of {} on project {}.",
        record.student_github, record.grade, record.project_title
    )
}

pub fn grade_not_found(github: &str, title: &str) -> String {
    format!("No grade found for {github} on project {title}.")
}

pub fn grade_updated(github: &str, title: &str, grade: i64) -> String {
    format!("Successfully updated {github}'s grade on project {title} to {grade}.")
}

pub fn grade_report_line(record: &GradeRecord) -> String {
    format!(
        "Student {} completed project {} and received a grade of {}.",
        record.student_github, record.project_title, record.grade
    )
}

pub fn no_grades_for_student() -> String {
    String::from("Sorry, that student github does not exist in the DB.")
}

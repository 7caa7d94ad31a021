use hba_db::error::DatabaseError;
use hba_db::service::TrackerService;

use crate::output;

pub async fn lookup(
    svc: &TrackerService,
    github: &str,
    title: &str,
) -> Result<String, DatabaseError> {
    match svc.get_grade(github, title).await? {
        Some(record) => Ok(output::grade_info(&record)),
        None => Ok(output::grade_not_found(github, title)),
    }
}

/// Update an existing grade row. The original tool printed a success line
/// even when no row matched; here a zero-row update reports not-found.
pub async fn assign(
    svc: &TrackerService,
    github: &str,
    title: &str,
    grade: i64,
) -> Result<String, DatabaseError> {
    let changed = svc.assign_grade(github, title, grade).await?;
    if changed == 0 {
        Ok(output::grade_not_found(github, title))
    } else {
        Ok(output::grade_updated(github, title, grade))
    }
}

pub async fn list(svc: &TrackerService, github: &str) -> Result<String, DatabaseError> {
    let records = svc.get_all_grades(github).await?;
    if records.is_empty() {
        return Ok(output::no_grades_for_student());
    }
    let lines = records
        .iter()
        .map(output::grade_report_line)
        .collect::<Vec<_>>();
    Ok(lines.join("\n"))
}

use hba_db::error::DatabaseError;
use hba_db::service::TrackerService;

use crate::output;

pub async fn lookup(svc: &TrackerService, github: &str) -> Result<String, DatabaseError> {
    match svc.get_student_by_github(github).await? {
        Some(student) => Ok(output::student_info(&student)),
        None => Ok(output::student_not_found(github)),
    }
}

pub async fn create(
    svc: &TrackerService,
    first_name: &str,
    last_name: &str,
    github: &str,
) -> Result<String, DatabaseError> {
    svc.create_student(first_name, last_name, github).await?;
    Ok(output::student_added(first_name, last_name, github))
}

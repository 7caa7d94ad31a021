//! Command handlers, one module per entity.
//!
//! Each handler performs one `TrackerService` operation and returns the
//! rendered response. Printing is the loop's job.

pub mod grade;
pub mod project;
pub mod student;

use hba_db::error::DatabaseError;
use hba_db::service::TrackerService;

use crate::repl::Command;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Command, svc: &TrackerService) -> Result<String, DatabaseError> {
    match command {
        Command::Student { github } => student::lookup(svc, &github).await,
        Command::NewStudent {
            first_name,
            last_name,
            github,
        } => student::create(svc, &first_name, &last_name, &github).await,
        Command::ProjectInfo { title } => project::lookup(svc, &title).await,
        Command::AddProject {
            title,
            description,
            max_grade,
        } => project::create(svc, &title, &description, max_grade).await,
        Command::GetGrade { github, title } => grade::lookup(svc, &github, &title).await,
        Command::AssignGrade {
            github,
            title,
            grade,
        } => grade::assign(svc, &github, &title, grade).await,
        Command::GetAllGrades { github } => grade::list(svc, &github).await,
        // `quit` never reaches dispatch; the loop handles it.
        Command::Quit => Ok(String::new()),
    }
}

//! Project repository — lookup and insert by title.

use hba_core::entities::Project;

use crate::error::DatabaseError;
use crate::service::TrackerService;

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        title: row.get::<String>(0)?,
        description: row.get::<String>(1)?,
        max_grade: row.get::<i64>(2)?,
    })
}

impl TrackerService {
    /// Look up a project by title. Returns `None` when no row matches.
    pub async fn get_project_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT title, description, max_grade FROM projects WHERE title = ?1",
                [title],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_project(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a new project row.
    ///
    /// # Errors
    ///
    /// A duplicate title surfaces the database constraint error.
    pub async fn create_project(
        &self,
        title: &str,
        description: &str,
        max_grade: i64,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO projects (title, description, max_grade) VALUES (?1, ?2, ?3)",
                libsql::params![title, description, max_grade],
            )
            .await?;
        tracing::debug!(title, "created project");
        Ok(())
    }
}

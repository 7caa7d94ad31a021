//! Student repository — lookup and insert by github handle.

use hba_core::entities::Student;

use crate::error::DatabaseError;
use crate::service::TrackerService;

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        first_name: row.get::<String>(0)?,
        last_name: row.get::<String>(1)?,
        github: row.get::<String>(2)?,
    })
}

impl TrackerService {
    /// Look up a student by github handle. Returns `None` when no row matches.
    pub async fn get_student_by_github(
        &self,
        github: &str,
    ) -> Result<Option<Student>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT first_name, last_name, github FROM students WHERE github = ?1",
                [github],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_student(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a new student row.
    ///
    /// # Errors
    ///
    /// A duplicate github handle surfaces the database constraint error.
    pub async fn create_student(
        &self,
        first_name: &str,
        last_name: &str,
        github: &str,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO students (first_name, last_name, github) VALUES (?1, ?2, ?3)",
                libsql::params![first_name, last_name, github],
            )
            .await?;
        tracing::debug!(github, "created student");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_then_get_student() {
        let svc = test_service().await;
        svc.create_student("Jane", "Doe", "janedoe").await.unwrap();

        let student = svc
            .get_student_by_github("janedoe")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(student.first_name, "Jane");
        assert_eq!(student.last_name, "Doe");
        assert_eq!(student.github, "janedoe");
    }

    #[tokio::test]
    async fn get_missing_student_is_none() {
        let svc = test_service().await;
        let student = svc.get_student_by_github("nobody").await.unwrap();
        assert!(student.is_none());
    }

    #[tokio::test]
    async fn duplicate_github_errors() {
        let svc = test_service().await;
        svc.create_student("Jane", "Doe", "janedoe").await.unwrap();

        let result = svc.create_student("John", "Roe", "janedoe").await;
        assert!(result.is_err(), "duplicate handle should be rejected");
    }
}

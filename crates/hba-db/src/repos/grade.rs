//! Grade repository — lookup, update, and per-student listing.

use hba_core::entities::GradeRecord;

use crate::error::DatabaseError;
use crate::service::TrackerService;

fn row_to_grade(row: &libsql::Row) -> Result<GradeRecord, DatabaseError> {
    Ok(GradeRecord {
        student_github: row.get::<String>(0)?,
        project_title: row.get::<String>(1)?,
        grade: row.get::<i64>(2)?,
    })
}

impl TrackerService {
    /// Look up the grade one student received on one project.
    /// Returns `None` when no row matches the pair.
    pub async fn get_grade(
        &self,
        github: &str,
        title: &str,
    ) -> Result<Option<GradeRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT student_github, project_title, grade FROM grades
                 WHERE student_github = ?1 AND project_title = ?2",
                libsql::params![github, title],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_grade(&row)?)),
            None => Ok(None),
        }
    }

    /// Update the grade row matching the (student, project) pair.
    ///
    /// Returns the number of rows changed: 0 means no such pair exists and
    /// nothing was written. Callers decide how to report that.
    pub async fn assign_grade(
        &self,
        github: &str,
        title: &str,
        grade: i64,
    ) -> Result<u64, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE grades SET grade = ?3
                 WHERE student_github = ?1 AND project_title = ?2",
                libsql::params![github, title, grade],
            )
            .await?;
        tracing::debug!(github, title, grade, changed, "assigned grade");
        Ok(changed)
    }

    /// List every grade row for one student, ordered by project title.
    /// An unknown handle simply yields an empty vec.
    pub async fn get_all_grades(&self, github: &str) -> Result<Vec<GradeRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT student_github, project_title, grade FROM grades
                 WHERE student_github = ?1 ORDER BY project_title",
                [github],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_grade(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{seed_student_and_project, test_service};

    async fn insert_grade(svc: &crate::service::TrackerService, grade: i64) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO grades (student_github, project_title, grade)
                 VALUES ('janedoe', 'Project1', ?1)",
                [grade],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_grade_returns_row() {
        let svc = test_service().await;
        seed_student_and_project(&svc).await;
        insert_grade(&svc, 88).await;

        let record = svc.get_grade("janedoe", "Project1").await.unwrap().unwrap();
        assert_eq!(record.student_github, "janedoe");
        assert_eq!(record.project_title, "Project1");
        assert_eq!(record.grade, 88);
    }

    #[tokio::test]
    async fn get_missing_grade_is_none() {
        let svc = test_service().await;
        seed_student_and_project(&svc).await;

        let record = svc.get_grade("janedoe", "Project1").await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn assign_grade_updates_existing_row() {
        let svc = test_service().await;
        seed_student_and_project(&svc).await;
        insert_grade(&svc, 70).await;

        let changed = svc.assign_grade("janedoe", "Project1", 95).await.unwrap();
        assert_eq!(changed, 1);

        let record = svc.get_grade("janedoe", "Project1").await.unwrap().unwrap();
        assert_eq!(record.grade, 95);
    }

    #[tokio::test]
    async fn assign_grade_without_row_changes_nothing() {
        let svc = test_service().await;
        seed_student_and_project(&svc).await;

        let changed = svc.assign_grade("janedoe", "Project1", 95).await.unwrap();
        assert_eq!(changed, 0, "no matching pair should report zero rows");

        let all = svc.get_all_grades("janedoe").await.unwrap();
        assert!(all.is_empty(), "update must not create a grade row");
    }

    #[tokio::test]
    async fn get_all_grades_lists_every_row() {
        let svc = test_service().await;
        seed_student_and_project(&svc).await;
        svc.create_project("Project2", "second", 50).await.unwrap();
        insert_grade(&svc, 95).await;
        svc.db()
            .conn()
            .execute(
                "INSERT INTO grades (student_github, project_title, grade)
                 VALUES ('janedoe', 'Project2', 42)",
                (),
            )
            .await
            .unwrap();

        let all = svc.get_all_grades("janedoe").await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].project_title, "Project1");
        assert_eq!(all[0].grade, 95);
        assert_eq!(all[1].project_title, "Project2");
        assert_eq!(all[1].grade, 42);
    }

    #[tokio::test]
    async fn get_all_grades_empty_for_unknown_handle() {
        let svc = test_service().await;
        let all = svc.get_all_grades("ghost").await.unwrap();
        assert!(all.is_empty());
    }
}

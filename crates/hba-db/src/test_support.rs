//! Shared test utilities for hba-db tests.

pub(crate) mod helpers {
    use crate::HbaDb;
    use crate::service::TrackerService;

    /// Create an in-memory `TrackerService`.
    pub async fn test_service() -> TrackerService {
        let db = HbaDb::open_local(":memory:").await.unwrap();
        TrackerService::from_db(db)
    }

    /// Insert a student and project so grade rows have rows to reference.
    pub async fn seed_student_and_project(svc: &TrackerService) {
        svc.create_student("Jane", "Doe", "janedoe").await.unwrap();
        svc.create_project("Project1", "desc", 100).await.unwrap();
    }
}

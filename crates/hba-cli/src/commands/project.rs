use hba_db::error::DatabaseError;
use hba_db::service::TrackerService;

use crate::output;

pub async fn lookup(svc: &TrackerService, title: &str) -> Result<String, DatabaseError> {
    match svc.get_project_by_title(title).await? {
        Some(project) => Ok(output::project_info(&project)),
        None => Ok(output::project_not_found(title)),
    }
}

pub async fn create(
    svc: &TrackerService,
    title: &str,
    description: &str,
    max_grade: i64,
) -> Result<String, DatabaseError> {
    svc.create_project(title, description, max_grade).await?;
    Ok(output::project_added(title, description, max_grade))
}

#[cfg(test)]
mod tests {
    use hba_db::service::TrackerService;

    use super::{create, lookup};

    async fn test_service() -> TrackerService {
        TrackerService::new_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn create_then_lookup_renders_both_lines() {
        let svc = test_service().await;

        let added = create(&svc, "Markov", "Trigram generator", 100)
            .await
            .unwrap();
        assert_eq!(
            added,
            "Successfully added project Markov: Trigram generator, with max grade 100."
        );

        let info = lookup(&svc, "Markov").await.unwrap();
        assert_eq!(info, "Project Markov: Trigram generator\nMax grade: 100");
    }

    #[tokio::test]
    async fn lookup_missing_project_renders_not_found() {
        let svc = test_service().await;
        let info = lookup(&svc, "Nothing").await.unwrap();
        assert_eq!(info, "No project found with title Nothing.");
    }
}

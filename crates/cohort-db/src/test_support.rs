//! Shared test utilities for cohort-db unit tests.

pub(crate) mod helpers {
    use cohort_core::entities::{NewCohort, NewStudent};

    use crate::RecordStore;

    /// Create an in-memory store with the schema applied.
    pub async fn test_store() -> RecordStore {
        RecordStore::open_local(":memory:").await.unwrap()
    }

    /// A valid cohort payload with the given slug.
    pub fn sample_cohort(slug: &str) -> NewCohort {
        NewCohort::new(slug, format!("Cohort {slug}"), "Sally Daher", "Florian Aube")
    }

    /// A valid student payload with the given email and no cohort.
    pub fn sample_student(email: &str) -> NewStudent {
        NewStudent::new("Christine", "Clayton", email, "567-890-1234")
    }
}

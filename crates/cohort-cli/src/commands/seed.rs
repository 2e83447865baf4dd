//! Bulk import of cohorts and students from JSON arrays.
//!
//! Each entry is a create payload plus an optional `_id`. Supplied ids are
//! kept so that students can reference cohorts from the same data set.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use cohort_config::AppConfig;
use cohort_core::entities::{NewCohort, NewStudent};
use cohort_db::RecordStore;
use cohort_db::error::DatabaseError;

use crate::cli::SeedArgs;

#[derive(Debug, Deserialize)]
struct SeedEntry<T> {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(flatten)]
    record: T,
}

/// Outcome of importing one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub failed: usize,
}

pub async fn handle(args: &SeedArgs, config: &AppConfig) -> anyhow::Result<()> {
    if args.cohorts.is_none() && args.students.is_none() {
        anyhow::bail!("nothing to seed: pass --cohorts and/or --students");
    }

    let mut database = config.database.clone();
    if let Some(url) = &args.database {
        database.url.clone_from(url);
    }
    let store = RecordStore::open(&database)
        .await
        .with_context(|| format!("failed to open record store at {}", database.url))?;

    // Cohorts first so student references resolve.
    if let Some(path) = &args.cohorts {
        let report = seed_cohorts(&store, read_entries(path)?).await;
        tracing::info!(
            file = %path.display(),
            inserted = report.inserted,
            failed = report.failed,
            "cohorts seeded"
        );
    }
    if let Some(path) = &args.students {
        let report = seed_students(&store, read_entries(path)?).await;
        tracing::info!(
            file = %path.display(),
            inserted = report.inserted,
            failed = report.failed,
            "students seeded"
        );
    }

    Ok(())
}

fn read_entries<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<SeedEntry<T>>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))
}

async fn seed_cohorts(store: &RecordStore, entries: Vec<SeedEntry<NewCohort>>) -> SeedReport {
    let mut report = SeedReport::default();
    for entry in entries {
        let slug = entry.record.cohort_slug.clone();
        let result = match entry.id {
            Some(id) => store.create_cohort_with_id(&id, entry.record).await,
            None => store.create_cohort(entry.record).await,
        };
        tally(&mut report, "cohort", &slug, result.map(|_| ()));
    }
    report
}

async fn seed_students(store: &RecordStore, entries: Vec<SeedEntry<NewStudent>>) -> SeedReport {
    let mut report = SeedReport::default();
    for entry in entries {
        let email = entry.record.email.clone();
        let result = match entry.id {
            Some(id) => store.create_student_with_id(&id, entry.record).await,
            None => store.create_student(entry.record).await,
        };
        tally(&mut report, "student", &email, result.map(|_| ()));
    }
    report
}

fn tally(report: &mut SeedReport, kind: &str, key: &str, result: Result<(), DatabaseError>) {
    match result {
        Ok(()) => report.inserted += 1,
        Err(error) => {
            tracing::warn!(kind, key, %error, "skipping seed entry");
            report.failed += 1;
        }
    }
}

//! Cohort repository — CRUD over the `cohorts` collection.

use chrono::Utc;

use cohort_core::entities::{Cohort, NewCohort};
use cohort_core::enums::{Campus, EntityType, Format, Program};
use cohort_core::ids::check_id;

use crate::RecordStore;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_datetime, parse_optional_enum};
use crate::updates::cohort::CohortUpdate;

const SELECT_COLS: &str = "id, cohort_slug, cohort_name, program, format, campus, start_date, \
     end_date, in_progress, program_manager, lead_teacher, total_hours";

fn row_to_cohort(row: &libsql::Row) -> Result<Cohort, DatabaseError> {
    Ok(Cohort {
        id: row.get(0)?,
        cohort_slug: row.get(1)?,
        cohort_name: row.get(2)?,
        program: parse_optional_enum(get_opt_string(row, 3)?.as_deref())?,
        format: parse_optional_enum(get_opt_string(row, 4)?.as_deref())?,
        campus: parse_optional_enum(get_opt_string(row, 5)?.as_deref())?,
        start_date: parse_datetime(&row.get::<String>(6)?)?,
        end_date: parse_optional_datetime(get_opt_string(row, 7)?.as_deref())?,
        in_progress: row.get::<i64>(8)? != 0,
        program_manager: row.get(9)?,
        lead_teacher: row.get(10)?,
        total_hours: row.get(11)?,
    })
}

impl RecordStore {
    /// Insert a cohort under a freshly generated id.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for empty required fields,
    /// `DatabaseError::Duplicate` if the slug is taken.
    pub async fn create_cohort(&self, new: NewCohort) -> Result<Cohort, DatabaseError> {
        new.validate()?;
        let id = self.generate_id().await?;
        self.insert_cohort(id, new).await
    }

    /// Insert a cohort under a caller-chosen id (used when importing data
    /// whose students already reference cohort ids).
    ///
    /// # Errors
    ///
    /// As [`create_cohort`](Self::create_cohort), plus `Validation` for a
    /// malformed id and `Duplicate` for an id already in use.
    pub async fn create_cohort_with_id(
        &self,
        id: &str,
        new: NewCohort,
    ) -> Result<Cohort, DatabaseError> {
        let id = check_id(id)?;
        new.validate()?;
        self.insert_cohort(id, new).await
    }

    async fn insert_cohort(&self, id: String, new: NewCohort) -> Result<Cohort, DatabaseError> {
        let now = Utc::now();
        let cohort = new.into_cohort(id, now);

        self.conn()
            .execute(
                "INSERT INTO cohorts (id, cohort_slug, cohort_name, program, format, campus, start_date, end_date, in_progress, program_manager, lead_teacher, total_hours, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                libsql::params![
                    cohort.id.as_str(),
                    cohort.cohort_slug.as_str(),
                    cohort.cohort_name.as_str(),
                    cohort.program.map(Program::as_str),
                    cohort.format.map(Format::as_str),
                    cohort.campus.map(Campus::as_str),
                    cohort.start_date.to_rfc3339(),
                    cohort.end_date.map(|d| d.to_rfc3339()),
                    i64::from(cohort.in_progress),
                    cohort.program_manager.as_str(),
                    cohort.lead_teacher.as_str(),
                    cohort.total_hours,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, EntityType::Cohort))?;

        tracing::debug!(id = %cohort.id, slug = %cohort.cohort_slug, "cohort created");
        Ok(cohort)
    }

    /// All cohorts in insertion order.
    pub async fn list_cohorts(&self) -> Result<Vec<Cohort>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM cohorts ORDER BY rowid"),
                (),
            )
            .await?;

        let mut cohorts = Vec::new();
        while let Some(row) = rows.next().await? {
            cohorts.push(row_to_cohort(&row)?);
        }
        Ok(cohorts)
    }

    /// Look up a cohort, returning `None` if no record has this id.
    pub async fn find_cohort(&self, id: &str) -> Result<Option<Cohort>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM cohorts WHERE id = ?1"),
                [id.to_ascii_lowercase()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_cohort(&row)?)),
            None => Ok(None),
        }
    }

    /// Look up a cohort that must exist.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NoResult` if no record has this id.
    pub async fn get_cohort(&self, id: &str) -> Result<Cohort, DatabaseError> {
        self.find_cohort(id).await?.ok_or(DatabaseError::NoResult)
    }

    /// Apply the supplied fields to a cohort and return the updated record.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NoResult` if no record has this id; `Validation` or
    /// `Duplicate` if the new values are rejected.
    pub async fn update_cohort(
        &self,
        id: &str,
        update: CohortUpdate,
    ) -> Result<Cohort, DatabaseError> {
        let id = id.to_ascii_lowercase();
        let sets = update.into_set_clauses()?;
        if sets.is_empty() {
            return self.get_cohort(&id).await;
        }

        let (sql, params) = sets.into_update("cohorts", &id);
        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| DatabaseError::from_write(e, EntityType::Cohort))?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::debug!(%id, "cohort updated");
        self.get_cohort(&id).await
    }

    /// Remove a cohort. Returns the number of records removed (0 or 1).
    ///
    /// Students referencing the cohort keep their (now dangling) reference.
    pub async fn delete_cohort(&self, id: &str) -> Result<u64, DatabaseError> {
        let removed = self
            .conn()
            .execute(
                "DELETE FROM cohorts WHERE id = ?1",
                [id.to_ascii_lowercase()],
            )
            .await?;
        tracing::debug!(id, removed, "cohort delete");
        Ok(removed)
    }
}

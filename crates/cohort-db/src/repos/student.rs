//! Student repository — CRUD, cohort population, and lookup by cohort.

use cohort_core::entities::{NewStudent, PopulatedStudent, Student};
use cohort_core::enums::{EntityType, Language, Program};
use cohort_core::ids::check_id;

use crate::RecordStore;
use crate::error::DatabaseError;
use crate::helpers::{encode_string_list, get_opt_string, parse_optional_enum, parse_string_list};
use crate::updates::student::StudentUpdate;

const SELECT_COLS: &str = "id, first_name, last_name, email, phone, linkedin_url, languages, \
     program, background, image, cohort_id, projects";

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        linkedin_url: row.get(5)?,
        languages: parse_optional_enum(get_opt_string(row, 6)?.as_deref())?,
        program: parse_optional_enum(get_opt_string(row, 7)?.as_deref())?,
        background: row.get(8)?,
        image: row.get(9)?,
        cohort: get_opt_string(row, 10)?,
        projects: parse_string_list(&row.get::<String>(11)?)?,
    })
}

impl RecordStore {
    /// Insert a student under a freshly generated id.
    ///
    /// The cohort reference is only checked for shape; whether it resolves
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for empty required fields or a malformed
    /// cohort reference, `DatabaseError::Duplicate` if the email is taken.
    pub async fn create_student(&self, new: NewStudent) -> Result<Student, DatabaseError> {
        new.validate()?;
        let id = self.generate_id().await?;
        self.insert_student(id, new).await
    }

    /// Insert a student under a caller-chosen id.
    ///
    /// # Errors
    ///
    /// As [`create_student`](Self::create_student), plus `Validation` for a
    /// malformed id.
    pub async fn create_student_with_id(
        &self,
        id: &str,
        new: NewStudent,
    ) -> Result<Student, DatabaseError> {
        let id = check_id(id)?;
        new.validate()?;
        self.insert_student(id, new).await
    }

    async fn insert_student(&self, id: String, new: NewStudent) -> Result<Student, DatabaseError> {
        let student = new.into_student(id);
        let now = chrono::Utc::now().to_rfc3339();

        self.conn()
            .execute(
                "INSERT INTO students (id, first_name, last_name, email, phone, linkedin_url, languages, program, background, image, cohort_id, projects, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                libsql::params![
                    student.id.as_str(),
                    student.first_name.as_str(),
                    student.last_name.as_str(),
                    student.email.as_str(),
                    student.phone.as_str(),
                    student.linkedin_url.as_str(),
                    student.languages.map(Language::as_str),
                    student.program.map(Program::as_str),
                    student.background.as_str(),
                    student.image.as_str(),
                    student.cohort.as_deref(),
                    encode_string_list(&student.projects)?,
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, EntityType::Student))?;

        tracing::debug!(id = %student.id, cohort = ?student.cohort, "student created");
        Ok(student)
    }

    /// All students in insertion order, cohort references unexpanded.
    pub async fn list_students(&self) -> Result<Vec<Student>, DatabaseError> {
        self.query_students(
            &format!("SELECT {SELECT_COLS} FROM students ORDER BY rowid"),
            Vec::new(),
        )
        .await
    }

    /// Students whose cohort reference equals `cohort_id`, in insertion order.
    ///
    /// Returns an empty list when nobody references the cohort.
    pub async fn list_students_by_cohort(
        &self,
        cohort_id: &str,
    ) -> Result<Vec<Student>, DatabaseError> {
        self.query_students(
            &format!("SELECT {SELECT_COLS} FROM students WHERE cohort_id = ?1 ORDER BY rowid"),
            vec![cohort_id.to_ascii_lowercase().into()],
        )
        .await
    }

    async fn query_students(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Student>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(sql, libsql::params_from_iter(params))
            .await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }
        Ok(students)
    }

    /// Look up a student, returning `None` if no record has this id.
    pub async fn find_student(&self, id: &str) -> Result<Option<Student>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM students WHERE id = ?1"),
                [id.to_ascii_lowercase()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_student(&row)?)),
            None => Ok(None),
        }
    }

    /// Look up a student that must exist.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NoResult` if no record has this id.
    pub async fn get_student(&self, id: &str) -> Result<Student, DatabaseError> {
        self.find_student(id).await?.ok_or(DatabaseError::NoResult)
    }

    /// Look up a student and expand its cohort reference.
    ///
    /// A reference to a cohort that no longer exists expands to `None`.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NoResult` if no student has this id.
    pub async fn get_student_populated(
        &self,
        id: &str,
    ) -> Result<PopulatedStudent, DatabaseError> {
        let student = self.get_student(id).await?;
        let cohort = match student.cohort.as_deref() {
            Some(cohort_id) => self.find_cohort(cohort_id).await?,
            None => None,
        };
        if student.cohort.is_some() && cohort.is_none() {
            tracing::debug!(id = %student.id, cohort = ?student.cohort, "dangling cohort reference");
        }
        Ok(student.populate(cohort))
    }

    /// Apply the supplied fields to a student and return the updated record.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NoResult` if no record has this id; `Validation` or
    /// `Duplicate` if the new values are rejected.
    pub async fn update_student(
        &self,
        id: &str,
        update: StudentUpdate,
    ) -> Result<Student, DatabaseError> {
        let id = id.to_ascii_lowercase();
        let sets = update.into_set_clauses()?;
        if sets.is_empty() {
            return self.get_student(&id).await;
        }

        let (sql, params) = sets.into_update("students", &id);
        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| DatabaseError::from_write(e, EntityType::Student))?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::debug!(%id, "student updated");
        self.get_student(&id).await
    }

    /// Remove a student. Returns the number of records removed (0 or 1).
    pub async fn delete_student(&self, id: &str) -> Result<u64, DatabaseError> {
        let removed = self
            .conn()
            .execute(
                "DELETE FROM students WHERE id = ?1",
                [id.to_ascii_lowercase()],
            )
            .await?;
        tracing::debug!(id, removed, "student delete");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{sample_cohort, sample_student, test_store};
    use crate::updates::student::StudentUpdateBuilder;

    #[tokio::test]
    async fn create_student_roundtrip() {
        let store = test_store().await;
        let new = NewStudent {
            languages: Some(Language::Portuguese),
            program: Some(Program::UxUi),
            projects: vec!["portfolio".into(), "landing page".into()],
            ..sample_student("ana@example.com")
        };

        let created = store.create_student(new).await.unwrap();
        assert_eq!(created.id.len(), 24);

        let fetched = store.get_student(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.projects, ["portfolio", "landing page"]);
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let store = test_store().await;
        store
            .create_student(sample_student("a@x.com"))
            .await
            .unwrap();

        let err = store
            .create_student(sample_student("a@x.com"))
            .await
            .unwrap_err();
        match err {
            DatabaseError::Duplicate { entity, constraint } => {
                assert_eq!(entity, EntityType::Student);
                assert!(constraint.contains("students.email"), "{constraint}");
            }
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_cohort_reference_rejected() {
        let store = test_store().await;
        let new = sample_student("a@x.com").with_cohort("cohort-1");
        let err = store.create_student(new).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)), "{err:?}");
    }

    #[tokio::test]
    async fn populate_expands_cohort() {
        let store = test_store().await;
        let cohort = store.create_cohort(sample_cohort("slug")).await.unwrap();
        let student = store
            .create_student(sample_student("a@x.com").with_cohort(cohort.id.clone()))
            .await
            .unwrap();

        let populated = store.get_student_populated(&student.id).await.unwrap();
        assert_eq!(populated.cohort, Some(cohort));
        assert_eq!(populated.email, "a@x.com");
    }

    #[tokio::test]
    async fn populate_without_reference() {
        let store = test_store().await;
        let student = store
            .create_student(sample_student("a@x.com"))
            .await
            .unwrap();
        let populated = store.get_student_populated(&student.id).await.unwrap();
        assert_eq!(populated.cohort, None);
    }

    #[tokio::test]
    async fn deleting_cohort_leaves_dangling_reference() {
        let store = test_store().await;
        let cohort = store.create_cohort(sample_cohort("slug")).await.unwrap();
        let student = store
            .create_student(sample_student("a@x.com").with_cohort(cohort.id.clone()))
            .await
            .unwrap();

        store.delete_cohort(&cohort.id).await.unwrap();

        let stored = store.get_student(&student.id).await.unwrap();
        assert_eq!(stored.cohort.as_deref(), Some(cohort.id.as_str()));
        let populated = store.get_student_populated(&student.id).await.unwrap();
        assert_eq!(populated.cohort, None);
    }

    #[tokio::test]
    async fn list_by_cohort_filters_and_keeps_order() {
        let store = test_store().await;
        let a = store.create_cohort(sample_cohort("a")).await.unwrap();
        let b = store.create_cohort(sample_cohort("b")).await.unwrap();

        for (email, cohort) in [
            ("1@x.com", &a),
            ("2@x.com", &b),
            ("3@x.com", &a),
        ] {
            store
                .create_student(sample_student(email).with_cohort(cohort.id.clone()))
                .await
                .unwrap();
        }
        store
            .create_student(sample_student("4@x.com"))
            .await
            .unwrap();

        let emails: Vec<_> = store
            .list_students_by_cohort(&a.id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.email)
            .collect();
        assert_eq!(emails, ["1@x.com", "3@x.com"]);
        assert_eq!(store.list_students().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn list_by_cohort_empty_for_unreferenced_cohort() {
        let store = test_store().await;
        let cohort = store.create_cohort(sample_cohort("empty")).await.unwrap();
        assert!(store
            .list_students_by_cohort(&cohort.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn update_student_partial() {
        let store = test_store().await;
        let cohort = store.create_cohort(sample_cohort("slug")).await.unwrap();
        let created = store
            .create_student(sample_student("a@x.com"))
            .await
            .unwrap();

        let update = StudentUpdateBuilder::new()
            .phone("555-0100")
            .cohort(Some(cohort.id.to_ascii_uppercase()))
            .projects(vec!["capstone".into()])
            .build();
        let updated = store.update_student(&created.id, update).await.unwrap();

        assert_eq!(updated.phone, "555-0100");
        assert_eq!(updated.cohort.as_deref(), Some(cohort.id.as_str()));
        assert_eq!(updated.projects, ["capstone"]);
        assert_eq!(updated.first_name, created.first_name);
    }

    #[tokio::test]
    async fn update_to_taken_email_rejected() {
        let store = test_store().await;
        store
            .create_student(sample_student("taken@x.com"))
            .await
            .unwrap();
        let other = store
            .create_student(sample_student("free@x.com"))
            .await
            .unwrap();

        let update = StudentUpdateBuilder::new().email("taken@x.com").build();
        let err = store.update_student(&other.id, update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Duplicate { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn update_missing_student_is_no_result() {
        let store = test_store().await;
        let update = StudentUpdateBuilder::new().phone("1").build();
        let err = store
            .update_student("0123456789abcdef01234567", update)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn delete_student_is_unconditional() {
        let store = test_store().await;
        let created = store
            .create_student(sample_student("a@x.com"))
            .await
            .unwrap();

        assert_eq!(store.delete_student(&created.id).await.unwrap(), 1);
        assert!(store.find_student(&created.id).await.unwrap().is_none());
        assert_eq!(store.delete_student(&created.id).await.unwrap(), 0);
    }
}

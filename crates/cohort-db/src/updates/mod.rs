//! Update types for record mutations.
//!
//! Each update struct has `Option` fields; only `Some` fields generate SET
//! clauses in the dynamic UPDATE SQL. They deserialize straight from a PUT
//! body, so a field the client leaves out is left untouched. Nullable
//! columns use `Option<Option<T>>`: absent means "keep", `null` means "clear".

pub mod cohort;
pub mod student;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (even `null`) as `Some(..)`.
///
/// Paired with `#[serde(default)]`, an absent field stays `None`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Accumulates `column = ?N` fragments and their bound values.
#[derive(Default)]
pub(crate) struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    pub(crate) fn push(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    pub(crate) fn push_nullable<V: Into<libsql::Value>>(&mut self, column: &str, value: Option<V>) {
        self.push(column, value.map_or(libsql::Value::Null, Into::into));
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finish as `UPDATE {table} SET ... WHERE id = ?N`, binding `id` last.
    pub(crate) fn into_update(mut self, table: &str, id: &str) -> (String, Vec<libsql::Value>) {
        self.push("updated_at", chrono::Utc::now().to_rfc3339());
        self.params.push(id.into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clauses_number_params_in_order() {
        let mut sets = SetClauses::default();
        assert!(sets.is_empty());
        sets.push("cohort_name", "Renamed");
        sets.push_nullable::<String>("end_date", None);

        let (sql, params) = sets.into_update("cohorts", "65f1c2a9b3d4e5f60718293a");
        assert_eq!(
            sql,
            "UPDATE cohorts SET cohort_name = ?1, end_date = ?2, updated_at = ?3 WHERE id = ?4"
        );
        assert_eq!(params.len(), 4);
        assert!(matches!(params[1], libsql::Value::Null));
    }
}

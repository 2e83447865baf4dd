//! Entity structs for cohorts and students.
//!
//! Each entity maps to a table in the record store. Field names serialize as
//! camelCase and the store-assigned identifier as `_id`, so payloads match
//! what existing frontends already send and read.

mod cohort;
mod student;

pub use cohort::{Cohort, NewCohort, DEFAULT_TOTAL_HOURS};
pub use student::{NewStudent, PopulatedStudent, Student, DEFAULT_IMAGE_URL};

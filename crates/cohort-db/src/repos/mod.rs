//! Repository modules implementing CRUD operations for cohorts and students.
//!
//! Each module adds methods to `RecordStore` via `impl RecordStore` blocks.

pub mod cohort;
pub mod student;

//! # cohort-core
//!
//! Core types, identifier format, and error types for the cohort tools API.
//!
//! This crate provides the foundational types shared across the workspace:
//! - Entity structs for cohorts and students, plus their create payloads
//! - Fixed-value enums (program, format, campus, spoken language)
//! - Identifier format checks for store-assigned ids
//! - Required-field validation shared by create and update payloads
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod validation;

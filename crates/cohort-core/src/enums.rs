//! Fixed-value enums for cohort and student records.
//!
//! Every enum serializes to its human-readable label (`"Web Dev"`,
//! `"Full Time"`, ...). The same label is what gets stored in SQL, so
//! `as_str()` and the serde representation must stay in lockstep.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Program
// ---------------------------------------------------------------------------

/// Bootcamp program a cohort runs or a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Program {
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "UX/UI")]
    UxUi,
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
}

impl Program {
    pub const ALL: [Self; 4] = [
        Self::WebDev,
        Self::UxUi,
        Self::DataAnalytics,
        Self::Cybersecurity,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebDev => "Web Dev",
            Self::UxUi => "UX/UI",
            Self::DataAnalytics => "Data Analytics",
            Self::Cybersecurity => "Cybersecurity",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// Schedule format of a cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Format {
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
}

impl Format {
    pub const ALL: [Self; 2] = [Self::FullTime, Self::PartTime];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Campus
// ---------------------------------------------------------------------------

/// Campus city, or `Remote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Campus {
    Madrid,
    Barcelona,
    Miami,
    Paris,
    Berlin,
    Amsterdam,
    Lisbon,
    Remote,
}

impl Campus {
    pub const ALL: [Self; 8] = [
        Self::Madrid,
        Self::Barcelona,
        Self::Miami,
        Self::Paris,
        Self::Berlin,
        Self::Amsterdam,
        Self::Lisbon,
        Self::Remote,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Madrid => "Madrid",
            Self::Barcelona => "Barcelona",
            Self::Miami => "Miami",
            Self::Paris => "Paris",
            Self::Berlin => "Berlin",
            Self::Amsterdam => "Amsterdam",
            Self::Lisbon => "Lisbon",
            Self::Remote => "Remote",
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Spoken language of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Dutch,
    Other,
}

impl Language {
    pub const ALL: [Self; 7] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Portuguese,
        Self::Dutch,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Portuguese => "Portuguese",
            Self::Dutch => "Dutch",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kind of record, used in error messages and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Cohort,
    Student,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cohort => "Cohort",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

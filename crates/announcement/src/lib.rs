//! Submission boundary for Tawasul notices.
//!
//! This crate provides **domain types**, **wire models** and **translation helpers** for the
//! notices submitted through the public form:
//! - death announcements (the memorial record composed into card text)
//! - blood-donation requests
//! - condolence-thank-you notices
//! - prayer requests for the sick
//! - the daily prayer-times card
//!
//! This crate focuses on:
//! - strict YAML/JSON deserialisation with field-path error reporting
//! - accepting both the English tags and the Arabic labels used by the form
//! - rejecting structurally invalid input before any text is composed
//!
//! It does not compose text; see `tawasul-core`.

pub mod notices;
pub mod record;
pub mod submission;
pub mod validation;

// Re-export facades
pub use submission::{Submission, SubmissionCategory, SubmissionData};

// Re-export public domain-level types
pub use notices::{
    last_third_of_night, BloodDonationData, BloodType, CondolenceThanksData, DonationContact,
    Prayer, PrayerRequestData, PrayerTimesData,
};
pub use record::{
    AnnouncementRecord, BurialInfo, BurialTime, Condolence, Contact, Gender, GraveLocation,
    Reception, ReceptionDay, Relative, RelationshipKind, RelativeGroup, TimePoint, TimeRange,
    Weekday,
};

pub use tawasul_types::{NonEmptyText, PersonalId, PhoneNumber, TextError};

/// Errors returned by the `announcement` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum AnnouncementError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("invalid gender: {0}")]
    InvalidGender(String),

    #[error("unknown relationship: {0}")]
    UnknownRelationship(String),

    #[error("unknown time kind: {0}")]
    UnknownTimeKind(String),

    #[error("unknown burial mode: {0}")]
    UnknownBurialMode(String),

    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("invalid clock time (expected HH:MM): {0}")]
    InvalidClockTime(String),

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("grave number and plot must be given together")]
    IncompleteGrave,
}

/// Type alias for Results that can fail with an [`AnnouncementError`].
pub type AnnouncementResult<T> = Result<T, AnnouncementError>;

impl From<TextError> for AnnouncementError {
    fn from(e: TextError) -> Self {
        AnnouncementError::InvalidInput(e.to_string())
    }
}

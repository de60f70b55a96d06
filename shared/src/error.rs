//! Error taxonomy for the reservation calendar.
//!
//! Validation errors are user-correctable and carry the message shown to the
//! user. Transport errors are logged; only submission failures reach the user,
//! and then only as a generic "try again".

use chrono::NaiveDate;

use crate::dates::local_date_to_iso_day;

/// A date string that could not be read as a calendar day
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized date: {value:?}")]
pub struct DateParseError {
    pub value: String,
}

impl DateParseError {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Failures talking to the reservation service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

/// User-correctable problems with a submission. Nothing is sent and no state
/// is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing name")]
    MissingName,
    #[error("incomplete range")]
    IncompleteRange,
    #[error("{0} is outside the booking window")]
    OutsideWindow(NaiveDate),
    #[error("{0} is already reserved")]
    AlreadyReserved(NaiveDate),
}

impl ValidationError {
    /// Blocking message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingName => "Please enter your name.".to_string(),
            ValidationError::IncompleteRange => "Please select a date range.".to_string(),
            ValidationError::OutsideWindow(day) => format!(
                "{} is outside the reservation period. Please select different dates.",
                local_date_to_iso_day(*day)
            ),
            ValidationError::AlreadyReserved(day) => format!(
                "{} is already reserved. Please select different dates.",
                local_date_to_iso_day(*day)
            ),
        }
    }
}

/// Failure hydrating the reservation store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Reservation for {name:?} has an invalid date: {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: DateParseError,
    },
}

/// Failure of a whole submission attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a submission is already in progress")]
    InProgress,
    /// A write failed part way through the commit pass. Days in `committed`
    /// were accepted by the service and are recorded locally; nothing is
    /// rolled back.
    #[error("reservation failed on {failed_on}")]
    Commit {
        committed: Vec<NaiveDate>,
        failed_on: NaiveDate,
        #[source]
        source: ApiError,
    },
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(err) => err.user_message(),
            SubmitError::InProgress => "Your reservation is still being submitted.".to_string(),
            SubmitError::Commit { .. } => "Failed to make reservation. Please try again.".to_string(),
        }
    }
}

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL cannot be empty")]
    EmptyBaseUrl,
    #[error("Invalid booking window bound: {0}")]
    InvalidDate(#[from] DateParseError),
    #[error("Booking window starts ({start}) after it ends ({end})")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingName.user_message(), "Please enter your name.");
        assert_eq!(ValidationError::IncompleteRange.user_message(), "Please select a date range.");

        let day = NaiveDate::from_ymd_opt(2024, 10, 22).unwrap();
        assert_eq!(
            ValidationError::AlreadyReserved(day).user_message(),
            "2024-10-22 is already reserved. Please select different dates."
        );
    }

    #[test]
    fn test_commit_failure_is_generic_for_the_user() {
        let err = SubmitError::Commit {
            committed: vec![NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()],
            failed_on: NaiveDate::from_ymd_opt(2024, 10, 21).unwrap(),
            source: ApiError::Network("connection reset".to_string()),
        };

        assert_eq!(err.user_message(), "Failed to make reservation. Please try again.");
        assert_eq!(err.to_string(), "reservation failed on 2024-10-21");
    }
}

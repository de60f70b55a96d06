use serde::{Deserialize, Serialize};

pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod selector;
pub mod store;
pub mod submitter;

pub use api::ReservationApi;
pub use config::{AppConfig, BookingWindow};
pub use error::{ApiError, ConfigError, DateParseError, LoadError, SubmitError, ValidationError};
pub use selector::{CalendarView, DateClass, MonthGrid, RangeSelector, ReservationRange, TileState};
pub use store::ReservationStore;
pub use submitter::{DayOutcome, FormUpdate, ReservationSubmitter, SubmissionGate, SubmitSummary};

/// A reservation as returned by `GET /reservations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Any parseable date string; the live service sends ISO instants
    /// such as `2024-10-20T00:00:00.000Z`
    pub date: String,
    /// Name the day is reserved under
    pub name: String,
}

/// Body of `POST /reservations/reserve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveRequest {
    pub name: String,
    /// Canonical `YYYY-MM-DD` day
    pub date: String,
}

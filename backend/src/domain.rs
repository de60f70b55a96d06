use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use shared::dates::parse_iso_day;
use shared::{DateParseError, Reservation, ReserveRequest};
use tokio::sync::RwLock;
use tracing::info;

/// Wire form the hosted service uses for stored days
const STORED_DAY_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BookError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error(transparent)]
    InvalidDate(#[from] DateParseError),
    #[error("{0} is already reserved")]
    AlreadyReserved(NaiveDate),
}

/// In-memory reservation book shared by every request handler
#[derive(Clone, Default)]
pub struct ReservationBook {
    days: Arc<RwLock<BTreeMap<NaiveDate, String>>>,
}

impl ReservationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reservations in ascending day order
    pub async fn list(&self) -> Vec<Reservation> {
        let days = self.days.read().await;
        days.iter().map(|(day, name)| stored_record(*day, name)).collect()
    }

    /// Reserve a single day. A day can only be taken once.
    pub async fn reserve(&self, request: &ReserveRequest) -> Result<Reservation, BookError> {
        if request.name.trim().is_empty() {
            return Err(BookError::EmptyName);
        }
        let day = parse_iso_day(&request.date)?;

        let mut days = self.days.write().await;
        if days.contains_key(&day) {
            return Err(BookError::AlreadyReserved(day));
        }
        days.insert(day, request.name.clone());

        info!("Reserved {} for {}", day, request.name);
        Ok(stored_record(day, &request.name))
    }
}

fn stored_record(day: NaiveDate, name: &str) -> Reservation {
    Reservation {
        date: day.format(STORED_DAY_FORMAT).to_string(),
        name: name.to_string(),
    }
}

//! Client-side cache of who reserved which day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::api::ReservationApi;
use crate::dates::{iso_day_from_wire, local_date_to_iso_day};
use crate::error::LoadError;
use crate::Reservation;

/// Mapping from canonical `YYYY-MM-DD` day to the name it is reserved under.
///
/// Entries are never removed: the store only grows through
/// [`record_local`](Self::record_local) or is replaced wholesale by a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationStore {
    reservations: BTreeMap<String, String>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every reservation from the service and replace the mapping.
    ///
    /// On failure the current mapping is left untouched and the error is
    /// logged before being returned.
    pub async fn load<A>(&mut self, api: &A) -> Result<usize, LoadError>
    where
        A: ReservationApi + ?Sized,
    {
        let result = match api.list_reservations().await {
            Ok(records) => self.replace_all(&records),
            Err(e) => Err(LoadError::from(e)),
        };

        match &result {
            Ok(count) => log::info!("Loaded {} reserved days", count),
            Err(e) => log::error!("Failed to fetch reservations: {}", e),
        }
        result
    }

    /// Replace the whole mapping with `records`. All-or-nothing: a single
    /// unparseable date leaves the store as it was.
    pub fn replace_all(&mut self, records: &[Reservation]) -> Result<usize, LoadError> {
        let mut fresh = BTreeMap::new();
        for record in records {
            let day = iso_day_from_wire(&record.date).map_err(|source| LoadError::InvalidRecord {
                name: record.name.clone(),
                source,
            })?;
            fresh.insert(day, record.name.clone());
        }

        self.reservations = fresh;
        Ok(self.reservations.len())
    }

    pub fn is_reserved(&self, date: NaiveDate) -> bool {
        self.reservations.contains_key(&local_date_to_iso_day(date))
    }

    pub fn name_for(&self, date: NaiveDate) -> Option<&str> {
        self.name_for_key(&local_date_to_iso_day(date))
    }

    /// Lookup by an already canonical key
    pub fn name_for_key(&self, iso_day: &str) -> Option<&str> {
        self.reservations.get(iso_day).map(String::as_str)
    }

    /// Record a day the service has just accepted, without re-fetching
    pub fn record_local(&mut self, date: NaiveDate, name: &str) {
        self.reservations.insert(local_date_to_iso_day(date), name.to_string());
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// `(day, name)` pairs in ascending day order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.reservations.iter().map(|(day, name)| (day.as_str(), name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation(date: &str, name: &str) -> Reservation {
        Reservation {
            date: date.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_canonicalizes_dates() {
        let api = MockApi::with_listing(vec![
            reservation("2024-10-20T00:00:00.000Z", "Minji"),
            reservation("2024-10-25", "Joon"),
        ]);
        let mut store = ReservationStore::new();

        let count = store.load(&api).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.name_for_key("2024-10-20"), Some("Minji"));
        assert!(store.is_reserved(day(2024, 10, 20)));
        assert_eq!(store.name_for(day(2024, 10, 25)), Some("Joon"));
        assert!(!store.is_reserved(day(2024, 10, 19)));
        assert!(!store.is_reserved(day(2024, 10, 21)));
    }

    #[tokio::test]
    async fn test_load_replaces_wholesale() {
        let mut store = ReservationStore::new();
        store.record_local(day(2024, 10, 15), "Stale");

        let api = MockApi::with_listing(vec![reservation("2024-10-16T00:00:00Z", "Fresh")]);
        store.load(&api).await.unwrap();

        assert!(!store.is_reserved(day(2024, 10, 15)));
        assert_eq!(store.name_for(day(2024, 10, 16)), Some("Fresh"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_store_untouched() {
        let mut store = ReservationStore::new();
        store.record_local(day(2024, 10, 15), "Kept");

        let api = MockApi {
            fail_listing: true,
            ..MockApi::default()
        };
        let err = store.load(&api).await.unwrap_err();

        assert!(matches!(err, LoadError::Api(_)));
        assert_eq!(store.name_for(day(2024, 10, 15)), Some("Kept"));
        assert_eq!(*api.list_calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_bad_record_aborts_whole_load() {
        let mut store = ReservationStore::new();
        store.record_local(day(2024, 10, 15), "Kept");

        let api = MockApi::with_listing(vec![
            reservation("2024-10-20", "Minji"),
            reservation("not a date", "Broken"),
        ]);
        let err = store.load(&api).await.unwrap_err();

        match err {
            LoadError::InvalidRecord { name, .. } => assert_eq!(name, "Broken"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.len(), 1);
        assert!(!store.is_reserved(day(2024, 10, 20)));
    }

    #[test]
    fn test_offset_without_colon_does_not_abort_load() {
        let mut store = ReservationStore::new();
        let count = store
            .replace_all(&[
                reservation("2024-10-20T00:00:00.000Z", "Minji"),
                reservation("2024-10-21T00:00:00.000+0000", "Joon"),
            ])
            .unwrap();

        assert_eq!(count, 2);
        assert!(store.is_reserved(day(2024, 10, 20)));
        assert_eq!(store.name_for(day(2024, 10, 21)), Some("Joon"));
    }

    #[test]
    fn test_later_duplicate_overwrites_earlier() {
        let mut store = ReservationStore::new();
        store
            .replace_all(&[
                reservation("2024-10-20T00:00:00Z", "First"),
                reservation("2024-10-20", "Second"),
            ])
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.name_for(day(2024, 10, 20)), Some("Second"));
    }

    #[test]
    fn test_record_local_grows_and_overwrites() {
        let mut store = ReservationStore::new();
        assert!(store.is_empty());

        store.record_local(day(2024, 10, 21), "Minji");
        store.record_local(day(2024, 10, 20), "Joon");
        store.record_local(day(2024, 10, 21), "Sora");

        let entries: Vec<_> = store.iter().collect();
        assert_eq!(entries, vec![("2024-10-20", "Joon"), ("2024-10-21", "Sora")]);
    }
}

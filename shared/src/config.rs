//! Runtime configuration: where the reservation service lives and which days
//! may be booked.

use chrono::{Datelike, NaiveDate};

use crate::dates::parse_iso_day;
use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str =
    "https://port-0-back-reservation-come-back-home-m00peap060a6b751.sel4.cloudtype.app";
pub const DEFAULT_WINDOW_START: &str = "2024-10-14";
pub const DEFAULT_WINDOW_END: &str = "2024-11-18";

/// Closed interval of days during which reservations are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl BookingWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive on both ends
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// First day of every month that intersects the window, in order
    pub fn months(&self) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        let mut cursor = self.start.with_day(1).unwrap_or(self.start);
        while cursor <= self.end {
            months.push(cursor);
            cursor = match cursor.checked_add_months(chrono::Months::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        months
    }
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 10, 14).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap_or(NaiveDate::MAX),
        }
    }
}

/// Configuration for the reservation widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the reservation service, without a trailing slash
    pub api_base_url: String,
    pub booking_window: BookingWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            booking_window: BookingWindow::default(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from optional overrides, falling back to the
    /// defaults for anything not given
    pub fn from_values(
        api_base_url: Option<&str>,
        window_start: Option<&str>,
        window_end: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = match api_base_url {
            Some(url) => {
                let url = url.trim().trim_end_matches('/');
                if url.is_empty() {
                    return Err(ConfigError::EmptyBaseUrl);
                }
                url.to_string()
            }
            None => defaults.api_base_url,
        };

        let start = match window_start {
            Some(value) => parse_iso_day(value)?,
            None => defaults.booking_window.start(),
        };
        let end = match window_end {
            Some(value) => parse_iso_day(value)?,
            None => defaults.booking_window.end(),
        };

        Ok(Self {
            api_base_url,
            booking_window: BookingWindow::new(start, end)?,
        })
    }

    /// `GET` endpoint listing existing reservations
    pub fn reservations_url(&self) -> String {
        format!("{}/reservations", self.api_base_url)
    }

    /// `POST` endpoint creating a single-day reservation
    pub fn reserve_url(&self) -> String {
        format!("{}/reservations/reserve", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_window_matches_constants() {
        let window = BookingWindow::default();
        assert_eq!(window.start().to_string(), DEFAULT_WINDOW_START);
        assert_eq!(window.end().to_string(), DEFAULT_WINDOW_END);
    }

    #[test]
    fn test_window_is_inclusive() {
        let window = BookingWindow::default();
        assert!(window.contains(day(2024, 10, 14)));
        assert!(window.contains(day(2024, 11, 18)));
        assert!(!window.contains(day(2024, 10, 13)));
        assert!(!window.contains(day(2024, 11, 19)));
    }

    #[test]
    fn test_window_months() {
        assert_eq!(BookingWindow::default().months(), vec![day(2024, 10, 1), day(2024, 11, 1)]);

        let across_year = BookingWindow::new(day(2024, 12, 20), day(2025, 2, 3)).unwrap();
        assert_eq!(
            across_year.months(),
            vec![day(2024, 12, 1), day(2025, 1, 1), day(2025, 2, 1)]
        );
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = BookingWindow::new(day(2024, 11, 18), day(2024, 10, 14)).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedWindow { .. }));
    }

    #[test]
    fn test_from_values_defaults() {
        assert_eq!(AppConfig::from_values(None, None, None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_values_overrides() {
        let config = AppConfig::from_values(
            Some("http://localhost:3000/"),
            Some("2025-03-01"),
            Some("2025-03-31"),
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.reservations_url(), "http://localhost:3000/reservations");
        assert_eq!(config.reserve_url(), "http://localhost:3000/reservations/reserve");
        assert_eq!(config.booking_window.start(), day(2025, 3, 1));
        assert_eq!(config.booking_window.end(), day(2025, 3, 31));
    }

    #[test]
    fn test_from_values_rejects_bad_input() {
        assert_eq!(AppConfig::from_values(Some("  "), None, None), Err(ConfigError::EmptyBaseUrl));
        assert!(matches!(
            AppConfig::from_values(None, Some("14/10/2024"), None),
            Err(ConfigError::InvalidDate(_))
        ));
        assert!(matches!(
            AppConfig::from_values(None, Some("2024-12-01"), None),
            Err(ConfigError::InvertedWindow { .. })
        ));
    }
}

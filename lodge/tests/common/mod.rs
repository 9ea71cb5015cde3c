//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the lodge library.

pub mod database;

use chrono::NaiveDate;
use lodge::operations::Clock;
use lodge::StayDates;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Parses an ISO date in test fixtures.
///
/// # Panics
///
/// Panics on malformed input. This is acceptable in test code where we want
/// to fail fast on invalid fixtures.
#[allow(dead_code)]
pub fn date(iso: &str) -> NaiveDate {
    iso.parse().expect("fixture date should be valid ISO 8601")
}

/// Builds a stay from two ISO dates.
///
/// # Panics
///
/// Panics if the dates do not form a valid stay (check-out must be strictly
/// after check-in).
#[allow(dead_code)]
pub fn stay(check_in: &str, check_out: &str) -> StayDates {
    StayDates::new(date(check_in), date(check_out)).expect("fixture stay should be valid")
}

/// A clock pinned to a fixed date, so tests can book historical windows
/// deterministically.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// A clock reading 2024-05-01, safely before the June 2024 fixtures.
    #[allow(dead_code)]
    pub fn spring_2024() -> Self {
        Self(date("2024-05-01"))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::types::Location;

pub mod projector;
pub mod solar;
pub mod table;

pub use projector::DaylightProjector;
pub use solar::SolarCalculator;
pub use table::load_table;

#[derive(Debug, Error)]
pub enum DaylightError {
    #[error("no daylight data for {date}: {reason}")]
    DataUnavailable { date: NaiveDate, reason: String },

    #[error("failed to read daylight table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed daylight table: {0}")]
    Csv(#[from] csv::Error),

    #[error("daylight table row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

impl DaylightError {
    pub fn unavailable(date: NaiveDate, reason: impl Into<String>) -> Self {
        DaylightError::DataUnavailable {
            date,
            reason: reason.into(),
        }
    }
}

/// Sunrise and sunset for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEvents {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunEvents {
    pub fn daylight_hours(&self) -> f64 {
        let ms = self.sunset.signed_duration_since(self.sunrise).num_milliseconds();
        ms as f64 / 3_600_000.0
    }
}

/// Source of sunrise/sunset instants.
pub trait SunTimes {
    fn sun_events(&self, date: NaiveDate, location: Location) -> Result<SunEvents, DaylightError>;
}

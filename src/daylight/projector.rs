use chrono::NaiveDate;
use log::trace;
use std::f64::consts::PI;

use crate::daylight::{DaylightError, SunTimes};
use crate::types::{Bound, Location};

/// Map daylight hours onto the dial: 0h at angle 0, 24h at π.
/// Hours outside [0, 24] saturate at the ends of the scale.
#[inline]
pub fn angle_for_hours(hours: f64) -> f64 {
    PI * (hours.clamp(0.0, 24.0) / 24.0)
}

/// Projects dates onto the dial for one fixed location.
pub struct DaylightProjector<'a> {
    source: &'a dyn SunTimes,
    location: Location,
}

impl<'a> DaylightProjector<'a> {
    pub fn new(source: &'a dyn SunTimes, location: Location) -> Self {
        Self { source, location }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Raw sunset minus sunrise, in hours. Not clamped.
    pub fn hours_of_daylight(&self, date: NaiveDate) -> Result<f64, DaylightError> {
        let events = self.source.sun_events(date, self.location)?;
        Ok(events.daylight_hours())
    }

    pub fn angle_for_date(&self, date: NaiveDate) -> Result<f64, DaylightError> {
        let hours = self.hours_of_daylight(date)?;
        let angle = angle_for_hours(hours);
        trace!("{date}: {hours:.3}h of daylight -> {angle:.4} rad");
        Ok(angle)
    }

    pub fn resolve(&self, bound: Bound) -> Result<f64, DaylightError> {
        match bound {
            Bound::Angle(angle) => Ok(angle),
            Bound::Date(date) => self.angle_for_date(date),
        }
    }
}

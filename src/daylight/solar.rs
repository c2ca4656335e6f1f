use chrono::NaiveDate;
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::daylight::{DaylightError, SunEvents, SunTimes};
use crate::types::Location;

/// Computes sunrise and sunset with the `sunrise` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarCalculator;

impl SunTimes for SolarCalculator {
    fn sun_events(&self, date: NaiveDate, location: Location) -> Result<SunEvents, DaylightError> {
        let coord = Coordinates::new(location.latitude, location.longitude).ok_or_else(|| {
            DaylightError::unavailable(
                date,
                format!(
                    "invalid coordinates {:.4}, {:.4}",
                    location.latitude, location.longitude
                ),
            )
        })?;

        let day = SolarDay::new(coord, date);
        let events = SunEvents {
            sunrise: day.event_time(SolarEvent::Sunrise),
            sunset: day.event_time(SolarEvent::Sunset),
        };

        // Without a real sunrise (polar day or night) the solver drifts off the requested date.
        for (name, instant) in [("sunrise", events.sunrise), ("sunset", events.sunset)] {
            let drift = (instant.date_naive() - date).num_days().abs();
            if drift > 1 {
                return Err(DaylightError::unavailable(
                    date,
                    format!("no {name} at latitude {:.4}", location.latitude),
                ));
            }
        }

        Ok(events)
    }
}

use chrono::{Datelike, Duration, NaiveDate};
use std::f64::consts::PI;

use crate::config::DialConfig;
use crate::context::RenderContext;
use crate::daylight::{DaylightError, DaylightProjector, SunEvents, SunTimes};
use crate::types::Location;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Sun-times source driven by a function from date to hours of daylight.
/// `None` from the function means the data is unavailable.
pub struct StubSunTimes {
    hours: Box<dyn Fn(NaiveDate) -> Option<f64>>,
}

impl StubSunTimes {
    pub fn new(hours: impl Fn(NaiveDate) -> Option<f64> + 'static) -> Self {
        Self {
            hours: Box::new(hours),
        }
    }

    pub fn constant(hours: f64) -> Self {
        Self::new(move |_| Some(hours))
    }

    pub fn unavailable() -> Self {
        Self::new(|_| None)
    }

    /// 12h ± 3h cosine, longest on day 172 (around Jun 21).
    pub fn seasonal() -> Self {
        Self::new(|date| {
            let phase = 2.0 * PI * (date.ordinal() as f64 - 172.0) / 365.25;
            Some(12.0 + 3.0 * phase.cos())
        })
    }
}

impl SunTimes for StubSunTimes {
    fn sun_events(&self, date: NaiveDate, _location: Location) -> Result<SunEvents, DaylightError> {
        let hours = (self.hours)(date).ok_or_else(|| DaylightError::unavailable(date, "stub"))?;
        let noon = date.and_hms_opt(12, 0, 0).expect("noon exists").and_utc();
        let half = Duration::milliseconds((hours * 1_800_000.0).round() as i64);
        Ok(SunEvents {
            sunrise: noon - half,
            sunset: noon + half,
        })
    }
}

pub fn make_context<'a>(
    source: &'a dyn SunTimes,
    patch: impl FnOnce(&mut DialConfig),
) -> RenderContext<'a> {
    let mut cfg = DialConfig::default();
    patch(&mut cfg);
    RenderContext::new(DaylightProjector::new(source, cfg.location), &cfg)
}

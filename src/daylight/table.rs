use chrono::{DateTime, NaiveDate, Utc};
use csv::{Reader, ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use crate::daylight::{DaylightError, SunEvents, SunTimes};
use crate::types::Location;

#[derive(Debug, Deserialize)]
struct DaylightRow {
    date: NaiveDate,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

/// Observed sunrise/sunset times for a single site, keyed by date.
///
/// The table is taken to describe the configured location; the location
/// passed to `sun_events` is not consulted.
#[derive(Debug, Clone, Default)]
pub struct DaylightTable {
    entries: BTreeMap<NaiveDate, SunEvents>,
}

impl DaylightTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl SunTimes for DaylightTable {
    fn sun_events(&self, date: NaiveDate, _location: Location) -> Result<SunEvents, DaylightError> {
        self.entries
            .get(&date)
            .copied()
            .ok_or_else(|| DaylightError::unavailable(date, "date missing from daylight table"))
    }
}

fn parse_table_from_reader<R: std::io::Read>(
    mut rdr: Reader<R>,
) -> Result<DaylightTable, DaylightError> {
    let mut entries = BTreeMap::new();
    for (i, rec) in rdr.deserialize().enumerate() {
        let row: DaylightRow = rec?;
        // Header is row 1
        let line = i + 2;
        if row.sunset < row.sunrise {
            return Err(DaylightError::InvalidRow {
                row: line,
                message: format!("sunset precedes sunrise on {}", row.date),
            });
        }
        entries.insert(
            row.date,
            SunEvents {
                sunrise: row.sunrise,
                sunset: row.sunset,
            },
        );
    }
    Ok(DaylightTable { entries })
}

/// Load a `date,sunrise,sunset` CSV; paths ending in `.gz` are decompressed.
pub fn load_table(path: &Path) -> Result<DaylightTable, DaylightError> {
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    let table = if gzipped {
        let gz = GzDecoder::new(File::open(path)?);
        parse_table_from_reader(ReaderBuilder::new().trim(Trim::All).from_reader(gz))?
    } else {
        parse_table_from_reader(ReaderBuilder::new().trim(Trim::All).from_path(path)?)?
    };
    debug!("Loaded {} daylight rows from {}", table.len(), path.display());
    Ok(table)
}

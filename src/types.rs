use chrono::NaiveDate;
use phf::phf_map;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Observer position in degrees, east-positive longitude.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    // Cincinnati, OH
    fn default() -> Self {
        Self {
            latitude: 39.1031,
            longitude: -84.5120,
        }
    }
}

/// Either a literal angle on the dial or a date still to be projected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Angle(f64),
    Date(NaiveDate),
}

impl From<f64> for Bound {
    fn from(angle: f64) -> Self {
        Bound::Angle(angle)
    }
}

impl From<NaiveDate> for Bound {
    fn from(date: NaiveDate) -> Self {
        Bound::Date(date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GREY: Color = Color::rgb(211, 211, 211);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
    pub const NAVY: Color = Color::rgb(0, 0, 0x55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Hex form without the alpha channel; pair with `alpha` for opacity attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Per-element styling. Every renderer documents its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub dashed: bool,
    pub radial_offset: f64,
}

impl Style {
    pub fn stroke(color: Color) -> Self {
        Self {
            stroke: Some(color),
            ..Self::default()
        }
    }

    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn offset(mut self, radial_offset: f64) -> Self {
        self.radial_offset = radial_offset;
        self
    }
}

static MONTH_ABBREVIATIONS: phf::Map<u32, &'static str> = phf_map! {
    1u32 => "Jan",
    2u32 => "Feb",
    3u32 => "Mar",
    4u32 => "Apr",
    5u32 => "May",
    6u32 => "Jun",
    7u32 => "Jul",
    8u32 => "Aug",
    9u32 => "Sep",
    10u32 => "Oct",
    11u32 => "Nov",
    12u32 => "Dec",
};

pub fn month_abbreviation(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS.get(&month).copied().unwrap_or("")
}

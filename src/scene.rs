use chrono::{Datelike, Local, NaiveDate};
use log::{debug, info, warn};
use std::f64::consts::PI;

use crate::config::DialConfig;
use crate::context::RenderContext;
use crate::daylight::{DaylightError, DaylightProjector, SunTimes};
use crate::layers::{Layer, RadialLine, SeasonSegment, Sweep, Tick};
use crate::surface::Canvas;
use crate::types::{Bound, Color, Style, month_abbreviation};

const REFERENCE_LINE_OFFSET: f64 = 50.0;
const HOUR_LINES: u32 = 12;
const TICK_DAY: u32 = 15;

/// Calendar-day approximation of the equinoxes and solstices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonBoundaries {
    pub spring: NaiveDate,
    pub summer: NaiveDate,
    pub autumn: NaiveDate,
    pub winter: NaiveDate,
}

impl SeasonBoundaries {
    pub fn for_year(year: i32) -> Option<Self> {
        Some(Self {
            spring: NaiveDate::from_ymd_opt(year, 3, 20)?,
            summer: NaiveDate::from_ymd_opt(year, 6, 21)?,
            autumn: NaiveDate::from_ymd_opt(year, 9, 23)?,
            winter: NaiveDate::from_ymd_opt(year, 12, 21)?,
        })
    }
}

/// Daylight is getting longer strictly before the summer solstice or
/// strictly after the winter one. Both solstice days count as decreasing.
pub fn increasing(date: NaiveDate, seasons: &SeasonBoundaries) -> bool {
    date < seasons.summer || date > seasons.winter
}

/// Everything one render draws, in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub date: NaiveDate,
    pub seasons: SeasonBoundaries,
    pub increasing: bool,
    pub segments: Vec<SeasonSegment>,
    pub ticks: Vec<Tick>,
    pub solstice_lines: Vec<RadialLine>,
    pub hour_lines: Vec<RadialLine>,
    pub marker: RadialLine,
    pub sweep: Sweep,
}

impl Scene {
    pub fn layers(&self) -> Vec<&dyn Layer> {
        let mut layers: Vec<&dyn Layer> = Vec::new();
        layers.extend(self.segments.iter().map(|s| s as &dyn Layer));
        layers.extend(self.ticks.iter().map(|t| t as &dyn Layer));
        layers.extend(self.solstice_lines.iter().map(|l| l as &dyn Layer));
        layers.extend(self.hour_lines.iter().map(|l| l as &dyn Layer));
        layers.push(&self.marker);
        layers.push(&self.sweep);
        layers
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub drawn: usize,
    pub skipped: usize,
}

pub struct SceneComposer<'a> {
    pub context: RenderContext<'a>,
}

impl<'a> SceneComposer<'a> {
    pub fn new(source: &'a dyn SunTimes, cfg: &DialConfig) -> Self {
        Self {
            context: RenderContext::new(DaylightProjector::new(source, cfg.location), cfg),
        }
    }

    pub fn compose(&self, date: NaiveDate) -> Result<Scene, DaylightError> {
        let year = date.year();
        let seasons = SeasonBoundaries::for_year(year).ok_or_else(out_of_range(date))?;
        let increasing = increasing(date, &seasons);
        debug!("{date}: daylight {}", if increasing { "increasing" } else { "decreasing" });

        let (segments, tick_dates) = if increasing {
            let segments = vec![
                SeasonSegment::new(seasons.summer, seasons.autumn, "Summer", Style::fill(Color::YELLOW)),
                SeasonSegment::new(seasons.autumn, seasons.winter, "Fall", Style::fill(Color::ORANGE)),
            ];
            let dates = (6..=12)
                .map(|m| NaiveDate::from_ymd_opt(year, m, TICK_DAY))
                .collect::<Option<Vec<_>>>();
            (segments, dates)
        } else {
            let segments = vec![
                SeasonSegment::new(seasons.winter, seasons.spring, "Winter", Style::fill(Color::LIGHT_BLUE)),
                SeasonSegment::new(seasons.spring, seasons.summer, "Spring", Style::fill(Color::LIGHT_GREEN)),
            ];
            let dates = std::iter::once(NaiveDate::from_ymd_opt(year - 1, 12, TICK_DAY))
                .chain((1..=6).map(|m| NaiveDate::from_ymd_opt(year, m, TICK_DAY)))
                .collect::<Option<Vec<_>>>();
            (segments, dates)
        };

        let ticks = tick_dates
            .ok_or_else(out_of_range(date))?
            .into_iter()
            .map(|d| Tick::new(d, month_abbreviation(d.month())))
            .collect();

        let solstice_style = Style::stroke(Color::GREY)
            .dashed()
            .offset(REFERENCE_LINE_OFFSET);
        let solstice_lines = vec![
            RadialLine::new(seasons.summer, Some("summer solstice"), solstice_style),
            RadialLine::new(seasons.winter, Some("winter solstice"), solstice_style),
        ];

        let hour_lines = (0..=HOUR_LINES)
            .map(|k| {
                RadialLine::new(
                    k as f64 * PI / HOUR_LINES as f64,
                    None,
                    Style::stroke(Color::LIGHT_GREY).dashed(),
                )
            })
            .collect();

        Ok(Scene {
            date,
            seasons,
            increasing,
            segments,
            ticks,
            solstice_lines,
            hour_lines,
            marker: RadialLine::new(
                date,
                Some("you are here"),
                Style::stroke(Color::RED).offset(REFERENCE_LINE_OFFSET),
            ),
            sweep: Sweep::new(Bound::Date(date), increasing),
        })
    }

    /// Clear the canvas and draw the whole dial for `date`.
    ///
    /// Elements whose dates cannot be projected are left out; the base is
    /// always drawn, last.
    pub fn render(&self, canvas: &mut dyn Canvas, date: NaiveDate) -> Result<RenderReport, DaylightError> {
        let scene = self.compose(date)?;
        let location = self.context.projector.location();
        info!(
            "rendering daylight dial for {date} at {:.4}, {:.4}",
            location.latitude, location.longitude
        );

        canvas.clear();
        self.context.frame.initialize(canvas);

        let mut report = RenderReport::default();
        for layer in scene.layers() {
            match layer.draw(canvas, &self.context) {
                Ok(()) => report.drawn += 1,
                Err(err) => {
                    warn!("skipping dial element: {err}");
                    report.skipped += 1;
                }
            }
        }
        self.context.frame.draw_base(canvas);

        info!(
            "rendered {date}: {} elements drawn, {} skipped",
            report.drawn, report.skipped
        );
        Ok(report)
    }

    pub fn render_today(&self, canvas: &mut dyn Canvas) -> Result<RenderReport, DaylightError> {
        self.render(canvas, Local::now().date_naive())
    }
}

fn out_of_range(date: NaiveDate) -> impl FnOnce() -> DaylightError {
    move || DaylightError::unavailable(date, "outside the supported calendar range")
}

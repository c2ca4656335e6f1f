use crate::config::DialConfig;
use crate::daylight::{DaylightError, DaylightProjector};
use crate::layers::Frame;
use crate::types::Bound;

pub struct RenderContext<'a> {
    pub projector: DaylightProjector<'a>,
    pub frame: Frame,
}

impl<'a> RenderContext<'a> {
    pub fn new(projector: DaylightProjector<'a>, cfg: &DialConfig) -> Self {
        Self {
            projector,
            frame: Frame::new(cfg.dial.radius),
        }
    }

    pub fn resolve(&self, bound: Bound) -> Result<f64, DaylightError> {
        self.projector.resolve(bound)
    }
}

#[cfg(test)]
mod tests {
    use crate::daylight::DaylightError;
    use crate::test_utils::{StubSunTimes, approx, make_context, ymd};
    use crate::types::Bound;
    use std::f64::consts::PI;

    #[test]
    fn frame_follows_configured_radius() {
        let stub = StubSunTimes::constant(12.0);
        let context = make_context(&stub, |cfg| cfg.dial.radius = 300.0);
        assert!(approx(context.frame.radius, 300.0, 1e-12));
        assert!(approx(context.frame.height, 360.0, 1e-12));
    }

    #[test]
    fn resolve_goes_through_projector() {
        let stub = StubSunTimes::constant(18.0);
        let context = make_context(&stub, |_| {});
        let a = context.resolve(Bound::Date(ymd(2024, 6, 1))).unwrap();
        assert!(approx(a, 0.75 * PI, 1e-12));
    }

    #[test]
    fn resolve_reports_missing_data() {
        let stub = StubSunTimes::unavailable();
        let context = make_context(&stub, |_| {});
        assert!(matches!(
            context.resolve(Bound::Date(ymd(2024, 6, 1))),
            Err(DaylightError::DataUnavailable { .. })
        ));
    }
}

use crate::{
    ease::Ease,
    error::{ScrolldeckError, ScrolldeckResult},
};

/// A single stop on a [`FadeCurve`]: at `progress`, the slide renders with
/// `opacity`. The `ease` shapes interpolation toward the next stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeStop {
    pub progress: f64,
    pub opacity: f64,
    #[serde(default)]
    pub ease: Ease,
}

/// Piecewise opacity over scroll progress.
///
/// Stops are sorted by `progress`. Sampling clamps to the first/last stop
/// outside the covered range, so the curve is total over all finite inputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeCurve {
    pub stops: Vec<FadeStop>,
}

impl FadeCurve {
    pub fn from_stops(stops: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(progress, opacity)| FadeStop {
                    progress,
                    opacity,
                    ease: Ease::Linear,
                })
                .collect(),
        }
    }

    pub fn constant(opacity: f64) -> Self {
        Self::from_stops([(0.0, opacity)])
    }

    /// Fully opaque until `start`, fully transparent from `end`.
    pub fn fade_out(start: f64, end: f64) -> Self {
        Self::from_stops([(start, 1.0), (end, 0.0)])
    }

    /// Fully transparent until `start`, fully opaque from `end`.
    pub fn fade_in(start: f64, end: f64) -> Self {
        Self::from_stops([(start, 0.0), (end, 1.0)])
    }

    /// Rise over `[rise_start, rise_end]`, hold at 1, fall over
    /// `[fall_start, fall_end]`.
    pub fn window(rise_start: f64, rise_end: f64, fall_start: f64, fall_end: f64) -> Self {
        Self::from_stops([
            (rise_start, 0.0),
            (rise_end, 1.0),
            (fall_start, 1.0),
            (fall_end, 0.0),
        ])
    }

    pub fn validate(&self) -> ScrolldeckResult<()> {
        if self.stops.is_empty() {
            return Err(ScrolldeckError::curve(
                "FadeCurve must have at least one stop",
            ));
        }
        for stop in &self.stops {
            if !stop.progress.is_finite() {
                return Err(ScrolldeckError::curve("stop progress must be finite"));
            }
            if !stop.opacity.is_finite() || !(0.0..=1.0).contains(&stop.opacity) {
                return Err(ScrolldeckError::curve("stop opacity must be within [0, 1]"));
            }
        }
        if !self
            .stops
            .windows(2)
            .all(|w| w[0].progress <= w[1].progress)
        {
            return Err(ScrolldeckError::curve("stops must be sorted by progress"));
        }
        Ok(())
    }

    /// Sample the curve at `p`. Total: out-of-range input takes the nearest
    /// stop's value, coincident stops resolve to the earlier stop.
    pub fn sample(&self, p: f64) -> f64 {
        if self.stops.is_empty() {
            return 0.0;
        }

        let idx = self.stops.partition_point(|s| s.progress <= p);
        if idx == 0 {
            return self.stops[0].opacity;
        }
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].opacity;
        }

        let a = &self.stops[idx - 1];
        let b = &self.stops[idx];
        let denom = b.progress - a.progress;
        if denom <= 0.0 {
            return a.opacity;
        }

        let t = a.ease.apply((p - a.progress) / denom);
        a.opacity + (b.opacity - a.opacity) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn fade_out_boundaries_are_exact() {
        let c = FadeCurve::fade_out(0.0, 0.3);
        assert_eq!(c.sample(0.0), 1.0);
        assert_eq!(c.sample(0.3), 0.0);
        assert_eq!(c.sample(0.5), 0.0);
        assert_close(c.sample(0.15), 0.5);
    }

    #[test]
    fn sampling_clamps_outside_the_stops() {
        let c = FadeCurve::fade_out(0.0, 0.3);
        assert_eq!(c.sample(-1.0), 1.0);
        assert_eq!(c.sample(2.0), 0.0);
    }

    #[test]
    fn window_holds_between_rise_and_fall() {
        let c = FadeCurve::window(0.3, 0.35, 0.65, 0.7);
        assert_eq!(c.sample(0.3), 0.0);
        assert_close(c.sample(0.325), 0.5);
        assert_eq!(c.sample(0.35), 1.0);
        assert_eq!(c.sample(0.5), 1.0);
        assert_eq!(c.sample(0.65), 1.0);
        assert_close(c.sample(0.675), 0.5);
        assert_eq!(c.sample(0.7), 0.0);
    }

    #[test]
    fn coincident_stops_take_the_earlier_value() {
        let c = FadeCurve::from_stops([(0.5, 1.0), (0.5, 0.0)]);
        assert_eq!(c.sample(0.5), 1.0);
        assert_eq!(c.sample(0.6), 0.0);
    }

    #[test]
    fn eased_segment_still_hits_its_endpoints() {
        let mut c = FadeCurve::fade_in(0.0, 1.0);
        c.stops[0].ease = Ease::InOutCubic;
        assert_eq!(c.sample(0.0), 0.0);
        assert_eq!(c.sample(1.0), 1.0);
        assert!(c.sample(0.25) < 0.25);
    }

    #[test]
    fn validate_rejects_bad_curves() {
        assert!(FadeCurve { stops: vec![] }.validate().is_err());
        assert!(FadeCurve::from_stops([(0.5, 1.0), (0.2, 0.0)]).validate().is_err());
        assert!(FadeCurve::from_stops([(0.0, 1.5)]).validate().is_err());
        assert!(FadeCurve::from_stops([(f64::NAN, 1.0)]).validate().is_err());
        assert!(FadeCurve::fade_out(0.0, 0.3).validate().is_ok());
    }
}

use crate::{
    core::SlideIndex,
    curve::FadeCurve,
    error::{ScrolldeckError, ScrolldeckResult},
};

/// One full-viewport panel plus its navigation label.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    pub label: String,
    pub fade: FadeCurve,
    /// Progress threshold at which this slide becomes the navigation-active
    /// one. Thresholds across a deck are strictly increasing; the first is 0.
    pub activate_at: f64,
}

/// A vertically stacked presentation: slide k occupies screen k of the
/// document, and all slides cross-fade against the shared scroll progress.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    /// The canonical three-slide deck: the first slide fades out over the
    /// opening third, the middle slide holds through the center with short
    /// cross-fades at both ends, the last slide fades in and stays.
    pub fn standard(labels: [&str; 3]) -> Self {
        Self {
            slides: vec![
                Slide {
                    label: labels[0].to_string(),
                    fade: FadeCurve::fade_out(0.0, 0.3),
                    activate_at: 0.0,
                },
                Slide {
                    label: labels[1].to_string(),
                    fade: FadeCurve::window(0.3, 0.35, 0.65, 0.7),
                    activate_at: 0.3,
                },
                Slide {
                    label: labels[2].to_string(),
                    fade: FadeCurve::fade_in(0.65, 0.7),
                    activate_at: 0.65,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn validate(&self) -> ScrolldeckResult<()> {
        if self.slides.is_empty() {
            return Err(ScrolldeckError::validation("deck must have at least one slide"));
        }

        for slide in &self.slides {
            if slide.label.trim().is_empty() {
                return Err(ScrolldeckError::validation("slide label must be non-empty"));
            }
            if !slide.activate_at.is_finite() {
                return Err(ScrolldeckError::validation("activate_at must be finite"));
            }
            slide.fade.validate()?;
        }

        if self.slides[0].activate_at != 0.0 {
            return Err(ScrolldeckError::validation(
                "the first slide must activate at progress 0",
            ));
        }
        if !self
            .slides
            .windows(2)
            .all(|w| w[0].activate_at < w[1].activate_at)
        {
            return Err(ScrolldeckError::validation(
                "activate_at thresholds must be strictly increasing",
            ));
        }

        Ok(())
    }

    /// Navigation-active slide at progress `p`: a stateless lookup over the
    /// sorted activation thresholds. Anything below the first threshold
    /// resolves to the first slide.
    pub fn active_at(&self, p: f64) -> SlideIndex {
        let idx = self.slides.partition_point(|s| s.activate_at <= p);
        SlideIndex(idx.max(1))
    }

    /// Clamp a 1-based index into this deck's range.
    pub fn clamp_index(&self, slide: SlideIndex) -> SlideIndex {
        SlideIndex(slide.0.clamp(1, self.len().max(1)))
    }
}

use crate::error::{ScrolldeckError, ScrolldeckResult};

/// 1-based position of a slide within a deck.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SlideIndex(pub usize);

impl SlideIndex {
    pub fn new(n: usize) -> ScrolldeckResult<Self> {
        if n == 0 {
            return Err(ScrolldeckError::validation("SlideIndex is 1-based"));
        }
        Ok(Self(n))
    }

    pub fn zero_based(self) -> usize {
        self.0.saturating_sub(1)
    }
}

/// How a programmatic scroll reaches its target offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScrollBehavior {
    /// Snap to the target immediately.
    Auto,
    /// Animate toward the target over several ticks.
    Smooth,
}

/// Geometry of the scrolling viewport over a stacked-slide document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportMetrics {
    pub height: f64,
    pub document_height: f64, // >= height
}

impl ViewportMetrics {
    pub fn new(height: f64, document_height: f64) -> ScrolldeckResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(ScrolldeckError::validation(
                "viewport height must be finite and > 0",
            ));
        }
        if !document_height.is_finite() || document_height < height {
            return Err(ScrolldeckError::validation(
                "document height must be finite and >= viewport height",
            ));
        }
        Ok(Self {
            height,
            document_height,
        })
    }

    /// Metrics for a document of `screens` stacked full-viewport slides.
    pub fn for_screens(height: f64, screens: usize) -> ScrolldeckResult<Self> {
        Self::new(height, height * screens.max(1) as f64)
    }

    /// Total scrollable distance (zero when the document fits the viewport).
    pub fn scrollable(self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }

    /// Fraction of the scrollable distance traversed at `offset`.
    pub fn progress_at(self, offset: f64) -> f64 {
        let scrollable = self.scrollable();
        if scrollable <= 0.0 {
            return 0.0;
        }
        offset / scrollable
    }

    pub fn clamp_offset(self, offset: f64) -> f64 {
        offset.clamp(0.0, self.scrollable())
    }

    /// Offset that aligns the viewport top with the top of `slide`.
    pub fn offset_for(self, slide: SlideIndex) -> f64 {
        slide.zero_based() as f64 * self.height
    }
}

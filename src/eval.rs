use crate::{
    core::SlideIndex,
    error::{ScrolldeckError, ScrolldeckResult},
    model::Deck,
};

/// Everything the rendering side needs for one progress value.
#[derive(Clone, Debug, serde::Serialize)]
pub struct DeckFrame {
    pub progress: f64,
    pub active: SlideIndex,
    pub nodes: Vec<SlideNode>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SlideNode {
    pub index: SlideIndex,
    pub label: String,
    pub opacity: f64,
    pub active: bool,
}

pub struct Evaluator;

impl Evaluator {
    /// Evaluate a deck at a scroll progress value. Pure: the same deck and
    /// progress always produce the same frame. Progress outside [0, 1] is
    /// legal and clamps through the curves; only non-finite input is an error.
    #[tracing::instrument(skip(deck))]
    pub fn eval_progress(deck: &Deck, progress: f64) -> ScrolldeckResult<DeckFrame> {
        deck.validate()?;
        if !progress.is_finite() {
            return Err(ScrolldeckError::evaluation("progress must be finite"));
        }

        let active = deck.active_at(progress);
        let nodes = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let index = SlideIndex(i + 1);
                SlideNode {
                    index,
                    label: slide.label.clone(),
                    opacity: slide.fade.sample(progress).clamp(0.0, 1.0),
                    active: index == active,
                }
            })
            .collect();

        Ok(DeckFrame {
            progress,
            active,
            nodes,
        })
    }
}

use crate::{
    curve::FadeCurve,
    error::ScrolldeckResult,
    model::{Deck, Slide},
};

/// Fluent construction of a [`Deck`], validated on `build`.
#[derive(Default)]
pub struct DeckBuilder {
    slides: Vec<Slide>,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slide(mut self, label: impl Into<String>, fade: FadeCurve, activate_at: f64) -> Self {
        self.slides.push(Slide {
            label: label.into(),
            fade,
            activate_at,
        });
        self
    }

    pub fn build(self) -> ScrolldeckResult<Deck> {
        let deck = Deck {
            slides: self.slides,
        };
        deck.validate()?;
        Ok(deck)
    }
}

//! Scrolldeck turns a vertical scroll position into a slide presentation:
//! stacked full-viewport slides cross-fade as the user scrolls, and a
//! navigation rail highlights the current slide and jumps on click.
//!
//! # Pipeline overview
//!
//! 1. **Observe**: a viewport publishes scroll progress (fraction of the
//!    scrollable distance traversed) to a [`ProgressSignal`]
//! 2. **Evaluate**: `Deck + progress -> DeckFrame` (per-slide opacity plus
//!    the navigation-active slide), pure and total over finite input
//! 3. **Apply**: a mounted [`DeckController`] hands each frame to a
//!    [`RenderSink`] and toggles the highlight only when it changes
//! 4. **Jump** (on demand): [`DeckController::jump_to_slide`] smooth-scrolls
//!    the viewport; the resulting notifications flow through step 1 like any
//!    user scroll
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation is pure and stable for a given
//!   deck and progress value; the simulated viewport animates in fixed ticks.
//! - **Scoped subscriptions**: observing the signal returns a drop-guard, so
//!   no notification ever reaches a torn-down controller.
#![forbid(unsafe_code)]

pub mod controller;
pub mod core;
pub mod curve;
pub mod dsl;
pub mod ease;
pub mod error;
pub mod eval;
pub mod model;
pub mod render;
pub mod signal;
pub mod viewport;

pub use controller::{DeckController, SharedViewport};
pub use core::{ScrollBehavior, SlideIndex, ViewportMetrics};
pub use curve::{FadeCurve, FadeStop};
pub use dsl::DeckBuilder;
pub use ease::Ease;
pub use error::{ScrolldeckError, ScrolldeckResult};
pub use eval::{DeckFrame, Evaluator, SlideNode};
pub use model::{Deck, Slide};
pub use render::{NullSink, RenderSink};
pub use signal::{ProgressSignal, Subscription};
pub use viewport::{ScrollTween, SimViewport, Viewport};

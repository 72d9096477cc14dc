use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    core::{ScrollBehavior, SlideIndex},
    error::ScrolldeckResult,
    eval::Evaluator,
    model::Deck,
    render::RenderSink,
    signal::{ProgressSignal, Subscription},
    viewport::Viewport,
};

/// Shared handle to the scrolling collaborator.
pub type SharedViewport = Rc<RefCell<dyn Viewport>>;

struct ControllerState {
    deck: Deck,
    active: SlideIndex,
    sink: Box<dyn RenderSink>,
}

/// Binds a deck to a scroll-progress signal.
///
/// While mounted, every progress notification is evaluated and handed to the
/// render sink; the stored active slide is updated idempotently and the sink
/// hears about it only on a change. The subscription is a drop-guard, so
/// teardown releases it on every exit path: once the controller is unmounted
/// or dropped, later notifications no longer reach it.
pub struct DeckController {
    state: Rc<RefCell<ControllerState>>,
    viewport: Option<SharedViewport>,
    subscription: Option<Subscription>,
}

impl DeckController {
    /// Validate the deck, subscribe to the signal, and apply its current
    /// value so the sink sees the initial frame before any scroll event.
    pub fn mount(
        deck: Deck,
        signal: &ProgressSignal,
        sink: Box<dyn RenderSink>,
        viewport: Option<SharedViewport>,
    ) -> ScrolldeckResult<Self> {
        deck.validate()?;

        let initial = signal.get();
        let active = deck.active_at(initial);
        tracing::debug!(slides = deck.len(), initial, "mount controller");

        let state = Rc::new(RefCell::new(ControllerState { deck, active, sink }));
        Self::apply(&state, initial, true);

        let weak = Rc::downgrade(&state);
        let subscription = signal.subscribe(move |progress| {
            // the guard already stops delivery after teardown; the weak
            // handle covers a controller dropped mid-dispatch
            let Some(state) = weak.upgrade() else {
                return;
            };
            Self::apply(&state, progress, false);
        });

        Ok(Self {
            state,
            viewport,
            subscription: Some(subscription),
        })
    }

    fn apply(state: &Rc<RefCell<ControllerState>>, progress: f64, force_highlight: bool) {
        let mut st = state.borrow_mut();
        let Ok(frame) = Evaluator::eval_progress(&st.deck, progress) else {
            // deck was validated at mount; only a non-finite progress value
            // lands here, and the contract is to ignore it
            return;
        };

        let changed = frame.active != st.active;
        st.active = frame.active;
        st.sink.apply_frame(&frame);
        if changed || force_highlight {
            let active = st.active;
            st.sink.set_highlight(active);
        }
    }

    /// The slide the navigation currently highlights.
    pub fn active_slide(&self) -> SlideIndex {
        self.state.borrow().active
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Smooth-scroll the viewport so its top aligns with the target slide.
    ///
    /// Out-of-range indices clamp into the deck. Without a viewport this is
    /// a no-op. The active slide is never set here; the scroll's progress
    /// notifications update it through the normal path.
    pub fn jump_to_slide(&self, slide: SlideIndex) {
        let Some(viewport) = &self.viewport else {
            return;
        };
        let target = self.state.borrow().deck.clamp_index(slide);
        let mut vp = viewport.borrow_mut();
        let offset = vp.metrics().offset_for(target);
        tracing::debug!(slide = target.0, offset, "jump to slide");
        vp.scroll_to(offset, ScrollBehavior::Smooth);
    }

    /// Release the scroll subscription. Dropping the controller does the
    /// same; calling this twice is harmless.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("unmount controller");
        }
    }
}

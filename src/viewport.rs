use crate::{
    core::{ScrollBehavior, ViewportMetrics},
    ease::Ease,
    signal::ProgressSignal,
};

/// The scrolling collaborator a controller drives for jump-to-slide.
pub trait Viewport {
    fn metrics(&self) -> ViewportMetrics;
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
}

/// Tick-driven animated scroll between two offsets. The final tick lands
/// exactly on the target, whatever the easing does along the way.
#[derive(Clone, Debug)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    ease: Ease,
    duration_ticks: u32,
    elapsed: u32,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ticks: u32, ease: Ease) -> Self {
        Self {
            from,
            to,
            ease,
            duration_ticks: duration_ticks.max(1),
            elapsed: 0,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration_ticks
    }

    /// Advance one tick and return the new offset.
    pub fn step(&mut self) -> f64 {
        self.elapsed = (self.elapsed + 1).min(self.duration_ticks);
        if self.elapsed >= self.duration_ticks {
            return self.to;
        }
        let t = f64::from(self.elapsed) / f64::from(self.duration_ticks);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// Deterministic in-memory viewport over a document of stacked full-height
/// screens. Every offset change publishes the derived progress to the shared
/// [`ProgressSignal`]; a smooth scroll publishes once per [`tick`].
///
/// [`tick`]: SimViewport::tick
#[derive(Debug)]
pub struct SimViewport {
    metrics: ViewportMetrics,
    offset: f64,
    tween: Option<ScrollTween>,
    smooth_ticks: u32,
    smooth_ease: Ease,
    signal: ProgressSignal,
}

impl SimViewport {
    pub const DEFAULT_SMOOTH_TICKS: u32 = 24;

    pub fn new(metrics: ViewportMetrics, signal: ProgressSignal) -> Self {
        Self {
            metrics,
            offset: 0.0,
            tween: None,
            smooth_ticks: Self::DEFAULT_SMOOTH_TICKS,
            smooth_ease: Ease::InOutCubic,
            signal,
        }
    }

    pub fn with_smooth(mut self, ticks: u32, ease: Ease) -> Self {
        self.smooth_ticks = ticks.max(1);
        self.smooth_ease = ease;
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Wheel-style relative scroll; cancels any running smooth scroll.
    pub fn scroll_by(&mut self, delta: f64) {
        self.tween = None;
        self.offset = self.metrics.clamp_offset(self.offset + delta);
        self.publish();
    }

    /// Advance a running smooth scroll by one tick. Returns whether the
    /// animation is still going.
    pub fn tick(&mut self) -> bool {
        let Some(tween) = &mut self.tween else {
            return false;
        };
        let offset = tween.step();
        let finished = tween.is_finished();
        if finished {
            self.tween = None;
        }
        self.offset = self.metrics.clamp_offset(offset);
        self.publish();
        !finished
    }

    /// Tick until any running smooth scroll settles.
    pub fn run_to_rest(&mut self) {
        while self.tick() {}
    }

    fn publish(&self) {
        self.signal.set(self.metrics.progress_at(self.offset));
    }
}

impl Viewport for SimViewport {
    fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let target = self.metrics.clamp_offset(offset);
        match behavior {
            ScrollBehavior::Auto => {
                self.tween = None;
                self.offset = target;
                self.publish();
            }
            ScrollBehavior::Smooth => {
                if target == self.offset {
                    self.tween = None;
                    return;
                }
                tracing::debug!(from = self.offset, to = target, "smooth scroll");
                self.tween = Some(ScrollTween::new(
                    self.offset,
                    target,
                    self.smooth_ticks,
                    self.smooth_ease,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three_screens(height: f64) -> ViewportMetrics {
        ViewportMetrics::for_screens(height, 3).unwrap()
    }

    #[test]
    fn tween_lands_exactly_on_the_target() {
        let mut tween = ScrollTween::new(0.0, 900.0, 7, Ease::InOutCubic);
        let mut last = 0.0;
        while !tween.is_finished() {
            last = tween.step();
        }
        assert_eq!(last, 900.0);
    }

    #[test]
    fn tween_approach_is_monotone() {
        let mut tween = ScrollTween::new(100.0, 500.0, 16, Ease::OutExpo);
        let mut prev = 100.0;
        while !tween.is_finished() {
            let next = tween.step();
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn auto_scroll_publishes_immediately() {
        let signal = ProgressSignal::new(0.0);
        let mut vp = SimViewport::new(three_screens(900.0), signal.clone());

        vp.scroll_to(900.0, ScrollBehavior::Auto);
        assert_eq!(vp.offset(), 900.0);
        assert_eq!(signal.get(), 0.5);
        assert!(!vp.is_animating());
    }

    #[test]
    fn smooth_scroll_publishes_once_per_tick() {
        let signal = ProgressSignal::new(0.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = signal.subscribe(move |v| sink.borrow_mut().push(v));

        let mut vp =
            SimViewport::new(three_screens(900.0), signal.clone()).with_smooth(6, Ease::Linear);
        vp.scroll_to(1800.0, ScrollBehavior::Smooth);
        assert!(vp.is_animating());
        assert!(seen.borrow().is_empty());

        vp.run_to_rest();
        assert_eq!(seen.borrow().len(), 6);
        assert_eq!(*seen.borrow().last().unwrap(), 1.0);
        assert_eq!(vp.offset(), 1800.0);
    }

    #[test]
    fn smooth_scroll_to_the_current_offset_is_a_no_op() {
        let signal = ProgressSignal::new(0.0);
        let mut vp = SimViewport::new(three_screens(900.0), signal);
        vp.scroll_to(0.0, ScrollBehavior::Smooth);
        assert!(!vp.is_animating());
    }

    #[test]
    fn scroll_by_clamps_and_cancels_the_tween() {
        let signal = ProgressSignal::new(0.0);
        let mut vp = SimViewport::new(three_screens(100.0), signal.clone());

        vp.scroll_to(200.0, ScrollBehavior::Smooth);
        assert!(vp.is_animating());

        vp.scroll_by(-50.0);
        assert!(!vp.is_animating());
        assert_eq!(vp.offset(), 0.0);

        vp.scroll_by(10_000.0);
        assert_eq!(vp.offset(), 200.0);
        assert_eq!(signal.get(), 1.0);
    }

    #[test]
    fn scroll_target_is_clamped_to_the_document() {
        let signal = ProgressSignal::new(0.0);
        let mut vp = SimViewport::new(three_screens(100.0), signal);
        vp.scroll_to(9_999.0, ScrollBehavior::Auto);
        assert_eq!(vp.offset(), 200.0);
    }
}

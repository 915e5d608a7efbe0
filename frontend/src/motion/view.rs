//! Viewport entry and pointer tracking for animated cards.

use std::cell::Cell;

use super::scroll::{watch, ScrollMetrics, ScrollSignal};
use super::Subscription;
use crate::error::DomError;

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

/// True when `bounds` overlaps the viewport shrunk by `margin` (a fraction of
/// its height) on the top and bottom edges.
pub fn intersects_viewport(bounds: Bounds, viewport_height: f64, margin: f64) -> bool {
    let inset = viewport_height * margin;
    bounds.bottom > inset && bounds.top < viewport_height - inset
}

/// Flips to `true` the first time an element is seen and stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewLatch {
    seen: bool,
}

impl InViewLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn observe(&mut self, bounds: Bounds, viewport_height: f64, margin: f64) -> bool {
        if !self.seen && intersects_viewport(bounds, viewport_height, margin) {
            self.seen = true;
        }
        self.seen
    }
}

/// Reports the first time an element enters the viewport, then goes quiet.
///
/// The caller drops the returned subscription once `on_seen` has fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewWatcher {
    margin: f64,
}

impl InViewWatcher {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    pub fn attach<S>(
        self,
        signal: &S,
        bounds: impl Fn() -> Option<Bounds> + 'static,
        on_seen: impl FnOnce() + 'static,
    ) -> Result<Subscription, DomError>
    where
        S: ScrollSignal + ?Sized,
    {
        let latch = Cell::new(InViewLatch::new());
        let derive = move |metrics: ScrollMetrics| {
            let mut current = latch.get();
            let seen = match bounds() {
                Some(bounds) => current.observe(bounds, metrics.client_height, self.margin),
                None => current.is_seen(),
            };
            latch.set(current);
            seen
        };
        let mut on_seen = Some(on_seen);
        watch(signal, derive, move |seen| {
            if seen {
                if let Some(on_seen) = on_seen.take() {
                    on_seen();
                }
            }
        })
    }
}

/// Pointer position inside a card, used to paint a radial highlight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spotlight {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl Spotlight {
    pub fn moved_to(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    pub fn gradient(&self, color: &str) -> String {
        format!(
            "radial-gradient(600px circle at {:.0}px {:.0}px, {}, transparent 40%)",
            self.x, self.y, color
        )
    }

    pub fn style(&self, color: &str) -> String {
        format!(
            "opacity: {}; background: {};",
            if self.active { 1 } else { 0 },
            self.gradient(color)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll::ManualScroll;
    use std::rc::Rc;

    const VIEWPORT: f64 = 1_000.0;

    #[test]
    fn element_inside_margin_box_is_in_view() {
        assert!(intersects_viewport(Bounds { top: 300.0, bottom: 500.0 }, VIEWPORT, 0.1));
        assert!(intersects_viewport(Bounds { top: -500.0, bottom: 2_000.0 }, VIEWPORT, 0.1));
    }

    #[test]
    fn element_in_margin_band_is_not_yet_in_view() {
        assert!(!intersects_viewport(Bounds { top: 950.0, bottom: 1_200.0 }, VIEWPORT, 0.1));
        assert!(!intersects_viewport(Bounds { top: 900.0, bottom: 1_200.0 }, VIEWPORT, 0.1));
        assert!(!intersects_viewport(Bounds { top: -300.0, bottom: 80.0 }, VIEWPORT, 0.1));
        assert!(intersects_viewport(Bounds { top: 899.0, bottom: 1_200.0 }, VIEWPORT, 0.1));
    }

    #[test]
    fn latch_never_resets() {
        let mut latch = InViewLatch::new();
        assert!(!latch.observe(Bounds { top: 1_500.0, bottom: 1_800.0 }, VIEWPORT, 0.1));
        assert!(latch.observe(Bounds { top: 400.0, bottom: 700.0 }, VIEWPORT, 0.1));
        assert!(latch.observe(Bounds { top: 3_000.0, bottom: 3_300.0 }, VIEWPORT, 0.1));
        assert!(latch.is_seen());
    }

    #[test]
    fn watcher_reports_first_entry_once() {
        let scroll = ManualScroll::new(5_000.0, VIEWPORT);
        let top = Rc::new(Cell::new(1_500.0));
        let seen = Rc::new(Cell::new(0));
        let subscription = {
            let top = top.clone();
            let seen = seen.clone();
            InViewWatcher::new(0.1)
                .attach(
                    &scroll,
                    move || {
                        Some(Bounds {
                            top: top.get(),
                            bottom: top.get() + 300.0,
                        })
                    },
                    move || seen.set(seen.get() + 1),
                )
                .unwrap()
        };
        assert_eq!(seen.get(), 0);

        top.set(400.0);
        scroll.scroll_to(1_100.0);
        assert_eq!(seen.get(), 1);

        top.set(3_000.0);
        scroll.scroll_to(0.0);
        top.set(200.0);
        scroll.scroll_to(1_300.0);
        assert_eq!(seen.get(), 1);

        drop(subscription);
        assert_eq!(scroll.listeners(), 0);
    }

    #[test]
    fn watcher_fires_on_attach_when_already_visible() {
        let scroll = ManualScroll::new(5_000.0, VIEWPORT);
        let seen = Rc::new(Cell::new(false));
        let flag = seen.clone();
        let _subscription = InViewWatcher::new(0.1)
            .attach(
                &scroll,
                || Some(Bounds { top: 100.0, bottom: 400.0 }),
                move || flag.set(true),
            )
            .unwrap();
        assert!(seen.get());
    }

    #[test]
    fn watcher_waits_for_unmounted_element() {
        let scroll = ManualScroll::new(5_000.0, VIEWPORT);
        let seen = Rc::new(Cell::new(false));
        let flag = seen.clone();
        let _subscription = InViewWatcher::new(0.1)
            .attach(&scroll, || None, move || flag.set(true))
            .unwrap();
        scroll.scroll_to(500.0);
        assert!(!seen.get());
    }

    #[test]
    fn spotlight_follows_pointer() {
        let spotlight = Spotlight::default().with_active(true).moved_to(120.4, 48.6);
        assert_eq!(
            spotlight.gradient("rgba(255,255,255,0.06)"),
            "radial-gradient(600px circle at 120px 49px, rgba(255,255,255,0.06), transparent 40%)"
        );
        assert!(spotlight.style("red").starts_with("opacity: 1;"));
        assert!(spotlight.with_active(false).style("red").starts_with("opacity: 0;"));
    }
}

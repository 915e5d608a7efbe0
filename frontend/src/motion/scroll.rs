use crate::error::DomError;

use super::Subscription;

/// Snapshot of the viewport scroll position, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Distance the document can scroll. Zero or negative when content fits the viewport.
    pub fn scrollable(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Source of scroll samples, e.g. the browser window.
pub trait ScrollSignal {
    fn metrics(&self) -> Result<ScrollMetrics, DomError>;
    fn subscribe(&self, listener: Box<dyn FnMut(ScrollMetrics)>) -> Result<Subscription, DomError>;
}

/// Derives a value from every sample, starting with the current position.
pub fn watch<S, T>(
    signal: &S,
    derive: impl Fn(ScrollMetrics) -> T + 'static,
    mut emit: impl FnMut(T) + 'static,
) -> Result<Subscription, DomError>
where
    S: ScrollSignal + ?Sized,
{
    emit(derive(signal.metrics()?));
    signal.subscribe(Box::new(move |metrics| emit(derive(metrics))))
}

/// Normalised scroll position in `[0, 1]`.
///
/// Divides by at least one pixel of scrollable range. Content that fits the
/// viewport, and any non-finite input, yields 0.
pub fn scroll_fraction(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scrollable();
    if scrollable.is_nan() || scrollable <= 0.0 || !metrics.offset.is_finite() {
        return 0.0;
    }
    (metrics.offset / scrollable.max(1.0)).clamp(0.0, 1.0)
}

/// Samples the scroll fraction that drives the progress bar.
pub struct ProgressMeter;

impl ProgressMeter {
    pub fn attach<S>(signal: &S, on_sample: impl FnMut(f64) + 'static) -> Result<Subscription, DomError>
    where
        S: ScrollSignal + ?Sized,
    {
        watch(signal, scroll_fraction, on_sample)
    }
}

/// `offset > threshold`, no hysteresis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdWatcher {
    threshold: f64,
}

impl ThresholdWatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn evaluate(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    pub fn attach<S>(self, signal: &S, on_flag: impl FnMut(bool) + 'static) -> Result<Subscription, DomError>
    where
        S: ScrollSignal + ?Sized,
    {
        watch(signal, move |metrics| self.evaluate(metrics.offset), on_flag)
    }
}

/// Linear map from `input` onto `output`, clamped to the ends of `output`.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    if span == 0.0 || !value.is_finite() {
        return out_start;
    }
    let progress = ((value - in_start) / span).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

/// Hero content shift and fade as the page scrolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            opacity: 1.0,
        }
    }
}

impl Parallax {
    pub fn at(offset: f64) -> Self {
        use crate::config::{PARALLAX_FADE_RANGE, PARALLAX_SHIFT_PX, PARALLAX_SHIFT_RANGE};
        Self {
            translate_y: map_range(offset, PARALLAX_SHIFT_RANGE, PARALLAX_SHIFT_PX),
            opacity: map_range(offset, PARALLAX_FADE_RANGE, (1.0, 0.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.1}px); opacity: {:.3};",
            self.translate_y, self.opacity
        )
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScroll;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{ScrollMetrics, ScrollSignal};
    use crate::error::DomError;
    use crate::motion::Subscription;

    struct Listener {
        live: Rc<Cell<bool>>,
        callback: Box<dyn FnMut(ScrollMetrics)>,
    }

    #[derive(Default)]
    struct Viewport {
        metrics: ScrollMetrics,
        listeners: Vec<Listener>,
    }

    /// Scroll signal driven by hand from tests.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScroll {
        viewport: Rc<RefCell<Viewport>>,
    }

    impl ManualScroll {
        pub(crate) fn new(scroll_height: f64, client_height: f64) -> Self {
            let scroll = Self::default();
            scroll.viewport.borrow_mut().metrics = ScrollMetrics {
                offset: 0.0,
                scroll_height,
                client_height,
            };
            scroll
        }

        pub(crate) fn listeners(&self) -> usize {
            self.viewport
                .borrow()
                .listeners
                .iter()
                .filter(|listener| listener.live.get())
                .count()
        }

        /// Moves the viewport and dispatches a scroll event to live listeners.
        pub(crate) fn scroll_to(&self, offset: f64) {
            let metrics = {
                let mut viewport = self.viewport.borrow_mut();
                viewport.metrics.offset = offset;
                viewport.listeners.retain(|listener| listener.live.get());
                viewport.metrics
            };
            let mut listeners = std::mem::take(&mut self.viewport.borrow_mut().listeners);
            for listener in listeners.iter_mut().filter(|listener| listener.live.get()) {
                (listener.callback)(metrics);
            }
            let mut viewport = self.viewport.borrow_mut();
            listeners.append(&mut viewport.listeners);
            viewport.listeners = listeners;
        }
    }

    impl ScrollSignal for ManualScroll {
        fn metrics(&self) -> Result<ScrollMetrics, DomError> {
            Ok(self.viewport.borrow().metrics)
        }

        fn subscribe(&self, callback: Box<dyn FnMut(ScrollMetrics)>) -> Result<Subscription, DomError> {
            let live = Rc::new(Cell::new(true));
            self.viewport.borrow_mut().listeners.push(Listener {
                live: live.clone(),
                callback,
            });
            Ok(Subscription::new(move || live.set(false)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NAV_SCROLL_THRESHOLD_PX, SCROLL_TOP_THRESHOLD_PX};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn metrics(offset: f64, scroll_height: f64, client_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            scroll_height,
            client_height,
        }
    }

    #[test]
    fn fraction_tracks_position_through_scrollable_range() {
        assert_eq!(scroll_fraction(metrics(0.0, 3_000.0, 1_000.0)), 0.0);
        assert_eq!(scroll_fraction(metrics(1_000.0, 3_000.0, 1_000.0)), 0.5);
        assert_eq!(scroll_fraction(metrics(2_000.0, 3_000.0, 1_000.0)), 1.0);
    }

    #[test]
    fn fraction_stays_in_unit_interval() {
        for offset in [-50.0, 0.0, 1.0, 733.3, 1_999.0, 2_000.0, 2_500.0, 1e9] {
            let fraction = scroll_fraction(metrics(offset, 3_000.0, 1_000.0));
            assert!((0.0..=1.0).contains(&fraction), "offset {offset} gave {fraction}");
        }
    }

    #[test]
    fn fraction_is_zero_when_content_fits_viewport() {
        for offset in [0.0, 1.0, 60.0, 10_000.0] {
            assert_eq!(scroll_fraction(metrics(offset, 800.0, 800.0)), 0.0);
            assert_eq!(scroll_fraction(metrics(offset, 500.0, 800.0)), 0.0);
        }
    }

    #[test]
    fn fraction_divides_by_at_least_one_pixel() {
        assert_eq!(scroll_fraction(metrics(0.25, 10.5, 10.0)), 0.25);
        assert_eq!(scroll_fraction(metrics(0.5, 10.5, 10.0)), 0.5);
        assert_eq!(scroll_fraction(metrics(3.0, 10.5, 10.0)), 1.0);
    }

    #[test]
    fn fraction_ignores_non_finite_input() {
        assert_eq!(scroll_fraction(metrics(f64::NAN, 3_000.0, 1_000.0)), 0.0);
        assert_eq!(scroll_fraction(metrics(10.0, f64::NAN, 1_000.0)), 0.0);
        assert_eq!(scroll_fraction(metrics(f64::INFINITY, 3_000.0, 1_000.0)), 0.0);
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let nav = ThresholdWatcher::new(NAV_SCROLL_THRESHOLD_PX);
        assert!(!nav.evaluate(0.0));
        assert!(!nav.evaluate(60.0));
        assert!(nav.evaluate(61.0));

        let to_top = ThresholdWatcher::new(SCROLL_TOP_THRESHOLD_PX);
        assert!(!to_top.evaluate(400.0));
        assert!(to_top.evaluate(400.5));
    }

    #[test]
    fn threshold_toggles_on_every_crossing() {
        let scroll = ManualScroll::new(5_000.0, 1_000.0);
        let flags = Rc::new(RefCell::new(Vec::new()));
        let sink = flags.clone();
        let _subscription = ThresholdWatcher::new(60.0)
            .attach(&scroll, move |flag| sink.borrow_mut().push(flag))
            .unwrap();

        for offset in [61.0, 60.0, 61.0, 59.0] {
            scroll.scroll_to(offset);
        }
        assert_eq!(*flags.borrow(), vec![false, true, false, true, false]);
    }

    #[test]
    fn progress_meter_samples_on_attach_and_on_scroll() {
        let scroll = ManualScroll::new(2_000.0, 1_000.0);
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = samples.clone();
        let _subscription = ProgressMeter::attach(&scroll, move |fraction| sink.borrow_mut().push(fraction)).unwrap();

        scroll.scroll_to(250.0);
        scroll.scroll_to(1_000.0);
        assert_eq!(*samples.borrow(), vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn no_samples_after_teardown() {
        let scroll = ManualScroll::new(2_000.0, 1_000.0);
        let progress_calls = Rc::new(Cell::new(0));
        let threshold_calls = Rc::new(Cell::new(0));

        let progress = {
            let calls = progress_calls.clone();
            ProgressMeter::attach(&scroll, move |_| calls.set(calls.get() + 1)).unwrap()
        };
        let threshold = {
            let calls = threshold_calls.clone();
            ThresholdWatcher::new(400.0)
                .attach(&scroll, move |_| calls.set(calls.get() + 1))
                .unwrap()
        };
        scroll.scroll_to(100.0);
        assert_eq!(scroll.listeners(), 2);

        drop(progress);
        drop(threshold);
        scroll.scroll_to(900.0);
        scroll.scroll_to(10.0);

        assert_eq!(progress_calls.get(), 2);
        assert_eq!(threshold_calls.get(), 2);
        assert_eq!(scroll.listeners(), 0);
    }

    #[test]
    fn map_range_clamps_both_ends() {
        assert_eq!(map_range(-10.0, (0.0, 500.0), (0.0, 150.0)), 0.0);
        assert_eq!(map_range(250.0, (0.0, 500.0), (0.0, 150.0)), 75.0);
        assert_eq!(map_range(900.0, (0.0, 500.0), (0.0, 150.0)), 150.0);
        assert_eq!(map_range(5.0, (3.0, 3.0), (1.0, 0.0)), 1.0);
    }

    #[test]
    fn parallax_shifts_and_fades_hero() {
        assert_eq!(Parallax::at(0.0), Parallax::default());

        let halfway = Parallax::at(150.0);
        assert_eq!(halfway.translate_y, 45.0);
        assert_eq!(halfway.opacity, 0.5);

        let gone = Parallax::at(1_200.0);
        assert_eq!(gone.translate_y, 150.0);
        assert_eq!(gone.opacity, 0.0);
        assert_eq!(gone.style(), "transform: translateY(150.0px); opacity: 0.000;");
    }
}

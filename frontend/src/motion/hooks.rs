//! Yew hooks binding the presentation state to browser timers and scrolling.
//!
//! Each hook acquires its timer or listener in an effect and releases it in
//! the effect's destructor, so nothing outlives the component that used it.

use web_sys::Element;
use yew::prelude::*;

use super::carousel::{AutoAdvance, Carousel, CarouselAction};
use super::reveal::{RevealGate, RevealState};
use super::scroll::{watch, Parallax, ProgressMeter, ScrollMetrics, ThresholdWatcher};
use super::timer::GlooTimers;
use super::view::InViewWatcher;
use super::Subscription;
use crate::config::IN_VIEW_MARGIN;
use crate::error::DomError;
use crate::utils::dom::{element_bounds, WindowScroll};

/// `Revealed` once `delay_ms` has elapsed since mount. The gate itself holds
/// the state; firing only schedules a re-render that reads it.
#[hook]
pub fn use_reveal(delay_ms: u32) -> RevealState {
    let gate = use_mut_ref(|| None::<RevealGate>);
    let rerender = use_force_update();
    {
        let gate = gate.clone();
        use_effect_with_deps(
            move |delay| {
                let started = RevealGate::start(&GlooTimers, *delay, move || rerender.force_update());
                *gate.borrow_mut() = Some(started);
                move || {
                    let stopped = gate.borrow_mut().take();
                    if let Some(mut stopped) = stopped {
                        stopped.cancel();
                    }
                }
            },
            delay_ms,
        );
    }
    let state = gate.borrow().as_ref().map_or(RevealState::Pending, RevealGate::state);
    state
}

/// Holds the latest value emitted by a scroll subscription made on mount.
#[hook]
fn use_scroll_derived<T, F>(initial: T, subscribe: F) -> T
where
    T: Clone + PartialEq + 'static,
    F: FnOnce(Box<dyn FnMut(T)>) -> Result<Subscription, DomError> + 'static,
{
    let value = use_state_eq(move || initial);
    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = subscribe(Box::new(move |next: T| value.set(next)))
                    .map_err(|err| log::warn!("Scroll tracking unavailable: {}", err))
                    .ok();
                move || drop(subscription)
            },
            (),
        );
    }
    (*value).clone()
}

#[hook]
pub fn use_scroll_fraction() -> f64 {
    use_scroll_derived(0.0, |emit| ProgressMeter::attach(&WindowScroll, emit))
}

#[hook]
pub fn use_scroll_threshold(threshold: f64) -> bool {
    use_scroll_derived(false, move |emit| {
        ThresholdWatcher::new(threshold).attach(&WindowScroll, emit)
    })
}

#[hook]
pub fn use_parallax() -> Parallax {
    use_scroll_derived(Parallax::default(), |emit| {
        watch(&WindowScroll, |metrics: ScrollMetrics| Parallax::at(metrics.offset), emit)
    })
}

/// `true` from the first time `node` enters the viewport.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let seen = use_state_eq(|| false);
    let already_seen = *seen;
    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |already_seen| {
                // re-runs when the latch flips, which drops the listener
                let subscription = if *already_seen {
                    None
                } else {
                    let bounds = move || node.cast::<Element>().map(|element| element_bounds(&element));
                    InViewWatcher::new(IN_VIEW_MARGIN)
                        .attach(&WindowScroll, bounds, move || seen.set(true))
                        .map_err(|err| log::warn!("Viewport tracking unavailable: {}", err))
                        .ok()
                };
                move || drop(subscription)
            },
            already_seen,
        );
    }
    already_seen
}

#[derive(Clone, PartialEq)]
pub struct CarouselHandle {
    pub state: Carousel,
    pub select: Callback<usize>,
}

/// Cycles through `len` slides every `period_ms`; `select` jumps directly.
#[hook]
pub fn use_carousel(len: usize, period_ms: u32) -> CarouselHandle {
    let carousel = use_reducer(move || Carousel::new(len));
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |period| {
                let advance = AutoAdvance::start(&GlooTimers, *period, move || {
                    carousel.dispatch(CarouselAction::Tick)
                });
                move || drop(advance)
            },
            period_ms,
        );
    }
    let select = {
        let carousel = carousel.clone();
        Callback::from(move |index: usize| carousel.dispatch(CarouselAction::Select(index)))
    };
    CarouselHandle {
        state: *carousel,
        select,
    }
}

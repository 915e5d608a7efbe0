use std::rc::Rc;

use thiserror::Error;
use yew::Reducible;

use super::timer::Timers;
use super::Subscription;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Slide {index} is out of range for {len} slides")]
pub struct SlideOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Index into a fixed list of slides. Always `< len` when `len > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    /// Advances one slide, wrapping from the last back to the first.
    pub fn tick(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jumps to `index`. Out-of-range indices leave the carousel untouched.
    pub fn select(&mut self, index: usize) -> Result<(), SlideOutOfRange> {
        if index >= self.len {
            return Err(SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Tick,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Tick => next.tick(),
            CarouselAction::Select(index) => {
                if let Err(err) = next.select(index) {
                    log::debug!("Ignoring slide selection: {}", err);
                    return self;
                }
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Recurring tick that drives a carousel. Manual selection does not touch it.
pub struct AutoAdvance {
    _interval: Subscription,
}

impl AutoAdvance {
    pub fn start<T>(timers: &T, period_ms: u32, on_tick: impl FnMut() + 'static) -> Self
    where
        T: Timers + ?Sized,
    {
        Self {
            _interval: timers.every(period_ms, Box::new(on_tick)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CAROUSEL_INTERVAL_MS;
    use crate::motion::timer::ManualTimers;
    use std::cell::RefCell;

    const SLIDES: usize = 7;

    #[test]
    fn starts_at_first_slide() {
        assert_eq!(Carousel::new(SLIDES).index(), 0);
    }

    #[test]
    fn k_ticks_land_on_k_mod_n() {
        for k in 0..30 {
            let mut carousel = Carousel::new(SLIDES);
            for _ in 0..k {
                carousel.tick();
            }
            assert_eq!(carousel.index(), k % SLIDES);
        }
        let mut carousel = Carousel::new(SLIDES);
        (0..10).for_each(|_| carousel.tick());
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn select_then_tick_wraps() {
        let mut carousel = Carousel::new(SLIDES);
        carousel.select(6).unwrap();
        assert_eq!(carousel.index(), 6);
        carousel.tick();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn every_in_range_selection_is_exact() {
        let mut carousel = Carousel::new(SLIDES);
        for index in (0..SLIDES).rev() {
            carousel.select(index).unwrap();
            assert_eq!(carousel.index(), index);
            assert!(carousel.is_current(index));
        }
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut carousel = Carousel::new(SLIDES);
        carousel.select(2).unwrap();
        for index in [7, 8, usize::MAX] {
            assert_eq!(
                carousel.select(index),
                Err(SlideOutOfRange { index, len: SLIDES })
            );
            assert_eq!(carousel.index(), 2);
        }
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.tick();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.select(0).is_err());
        assert!(!carousel.is_current(0));
    }

    #[test]
    fn reducer_applies_both_write_paths() {
        let state = Rc::new(Carousel::new(SLIDES));
        let state = state.reduce(CarouselAction::Tick);
        let state = state.reduce(CarouselAction::Select(5));
        let state = state.reduce(CarouselAction::Tick);
        assert_eq!(state.index(), 6);
    }

    #[test]
    fn reducer_keeps_state_on_rejected_selection() {
        let state = Rc::new(Carousel::new(SLIDES)).reduce(CarouselAction::Select(4));
        let rejected = state.clone().reduce(CarouselAction::Select(40));
        assert!(Rc::ptr_eq(&state, &rejected));
    }

    #[test]
    fn auto_advance_ticks_on_schedule_and_selection_keeps_it() {
        let timers = ManualTimers::new();
        let carousel = Rc::new(RefCell::new(Carousel::new(SLIDES)));
        let driven = carousel.clone();
        let advance = AutoAdvance::start(&timers, CAROUSEL_INTERVAL_MS, move || driven.borrow_mut().tick());

        timers.advance(2_999);
        assert_eq!(carousel.borrow().index(), 0);
        timers.advance(1);
        assert_eq!(carousel.borrow().index(), 1);

        // selecting mid-period does not restart the interval
        timers.advance(1_500);
        carousel.borrow_mut().select(6).unwrap();
        timers.advance(1_500);
        assert_eq!(carousel.borrow().index(), 0);

        timers.advance(3_000 * 9);
        assert_eq!(carousel.borrow().index(), 9 % SLIDES);

        drop(advance);
        timers.advance(30_000);
        assert_eq!(carousel.borrow().index(), 9 % SLIDES);
        assert_eq!(timers.pending(), 0);
    }
}

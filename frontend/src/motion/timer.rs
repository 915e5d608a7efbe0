use gloo_timers::callback::{Interval, Timeout};

use super::Subscription;

/// One-shot and recurring timers with cancellation through [`Subscription`].
pub trait Timers {
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Subscription;
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Subscription;
}

/// Browser timers (`setTimeout` / `setInterval`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTimers;

impl Timers for GlooTimers {
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Subscription {
        let timeout = Timeout::new(delay_ms, task);
        Subscription::new(move || drop(timeout))
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Subscription {
        let interval = Interval::new(period_ms, task);
        Subscription::new(move || drop(interval))
    }
}

#[cfg(test)]
pub(crate) use manual::ManualTimers;


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn once_fires_at_its_deadline_only() {
        let timers = ManualTimers::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _guard = timers.once(100, Box::new(move || counter.set(counter.get() + 1)));

        timers.advance(99);
        assert_eq!(fired.get(), 0);
        timers.advance(1);
        assert_eq!(fired.get(), 1);
        timers.advance(1_000);
        assert_eq!(fired.get(), 1);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn every_fires_each_period_until_dropped() {
        let timers = ManualTimers::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let guard = timers.every(10, Box::new(move || counter.set(counter.get() + 1)));

        timers.advance(35);
        assert_eq!(ticks.get(), 3);
        drop(guard);
        timers.advance(100);
        assert_eq!(ticks.get(), 3);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn fires_in_chronological_order_across_timers() {
        let timers = ManualTimers::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let slow = log.clone();
        let _slow = timers.every(30, Box::new(move || slow.borrow_mut().push("slow")));
        let fast = log.clone();
        let _fast = timers.every(20, Box::new(move || fast.borrow_mut().push("fast")));

        timers.advance(60);
        assert_eq!(*log.borrow(), vec!["fast", "slow", "fast", "slow", "fast"]);
    }

    #[test]
    fn cancelled_once_never_fires() {
        let timers = ManualTimers::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let guard = timers.once(50, Box::new(move || flag.set(true)));
        drop(guard);
        timers.advance(100);
        assert!(!fired.get());
    }
}

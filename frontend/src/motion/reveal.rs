use std::cell::Cell;
use std::rc::Rc;

use super::timer::Timers;
use super::Subscription;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// One-shot gate that flips from `Pending` to `Revealed` after a delay.
///
/// The transition happens at most once and never reverts. Dropping the gate
/// before the delay elapses cancels it.
pub struct RevealGate {
    state: Rc<Cell<RevealState>>,
    timer: Option<Subscription>,
}

impl RevealGate {
    pub fn start<T>(timers: &T, delay_ms: u32, on_reveal: impl FnOnce() + 'static) -> Self
    where
        T: Timers + ?Sized,
    {
        let state = Rc::new(Cell::new(RevealState::Pending));
        let task = {
            let state = state.clone();
            move || {
                if state.get() == RevealState::Pending {
                    state.set(RevealState::Revealed);
                    log::debug!("Reveal gate opened after {}ms", delay_ms);
                    on_reveal();
                }
            }
        };
        let timer = timers.once(delay_ms, Box::new(task));
        Self {
            state,
            timer: Some(timer),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    /// Releases the pending timer. A no-op once the gate has opened.
    pub fn cancel(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOADER_DELAY_MS;
    use std::cell::RefCell;
    use crate::motion::timer::ManualTimers;

    fn counting_gate(timers: &ManualTimers, delay: u32) -> (RevealGate, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let gate = RevealGate::start(timers, delay, move || counter.set(counter.get() + 1));
        (gate, calls)
    }

    #[test]
    fn reveals_exactly_at_configured_delay() {
        let timers = ManualTimers::new();
        let (gate, calls) = counting_gate(&timers, LOADER_DELAY_MS);
        assert_eq!(gate.state(), RevealState::Pending);

        timers.advance(1_799);
        assert_eq!(gate.state(), RevealState::Pending);
        assert_eq!(calls.get(), 0);

        timers.advance(1);
        assert_eq!(gate.state(), RevealState::Revealed);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn stays_revealed_and_fires_once() {
        let timers = ManualTimers::new();
        let (gate, calls) = counting_gate(&timers, 10);
        timers.advance(10);
        timers.advance(10_000);
        assert_eq!(gate.state(), RevealState::Revealed);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cancel_before_deadline_keeps_pending() {
        let timers = ManualTimers::new();
        let (mut gate, calls) = counting_gate(&timers, 100);
        timers.advance(50);
        gate.cancel();
        timers.advance(500);
        assert_eq!(gate.state(), RevealState::Pending);
        assert_eq!(calls.get(), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cancel_after_reveal_is_a_no_op() {
        let timers = ManualTimers::new();
        let (mut gate, calls) = counting_gate(&timers, 100);
        timers.advance(100);
        gate.cancel();
        gate.cancel();
        assert_eq!(gate.state(), RevealState::Revealed);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropping_the_gate_cancels_it() {
        let timers = ManualTimers::new();
        let (gate, calls) = counting_gate(&timers, 100);
        drop(gate);
        timers.advance(200);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn callback_observes_revealed_state_through_shared_gate() {
        // Mirrors the hook: the gate lives in a shared slot and the reveal
        // callback re-reads it, the way a forced re-render does.
        let timers = ManualTimers::new();
        let slot: Rc<RefCell<Option<RevealGate>>> = Rc::default();
        let observed = Rc::new(RefCell::new(Vec::new()));
        let gate = {
            let slot = slot.clone();
            let observed = observed.clone();
            RevealGate::start(&timers, LOADER_DELAY_MS, move || {
                let state = slot.borrow().as_ref().map(RevealGate::state);
                observed.borrow_mut().push(state);
            })
        };
        *slot.borrow_mut() = Some(gate);

        timers.advance(u64::from(LOADER_DELAY_MS));
        assert_eq!(*observed.borrow(), vec![Some(RevealState::Revealed)]);

        let stopped = slot.borrow_mut().take();
        if let Some(mut stopped) = stopped {
            stopped.cancel();
            assert_eq!(stopped.state(), RevealState::Revealed);
        }
        timers.advance(10_000);
        assert_eq!(observed.borrow().len(), 1);
    }
}

//! `setTimeout`-backed [`Scheduler`].
//!
//! Each scheduled event owns a `gloo_timers` [`Timeout`], which clears the
//! browser timer when dropped. Dropping a [`BrowserTimers`] therefore cancels
//! everything it still holds.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use vows_core::{Scheduler, TimerToken};

struct Pending {
    token: TimerToken,
    fired: Rc<Cell<bool>>,
    _timeout: Timeout,
}

/// Delivers scheduled events to a sink callback on the browser event loop.
pub struct BrowserTimers<E> {
    next_token: u64,
    pending: Vec<Pending>,
    sink: Rc<dyn Fn(E)>,
}

impl<E: 'static> BrowserTimers<E> {
    pub fn new(sink: impl Fn(E) + 'static) -> Self {
        Self {
            next_token: 0,
            pending: Vec::new(),
            sink: Rc::new(sink),
        }
    }
}

/// Browser timer delay for a [`Duration`], saturating at `u32::MAX` ms.
pub fn delay_ms(after: Duration) -> u32 {
    u32::try_from(after.as_millis()).unwrap_or(u32::MAX)
}

impl<E: 'static> Scheduler<E> for BrowserTimers<E> {
    fn schedule(&mut self, after: Duration, event: E) -> TimerToken {
        // Fired handles are dropped here rather than in their own callback.
        // wasm-bindgen defers freeing a closure that is still running.
        self.pending.retain(|p| !p.fired.get());

        let token = TimerToken::new(self.next_token);
        self.next_token += 1;

        let fired = Rc::new(Cell::new(false));
        let sink = Rc::clone(&self.sink);
        let flag = Rc::clone(&fired);
        let timeout = Timeout::new(delay_ms(after), move || {
            flag.set(true);
            sink(event);
        });

        self.pending.push(Pending {
            token,
            fired,
            _timeout: timeout,
        });
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        match self
            .pending
            .iter()
            .position(|p| p.token == token && !p.fired.get())
        {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }

    fn pending(&self) -> usize {
        self.pending.iter().filter(|p| !p.fired.get()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_ms_saturates() {
        assert_eq!(delay_ms(Duration::from_millis(5500)), 5500);
        assert_eq!(delay_ms(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use gloo_timers::future::TimeoutFuture;
    use vows_core::CopyFeedback;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_fired_handles_are_released() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut timers = BrowserTimers::new(move |_: u32| counter.set(counter.get() + 1));

        for round in 0..20 {
            timers.schedule(Duration::ZERO, round);
            TimeoutFuture::new(5).await;
        }

        assert_eq!(hits.get(), 20);
        assert_eq!(timers.pending(), 0);
        assert!(timers.pending.len() <= 1);
    }

    #[wasm_bindgen_test]
    async fn test_repeated_copies_stay_bounded() {
        let feedback = Rc::new(RefCell::new(CopyFeedback::new()));
        let sink_feedback = Rc::clone(&feedback);
        let mut timers = BrowserTimers::new(move |ticket: vows_core::CopyTicket| {
            sink_feedback.borrow_mut().release(&ticket);
        });

        for _ in 0..10 {
            feedback.borrow_mut().mark("venue", &mut timers);
        }
        assert_eq!(timers.pending(), 10);

        TimeoutFuture::new(delay_ms(vows_core::feedback::COPY_FEEDBACK_WINDOW) + 100).await;
        assert!(feedback.borrow().is_empty());

        feedback.borrow_mut().mark("hashtag", &mut timers);
        assert_eq!(timers.pending.len(), 1);
        assert!(feedback.borrow().is_copied("hashtag"));
    }

    #[wasm_bindgen_test]
    async fn test_drop_cancels_pending() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut timers = BrowserTimers::new(move |_: ()| counter.set(counter.get() + 1));
        timers.schedule(Duration::from_millis(1), ());
        drop(timers);

        TimeoutFuture::new(20).await;
        assert_eq!(hits.get(), 0);
    }
}

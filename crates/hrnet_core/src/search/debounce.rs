//! Cancellable timers and query debouncing.
//!
//! # Responsibility
//! - Provide an explicit `schedule`/`cancel` timer seam.
//! - Coalesce fast search input into one settled query.
//!
//! # Invariants
//! - At most one debounce timer is pending per `QueryDebouncer`.
//! - Each new input cancels the pending timer before scheduling another.
//! - Single-threaded: shared settled state is `Rc<RefCell<_>>` and `!Send`.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use std::time::Duration;

/// Quiet period before search input is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Deferred work run when a timer fires.
pub type TimerTask = Box<dyn FnOnce()>;

/// Cancellable one-shot timer scheduler.
pub trait TimerScheduler {
    /// Runs `task` once `delay` has elapsed, unless cancelled first.
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle;
    /// Cancels a pending timer. Returns `false` if it already fired or is unknown.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

struct PendingTimer {
    handle: TimerHandle,
    due: Duration,
    task: TimerTask,
}

/// Deterministic scheduler on a virtual clock, driven by [`ManualScheduler::advance`].
///
/// Event loops call `advance` with real elapsed time; tests call it with
/// exact offsets.
#[derive(Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward, firing due timers in deadline order.
    ///
    /// Timers sharing a deadline fire in scheduling order. Returns the
    /// number of fired timers.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.now.saturating_add(by);
        let mut fired = 0;

        while let Some(position) = self.next_due(target) {
            let timer = self.pending.swap_remove(position);
            self.now = timer.due;
            (timer.task)();
            fired += 1;
        }

        self.now = target;
        fired
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by_key(|(_, timer)| (timer.due, timer.handle))
            .map(|(position, _)| position)
    }
}

impl TimerScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            due: self.now.saturating_add(delay),
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.handle != handle);
        self.pending.len() != before
    }
}

impl Debug for ManualScheduler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[derive(Debug, Default)]
struct SettledState {
    text: String,
    waiting: bool,
}

/// Debounces raw search text into a settled query.
#[derive(Debug)]
pub struct QueryDebouncer {
    delay: Duration,
    raw: String,
    pending: Option<TimerHandle>,
    settled: Rc<RefCell<SettledState>>,
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            raw: String::new(),
            pending: None,
            settled: Rc::new(RefCell::new(SettledState::default())),
        }
    }

    /// Records a keystroke: cancels the pending timer and restarts the quiet period.
    pub fn on_input<S>(&mut self, scheduler: &mut S, raw: impl Into<String>)
    where
        S: TimerScheduler + ?Sized,
    {
        self.cancel(scheduler);
        self.raw = raw.into();
        self.settled.borrow_mut().waiting = true;

        let settled = Rc::clone(&self.settled);
        let text = self.raw.clone();
        let handle = scheduler.schedule(
            self.delay,
            Box::new(move || {
                let mut state = settled.borrow_mut();
                state.text = text;
                state.waiting = false;
            }),
        );
        self.pending = Some(handle);
    }

    /// Drops any pending input without settling it.
    pub fn cancel<S>(&mut self, scheduler: &mut S)
    where
        S: TimerScheduler + ?Sized,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.settled.borrow_mut().waiting = false;
    }

    /// Latest text typed, settled or not.
    pub fn raw_query(&self) -> &str {
        &self.raw
    }

    /// Text applied by the last fired timer.
    pub fn settled_query(&self) -> String {
        self.settled.borrow().text.clone()
    }

    /// Whether no input is waiting on the quiet period.
    ///
    /// Cancelled input counts as settled; the previous query stays applied.
    pub fn is_settled(&self) -> bool {
        !self.settled.borrow().waiting
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::{ManualScheduler, TimerScheduler};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("late", 30), ("early", 10), ("tie", 10)] {
            let log = Rc::clone(&log);
            scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || log.borrow_mut().push(label)),
            );
        }

        assert_eq!(scheduler.advance(Duration::from_millis(20)), 2);
        assert_eq!(*log.borrow(), ["early", "tie"]);
        assert_eq!(scheduler.advance(Duration::from_millis(10)), 1);
        assert_eq!(*log.borrow(), ["early", "tie", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(30));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&fired);
        let handle = scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || *flag.borrow_mut() = true),
        );

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        scheduler.advance(Duration::from_secs(1));
        assert!(!*fired.borrow());
    }
}

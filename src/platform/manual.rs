//! Virtual-time clock
//!
//! Nothing fires until time is advanced explicitly, which makes the game loop
//! steppable from tests and from the headless build.

use std::cell::{Cell, RefCell};

use super::{Callback, FrameClock};

struct Pending {
    due: f64,
    seq: u64,
    callback: Callback,
}

#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks scheduled but not yet fired
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Due time of the earliest pending callback
    pub fn next_due(&self) -> Option<f64> {
        self.pending
            .borrow()
            .iter()
            .map(|p| p.due)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Jump to the earliest pending callback and run it.
    /// Returns false if nothing was pending.
    pub fn fire_next(&self) -> bool {
        let next = {
            let mut pending = self.pending.borrow_mut();
            let index = pending
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
                .map(|(i, _)| i);
            index.map(|i| pending.swap_remove(i))
        };

        // Borrow released: the callback may schedule more work
        match next {
            Some(p) => {
                if p.due > self.now.get() {
                    self.now.set(p.due);
                }
                (p.callback)();
                true
            }
            None => false,
        }
    }

    /// Move time forward by `ms`, firing everything that falls due on the way
    /// (including callbacks scheduled by those callbacks). Returns how many
    /// fired.
    pub fn advance(&self, ms: f64) -> usize {
        let target = self.now.get() + ms;
        let mut fired = 0;
        while let Some(due) = self.next_due() {
            if due > target {
                break;
            }
            self.fire_next();
            fired += 1;
        }
        self.now.set(target);
        fired
    }
}

impl FrameClock for ManualClock {
    fn schedule_once(&self, callback: Callback, delay_ms: u32) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(Pending {
            due: self.now.get() + delay_ms as f64,
            seq,
            callback,
        });
    }

    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_fires_in_due_order() {
        let clock = ManualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (name, delay) in [("b", 200), ("a", 100), ("c", 200)] {
            let log = log.clone();
            clock.schedule_once(Box::new(move || log.borrow_mut().push(name)), delay);
        }

        assert_eq!(clock.advance(150.0), 1);
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(clock.now_ms(), 150.0);

        assert_eq!(clock.advance(50.0), 2);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_callback_can_reschedule() {
        let clock = Rc::new(ManualClock::new());
        let count = Rc::new(Cell::new(0));

        fn arm(clock: Rc<ManualClock>, count: Rc<Cell<u32>>) {
            let c = clock.clone();
            clock.schedule_once(
                Box::new(move || {
                    count.set(count.get() + 1);
                    arm(c, count);
                }),
                100,
            );
        }
        arm(clock.clone(), count.clone());

        clock.advance(350.0);
        assert_eq!(count.get(), 3);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_due(), Some(400.0));
    }

    #[test]
    fn test_fire_next_jumps_time() {
        let clock = ManualClock::new();
        assert!(!clock.fire_next());

        clock.schedule_once(Box::new(|| {}), 600);
        assert!(clock.fire_next());
        assert_eq!(clock.now_ms(), 600.0);
    }
}

use std::time::{Duration, Instant};

/// Default input poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get the input poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Interval of the countdown and wall-clock callbacks
pub fn one_second() -> Duration {
    Duration::from_secs(1)
}

/// Identifies one recurring schedule; stays unique for the scheduler's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleHandle(u64);

#[derive(Debug)]
struct Slot {
    handle: ScheduleHandle,
    interval: Duration,
    next_due: Instant,
}

/// Cooperative scheduler for recurring callbacks.
///
/// The event loop calls [`Scheduler::due`] after each input poll and dispatches
/// the returned handles one at a time. A handle is returned at most once per call,
/// so a callback can never overlap itself, and intervals missed while the loop was
/// busy are dropped rather than replayed.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    slots: Vec<Slot>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a recurring callback whose first firing is one interval after `now`
    pub fn schedule_every(&mut self, interval: Duration, now: Instant) -> ScheduleHandle {
        self.next_id += 1;
        let handle = ScheduleHandle(self.next_id);
        self.slots.push(Slot {
            handle,
            interval,
            next_due: now + interval,
        });
        handle
    }

    /// Cancel a schedule. Returns false if it was not live.
    pub fn cancel(&mut self, handle: ScheduleHandle) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.handle != handle);
        self.slots.len() != before
    }

    pub fn is_scheduled(&self, handle: ScheduleHandle) -> bool {
        self.slots.iter().any(|slot| slot.handle == handle)
    }

    /// Number of live schedules
    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.slots.len()
    }

    /// Handles whose interval has elapsed at `now`, in scheduling order
    pub fn due(&mut self, now: Instant) -> Vec<ScheduleHandle> {
        let mut fired = Vec::new();

        for slot in &mut self.slots {
            if now < slot.next_due {
                continue;
            }

            fired.push(slot.handle);
            slot.next_due += slot.interval;
            if slot.next_due <= now {
                // Loop stalled past several intervals
                slot.next_due = now + slot.interval;
            }
        }

        fired
    }
}

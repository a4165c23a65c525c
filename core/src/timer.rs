use serde::Serialize;

use crate::*;

/// Token identifying which round a timer was scheduled for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Generation(u64);

#[derive(Clone, Debug)]
struct Timer<K> {
    due: Millis,
    seq: u64,
    generation: Generation,
    kind: K,
}

/// One-shot timers on the host's logical clock.
///
/// Every timer remembers the generation it was scheduled under. Bumping the
/// generation (new round, restart, exit) turns all older timers into no-ops.
#[derive(Clone, Debug)]
pub struct Scheduler<K> {
    pending: Vec<Timer<K>>,
    generation: Generation,
    next_seq: u64,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            generation: Generation::default(),
            next_seq: 0,
        }
    }
}

impl<K: Clone + core::fmt::Debug> Scheduler<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a new generation and forgets every pending timer.
    pub fn bump(&mut self) -> Generation {
        self.generation.0 += 1;
        if !self.pending.is_empty() {
            log::debug!(
                "dropping {} stale timers at generation {}",
                self.pending.len(),
                self.generation.0
            );
        }
        self.pending.clear();
        self.generation
    }

    pub fn schedule(&mut self, now: Millis, delay: Millis, kind: K) {
        self.schedule_for(self.generation, now, delay, kind);
    }

    /// Schedules a timer tagged with an explicit generation; it only fires if that
    /// generation is still current when it comes due.
    pub fn schedule_for(&mut self, generation: Generation, now: Millis, delay: Millis, kind: K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        log::trace!("schedule {:?} in {}ms", kind, delay);
        self.pending.push(Timer {
            due: now.saturating_add(delay),
            seq,
            generation,
            kind,
        });
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending
            .iter()
            .filter(|timer| timer.generation == self.generation)
            .map(|timer| timer.due)
            .min()
    }

    pub fn is_idle(&self) -> bool {
        self.next_deadline().is_none()
    }

    /// Removes and returns the earliest timer due at `now`. Stale timers are dropped
    /// on the way.
    pub fn pop_due(&mut self, now: Millis) -> Option<K> {
        loop {
            let index = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due <= now)
                .min_by_key(|(_, timer)| (timer.due, timer.seq))
                .map(|(index, _)| index)?;

            let timer = self.pending.swap_remove(index);
            if timer.generation == self.generation {
                return Some(timer.kind);
            }
            log::debug!(
                "ignoring stale {:?} from generation {}",
                timer.kind,
                timer.generation.0
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, 500, "shake");
        scheduler.schedule(0, 100, "prompt");
        scheduler.schedule(0, 100, "second");

        assert_eq!(scheduler.pop_due(50), None);
        assert_eq!(scheduler.next_deadline(), Some(100));
        assert_eq!(scheduler.pop_due(600), Some("prompt"));
        assert_eq!(scheduler.pop_due(600), Some("second"));
        assert_eq!(scheduler.pop_due(600), Some("shake"));
        assert!(scheduler.is_idle());
    }

    #[test]
    fn bump_turns_pending_timers_into_noops() {
        let mut scheduler = Scheduler::new();
        let old = scheduler.generation();
        scheduler.schedule(0, 100, "advance");
        scheduler.bump();

        assert_eq!(scheduler.pop_due(1_000), None);

        scheduler.schedule_for(old, 1_000, 0, "late");
        assert_eq!(scheduler.next_deadline(), None);
        assert_eq!(scheduler.pop_due(2_000), None);
    }
}

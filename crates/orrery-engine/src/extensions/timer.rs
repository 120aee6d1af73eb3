// extensions/timer.rs
//
// Cooperative timers advanced by the frame loop.
//
// Usage:
//   let id = ctx.timers.schedule_repeating(5.0, 7.0, 2, REHOME);
//   ...
//   for (id, kind) in ctx.timers.drain_fired() { ... }
//
// A cancelled timer never fires, and a repeating timer fires at most once
// per tick even when `dt` spans several intervals.

use std::collections::BTreeMap;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

#[derive(Debug, Clone)]
struct Timer {
    kind: u32,
    remaining: f32,
    interval: f32,
    /// Fires left, including the pending one.
    passes: u32,
}

/// Owns all pending timers.
#[derive(Debug, Default)]
pub struct TimerState {
    timers: BTreeMap<TimerId, Timer>,
    next_id: u32,
    fired: Vec<(TimerId, u32)>,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `kind` once after `delay` seconds.
    pub fn schedule_once(&mut self, delay: f32, kind: u32) -> TimerId {
        self.schedule_repeating(delay, 0.0, 1, kind)
    }

    /// Fire `kind` after `first_delay` seconds, then every `interval` seconds,
    /// `passes` times in total.
    pub fn schedule_repeating(
        &mut self,
        first_delay: f32,
        interval: f32,
        passes: u32,
        kind: u32,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        if passes == 0 {
            return id;
        }
        self.timers.insert(
            id,
            Timer {
                kind,
                remaining: first_delay.max(0.0),
                interval: interval.max(0.0),
                passes,
            },
        );
        id
    }

    /// Cancel a timer. Returns false if it already finished or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.fired.retain(|(fired, _)| *fired != id);
        self.timers.remove(&id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Advance all timers by `dt` seconds, queueing the ones that fire.
    pub fn tick(&mut self, dt: f32) {
        let mut finished = Vec::new();

        for (&id, timer) in self.timers.iter_mut() {
            timer.remaining -= dt;
            if timer.remaining > 0.0 {
                continue;
            }
            self.fired.push((id, timer.kind));
            timer.passes -= 1;
            if timer.passes == 0 {
                finished.push(id);
            } else {
                timer.remaining = timer.interval;
            }
        }

        for id in finished {
            self.timers.remove(&id);
        }
    }

    /// Drain timers that fired since the last drain, in firing order.
    pub fn drain_fired(&mut self) -> impl Iterator<Item = (TimerId, u32)> + '_ {
        self.fired.drain(..)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

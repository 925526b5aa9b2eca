//! Deferred-task scheduler
//!
//! Holds one-shot commands with a due time and hands them back, in order,
//! as the owner advances time. There is no wall clock anywhere: time moves
//! only through [`TaskScheduler::advance`], so hosts tick it from their
//! frame loop and tests drive it deterministically.
//!
//! Every `schedule_in` returns a [`TaskId`] that doubles as a cancellation
//! token; cancelling removes the task before it can fire.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::Duration;

new_key_type! {
    /// Cancellation token for a scheduled task
    pub struct TaskId;
}

struct ScheduledTask<C> {
    due: Duration,
    seq: u64,
    command: C,
}

/// Deterministic one-shot task scheduler
///
/// `C` is the command payload delivered back when a task comes due. The
/// scheduler never executes anything itself: the owner drains due
/// commands from `advance` and applies them against its own surface,
/// keeping the scheduler free of callback lifetimes.
pub struct TaskScheduler<C> {
    tasks: SlotMap<TaskId, ScheduledTask<C>>,
    elapsed: Duration,
    next_seq: u64,
}

impl<C> TaskScheduler<C> {
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            elapsed: Duration::ZERO,
            next_seq: 0,
        }
    }

    /// Schedule `command` to come due after `delay`
    pub fn schedule_in(&mut self, delay: Duration, command: C) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert(ScheduledTask {
            due: self.elapsed + delay,
            seq,
            command,
        })
    }

    /// Cancel a pending task
    ///
    /// Returns `true` if the task was still pending. Cancelling an
    /// already-fired or already-cancelled task is a no-op.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.tasks.remove(id).is_some()
    }

    /// Whether the task behind `id` has neither fired nor been cancelled
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Number of tasks still waiting to come due
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Total simulated time advanced so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advance time by `dt` and drain every task that came due
    ///
    /// Commands are returned ordered by due time, then by scheduling
    /// order for tasks due at the same instant.
    pub fn advance(&mut self, dt: Duration) -> Vec<C> {
        self.elapsed += dt;

        let mut due: SmallVec<[(Duration, u64, TaskId); 8]> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= self.elapsed)
            .map(|(id, task)| (task.due, task.seq, id))
            .collect();
        due.sort_unstable();

        let mut commands = Vec::with_capacity(due.len());
        for (_, _, id) in due {
            if let Some(task) = self.tasks.remove(id) {
                commands.push(task.command);
            }
        }
        commands
    }
}

impl<C> Default for TaskScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_when_due() {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule_in(Duration::from_millis(100), "apply");

        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec!["apply"]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_cancel_prevents_delivery() {
        let mut scheduler = TaskScheduler::new();
        let id = scheduler.schedule_in(Duration::from_millis(50), "doomed");

        assert!(scheduler.cancel(id));
        assert!(!scheduler.is_pending(id));
        assert!(scheduler.advance(Duration::from_millis(100)).is_empty());

        // second cancel is a no-op
        assert!(!scheduler.cancel(id));
    }

    #[test]
    fn test_due_order_by_time_then_insertion() {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule_in(Duration::from_millis(30), "c");
        scheduler.schedule_in(Duration::from_millis(10), "a");
        scheduler.schedule_in(Duration::from_millis(10), "b");

        assert_eq!(
            scheduler.advance(Duration::from_millis(30)),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_time_accumulates_across_advances() {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule_in(Duration::from_millis(300), "clear");

        assert!(scheduler.advance(Duration::from_millis(150)).is_empty());
        assert!(scheduler.advance(Duration::from_millis(100)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(50)), vec!["clear"]);
        assert_eq!(scheduler.elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn test_schedule_relative_to_current_time() {
        let mut scheduler = TaskScheduler::new();
        scheduler.advance(Duration::from_secs(5));

        scheduler.schedule_in(Duration::from_millis(100), "late");
        assert!(scheduler.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(50)), vec!["late"]);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule_in(Duration::ZERO, "now");
        assert_eq!(scheduler.advance(Duration::ZERO), vec!["now"]);
    }
}

//! Fixed-delay scheduling for the simulated conversation partner.
//!
//! Every outgoing message gets the same chain of transitions relative to the
//! moment it was sent: the delivery statuses advance one by one, then the
//! partner "types" for a while and posts exactly one reply. Nothing here does
//! I/O; the shell drains due events on each tick.

use crate::domain::message::DeliveryStatus;

/// Delays of the simulated chain, relative to the send instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPacing {
    pub sent_after_ms: u64,
    pub delivered_after_ms: u64,
    pub read_after_ms: u64,
    pub typing_after_ms: u64,
    pub reply_after_ms: u64,
}

impl Default for SimPacing {
    fn default() -> Self {
        Self {
            sent_after_ms: 350,
            delivered_after_ms: 900,
            read_after_ms: 1_400,
            typing_after_ms: 1_900,
            reply_after_ms: 3_100,
        }
    }
}

/// An event the timeline hands back to the shell once its delay elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    StatusAdvanced {
        message_id: u64,
        status: DeliveryStatus,
    },
    TypingStarted,
    TypingStopped,
    BotReply {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledEvent {
    due_at_ms: u64,
    seq: u64,
    event: SimEvent,
}

/// Ordered queue of pending simulated transitions.
#[derive(Debug, Clone, Default)]
pub struct SimTimeline {
    pacing: SimPacing,
    pending: Vec<ScheduledEvent>,
    next_seq: u64,
}

impl SimTimeline {
    pub fn new(pacing: SimPacing) -> Self {
        Self {
            pacing,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules the full delivery-and-reply chain for one outgoing message.
    pub fn schedule_outgoing(&mut self, message_id: u64, reply_text: String, now_ms: u64) {
        let pacing = self.pacing;
        self.push(
            now_ms + pacing.sent_after_ms,
            SimEvent::StatusAdvanced {
                message_id,
                status: DeliveryStatus::Sent,
            },
        );
        self.push(
            now_ms + pacing.delivered_after_ms,
            SimEvent::StatusAdvanced {
                message_id,
                status: DeliveryStatus::Delivered,
            },
        );
        self.push(
            now_ms + pacing.read_after_ms,
            SimEvent::StatusAdvanced {
                message_id,
                status: DeliveryStatus::Read,
            },
        );
        self.push(now_ms + pacing.typing_after_ms, SimEvent::TypingStarted);
        self.push(now_ms + pacing.reply_after_ms, SimEvent::TypingStopped);
        self.push(
            now_ms + pacing.reply_after_ms,
            SimEvent::BotReply { text: reply_text },
        );
    }

    /// Returns all events whose delay has elapsed, in schedule order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<SimEvent> {
        let mut due: Vec<ScheduledEvent> = Vec::new();
        let mut remaining: Vec<ScheduledEvent> = Vec::new();

        for scheduled in self.pending.drain(..) {
            if scheduled.due_at_ms <= now_ms {
                due.push(scheduled);
            } else {
                remaining.push(scheduled);
            }
        }

        self.pending = remaining;
        due.sort_by_key(|scheduled| (scheduled.due_at_ms, scheduled.seq));
        due.into_iter().map(|scheduled| scheduled.event).collect()
    }

    /// Drops every pending transition. Used when the conversation is cleared
    /// so a stale reply cannot repopulate an emptied transcript.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    fn push(&mut self, due_at_ms: u64, event: SimEvent) {
        self.pending.push(ScheduledEvent {
            due_at_ms,
            seq: self.next_seq,
            event,
        });
        self.next_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timeline_is_idle() {
        let timeline = SimTimeline::new(SimPacing::default());

        assert!(timeline.is_idle());
    }

    #[test]
    fn drain_before_first_delay_yields_nothing() {
        let mut timeline = SimTimeline::new(SimPacing::default());
        timeline.schedule_outgoing(1, "reply".to_owned(), 1_000);

        assert!(timeline.drain_due(1_000).is_empty());
        assert!(timeline.drain_due(1_349).is_empty());
    }

    #[test]
    fn statuses_become_due_in_the_fixed_order() {
        let mut timeline = SimTimeline::new(SimPacing::default());
        timeline.schedule_outgoing(1, "reply".to_owned(), 0);

        assert_eq!(
            timeline.drain_due(350),
            vec![SimEvent::StatusAdvanced {
                message_id: 1,
                status: DeliveryStatus::Sent,
            }]
        );
        assert_eq!(
            timeline.drain_due(900),
            vec![SimEvent::StatusAdvanced {
                message_id: 1,
                status: DeliveryStatus::Delivered,
            }]
        );
        assert_eq!(
            timeline.drain_due(1_400),
            vec![SimEvent::StatusAdvanced {
                message_id: 1,
                status: DeliveryStatus::Read,
            }]
        );
    }

    #[test]
    fn late_drain_yields_batched_events_in_schedule_order() {
        let mut timeline = SimTimeline::new(SimPacing::default());
        timeline.schedule_outgoing(7, "hello back".to_owned(), 0);

        let events = timeline.drain_due(10_000);

        assert_eq!(events.len(), 6);
        assert_eq!(
            events[0],
            SimEvent::StatusAdvanced {
                message_id: 7,
                status: DeliveryStatus::Sent,
            }
        );
        assert_eq!(events[3], SimEvent::TypingStarted);
        assert_eq!(events[4], SimEvent::TypingStopped);
        assert_eq!(
            events[5],
            SimEvent::BotReply {
                text: "hello back".to_owned(),
            }
        );
        assert!(timeline.is_idle());
    }

    #[test]
    fn exactly_one_bot_reply_is_scheduled_per_send() {
        let mut timeline = SimTimeline::new(SimPacing::default());
        timeline.schedule_outgoing(1, "first".to_owned(), 0);
        timeline.schedule_outgoing(2, "second".to_owned(), 100);

        let replies = timeline
            .drain_due(60_000)
            .into_iter()
            .filter(|event| matches!(event, SimEvent::BotReply { .. }))
            .count();

        assert_eq!(replies, 2);
    }

    #[test]
    fn cancel_all_drops_pending_events() {
        let mut timeline = SimTimeline::new(SimPacing::default());
        timeline.schedule_outgoing(1, "reply".to_owned(), 0);

        timeline.cancel_all();

        assert!(timeline.is_idle());
        assert!(timeline.drain_due(60_000).is_empty());
    }

    #[test]
    fn custom_pacing_shifts_due_times() {
        let pacing = SimPacing {
            sent_after_ms: 10,
            delivered_after_ms: 20,
            read_after_ms: 30,
            typing_after_ms: 40,
            reply_after_ms: 50,
        };
        let mut timeline = SimTimeline::new(pacing);
        timeline.schedule_outgoing(1, "quick".to_owned(), 100);

        assert!(timeline.drain_due(109).is_empty());
        assert_eq!(timeline.drain_due(110).len(), 1);
    }
}

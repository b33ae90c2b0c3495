//! Topic-based event bus implementation.

use std::collections::{HashMap, VecDeque};

use fight_core::BattleEvent;
use serde::{Deserialize, Serialize};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Phase changes, replay start, round and match results
    Round,
    /// Resolved hits
    Hit,
    /// Sound cues
    Audio,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Round, Topic::Hit, Topic::Audio];
}

/// Engine event stamped with the runtime frame that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub frame: u64,
    pub event: BattleEvent,
}

impl Event {
    pub fn new(frame: u64, event: BattleEvent) -> Self {
        Self { frame, event }
    }

    pub fn topic(&self) -> Topic {
        match self.event {
            BattleEvent::Hit(_) => Topic::Hit,
            BattleEvent::Sound { .. } => Topic::Audio,
            BattleEvent::PhaseChanged { .. }
            | BattleEvent::ReplayStarted
            | BattleEvent::RoundWon { .. }
            | BattleEvent::MatchOver { .. } => Topic::Round,
        }
    }
}

/// Topic-based event bus
///
/// Consumers subscribe to the topics they care about and drain them after
/// each step. Events on topics nobody subscribed to are dropped. Each topic
/// keeps at most `capacity` events; when full the oldest one is discarded.
#[derive(Debug)]
pub struct EventBus {
    queues: HashMap<Topic, VecDeque<Event>>,
    capacity: usize,
    dropped: u64,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queues: HashMap::new(),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&mut self, event: Event) {
        let topic = event.topic();
        let Some(queue) = self.queues.get_mut(&topic) else {
            tracing::trace!("No subscribers for topic {:?}", topic);
            return;
        };
        if queue.len() == self.capacity {
            queue.pop_front();
            self.dropped += 1;
            tracing::debug!("Event queue for topic {:?} is full, dropped oldest", topic);
        }
        queue.push_back(event);
    }

    /// Subscribe to a specific topic
    ///
    /// Only events published after this call are queued.
    pub fn subscribe(&mut self, topic: Topic) {
        self.queues.entry(topic).or_default();
    }

    pub fn subscribe_multiple(&mut self, topics: &[Topic]) {
        for &topic in topics {
            self.subscribe(topic);
        }
    }

    /// Stops queuing `topic` and discards what was pending.
    pub fn unsubscribe(&mut self, topic: Topic) {
        self.queues.remove(&topic);
    }

    pub fn is_subscribed(&self, topic: Topic) -> bool {
        self.queues.contains_key(&topic)
    }

    /// Takes every pending event of `topic`, oldest first.
    pub fn drain(&mut self, topic: Topic) -> Vec<Event> {
        self.queues
            .get_mut(&topic)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn pending(&self, topic: Topic) -> usize {
        self.queues.get(&topic).map_or(0, VecDeque::len)
    }

    /// Events discarded because a topic queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use fight_core::{RoundPhase, Side};

    use super::*;

    fn phase(frame: u64) -> Event {
        Event::new(
            frame,
            BattleEvent::PhaseChanged {
                phase: RoundPhase::Intro,
            },
        )
    }

    #[test]
    fn events_reach_only_subscribed_topics() {
        let mut bus = EventBus::new();
        bus.subscribe(Topic::Round);

        bus.publish(phase(1));
        bus.publish(Event::new(2, BattleEvent::MatchOver { winner: Side::P2 }));
        bus.publish(Event::new(3, BattleEvent::ReplayStarted));

        assert_eq!(bus.pending(Topic::Round), 3);
        assert_eq!(bus.pending(Topic::Hit), 0);
        let frames: Vec<u64> = bus.drain(Topic::Round).iter().map(|e| e.frame).collect();
        assert_eq!(frames, [1, 2, 3]);
        assert_eq!(bus.pending(Topic::Round), 0);
    }

    #[test]
    fn unsubscribed_topics_drop_events() {
        let mut bus = EventBus::new();
        bus.publish(phase(1));
        assert!(bus.drain(Topic::Round).is_empty());

        bus.subscribe(Topic::Round);
        bus.publish(phase(2));
        bus.unsubscribe(Topic::Round);
        assert!(!bus.is_subscribed(Topic::Round));
        assert!(bus.drain(Topic::Round).is_empty());
    }

    #[test]
    fn full_queue_discards_the_oldest_event() {
        let mut bus = EventBus::with_capacity(2);
        bus.subscribe_multiple(&Topic::ALL);
        for frame in 0..4 {
            bus.publish(phase(frame));
        }
        let frames: Vec<u64> = bus.drain(Topic::Round).iter().map(|e| e.frame).collect();
        assert_eq!(frames, [2, 3]);
        assert_eq!(bus.dropped(), 2);
    }
}

//! High-level runtime orchestrator.
//!
//! The runtime owns the engine, one input provider per seat and the output
//! sinks, and exposes a builder-based API for clients to drive the frame
//! loop.

use std::sync::Arc;

use fight_core::{BattleConfig, BattleEngine, BattleEvent, FighterData, InputBits, Side};

use crate::api::{
    AudioSink, InputProvider, NullSink, PresentationSink, ProviderKind, Result, RuntimeError,
};
use crate::events::{Event, EventBus, Topic};
use crate::repository::ReplayLog;

/// Runtime configuration shared across the orchestrator and the bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    /// Events kept per topic before the oldest are dropped.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 256,
        }
    }
}

/// Main runtime that drives the battle one frame at a time.
pub struct Runtime {
    engine: BattleEngine,
    providers: [Box<dyn InputProvider>; 2],
    audio: Box<dyn AudioSink>,
    presentation: Box<dyn PresentationSink>,
    bus: EventBus,
    /// Ticks run so far.
    frame: u64,
    last_input: [InputBits; 2],
    last_events: Vec<BattleEvent>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Runs one tick and dispatches its events.
    ///
    /// Providers see the engine as the previous tick left it. Events go to
    /// the providers, then the sinks, then the bus, in engine order.
    pub fn step(&mut self) -> &[BattleEvent] {
        let input = Side::BOTH.map(|side| self.providers[side.index()].next_input(side, &self.engine));
        self.last_input = input;

        self.last_events.clear();
        self.last_events.extend_from_slice(self.engine.tick(input));
        self.frame += 1;

        for event in &self.last_events {
            for provider in &mut self.providers {
                provider.on_round_event(event);
            }
            match event {
                BattleEvent::Sound { side, cue } => self.audio.play(*side, cue),
                BattleEvent::Hit(hit) => self.presentation.on_hit(hit),
                BattleEvent::PhaseChanged { phase } => self.presentation.on_phase_changed(*phase),
                BattleEvent::ReplayStarted
                | BattleEvent::RoundWon { .. }
                | BattleEvent::MatchOver { .. } => {}
            }
            self.bus.publish(Event::new(self.frame, *event));
        }
        self.presentation.present(&self.engine);

        &self.last_events
    }

    /// Runs `frames` ticks, stopping early once the match is over.
    ///
    /// Returns the number of ticks run.
    pub fn run_frames(&mut self, frames: u64) -> u64 {
        for ran in 0..frames {
            if self.engine.is_match_over() {
                return ran;
            }
            self.step();
        }
        frames
    }

    /// Runs until a side wins the match.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::FrameBudgetExhausted`] if `limit` ticks pass first.
    pub fn run_until_match_over(&mut self, limit: u64) -> Result<Side> {
        self.run_frames(limit);
        match self.engine.match_winner() {
            Some(winner) => {
                tracing::info!(%winner, frames = self.frame, "match finished");
                Ok(winner)
            }
            None => Err(RuntimeError::FrameBudgetExhausted { frames: limit }),
        }
    }

    /// Replays the last finished round from the next intro.
    pub fn request_replay(&mut self) {
        self.engine.request_replay();
    }

    /// The last finished round, ready to be saved.
    pub fn replay_log(&self) -> Option<ReplayLog> {
        ReplayLog::from_engine(&self.engine)
    }

    /// Replace the provider for one seat
    pub fn set_provider(&mut self, side: Side, provider: impl InputProvider + 'static) {
        tracing::debug!(kind = %ProviderKind::from(side), "input provider replaced");
        self.providers[side.index()] = Box::new(provider);
    }

    pub fn subscribe(&mut self, topic: Topic) {
        self.bus.subscribe(topic);
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Input fed to the engine on the last tick.
    pub fn last_input(&self, side: Side) -> InputBits {
        self.last_input[side.index()]
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    fighters: [Option<Arc<FighterData>>; 2],
    providers: [Option<Box<dyn InputProvider>>; 2],
    audio: Option<Box<dyn AudioSink>>,
    presentation: Option<Box<dyn PresentationSink>>,
    topics: Vec<Topic>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            fighters: [None, None],
            providers: [None, None],
            audio: None,
            presentation: None,
            topics: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn battle_config(mut self, battle: BattleConfig) -> Self {
        self.config.battle = battle;
        self
    }

    /// Set fighter data for one seat (required for both)
    pub fn fighter(mut self, side: Side, data: Arc<FighterData>) -> Self {
        self.fighters[side.index()] = Some(data);
        self
    }

    /// Use the same fighter for both seats
    pub fn mirror(self, data: Arc<FighterData>) -> Self {
        self.fighter(Side::P1, data.clone()).fighter(Side::P2, data)
    }

    /// Set the input provider for one seat (required for both)
    pub fn provider(mut self, side: Side, provider: impl InputProvider + 'static) -> Self {
        self.providers[side.index()] = Some(Box::new(provider));
        self
    }

    /// Set the audio sink (optional, defaults to [`NullSink`])
    pub fn audio_sink(mut self, sink: impl AudioSink + 'static) -> Self {
        self.audio = Some(Box::new(sink));
        self
    }

    /// Set the presentation sink (optional, defaults to [`NullSink`])
    pub fn presentation_sink(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.presentation = Some(Box::new(sink));
        self
    }

    /// Subscribe the bus to `topics` before the first tick.
    pub fn subscribe(mut self, topics: &[Topic]) -> Self {
        self.topics.extend_from_slice(topics);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let [p1_data, p2_data] = self.fighters;
        let p1_data = p1_data.ok_or(RuntimeError::MissingFighter { side: Side::P1 })?;
        let p2_data = p2_data.ok_or(RuntimeError::MissingFighter { side: Side::P2 })?;

        let [p1, p2] = self.providers;
        let p1 = p1.ok_or(RuntimeError::ProviderNotSet {
            kind: ProviderKind::Player1,
        })?;
        let p2 = p2.ok_or(RuntimeError::ProviderNotSet {
            kind: ProviderKind::Player2,
        })?;

        let mut bus = EventBus::with_capacity(self.config.event_buffer_size);
        bus.subscribe_multiple(&self.topics);

        tracing::debug!(
            p1 = %p1_data.name,
            p2 = %p2_data.name,
            rounds_to_win = self.config.battle.rounds_to_win,
            "runtime built"
        );

        Ok(Runtime {
            engine: BattleEngine::new(self.config.battle, [p1_data, p2_data]),
            providers: [p1, p2],
            audio: self.audio.unwrap_or_else(|| Box::new(NullSink)),
            presentation: self.presentation.unwrap_or_else(|| Box::new(NullSink)),
            bus,
            frame: 0,
            last_input: [InputBits::empty(); 2],
            last_events: Vec::new(),
        })
    }
}

//! Round state machine: `idle → counting → resolving → idle | finished`.
//!
//! A round counts clockwise through the active options, one tick at a
//! time, up to the session's cycle number. The option the count lands on
//! is eliminated after a short settle pause, then the engine either
//! returns to idle or, once every side is down to one option, finishes.
//!
//! [`GameEngine`] exposes the machine two ways:
//!
//! - step-wise (`play_round` / `tick` / `resolve_elimination`) for hosts
//!   that own their own timer loop, and
//! - driver-wise (`run_round` / `run_to_finish`) for synchronous hosts,
//!   with the delays routed through a [`Clock`] so tests run instantly.
//!
//! `is_playing` doubles as the mutual-exclusion guard: a play request
//! while a round is in flight is silently ignored, never queued.

use smallvec::SmallVec;
use std::time::Duration;

use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::state::{BoardSnapshot, FinalResults, GameState, Position};

use super::clock::Clock;
use super::pacing::{tick_interval, SETTLE_DELAY};
use super::traversal::{active_options, MAX_TRAVERSAL};

/// Where the round machine currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round in flight; play requests accepted.
    Idle,
    /// Counting ticks toward the cycle number.
    Counting,
    /// Count landed; elimination pending the settle pause.
    Resolving,
    /// Every side is locked; terminal.
    Finished,
}

/// Result of one [`GameEngine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No round is counting; the tick was ignored.
    NotCounting,
    /// The highlight moved to this position; more ticks to come.
    Highlighted(Position),
    /// The count reached the cycle number and landed here. Counting has
    /// stopped; call [`GameEngine::resolve_elimination`] after the settle
    /// pause.
    Landed(Position),
}

/// Result of one [`GameEngine::resolve_elimination`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// No landing was pending; the call was ignored.
    NotResolving,
    /// The landed option was eliminated.
    Eliminated {
        position: Position,
        /// True if this elimination locked the last open side.
        finished: bool,
    },
}

/// The elimination engine for one game session.
///
/// Owns the [`GameState`] plus the transient round bookkeeping (current
/// traversal, tick counter, highlight). Single logical actor: one timer
/// loop drives it at a time.
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
    phase: RoundPhase,
    traversal: SmallVec<[Position; MAX_TRAVERSAL]>,
    ticks: u32,
    landed: Option<Position>,
    highlighted: Option<Position>,
    last_eliminated: Option<Position>,
}

impl GameEngine {
    /// Create an engine from wizard output.
    #[must_use]
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Self {
        Self::from_state(GameState::new(config, rng))
    }

    /// Create an engine around an existing state (e.g. restored snapshot).
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        let phase = if state.is_finished() {
            RoundPhase::Finished
        } else {
            RoundPhase::Idle
        };
        Self {
            state,
            phase,
            traversal: SmallVec::new(),
            ticks: 0,
            landed: None,
            highlighted: None,
            last_eliminated: None,
        }
    }

    // === Observables ===

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current machine phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Position under the counting highlight, if a round is in flight.
    #[must_use]
    pub fn highlighted(&self) -> Option<Position> {
        self.highlighted
    }

    /// Position removed by the most recent round, if any.
    #[must_use]
    pub fn last_eliminated(&self) -> Option<Position> {
        self.last_eliminated
    }

    /// True while a round's counting is in progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// True once every side has exactly one surviving option.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Tick cadence for the current cycle number.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.state.cycle_number())
    }

    /// Full render snapshot for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            sides: self.state.side_snapshots(),
            cycle_number: self.state.cycle_number(),
            is_playing: self.state.is_playing(),
            is_finished: self.state.is_finished(),
            highlighted: self.highlighted,
            last_eliminated: self.last_eliminated,
        }
    }

    /// The destiny, once the game is finished.
    #[must_use]
    pub fn final_results(&self) -> Option<FinalResults> {
        self.state.final_results()
    }

    // === Round stepping ===

    /// Request a round.
    ///
    /// Ignored (returns false) while a round is in flight or the game is
    /// finished. If no countable options remain the game finishes
    /// directly. Otherwise computes a fresh traversal, clears the
    /// previous round's observables and enters counting.
    pub fn play_round(&mut self) -> bool {
        if self.state.is_playing() || self.state.is_finished() {
            log::debug!("play request ignored in phase {:?}", self.phase);
            return false;
        }

        self.last_eliminated = None;
        self.highlighted = None;

        self.traversal = active_options(self.state.sides());
        if self.traversal.is_empty() {
            // Every side already locked; normally detected when the last
            // elimination resolves.
            self.state.is_finished = true;
            self.phase = RoundPhase::Finished;
            return false;
        }

        self.ticks = 0;
        self.state.is_playing = true;
        self.phase = RoundPhase::Counting;
        log::debug!(
            "round started: target {} over {} options",
            self.state.cycle_number(),
            self.traversal.len()
        );
        true
    }

    /// Advance the count by one tick.
    ///
    /// Moves the highlight to `traversal[(ticks - 1) % len]`, wrapping
    /// around the rim. On the tick that reaches the cycle number the
    /// machine stops counting and remembers the landing. Does not mutate
    /// any option.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != RoundPhase::Counting {
            return TickOutcome::NotCounting;
        }

        self.ticks += 1;
        let index = (self.ticks as usize - 1) % self.traversal.len();
        let position = self.traversal[index];
        self.highlighted = Some(position);

        if self.ticks >= self.state.cycle_number() {
            self.landed = Some(position);
            self.phase = RoundPhase::Resolving;
            TickOutcome::Landed(position)
        } else {
            TickOutcome::Highlighted(position)
        }
    }

    /// Apply the pending elimination.
    ///
    /// Called by the driver once the settle pause has passed (headless
    /// callers may call it immediately). Marks the landed option
    /// eliminated, publishes it as `last_eliminated`, clears the
    /// highlight, and either finishes the game or returns to idle.
    pub fn resolve_elimination(&mut self) -> ResolveOutcome {
        if self.phase != RoundPhase::Resolving {
            return ResolveOutcome::NotResolving;
        }
        let Some(position) = self.landed.take() else {
            return ResolveOutcome::NotResolving;
        };

        self.state.eliminate(position);
        self.last_eliminated = Some(position);
        self.highlighted = None;
        self.traversal.clear();
        self.ticks = 0;

        let finished = self.state.all_sides_locked();
        self.state.is_playing = false;
        if finished {
            self.state.is_finished = true;
            self.phase = RoundPhase::Finished;
            log::debug!("game finished after eliminating {position:?}");
        } else {
            self.phase = RoundPhase::Idle;
            log::debug!("eliminated {position:?}");
        }

        ResolveOutcome::Eliminated { position, finished }
    }

    /// Abandon an in-flight round.
    ///
    /// Stops counting and discards the pending landing without mutating
    /// any side; no partial elimination happens. Idle or finished engines
    /// are untouched.
    pub fn cancel_round(&mut self) {
        if !matches!(self.phase, RoundPhase::Counting | RoundPhase::Resolving) {
            return;
        }
        self.traversal.clear();
        self.ticks = 0;
        self.landed = None;
        self.highlighted = None;
        self.state.is_playing = false;
        self.phase = RoundPhase::Idle;
        log::debug!("round cancelled");
    }

    /// Retarget future rounds at a new cycle number.
    ///
    /// Ignored while a round is in flight (the current count keeps its
    /// target).
    pub fn set_cycle_number(&mut self, cycle_number: u32) -> bool {
        debug_assert!(cycle_number >= 1, "cycle number must be positive");
        if matches!(self.phase, RoundPhase::Counting | RoundPhase::Resolving) {
            return false;
        }
        self.state.cycle_number = cycle_number;
        true
    }

    /// Start over with the same user-supplied options and a new cycle
    /// number. Wealth is regenerated; all eliminations are forgotten.
    pub fn restart_with_same_options(&mut self, cycle_number: u32, rng: &mut GameRng) {
        let sides = self.state.sides();
        let config = GameConfig::new(
            sides[0].options().iter().map(|o| o.value.clone()).collect(),
            sides[1]
                .options()
                .iter()
                .map(|o| o.value.parse().unwrap_or(0))
                .collect(),
            sides[2].options().iter().map(|o| o.value.clone()).collect(),
            cycle_number,
        );
        *self = Self::new(&config, rng);
    }

    // === Drivers ===

    /// Play one full round synchronously, sleeping on `clock` between
    /// ticks and before the elimination lands.
    ///
    /// Returns true if an elimination was applied; false if the request
    /// was ignored or the game was already (or became) finished.
    pub fn run_round(&mut self, clock: &mut impl Clock) -> bool {
        if !self.play_round() {
            return false;
        }

        let interval = self.tick_interval();
        loop {
            clock.sleep(interval);
            match self.tick() {
                TickOutcome::Highlighted(_) => {}
                TickOutcome::Landed(_) => break,
                TickOutcome::NotCounting => return false,
            }
        }

        clock.sleep(SETTLE_DELAY);
        matches!(
            self.resolve_elimination(),
            ResolveOutcome::Eliminated { .. }
        )
    }

    /// Play rounds until the game finishes.
    ///
    /// Bounded: each round eliminates exactly one option and exactly four
    /// must remain, so at most `total options - 4` rounds run.
    pub fn run_to_finish(&mut self, clock: &mut impl Clock) {
        while !self.state.is_finished() {
            if !self.run_round(clock) {
                break;
            }
        }
    }
}

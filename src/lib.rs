//! # mash-engine
//!
//! A headless elimination engine for MASH-style fortune-telling games.
//!
//! A player supplies three option lists (professions, children counts,
//! partners) plus a cycle number; the engine adds a generated wealth side
//! and counts clockwise around the board, eliminating the option the count
//! lands on, one per round, until exactly one option survives per side:
//! the player's destiny.
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: No I/O, no persistence, no rendering.
//!    UI, storage and sharing are external collaborators that consume
//!    [`BoardSnapshot`]s and [`FinalResults`].
//!
//! 2. **Deterministic by injection**: All randomness flows through a
//!    seedable [`GameRng`]; all delays flow through a [`Clock`]. Tests
//!    drive whole games instantly with pinned seeds.
//!
//! 3. **Single actor**: One round at a time; `is_playing` is the guard,
//!    duplicate play requests are silently ignored.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, wealth generation, board state
//! - `engine`: traversal order, pacing, clock seam, round state machine

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    generate_random_children, generate_random_cycle, generate_sequential_children,
    generate_wealth_options, BoardSnapshot, FinalResults, GameConfig, GameOption, GameRng,
    GameRngState, GameState, OptionSnapshot, Position, Side, SideId, SideSnapshot, Wealth,
    MAX_MARRIAGE_AGE, MAX_OPTIONS, MIN_OPTIONS, MIN_PLAYER_AGE,
};

pub use crate::engine::{
    active_options, tick_interval, Clock, GameEngine, ManualClock, ResolveOutcome, RoundPhase,
    SystemClock, TickOutcome, SETTLE_DELAY,
};

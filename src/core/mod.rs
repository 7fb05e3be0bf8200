//! Core session types: RNG, configuration, wealth generation, board state.
//!
//! Everything here is pure data plus construction and query functions;
//! the round-by-round elimination logic lives in [`crate::engine`].

pub mod config;
pub mod rng;
pub mod state;
pub mod wealth;

pub use config::{
    generate_random_children, generate_random_cycle, generate_sequential_children, GameConfig,
    MAX_MARRIAGE_AGE, MAX_OPTIONS, MIN_OPTIONS, MIN_PLAYER_AGE,
};
pub use rng::{GameRng, GameRngState};
pub use state::{
    BoardSnapshot, FinalResults, GameOption, GameState, OptionSnapshot, Position, Side,
    SideId, SideSnapshot,
};
pub use wealth::{generate_wealth_options, Wealth};

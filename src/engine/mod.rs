//! The elimination engine: traversal order, pacing, and the round
//! state machine.

pub mod clock;
pub mod pacing;
pub mod round;
pub mod traversal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use pacing::{tick_interval, SETTLE_DELAY};
pub use round::{GameEngine, ResolveOutcome, RoundPhase, TickOutcome};
pub use traversal::active_options;

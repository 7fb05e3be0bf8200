//! Board state: sides, options, and the per-session [`GameState`].
//!
//! The board is four sides in a fixed identity order (professions,
//! children, partners, wealth), each holding an ordered list of options.
//! Options are created once and never reordered; elimination flips a
//! per-option flag in place, it never removes entries, so
//! `(side_index, option_index)` coordinates stay stable for the whole
//! session.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{GameConfig, MAX_OPTIONS};
use super::rng::GameRng;
use super::wealth::generate_wealth_options;

/// Identity of one of the four board sides, in fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideId {
    Professions,
    Children,
    Partners,
    Wealth,
}

impl SideId {
    /// All sides, in board order (also the `sides` array order).
    pub const ALL: [SideId; 4] = [
        SideId::Professions,
        SideId::Children,
        SideId::Partners,
        SideId::Wealth,
    ];

    /// Index of this side in the `sides` array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SideId::Professions => 0,
            SideId::Children => 1,
            SideId::Partners => 2,
            SideId::Wealth => 3,
        }
    }

    /// Display label from the original game.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            SideId::Professions => "Profissão",
            SideId::Children => "Filhos",
            SideId::Partners => "Casamento",
            SideId::Wealth => "Fortuna",
        }
    }
}

/// One candidate value on the board.
///
/// `eliminated` transitions false→true exactly once and never reverts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOption {
    /// Display value (children counts are stored stringified).
    pub value: String,
    /// Whether this option has been counted out.
    pub eliminated: bool,
}

impl GameOption {
    fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            eliminated: false,
        }
    }
}

/// Stable board coordinate: which side, which option within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub side_index: usize,
    pub option_index: usize,
}

impl Position {
    #[must_use]
    pub const fn new(side_index: usize, option_index: usize) -> Self {
        Self {
            side_index,
            option_index,
        }
    }
}

/// One board side: identity, display label, ordered options.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Side {
    id: SideId,
    label: String,
    options: SmallVec<[GameOption; MAX_OPTIONS]>,
}

impl Side {
    fn new<I, S>(id: SideId, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            label: id.default_label().to_string(),
            options: values.into_iter().map(GameOption::new).collect(),
        }
    }

    /// Side identity.
    #[must_use]
    pub fn id(&self) -> SideId {
        self.id
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Ordered options, eliminated ones included.
    #[must_use]
    pub fn options(&self) -> &[GameOption] {
        &self.options
    }

    /// Number of options not yet eliminated.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.options.iter().filter(|o| !o.eliminated).count()
    }

    /// Value of the first non-eliminated option, if any.
    #[must_use]
    pub fn active_value(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| !o.eliminated)
            .map(|o| o.value.as_str())
    }

    /// Whether this side is down to its final option.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.active_count() <= 1
    }
}

/// Complete session state.
///
/// Created once from a validated [`GameConfig`], mutated only by the
/// round engine, discarded when the player exits or restarts. Final
/// results are extracted before discard and handed to persistence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) sides: [Side; 4],
    pub(crate) cycle_number: u32,
    pub(crate) is_playing: bool,
    pub(crate) is_finished: bool,
}

impl GameState {
    /// Build the initial state from a config.
    ///
    /// The wealth side is generated here, sized to match `professions`.
    #[must_use]
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Self {
        debug_assert_eq!(config.professions.len(), config.children.len());
        debug_assert_eq!(config.professions.len(), config.partners.len());
        debug_assert!(config.cycle_number >= 1);

        let wealth = generate_wealth_options(config.side_len(), rng);

        Self {
            sides: [
                Side::new(SideId::Professions, config.professions.iter().cloned()),
                Side::new(
                    SideId::Children,
                    config.children.iter().map(|c| c.to_string()),
                ),
                Side::new(SideId::Partners, config.partners.iter().cloned()),
                Side::new(SideId::Wealth, wealth.iter().map(|w| w.code())),
            ],
            cycle_number: config.cycle_number,
            is_playing: false,
            is_finished: false,
        }
    }

    /// All four sides, in board order.
    #[must_use]
    pub fn sides(&self) -> &[Side; 4] {
        &self.sides
    }

    /// Look up a side by identity.
    #[must_use]
    pub fn side(&self, id: SideId) -> &Side {
        &self.sides[id.index()]
    }

    /// Elimination-count target for every round of this session.
    #[must_use]
    pub fn cycle_number(&self) -> u32 {
        self.cycle_number
    }

    /// True while a round's counting animation is in progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// True once every side is down to one active option.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Whether every side is locked (the finish condition).
    #[must_use]
    pub fn all_sides_locked(&self) -> bool {
        self.sides.iter().all(|s| s.active_count() == 1)
    }

    /// Mark the option at `position` eliminated.
    ///
    /// Engine-internal; the landed side always has >= 2 active options
    /// because locked sides are excluded from the traversal.
    pub(crate) fn eliminate(&mut self, position: Position) {
        let side = &mut self.sides[position.side_index];
        debug_assert!(!side.options[position.option_index].eliminated);
        side.options[position.option_index].eliminated = true;
    }

    /// Extract the surviving value per side.
    ///
    /// Returns `None` until the game is finished.
    #[must_use]
    pub fn final_results(&self) -> Option<FinalResults> {
        if !self.is_finished {
            return None;
        }

        Some(FinalResults {
            profession: self.side(SideId::Professions).active_value()?.to_string(),
            children: self.side(SideId::Children).active_value()?.parse().ok()?,
            partner: self.side(SideId::Partners).active_value()?.to_string(),
            wealth: self.side(SideId::Wealth).active_value()?.to_string(),
            cycle_number: self.cycle_number,
        })
    }

    pub(crate) fn side_snapshots(&self) -> Vec<SideSnapshot> {
        self.sides
            .iter()
            .map(|side| SideSnapshot {
                id: side.id,
                label: side.label.clone(),
                options: side
                    .options
                    .iter()
                    .map(|o| OptionSnapshot {
                        value: o.value.clone(),
                        eliminated: o.eliminated,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// The destiny handed to the persistence collaborator once the game ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResults {
    pub profession: String,
    pub children: u32,
    pub partner: String,
    /// Wealth code, one of `"P"`, `"R"`, `"M"`.
    pub wealth: String,
    /// Cycle number the session was played with.
    pub cycle_number: u32,
}

/// Render contract: one option as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSnapshot {
    pub value: String,
    pub eliminated: bool,
}

/// Render contract: one side as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSnapshot {
    pub id: SideId,
    pub label: String,
    pub options: Vec<OptionSnapshot>,
}

/// Render contract: the whole board plus the transient round observables.
///
/// Purely owned data; safe to hand across a thread or FFI boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub sides: Vec<SideSnapshot>,
    pub cycle_number: u32,
    pub is_playing: bool,
    pub is_finished: bool,
    /// Option currently under the counting highlight, if a round is running.
    pub highlighted: Option<Position>,
    /// Option removed by the most recent round, if any.
    pub last_eliminated: Option<Position>,
}

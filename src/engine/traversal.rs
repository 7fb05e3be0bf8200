//! Clockwise traversal order over active options.
//!
//! The board metaphor is a sheet of paper with the four sides arranged
//! around its edges. Counting walks the rim clockwise starting from the
//! top:
//!
//! 1. children (top): left to right
//! 2. partners (right): top to bottom
//! 3. wealth (bottom): right to left (index order reversed)
//! 4. professions (left): bottom to top (index order reversed)
//!
//! A side that is down to one active option is locked in and skipped
//! entirely. The flattened sequence is recomputed from scratch at the
//! start of every round, so it shrinks as options fall away.

use smallvec::SmallVec;

use crate::core::config::MAX_OPTIONS;
use crate::core::state::{Position, Side};

/// Inline capacity: four sides of at most [`MAX_OPTIONS`] options.
pub(crate) const MAX_TRAVERSAL: usize = 4 * MAX_OPTIONS;

/// The clockwise rim: `(side index, reversed)` pairs. Fixed by the board
/// layout; never reordered.
const CLOCKWISE_SIDES: [(usize, bool); 4] = [
    (1, false), // children (top): left to right
    (2, false), // partners (right): top to bottom
    (3, true),  // wealth (bottom): right to left
    (0, true),  // professions (left): bottom to top
];

/// Flatten the currently countable options into clockwise order.
///
/// Returns every non-eliminated option of every non-locked side exactly
/// once. An empty result means every side is locked, which is the
/// finished condition.
#[must_use]
pub fn active_options(sides: &[Side; 4]) -> SmallVec<[Position; MAX_TRAVERSAL]> {
    let mut result = SmallVec::new();

    for (side_index, reverse) in CLOCKWISE_SIDES {
        let side = &sides[side_index];
        if side.is_locked() {
            continue;
        }

        let mut indices: SmallVec<[usize; MAX_OPTIONS]> = (0..side.options().len()).collect();
        if reverse {
            indices.reverse();
        }

        for option_index in indices {
            if !side.options()[option_index].eliminated {
                result.push(Position::new(side_index, option_index));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::rng::GameRng;
    use crate::core::state::GameState;

    fn fresh_state() -> GameState {
        let config = GameConfig::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![1, 2, 3],
            vec!["X".into(), "Y".into(), "Z".into()],
            5,
        );
        GameState::new(&config, &mut GameRng::new(42))
    }

    #[test]
    fn test_full_board_order() {
        let state = fresh_state();
        let traversal = active_options(state.sides());

        let expected = [
            // children, left to right
            (1, 0),
            (1, 1),
            (1, 2),
            // partners, top to bottom
            (2, 0),
            (2, 1),
            (2, 2),
            // wealth, right to left
            (3, 2),
            (3, 1),
            (3, 0),
            // professions, bottom to top
            (0, 2),
            (0, 1),
            (0, 0),
        ];

        assert_eq!(traversal.len(), expected.len());
        for (pos, (side, option)) in traversal.iter().zip(expected) {
            assert_eq!((pos.side_index, pos.option_index), (side, option));
        }
    }

    #[test]
    fn test_eliminated_options_skipped() {
        let mut state = fresh_state();
        state.eliminate(Position::new(1, 1));
        state.eliminate(Position::new(3, 0));

        let traversal = active_options(state.sides());

        assert_eq!(traversal.len(), 10);
        assert!(!traversal.contains(&Position::new(1, 1)));
        assert!(!traversal.contains(&Position::new(3, 0)));
    }

    #[test]
    fn test_locked_side_skipped_entirely() {
        let mut state = fresh_state();
        // Lock professions down to one survivor.
        state.eliminate(Position::new(0, 0));
        state.eliminate(Position::new(0, 1));

        let traversal = active_options(state.sides());

        assert!(traversal.iter().all(|p| p.side_index != 0));
        assert_eq!(traversal.len(), 9);
    }

    #[test]
    fn test_every_active_option_exactly_once() {
        let mut state = fresh_state();
        state.eliminate(Position::new(2, 2));

        let traversal = active_options(state.sides());

        let mut seen = std::collections::HashSet::new();
        for pos in &traversal {
            assert!(seen.insert(*pos), "duplicate {pos:?}");
            assert!(!state.sides()[pos.side_index].options()[pos.option_index].eliminated);
        }

        let expected: usize = state
            .sides()
            .iter()
            .filter(|s| !s.is_locked())
            .map(Side::active_count)
            .sum();
        assert_eq!(traversal.len(), expected);
    }

    #[test]
    fn test_all_locked_is_empty() {
        let mut state = fresh_state();
        for side_index in 0..4 {
            state.eliminate(Position::new(side_index, 0));
            state.eliminate(Position::new(side_index, 1));
        }

        assert!(active_options(state.sides()).is_empty());
    }
}

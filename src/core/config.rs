//! Session configuration.
//!
//! The external config wizard collects the player's option lists and hands
//! the engine a [`GameConfig`]. The wizard is responsible for validation
//! (equal lengths, non-empty values); the engine only re-checks those
//! contracts in debug builds.
//!
//! Also provides the generators the wizard offers as shortcuts: random or
//! sequential children counts and a random cycle number derived from the
//! player's age.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Minimum options per user-supplied side.
pub const MIN_OPTIONS: usize = 3;
/// Maximum options per user-supplied side.
pub const MAX_OPTIONS: usize = 7;

/// Youngest supported player age for the cycle generator.
pub const MIN_PLAYER_AGE: u32 = 10;
/// Upper bound used by wizards when asking for a marriage age.
pub const MAX_MARRIAGE_AGE: u32 = 110;

/// Largest children count emitted by [`generate_random_children`].
const MAX_RANDOM_CHILDREN: u32 = 12;
/// Width of the random cycle window above the minimum age.
const CYCLE_AGE_SPAN: u32 = 25;

/// Validated input for one game session.
///
/// `professions`, `children` and `partners` must have equal lengths
/// (3-7 entries); `cycle_number` must be positive. These are caller
/// contracts, asserted in debug builds only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Profession candidates, in display order.
    pub professions: Vec<String>,
    /// Children-count candidates, in display order.
    pub children: Vec<u32>,
    /// Partner candidates, in display order.
    pub partners: Vec<String>,
    /// Elimination-count target for every round of the session.
    pub cycle_number: u32,
}

impl GameConfig {
    /// Create a config from wizard output.
    pub fn new(
        professions: Vec<String>,
        children: Vec<u32>,
        partners: Vec<String>,
        cycle_number: u32,
    ) -> Self {
        debug_assert!(
            (MIN_OPTIONS..=MAX_OPTIONS).contains(&professions.len()),
            "professions must have {MIN_OPTIONS}-{MAX_OPTIONS} entries"
        );
        debug_assert_eq!(professions.len(), children.len(), "side lengths must match");
        debug_assert_eq!(professions.len(), partners.len(), "side lengths must match");
        debug_assert!(professions.iter().all(|p| !p.is_empty()), "empty profession");
        debug_assert!(partners.iter().all(|p| !p.is_empty()), "empty partner");
        debug_assert!(cycle_number >= 1, "cycle number must be positive");

        Self {
            professions,
            children,
            partners,
            cycle_number,
        }
    }

    /// Number of options per user-supplied side (wealth mirrors this).
    #[must_use]
    pub fn side_len(&self) -> usize {
        self.professions.len()
    }
}

/// Generate random children counts, each uniform in 1..=12.
#[must_use]
pub fn generate_random_children(count: usize, rng: &mut GameRng) -> Vec<u32> {
    (0..count)
        .map(|_| rng.gen_range(1..=MAX_RANDOM_CHILDREN))
        .collect()
}

/// Generate sequential children counts: 1, 2, .., count.
#[must_use]
pub fn generate_sequential_children(count: usize) -> Vec<u32> {
    (1..=count as u32).collect()
}

/// Generate a random cycle number for a player of the given age.
///
/// Uniform in `min_age ..= min_age + 25`, the window the original game
/// offers when the player asks for a surprise marriage age.
#[must_use]
pub fn generate_random_cycle(min_age: u32, rng: &mut GameRng) -> u32 {
    rng.gen_range(min_age..=min_age + CYCLE_AGE_SPAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_creation() {
        let config = GameConfig::new(
            strings(&["Doctor", "Pilot", "Chef"]),
            vec![1, 2, 3],
            strings(&["Alex", "Sam", "Kim"]),
            5,
        );

        assert_eq!(config.side_len(), 3);
        assert_eq!(config.cycle_number, 5);
    }

    #[test]
    fn test_random_children_in_range() {
        let mut rng = GameRng::new(7);
        let counts = generate_random_children(50, &mut rng);

        assert_eq!(counts.len(), 50);
        assert!(counts.iter().all(|&c| (1..=12).contains(&c)));
    }

    #[test]
    fn test_random_children_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        assert_eq!(
            generate_random_children(10, &mut rng1),
            generate_random_children(10, &mut rng2)
        );
    }

    #[test]
    fn test_sequential_children() {
        assert_eq!(generate_sequential_children(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(generate_sequential_children(0), Vec::<u32>::new());
    }

    #[test]
    fn test_random_cycle_window() {
        let mut rng = GameRng::new(99);
        for _ in 0..100 {
            let cycle = generate_random_cycle(13, &mut rng);
            assert!((13..=38).contains(&cycle));
        }
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(
            strings(&["Doctor", "Pilot", "Chef"]),
            vec![1, 2, 3],
            strings(&["Alex", "Sam", "Kim"]),
            21,
        );

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.professions, config.professions);
        assert_eq!(back.children, config.children);
        assert_eq!(back.partners, config.partners);
        assert_eq!(back.cycle_number, 21);
    }
}

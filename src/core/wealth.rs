//! Wealth option generation.
//!
//! The wealth side is never user-supplied: the engine draws its values from
//! the three-letter alphabet P/R/M (Pobre, Rico, Milionário in the paper
//! game). The first three entries always cover all three letters; later
//! entries are random but never repeat their predecessor, so neighbouring
//! cells on the board always differ.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// One wealth outcome. The engine only deals in the short codes;
/// translating them to display labels is the presentation layer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wealth {
    /// Code `P`.
    Poor,
    /// Code `R`.
    Rich,
    /// Code `M`.
    Millionaire,
}

impl Wealth {
    /// All outcomes, in the fixed seeding order `P, R, M`.
    pub const ALL: [Wealth; 3] = [Wealth::Poor, Wealth::Rich, Wealth::Millionaire];

    /// Single-letter code used on the board and in results.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Wealth::Poor => "P",
            Wealth::Rich => "R",
            Wealth::Millionaire => "M",
        }
    }
}

impl std::fmt::Display for Wealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Generate `count` wealth options.
///
/// - `count >= 3`: starts with exactly `P, R, M`, then each further entry
///   is a uniform draw from the two letters unequal to its predecessor.
/// - `count < 3`: the first `count` letters of `P, R, M`, no randomness.
#[must_use]
pub fn generate_wealth_options(count: usize, rng: &mut GameRng) -> Vec<Wealth> {
    let mut result = Vec::with_capacity(count);

    for i in 0..count {
        if i < 3 {
            result.push(Wealth::ALL[i]);
        } else {
            let last = result[i - 1];
            let available: Vec<Wealth> = Wealth::ALL
                .iter()
                .copied()
                .filter(|&w| w != last)
                .collect();
            let pick = rng.gen_range_usize(0..available.len());
            result.push(available[pick]);
        }
    }

    result
}

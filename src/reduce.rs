//! Left-to-right folds of the fixed pattern table.
//!
//! Each operation walks the table in index order 0 → 31 and applies one
//! binary operator per step. Only the stepwise trace of [`sub_array`]
//! depends on that order; the final values do not, but the reference
//! order is preserved in all four folds.

use crate::accumulator::Accumulator;
use crate::constants::pattern_constants::BIT_PATTERNS;

/// Sums every table word into `seed`, wrapping on overflow.
pub fn add_array(seed: u32) -> u32 {
    BIT_PATTERNS
        .iter()
        .fold(Accumulator::new(seed), |acc, &word| acc + word)
        .val()
}

/// Subtracts every table word from `seed`, wrapping below zero.
pub fn sub_array(seed: u32) -> u32 {
    BIT_PATTERNS
        .iter()
        .fold(Accumulator::new(seed), |acc, &word| acc - word)
        .val()
}

/// Clears, one word at a time, every table bit from `seed`.
pub fn and_not_array(seed: u32) -> u32 {
    BIT_PATTERNS
        .iter()
        .fold(Accumulator::new(seed), |acc, &word| acc.and_not(word))
        .val()
}

/// Sets, one word at a time, every table bit in `seed`.
pub fn or_array(seed: u32) -> u32 {
    BIT_PATTERNS
        .iter()
        .fold(Accumulator::new(seed), |acc, &word| acc | word)
        .val()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::seed_constants::{ADD_SEED, AND_NOT_SEED, OR_SEED, SUB_SEED};

    // The table's 32 single-bit entries cover the word, so both their
    // sum and their OR are u32::MAX.

    #[test]
    fn add_reference_seed() {
        assert_eq!(add_array(ADD_SEED), 0xffff_ffff);
    }

    #[test]
    fn sub_is_the_complement_of_add() {
        assert_eq!(sub_array(SUB_SEED), SUB_SEED.wrapping_sub(add_array(0)));
        assert_eq!(sub_array(SUB_SEED), 0x0000_0000);
    }

    #[test]
    fn and_not_reference_seed() {
        assert_eq!(and_not_array(AND_NOT_SEED), 0x0000_0000);
    }

    #[test]
    fn or_reference_seed() {
        assert_eq!(or_array(OR_SEED), 0xffff_ffff);
    }

    #[test]
    fn or_then_and_not_round_trips() {
        assert_eq!(and_not_array(or_array(0x0000_0000)), 0x0000_0000);
        assert_eq!(or_array(and_not_array(0xffff_ffff)), 0xffff_ffff);
    }
}

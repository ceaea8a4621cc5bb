//! Weighted choice over exact rational probabilities.
//!
//! Grammar rules declare their alternatives as fractions of a common total,
//! e.g. `(300, 1000)`. Selection walks the alternatives in order and
//! renormalizes each weight against the remaining probability mass, so no
//! cumulative table is built and every ratio stays a fixed constant relative
//! to the original total. All arithmetic is exact rational arithmetic;
//! floating point would drift across repeated subtraction.

use num_rational::Ratio;
use num_traits::{One, Zero};
use rand::Rng;

use crate::error::GrammarError;

/// An exact probability, e.g. `w(3, 10)` for 3-in-10.
pub type Weight = Ratio<u64>;

/// Shorthand constructor for a weight.
pub fn w(numerator: u64, denominator: u64) -> Weight {
    Ratio::new(numerator, denominator)
}

/// One biased coin flip: true with probability `p`.
///
/// Draws a single integer in `1..=denominator` and compares it against the
/// numerator, so every call costs exactly one draw from `rng`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: Weight) -> bool {
    rng.random_range(1..=*p.denom()) <= *p.numer()
}

/// Select one alternative according to its probability.
///
/// The weights must sum to exactly 1. That is checked here, at the point of
/// dispatch, and a violation is reported as a [`GrammarError::WeightSum`]
/// defect rather than silently renormalized. Selection spends one random
/// draw per alternative considered: each weight is tested against the
/// probability mass left after the alternatives before it were declined.
///
/// `rule` names the dispatch site for error reporting.
pub fn pick<T: Copy, R: Rng + ?Sized>(
    rng: &mut R,
    rule: &'static str,
    alternatives: &[(T, Weight)],
) -> Result<T, GrammarError> {
    let total = alternatives
        .iter()
        .fold(Weight::zero(), |sum, (_, weight)| sum + *weight);
    if !total.is_one() {
        return Err(GrammarError::WeightSum {
            rule,
            total: total.to_string(),
        });
    }

    let mut remaining = Weight::one();
    for &(alternative, weight) in alternatives {
        if remaining.is_zero() {
            break;
        }
        if chance(rng, weight / remaining) {
            return Ok(alternative);
        }
        remaining -= weight;
    }

    // With weights summing to 1 the last live alternative is drawn with
    // probability 1, so reaching this point is an arithmetic defect.
    Err(GrammarError::Exhausted { rule })
}

//! Equation assembly: seed the random source, expand independent equation
//! trees, and join them into the final formula string.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::context::Context;
use crate::error::GrammarError;
use crate::grammar::Grammar;

/// Token joining consecutive equations.
pub const EQUATION_SEPARATOR: &str = " = ";

/// Generate `equal_signs + 1` independent equations as separate strings.
///
/// Output is deterministic for a given seed. Each call owns its random
/// source, so concurrent callers need no coordination.
pub fn equations(equal_signs: u32, seed: Option<u64>) -> Result<Vec<String>, GrammarError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut grammar = Grammar::new(rng);

    let mut parts = Vec::with_capacity(equal_signs as usize + 1);
    for _ in 0..=equal_signs {
        let tree = grammar.expression(&Context::root())?;
        parts.push(tree.flatten());
    }
    Ok(parts)
}

/// Generate a formula: `equal_signs + 1` equations joined by `" = "`.
pub fn generate(equal_signs: u32, seed: Option<u64>) -> Result<String, GrammarError> {
    let parts = equations(equal_signs, seed)?;
    debug!(equal_signs, seeded = seed.is_some(), "generated formula");
    Ok(parts.join(EQUATION_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn same_seed_same_formula() {
        for seed in [0, 33, 7_919] {
            assert_eq!(
                generate(0, Some(seed)).unwrap(),
                generate(0, Some(seed)).unwrap()
            );
            assert_eq!(
                generate(3, Some(seed)).unwrap(),
                generate(3, Some(seed)).unwrap()
            );
        }
    }

    #[test]
    fn equation_count_matches_request() {
        let parts = equations(2, Some(5)).unwrap();
        assert_eq!(parts.len(), 3);
        for part in &parts {
            assert!(!part.is_empty());
        }
    }

    #[test]
    fn formula_is_the_separator_join_of_its_equations() {
        let formula = generate(2, Some(5)).unwrap();
        let parts = equations(2, Some(5)).unwrap();
        assert_eq!(formula, parts.join(EQUATION_SEPARATOR));
    }

    #[test]
    fn zero_equal_signs_is_a_single_equation() {
        let formula = generate(0, Some(33)).unwrap();
        let parts = equations(0, Some(33)).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(formula, parts[0]);
    }

    #[test]
    fn unseeded_generation_succeeds() {
        assert!(!generate(1, None).unwrap().is_empty());
    }
}

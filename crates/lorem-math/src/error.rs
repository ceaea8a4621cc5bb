//! Error types for formula generation.

/// Errors that can occur while expanding the grammar.
///
/// Both variants report defects in the grammar definition or the dispatch
/// arithmetic, never bad caller input: the public entry points make invalid
/// arguments unrepresentable at the type level.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// A weighted-dispatch table's probabilities do not sum to 1.
    #[error("weights for `{rule}` sum to {total}, expected exactly 1")]
    WeightSum {
        rule: &'static str,
        total: String,
    },

    /// Weighted dispatch walked every alternative without selecting one.
    #[error("weighted dispatch for `{rule}` exhausted all alternatives")]
    Exhausted { rule: &'static str },
}

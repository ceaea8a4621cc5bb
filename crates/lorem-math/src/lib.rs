//! Random LaTeX formula generator for placeholder ("lorem ipsum") math.
//!
//! The core is a probabilistic context-free grammar: each production either
//! emits a literal markup token or expands into a weighted choice of further
//! productions, with a size bias that only ever grows on the way down so
//! expansion terminates. The output is syntactically plausible LaTeX; it is
//! not meant to mean anything.

pub mod context;
pub mod error;
pub mod formula;
pub mod grammar;
pub mod node;
pub mod weights;

//! Compound finder core: split candidates, decomposition and tallies.

pub mod candidates;
pub mod solver;
pub mod tally;

pub use candidates::{build_candidates, VERB_LENS};
pub use solver::{validate_candidates, Decomposer};
pub use tally::{CloudEntry, CloudReport, WordCloud, WordCount, DEFAULT_MIN_TOTAL};

//! Title matching for noisy feed release titles.
//!
//! A release title is split into zones (`zones`), the core zone is tokenized
//! (`tokenizer`) and scored against the alternate titles of the target media
//! (`scorer`), and a result set is filtered and ordered by that score
//! (`ranker`).
//!
//! The scoring constants are calibrated together: a single exact token match
//! scores 3.0, comfortably above the 1.5 threshold, while a group-tag
//! collision (-5.0) outweighs a same-named core match. Changing any one of
//! them shifts what the others accept.

mod ranker;
mod scorer;
mod tokenizer;
mod zones;

pub use ranker::rank;
pub use scorer::{
    is_relevant, score, CORE_MATCH_REWARD, EXTRA_TOKEN_PENALTY, GROUP_COLLISION_PENALTY,
    MATCH_THRESHOLD,
};
pub use tokenizer::tokenize;
pub use zones::TitleZones;

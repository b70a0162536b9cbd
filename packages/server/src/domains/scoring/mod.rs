//! Scoring domain - heuristic purchase score per VIN

pub mod actions;
pub mod data;
pub mod models;
pub mod utils;

pub use data::{ScoreRequest, ScoreResponse};
pub use models::{CreateScore, Score};
pub use utils::{ReasonCode, ScoreOutcome, Scorer, ScoringInput};

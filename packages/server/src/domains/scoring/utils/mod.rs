pub mod scorer;

pub use scorer::{ReasonCode, ScoreOutcome, Scorer, ScoringInput};

pub mod score;

pub use score::{CreateScore, Score};

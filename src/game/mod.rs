//! Round play

mod engine;

pub use engine::{RoundEngine, RoundResult};

//! The solving engine
//!
//! Vocabulary plus scoring tables ([`Engine`]), per-game state and the
//! solve-loop state machine ([`GameSession`]), entropy scoring and the
//! tiered guess-selection policy.

pub mod entropy;
pub mod selection;

#[allow(clippy::module_inception)]
mod engine;
mod session;

pub use engine::{Engine, EngineError};
pub use selection::{SMALL_SET_THRESHOLD, ScoreTables};
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameSession, SessionError, SessionState, TurnOutcome,
};

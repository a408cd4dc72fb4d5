//! Core data model: the ball-event vocabulary, the innings aggregate it
//! folds into, and the match-state snapshot owned by the reducer.

pub mod event;
pub mod innings;
pub mod match_state;

pub use event::{current_timestamp, BallEvent, BallKind, InningsNumber};
pub use innings::{BattingTally, BowlingTally, Extras, InningsAggregate};
pub use match_state::{InningsPair, MatchState, Winner, DEFAULT_TOTAL_OVERS};

//! Battle lifecycle: the round loop, round records, card transfer,
//! and the finished-battle report.

pub mod report;
pub mod round;
pub mod state;
pub mod transfer;

pub use report::{BattleOutcome, BattleReport};
pub use round::Round;
pub use state::{Battle, BattleState};
pub use transfer::apply_transfer;

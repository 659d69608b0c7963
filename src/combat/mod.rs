//! Round combat rules: elemental effectiveness, special matchups,
//! and the resolver that applies them in order.

pub mod effectiveness;
pub mod resolver;
pub mod special;

pub use effectiveness::{apply_elemental, Effectiveness};
pub use resolver::{resolve_round, FightKind};
pub use special::{apply_mixed_specials, apply_monster_specials};

//! Card transfer after a decisive round.
//!
//! The losing card leaves whichever deck currently holds it and joins
//! the deck of the winning card's original owner - the owner stamped on
//! the card, not whoever happens to be playing it. A card won earlier in
//! the battle therefore sends its spoils back to its original owner's
//! deck when it wins again. The combined card multiset of the two
//! players never changes.

use tracing::debug;

use crate::battle::Round;
use crate::core::Player;

/// Move the losing card of a decisive round into the deck of the winning
/// card's original owner. Drawn rounds transfer nothing.
pub fn apply_transfer(round: &Round, challenger: &mut Player, opponent: &mut Player) {
    let (Some(winner), Some(loser)) = (round.winner(), round.loser()) else {
        return;
    };

    let Some(card) = challenger
        .deck
        .remove(loser.id)
        .or_else(|| opponent.deck.remove(loser.id))
    else {
        return;
    };

    let destination = if winner.owner == challenger.id {
        challenger
    } else {
        opponent
    };

    debug!(
        "Transfer: {} moves to deck of {}",
        card.name, destination.name
    );
    destination.deck.push(card);
}

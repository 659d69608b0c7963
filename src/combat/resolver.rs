//! Round resolution.
//!
//! A round is resolved on scratch copies of the two drawn cards:
//!
//! 1. Classify the pairing into a [`FightKind`].
//! 2. Monster rounds apply the monster matchups and nothing else -
//!    elements play no part when two monsters fight.
//! 3. Spell rounds apply elemental scaling to both sides.
//! 4. Mixed rounds apply elemental scaling first, then the mixed
//!    matchups, so a matchup zero always stands.
//! 5. Strictly greater effective damage wins; equal damage is a draw.
//!
//! The decks' cards are never touched - resolution returns a [`Round`]
//! holding the mutated copies.

use serde::{Deserialize, Serialize};

use super::effectiveness::apply_elemental;
use super::special::{apply_mixed_specials, apply_monster_specials};
use crate::battle::Round;
use crate::cards::Card;

/// The three pairings a round can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightKind {
    /// Two monsters. Baseline damage plus monster matchups.
    Monster,
    /// Two spells. Elemental scaling only.
    Spell,
    /// One of each. Elemental scaling, then mixed matchups.
    Mixed,
}

impl FightKind {
    /// Classify a pairing from the two cards' kinds.
    #[must_use]
    pub fn classify(a: &Card, b: &Card) -> Self {
        if a.is_monster() && b.is_monster() {
            FightKind::Monster
        } else if a.is_spell() && b.is_spell() {
            FightKind::Spell
        } else {
            FightKind::Mixed
        }
    }
}

/// Resolve one round between two drawn cards.
#[must_use]
pub fn resolve_round(number: u32, card_a: &Card, card_b: &Card) -> Round {
    let mut a = card_a.scratch();
    let mut b = card_b.scratch();

    match FightKind::classify(&a, &b) {
        FightKind::Monster => apply_monster_specials(&mut a, &mut b),
        FightKind::Spell => apply_elemental(&mut a, &mut b),
        FightKind::Mixed => {
            apply_elemental(&mut a, &mut b);
            apply_mixed_specials(&mut a, &mut b);
        }
    }

    if a.damage > b.damage {
        Round::decisive(number, a, b)
    } else if b.damage > a.damage {
        Round::decisive(number, b, a)
    } else {
        Round::draw(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::PlayerId;

    fn card_a(name: &str, damage: f64) -> Card {
        Card::new(CardId::new(1), name, damage, PlayerId::new(1))
    }

    fn card_b(name: &str, damage: f64) -> Card {
        Card::new(CardId::new(2), name, damage, PlayerId::new(2))
    }

    #[test]
    fn test_classify() {
        let dragon = card_a("Dragon", 10.0);
        let ork = card_b("Ork", 20.0);
        let water = card_a("WaterSpell", 10.0);
        let fire = card_b("FireSpell", 20.0);

        assert_eq!(FightKind::classify(&dragon, &ork), FightKind::Monster);
        assert_eq!(FightKind::classify(&water, &fire), FightKind::Spell);
        assert_eq!(FightKind::classify(&dragon, &fire), FightKind::Mixed);
        assert_eq!(FightKind::classify(&water, &ork), FightKind::Mixed);
    }

    #[test]
    fn test_monster_round_ignores_elements() {
        // Water goblin vs normal knight: elements would favor the knight,
        // but monsters fight on baseline damage.
        let goblin = card_a("WaterGoblin", 30.0);
        let knight = card_b("Knight", 20.0);

        let round = resolve_round(1, &goblin, &knight);

        let winner = round.winner().unwrap();
        assert_eq!(winner.name, "watergoblin");
        assert_eq!(winner.damage, 30.0);
        assert_eq!(round.loser().unwrap().damage, 20.0);
    }

    #[test]
    fn test_plain_monster_round() {
        let dragon = card_a("Dragon", 10.0);
        let ork = card_b("Ork", 20.0);

        let round = resolve_round(1, &dragon, &ork);

        assert_eq!(round.winner().unwrap().name, "ork");
        assert_eq!(round.loser().unwrap().name, "dragon");
    }

    #[test]
    fn test_spell_round_scales_both_sides() {
        let water = card_a("WaterSpell", 10.0);
        let fire = card_b("FireSpell", 20.0);

        let round = resolve_round(1, &water, &fire);

        let winner = round.winner().unwrap();
        assert_eq!(winner.name, "waterspell");
        assert_eq!(winner.damage, 20.0);
        assert_eq!(round.loser().unwrap().damage, 10.0);
    }

    #[test]
    fn test_mixed_round_applies_elements() {
        let spell = card_a("RegularSpell", 10.0);
        let goblin = card_b("WaterGoblin", 20.0);

        let round = resolve_round(1, &spell, &goblin);

        let winner = round.winner().unwrap();
        assert_eq!(winner.name, "regularspell");
        assert_eq!(winner.damage, 20.0);
        assert_eq!(round.loser().unwrap().damage, 10.0);
    }

    #[test]
    fn test_goblin_never_beats_dragon() {
        let goblin = card_a("Goblin", 10.0);
        let dragon = card_b("Dragon", 20.0);

        let round = resolve_round(1, &goblin, &dragon);

        assert_eq!(round.winner().unwrap().name, "dragon");
        assert_eq!(round.loser().unwrap().damage, 0.0);
    }

    #[test]
    fn test_wizard_beats_stronger_ork() {
        let wizard = card_a("Wizard", 20.0);
        let ork = card_b("Ork", 45.0);

        let round = resolve_round(1, &wizard, &ork);

        assert_eq!(round.winner().unwrap().name, "wizard");
        assert_eq!(round.loser().unwrap().damage, 0.0);
    }

    #[test]
    fn test_fire_elf_beats_stronger_dragon() {
        let elf = card_a("FireElf", 15.0);
        let dragon = card_b("Dragon", 50.0);

        let round = resolve_round(1, &elf, &dragon);

        assert_eq!(round.winner().unwrap().name, "fireelf");
        assert_eq!(round.loser().unwrap().damage, 0.0);
    }

    #[test]
    fn test_water_spell_drowns_boosted_knight() {
        // Elements boost the knight to 20 first; the drowning rule then
        // zeroes it, so the weaker spell still wins.
        let knight = card_a("Knight", 10.0);
        let spell = card_b("WaterSpell", 20.0);

        let round = resolve_round(1, &knight, &spell);

        let winner = round.winner().unwrap();
        assert_eq!(winner.name, "waterspell");
        assert_eq!(winner.damage, 10.0);
        assert_eq!(round.loser().unwrap().damage, 0.0);
    }

    #[test]
    fn test_kraken_beats_doubled_fire_spell() {
        // The fire spell doubles to 40 against the normal-element kraken
        // and the kraken halves to 5, but immunity zeroes the spell.
        let kraken = card_a("Kraken", 10.0);
        let spell = card_b("FireSpell", 20.0);

        let round = resolve_round(1, &kraken, &spell);

        let winner = round.winner().unwrap();
        assert_eq!(winner.name, "kraken");
        assert_eq!(winner.damage, 5.0);
        assert_eq!(round.loser().unwrap().damage, 0.0);
    }

    #[test]
    fn test_equal_damage_is_a_draw() {
        let a = card_a("Knight", 20.0);
        let b = card_b("Ork", 20.0);

        let round = resolve_round(4, &a, &b);

        assert!(round.is_draw());
        assert_eq!(round.number(), 4);
    }

    #[test]
    fn test_mirror_spells_draw_after_scaling() {
        // Both sides scale by the same rules, so identical spells always tie.
        let a = card_a("FireSpell", 25.0);
        let b = card_b("FireSpell", 25.0);

        assert!(resolve_round(1, &a, &b).is_draw());
    }

    #[test]
    fn test_originals_keep_baseline_damage() {
        let kraken = card_a("Kraken", 10.0);
        let spell = card_b("FireSpell", 20.0);

        let _ = resolve_round(1, &kraken, &spell);

        assert_eq!(kraken.damage, 10.0);
        assert_eq!(spell.damage, 20.0);
    }
}

//! Special matchup rules.
//!
//! A handful of named matchups override computed damage: the overridden
//! side attacks with zero damage that round, whatever its baseline or
//! elemental scaling said. Card names are already lowercased, so the
//! substring and exact-name checks here never normalize again.
//!
//! Monster rounds get the monster set only. Mixed rounds get the mixed
//! set, applied after elemental scaling. Pure spell rounds have no
//! special matchups.

use crate::cards::Card;

/// Apply the monster-round matchups: goblins cower before dragons,
/// wizards control orks, and dragons cannot hit fire elves.
pub fn apply_monster_specials(a: &mut Card, b: &mut Card) {
    goblin_vs_dragon(a, b);
    wizard_vs_ork(a, b);
    fire_elf_vs_dragon(a, b);
}

/// Apply the mixed-round matchups: water spells drown knights, and
/// krakens are immune against spells.
pub fn apply_mixed_specials(a: &mut Card, b: &mut Card) {
    knight_vs_water_spell(a, b);
    kraken_vs_spell(a, b);
}

/// Goblins are too afraid of dragons to attack.
fn goblin_vs_dragon(a: &mut Card, b: &mut Card) {
    if a.name.contains("goblin") && b.name.contains("dragon") {
        a.damage = 0.0;
    } else if b.name.contains("goblin") && a.name.contains("dragon") {
        b.damage = 0.0;
    }
}

/// Wizards control orks, so orks cannot damage them.
fn wizard_vs_ork(a: &mut Card, b: &mut Card) {
    if a.name.contains("ork") && b.name.contains("wizard") {
        a.damage = 0.0;
    } else if b.name.contains("ork") && a.name.contains("wizard") {
        b.damage = 0.0;
    }
}

/// Fire elves have known dragons since they were little and evade
/// their attacks. Only the exact name "fireelf" evades.
fn fire_elf_vs_dragon(a: &mut Card, b: &mut Card) {
    if a.name.contains("dragon") && b.name == "fireelf" {
        a.damage = 0.0;
    } else if b.name.contains("dragon") && a.name == "fireelf" {
        b.damage = 0.0;
    }
}

/// The heavy armor of knights makes water spells drown them instantly.
/// Only the exact name "waterspell" drowns.
fn knight_vs_water_spell(a: &mut Card, b: &mut Card) {
    if a.name.contains("knight") && b.name == "waterspell" {
        a.damage = 0.0;
    } else if b.name.contains("knight") && a.name == "waterspell" {
        b.damage = 0.0;
    }
}

/// Krakens are immune against spells: any spell attacking a kraken
/// deals zero damage.
fn kraken_vs_spell(a: &mut Card, b: &mut Card) {
    if a.is_spell() && b.name.contains("kraken") {
        a.damage = 0.0;
    } else if b.is_spell() && a.name.contains("kraken") {
        b.damage = 0.0;
    }
}

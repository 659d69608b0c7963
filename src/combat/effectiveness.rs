//! Elemental effectiveness.
//!
//! The element cycle is water > fire > normal > water. An attack along
//! the cycle doubles the attacker's damage, an attack against the cycle
//! halves it, and matching elements leave damage unchanged. Both sides
//! of a round are scaled independently, so both cards in a fire-vs-water
//! round change damage at once.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Element};

/// How effective an attack is against a defender's element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    /// Along the cycle: damage is doubled.
    Effective,
    /// Against the cycle: damage is halved.
    NotEffective,
    /// Same element: damage is unchanged.
    NoEffect,
}

impl Effectiveness {
    /// Effectiveness of an attacker's element against a defender's.
    #[must_use]
    pub fn of(attacker: Element, defender: Element) -> Self {
        if attacker == defender {
            return Effectiveness::NoEffect;
        }

        match (attacker, defender) {
            (Element::Water, Element::Fire)
            | (Element::Fire, Element::Normal)
            | (Element::Normal, Element::Water) => Effectiveness::Effective,
            _ => Effectiveness::NotEffective,
        }
    }

    /// The damage multiplier applied to the attacker.
    #[must_use]
    pub fn apply(self, damage: f64) -> f64 {
        match self {
            Effectiveness::Effective => damage * 2.0,
            Effectiveness::NotEffective => damage / 2.0,
            Effectiveness::NoEffect => damage,
        }
    }
}

/// Scale both scratch cards by their elemental effectiveness against
/// each other. Elements never change mid-round, so the two sides are
/// independent.
pub fn apply_elemental(a: &mut Card, b: &mut Card) {
    a.damage = Effectiveness::of(a.element, b.element).apply(a.damage);
    b.damage = Effectiveness::of(b.element, a.element).apply(b.damage);
}

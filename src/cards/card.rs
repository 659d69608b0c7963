//! Card entity.
//!
//! A card's kind and element are not stored data - they are derived from
//! the card's name, exactly once, at construction:
//!
//! - name contains `"spell"` => [`CardKind::Spell`], otherwise [`CardKind::Monster`]
//! - name contains `"fire"` => [`Element::Fire`], else `"water"` => [`Element::Water`],
//!   else [`Element::Normal`]
//!
//! The name is normalized to lowercase first, so `"FireElf"` and `"fireelf"`
//! are the same card name. Combat rules that match on names rely on this
//! normalization and never lowercase again.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Unique identifier for a card.
///
/// Identifies one physical card; transfers move the card between decks
/// by this identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card kind, derived from the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Monster,
    Spell,
}

impl CardKind {
    /// Derive the kind from an already-lowercased name.
    #[must_use]
    fn from_name(name: &str) -> Self {
        if name.contains("spell") {
            CardKind::Spell
        } else {
            CardKind::Monster
        }
    }
}

/// Card element, derived from the name.
///
/// `"fire"` takes precedence over `"water"` when a name contains both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Normal,
}

impl Element {
    /// Derive the element from an already-lowercased name.
    #[must_use]
    fn from_name(name: &str) -> Self {
        if name.contains("fire") {
            Element::Fire
        } else if name.contains("water") {
            Element::Water
        } else {
            Element::Normal
        }
    }
}

/// A card: identity, normalized name, baseline damage, derived kind and
/// element, and the stamp of its original owner.
///
/// Decks hold cards with their baseline damage. Combat works on scratch
/// copies ([`Card::scratch`]) whose damage is mutated by elemental
/// multipliers and special-case rules; the originals are never modified.
///
/// ## Example
///
/// ```
/// use tcg_arena::cards::{Card, CardId, CardKind, Element};
/// use tcg_arena::core::PlayerId;
///
/// let card = Card::new(CardId::new(1), "WaterGoblin", 10.0, PlayerId::new(1));
/// assert_eq!(card.name, "watergoblin");
/// assert_eq!(card.kind, CardKind::Monster);
/// assert_eq!(card.element, Element::Water);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity of this physical card.
    pub id: CardId,

    /// Lowercased card name.
    pub name: String,

    /// Damage value. Baseline in decks, effective in round scratch copies.
    pub damage: f64,

    /// Monster or spell, derived from the name at construction.
    pub kind: CardKind,

    /// Fire, water or normal, derived from the name at construction.
    pub element: Element,

    /// Original owner. Transfers move cards between decks without
    /// rewriting this stamp.
    pub owner: PlayerId,
}

impl Card {
    /// Create a new card. The name is lowercased and classified here,
    /// never again afterwards.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, damage: f64, owner: PlayerId) -> Self {
        let name = name.into().to_lowercase();
        let kind = CardKind::from_name(&name);
        let element = Element::from_name(&name);
        Self {
            id,
            name,
            damage,
            kind,
            element,
            owner,
        }
    }

    /// Scratch copy for one round of combat. Rules mutate the copy's
    /// damage; the deck's original keeps its baseline.
    #[must_use]
    pub fn scratch(&self) -> Self {
        self.clone()
    }

    /// Whether this card is a spell.
    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.kind == CardKind::Spell
    }

    /// Whether this card is a monster.
    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.kind == CardKind::Monster
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?} {:?}, damage {})", self.name, self.element, self.kind, self.damage)
    }
}

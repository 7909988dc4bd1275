use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::DealRules;
use crate::types::{Dir, TRACK_LEN};

/// The four card kinds. Cards are immutable; whether one has been played is
/// tracked by the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    /// Move exactly `steps` cells; may not pass over any piece.
    Number {
        steps: u8,
        #[serde(default)]
        dir: Dir,
        /// May be played face-up with no board effect instead.
        #[serde(default)]
        discard: bool,
    },
    /// Move one cell at a time, bulldozing enemies on the way.
    SingleStep { steps: u8 },
    /// Swap any two pieces on the track.
    Trickster,
    /// Jump to the nearest piece ahead and capture it.
    Warrior,
}

impl Card {
    #[inline]
    pub const fn number(steps: u8) -> Self {
        Card::Number { steps, dir: Dir::Forward, discard: false }
    }

    #[inline]
    pub const fn backwards(steps: u8) -> Self {
        Card::Number { steps, dir: Dir::Backward, discard: false }
    }

    #[inline]
    pub const fn discardable(steps: u8) -> Self {
        Card::Number { steps, dir: Dir::Forward, discard: true }
    }

    #[inline]
    pub const fn single_step(steps: u8) -> Self {
        Card::SingleStep { steps }
    }

    #[inline]
    pub fn is_trickster(&self) -> bool {
        matches!(self, Card::Trickster)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Card::Number { steps, dir: Dir::Backward, .. } => write!(f, "{steps} (backwards)"),
            Card::Number { steps, discard: true, .. } => write!(f, "{steps} (or discard)"),
            Card::Number { steps, .. } => write!(f, "{steps}"),
            Card::SingleStep { steps } => write!(f, "{steps} (single steps)"),
            Card::Trickster => f.write_str("Trickster"),
            Card::Warrior => f.write_str("Warrior"),
        }
    }
}

/// Deck the deal generator draws from, plus the rules it deals under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub cards: Vec<Card>,
    #[serde(default)]
    pub rules: DealRules,
}

impl Catalogue {
    /// The 14-card deck of the tabletop game.
    pub fn standard() -> Self {
        Self {
            cards: vec![
                Card::number(1),
                Card::number(2),
                Card::number(3),
                Card::backwards(4),
                Card::number(5),
                Card::number(6),
                Card::single_step(7),
                Card::discardable(8),
                Card::number(9),
                Card::number(10),
                Card::number(12),
                Card::number(13),
                Card::Trickster,
                Card::Warrior,
            ],
            rules: DealRules::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<Card> {
        self.cards.get(idx).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_card(card: &Card) -> Result<(), String> {
    let within = |v: u8| (1..TRACK_LEN).contains(&v);
    match *card {
        Card::Number { steps, .. } | Card::SingleStep { steps } if !within(steps) => Err(format!(
            "Card '{card}' has invalid step count {steps} (must be 1..={})",
            TRACK_LEN - 1
        )),
        _ => Ok(()),
    }
}

pub fn validate_catalogue(catalogue: &Catalogue) -> Result<(), String> {
    if catalogue.is_empty() {
        return Err("No cards in catalogue".to_string());
    }
    catalogue.iter().try_for_each(validate_card)
}

/// Load an alternate catalogue from a JSON file.
pub fn load_catalogue_from_json<P: AsRef<Path>>(path: P) -> Result<Catalogue, String> {
    let data =
        fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    let catalogue: Catalogue =
        serde_json::from_str(&data).map_err(|e| format!("Failed to parse JSON: {e}"))?;
    validate_catalogue(&catalogue)?;
    Ok(catalogue)
}

//! # Identifier Normalizer
//!
//! Turns free text such as `"The High Priestess"`, `"5 of cups"` or `"five cups"` into
//! a candidate canonical key. The function never fails: text that no rule recognises
//! comes back hyphenated, and callers detect an unknown card by looking the result up
//! in the catalog.
//!
//! Rules, first match wins:
//!
//! 1. lowercase, trim, collapse whitespace runs
//! 2. drop a leading `"the "`
//! 3. historical / foreign aliases of Major Arcana names
//! 4. numbered ranks: `<word|symbol> [of] <suit>` → `<symbol>-<suit>`
//! 5. court ranks: `<court> [of] <suit>` → `<court>-<suit>`
//! 6. whitespace → `-`

use crate::model::{Suit, COURT_TAGS, NUMBERED_RANKS};

const ARTICLE: &str = "the ";

/// Alternate names for Major Arcana cards, mapped to their canonical keys.
pub const ALIASES: [(&str, &str); 12] = [
    ("le mat", "fool"),
    ("magus", "magician"),
    ("le bateleur", "magician"),
    ("priestess", "high-priestess"),
    ("la papesse", "high-priestess"),
    ("pope", "hierophant"),
    ("lust", "strength"),
    ("adjustment", "justice"),
    ("hanged man", "suspension"),
    ("art", "temperance"),
    ("aeon", "judgement"),
    ("universe", "world"),
];

pub fn normalize(input: &str) -> String {
    let collapsed = input
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let text = collapsed.strip_prefix(ARTICLE).unwrap_or(&collapsed);

    if let Some(key) = alias(text) {
        return key.to_string();
    }

    if let Some((rank, suit)) = split_rank_phrase(text) {
        if let Some(symbol) = numbered_symbol(rank) {
            return format!("{}-{}", symbol, suit.tag());
        }
        if COURT_TAGS.contains(&rank) {
            return format!("{}-{}", rank, suit.tag());
        }
    }

    text.replace(' ', "-")
}

fn alias(text: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(name, _)| *name == text)
        .map(|(_, key)| *key)
}

/// Splits `"<rank> of <suit>"` or `"<rank> <suit>"`.
fn split_rank_phrase(text: &str) -> Option<(&str, Suit)> {
    let words: Vec<&str> = text.split(' ').collect();
    let (rank, suit) = match words.as_slice() {
        [rank, "of", suit] | [rank, suit] => (*rank, *suit),
        _ => return None,
    };
    Suit::from_tag(suit).map(|suit| (rank, suit))
}

/// Accepts either the spelled-out word or the symbol itself.
fn numbered_symbol(rank: &str) -> Option<&'static str> {
    NUMBERED_RANKS
        .iter()
        .find(|(word, symbol)| *word == rank || *symbol == rank)
        .map(|(_, symbol)| *symbol)
}

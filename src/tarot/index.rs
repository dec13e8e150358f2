//! # Category Index
//!
//! Filtered views over the catalog's card keys. Every query walks the cards in
//! catalog order and returns the matching keys in that same order, so menus list
//! cards the way the data file lists them.
//!
//! The index borrows the catalog; building one is free.
//!
//! ## Display Names
//!
//! [`display_name`] derives what users see from the key alone:
//!
//! ```text
//! high-priestess   -> High Priestess
//! queen-swords     -> Queen of Swords
//! 5-cups           -> 5 of Cups
//! ```

use crate::catalog::Catalog;
use crate::model::{is_reserved, CardType, Line, Suit, COURT_TAGS, MAJORS_TAG, NUMBERED_TAGS};
use crate::normalize::normalize;
use rand::prelude::IndexedRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct CardIndex<'a> {
    catalog: &'a Catalog,
}

impl<'a> CardIndex<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Every card key, category tags excluded.
    pub fn all_cards(&self) -> Vec<&'a str> {
        self.catalog.keys().filter(|key| !is_reserved(key)).collect()
    }

    fn filter<F>(&self, keep: F) -> Vec<&'a str>
    where
        F: Fn(&[String]) -> bool,
    {
        self.all_cards()
            .into_iter()
            .filter(|key| self.catalog.tags_of(key).is_some_and(&keep))
            .collect()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&'a str> {
        self.filter(|tags| tags.iter().any(|t| t == tag))
    }

    /// Cards carrying at least one of `wanted`.
    pub fn by_any_tag(&self, wanted: &[&str]) -> Vec<&'a str> {
        self.filter(|tags| tags.iter().any(|t| wanted.contains(&t.as_str())))
    }

    /// Cards carrying both `a` and `b`.
    pub fn by_tags(&self, a: &str, b: &str) -> Vec<&'a str> {
        self.filter(|tags| tags.iter().any(|t| t == a) && tags.iter().any(|t| t == b))
    }

    pub fn majors(&self) -> Vec<&'a str> {
        self.by_tag(MAJORS_TAG)
    }

    pub fn majors_by_line(&self, line: Line) -> Vec<&'a str> {
        self.by_tags(MAJORS_TAG, line.tag())
    }

    /// Every card without the majors tag.
    pub fn minors(&self) -> Vec<&'a str> {
        self.filter(|tags| !tags.iter().any(|t| t == MAJORS_TAG))
    }

    pub fn by_suit(&self, suit: Suit) -> Vec<&'a str> {
        self.by_tag(suit.tag())
    }

    pub fn court(&self) -> Vec<&'a str> {
        self.by_any_tag(&COURT_TAGS)
    }

    pub fn numbered(&self) -> Vec<&'a str> {
        self.by_any_tag(&NUMBERED_TAGS)
    }

    /// Cards of a type, optionally narrowed to one suit.
    pub fn by_type(&self, kind: CardType, suit: Option<Suit>) -> Vec<&'a str> {
        let cards = match kind {
            CardType::Major => self.majors(),
            CardType::Court | CardType::Numbered => self.by_any_tag(kind.rank_tags()),
        };
        match suit {
            Some(suit) => cards
                .into_iter()
                .filter(|key| self.catalog.has_tag(key, suit.tag()))
                .collect(),
            None => cards,
        }
    }

    /// Case-insensitive search over display names and keys.
    ///
    /// A card matches when its display name or key contains the query, or when the
    /// key is exactly what the query normalizes to (so `"5 of cups"` finds `5-cups`).
    pub fn search(&self, query: &str) -> Vec<&'a str> {
        let needle = query.trim().to_lowercase();
        let normalized = normalize(query);

        self.all_cards()
            .into_iter()
            .filter(|key| {
                display_name(key).to_lowercase().contains(&needle)
                    || key.contains(&needle)
                    || *key == normalized
            })
            .collect()
    }

    /// A uniformly chosen card, or `None` for an empty catalog.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a str> {
        self.all_cards().choose(rng).copied()
    }
}

/// Human-readable name for a card key.
pub fn display_name(key: &str) -> String {
    let parts: Vec<&str> = key.split('-').collect();

    if let [rank, suit] = parts.as_slice() {
        if Suit::from_tag(suit).is_some() && !rank.is_empty() {
            return format!("{} of {}", capitalize(rank), capitalize(suit));
        }
    }

    let is_slug = parts
        .iter()
        .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphanumeric()));
    if !is_slug {
        return key.to_string();
    }

    parts
        .iter()
        .map(|p| capitalize(p))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RESERVED_TAGS;
    use crate::test_utils::builtin_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_all_cards_has_the_full_deck_and_no_category_tags() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);
        let cards = index.all_cards();

        assert_eq!(cards.len(), 78);
        for tag in RESERVED_TAGS {
            assert!(!cards.contains(&tag), "{tag} leaked into all_cards");
        }
    }

    #[test]
    fn test_listings_follow_catalog_order() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);
        let cups = index.by_suit(Suit::Cups);

        assert_eq!(cups.len(), 14);
        assert_eq!(cups[0], "ace-cups");
        assert_eq!(cups[13], "king-cups");
    }

    #[test]
    fn test_majors_split_into_three_lines() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);

        assert_eq!(index.majors().len(), 22);
        for line in Line::all() {
            assert_eq!(index.majors_by_line(*line).len(), 7);
        }
        assert_eq!(index.majors_by_line(Line::First)[0], "magician");
        assert_eq!(index.minors().len(), 56);
    }

    #[test]
    fn test_court_of_suit_matches_union_then_intersection() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);

        for suit in Suit::all() {
            let via_union: Vec<&str> = index
                .court()
                .into_iter()
                .filter(|k| index.by_suit(*suit).contains(k))
                .collect();
            assert_eq!(via_union, index.by_type(CardType::Court, Some(*suit)));
            assert_eq!(via_union.len(), 4);

            for court in COURT_TAGS {
                assert_eq!(index.by_tags(court, suit.tag()).len(), 1);
            }
        }
    }

    #[test]
    fn test_numbered_cards_by_suit() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);

        assert_eq!(index.numbered().len(), 40);
        let wands = index.by_type(CardType::Numbered, Some(Suit::Wands));
        assert_eq!(wands.len(), 10);
        assert!(wands.iter().all(|k| k.ends_with("-wands")));
        assert_eq!(index.by_type(CardType::Major, None), index.majors());
    }

    #[test]
    fn test_search_matches_names_keys_and_normalized_input() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);

        assert_eq!(index.search("FOOL"), vec!["fool"]);
        assert_eq!(index.search("high priestess"), vec!["high-priestess"]);
        assert_eq!(index.search("five of cups"), vec!["5-cups"]);
        assert_eq!(index.search("lust"), vec!["strength"]);
        assert_eq!(index.search("queen").len(), 4);
        assert!(index.search("xyzzy").is_empty());
    }

    #[test]
    fn test_search_counts_each_card_once() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);
        // "ace-cups" matches by name, by key and by normalization.
        let hits = index.search("ace-cups");
        assert_eq!(hits, vec!["ace-cups"]);
    }

    #[test]
    fn test_random_draws_a_card() {
        let catalog = builtin_catalog();
        let index = CardIndex::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);

        let card = index.random(&mut rng).unwrap();
        assert!(index.all_cards().contains(&card));
        assert!(CardIndex::new(&Catalog::default()).random(&mut rng).is_none());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("ace-cups"), "Ace of Cups");
        assert_eq!(display_name("10-swords"), "10 of Swords");
        assert_eq!(display_name("king-pentacles"), "King of Pentacles");
        assert_eq!(display_name("high-priestess"), "High Priestess");
        assert_eq!(display_name("wheel-of-fortune"), "Wheel Of Fortune");
        assert_eq!(display_name("fool"), "Fool");
        assert_eq!(display_name("odd--key"), "odd--key");
        assert_eq!(display_name("-cups"), "-cups");
    }
}

//! Closed vocabularies of the 78-card taxonomy.
//!
//! Card keys and tags are plain strings in the data file; this module holds the
//! fixed names the rest of the crate reasons about (suits, rank words, the three
//! Major Arcana lines) and the list of tag names that are never cards themselves.

/// Tag carried by every Major Arcana card.
pub const MAJORS_TAG: &str = "majors";

/// Spelled-out rank words paired with the symbol used in canonical keys.
pub const NUMBERED_RANKS: [(&str, &str); 11] = [
    ("ace", "ace"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
];

/// Rank tags that make up the "numbered cards" class.
pub const NUMBERED_TAGS: [&str; 10] = ["ace", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

/// Court ranks; each is both the rank word and the tag.
pub const COURT_TAGS: [&str; 4] = ["page", "knight", "queen", "king"];

/// Tag names that label categories and are never card keys.
pub const RESERVED_TAGS: [&str; 22] = [
    "cups", "pentacles", "swords", "wands", "majors", "line1", "line2", "line3", "ace", "page",
    "knight", "queen", "king", "2", "3", "4", "5", "6", "7", "8", "9", "10",
];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_TAGS.contains(&key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Cups,
    Pentacles,
    Swords,
    Wands,
}

impl Suit {
    /// All suits in menu order.
    pub fn all() -> &'static [Suit] {
        &[Suit::Cups, Suit::Pentacles, Suit::Swords, Suit::Wands]
    }

    /// The tag (and key suffix) for this suit.
    pub fn tag(&self) -> &'static str {
        match self {
            Suit::Cups => "cups",
            Suit::Pentacles => "pentacles",
            Suit::Swords => "swords",
            Suit::Wands => "wands",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Pentacles => "Pentacles",
            Suit::Swords => "Swords",
            Suit::Wands => "Wands",
        }
    }

    pub fn theme(&self) -> &'static str {
        match self {
            Suit::Cups => "Emotional lives, relationships",
            Suit::Pentacles => "Life's work, making vision tangible",
            Suit::Swords => "Communication, mindfulness, truth",
            Suit::Wands => "Physical energy, respecting limits",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Suit> {
        Suit::all().iter().copied().find(|s| s.tag() == tag)
    }
}

/// The three lines the Major Arcana (excluding the Fool) are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    First,
    Second,
    Third,
}

impl Line {
    pub fn all() -> &'static [Line] {
        &[Line::First, Line::Second, Line::Third]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Line::First => "line1",
            Line::Second => "line2",
            Line::Third => "line3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Line::First => "Line 1",
            Line::Second => "Line 2",
            Line::Third => "Line 3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Line::First => "Foundational identity, showing up in the world",
            Line::Second => "In-betweenness, going within",
            Line::Third => "Healing, moving to higher selves",
        }
    }
}

/// Rank classes offered by "Browse by Type".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Major,
    Court,
    Numbered,
}

impl CardType {
    pub fn label(&self) -> &'static str {
        match self {
            CardType::Major => "Major Arcana",
            CardType::Court => "Court Cards",
            CardType::Numbered => "Numbered Cards",
        }
    }

    /// Menu label, with the ranks spelled out for the minor classes.
    pub fn menu_label(&self) -> &'static str {
        match self {
            CardType::Major => "Major Arcana",
            CardType::Court => "Court Cards (Page, Knight, Queen, King)",
            CardType::Numbered => "Numbered Cards (Ace through 10)",
        }
    }

    /// Rank tags belonging to this class. Empty for the Major Arcana.
    pub fn rank_tags(&self) -> &'static [&'static str] {
        match self {
            CardType::Major => &[],
            CardType::Court => &COURT_TAGS,
            CardType::Numbered => &NUMBERED_TAGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_tags_cover_every_category_label() {
        for suit in Suit::all() {
            assert!(is_reserved(suit.tag()));
        }
        for line in Line::all() {
            assert!(is_reserved(line.tag()));
        }
        for tag in COURT_TAGS.iter().chain(NUMBERED_TAGS.iter()) {
            assert!(is_reserved(tag), "{} should be reserved", tag);
        }
        assert!(is_reserved(MAJORS_TAG));
        assert!(!is_reserved("fool"));
        assert!(!is_reserved("ace-cups"));
    }

    #[test]
    fn test_suit_from_tag() {
        assert_eq!(Suit::from_tag("swords"), Some(Suit::Swords));
        assert_eq!(Suit::from_tag("coins"), None);
    }
}

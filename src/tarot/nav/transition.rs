//! The transition table: `Screen + Answer -> Screen`.
//!
//! No I/O happens here. A transition may carry a notice for the terminal to show
//! ("No cards found in this category.") but never prompts or prints itself.

use super::screen::*;
use crate::breadcrumb::Breadcrumb;
use crate::index::{display_name, CardIndex};
use crate::model::CardType;
use log::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NO_CARDS_NOTICE: &str = "No cards found in this category.";

/// Queries wider than this are shortened in the breadcrumb.
const QUERY_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Screen,
    pub notice: Option<String>,
}

impl Transition {
    fn to(next: Screen) -> Self {
        Self { next, notice: None }
    }

    fn with_notice(next: Screen, notice: impl Into<String>) -> Self {
        Self {
            next,
            notice: Some(notice.into()),
        }
    }
}

pub fn transition(screen: Screen, answer: Answer, index: &CardIndex<'_>) -> Transition {
    match answer {
        Answer::Choice(Choice::Back) => go_back(screen),
        Answer::Choice(choice) => choose(screen, choice, index),
        Answer::Text(text) => submit(screen, text, index),
    }
}

/// Returns the producing screen exactly as it was left.
fn go_back(screen: Screen) -> Transition {
    match screen {
        Screen::Category { back, .. }
        | Screen::MajorLine { back, .. }
        | Screen::Suit { back, .. }
        | Screen::SuitFilter { back, .. }
        | Screen::Type { back, .. }
        | Screen::TypeSuitFilter { back, .. }
        | Screen::Search { back, .. }
        | Screen::CardList { back, .. } => Transition::to(*back),
        Screen::SearchMiss { search, .. } => go_back(*search),
        other => stay(other, "Back"),
    }
}

fn stay(screen: Screen, what: &str) -> Transition {
    warn!("Ignoring {} on {:?}", what, screen.kind());
    Transition::to(screen)
}

fn choose(screen: Screen, choice: Choice, index: &CardIndex<'_>) -> Transition {
    let trail = match screen.trail() {
        Some(trail) => trail.clone(),
        None => return Transition::to(screen),
    };

    match (screen.kind(), choice) {
        (ScreenKind::Root, Choice::BrowseCategory) => Transition::to(Screen::Category {
            trail: trail.with_step(ROOT_PROMPT, BROWSE_CATEGORY),
            back: Box::new(screen),
        }),
        (ScreenKind::Root, Choice::BrowseSuit) => Transition::to(Screen::Suit {
            trail: trail.with_step(ROOT_PROMPT, BROWSE_SUIT),
            back: Box::new(screen),
        }),
        (ScreenKind::Root, Choice::BrowseType) => Transition::to(Screen::Type {
            trail: trail.with_step(ROOT_PROMPT, BROWSE_TYPE),
            back: Box::new(screen),
        }),
        (ScreenKind::Root, Choice::Search) => Transition::to(Screen::Search {
            trail: trail.with_step(ROOT_PROMPT, SEARCH_CARD),
            back: Box::new(screen),
        }),
        (ScreenKind::Root | ScreenKind::CardDetail, Choice::Exit) => Transition::to(Screen::Exit),

        (ScreenKind::Category, Choice::Major) => Transition::to(Screen::MajorLine {
            trail: trail.with_step(CATEGORY_PROMPT, MAJOR_ARCANA),
            back: Box::new(screen),
        }),
        (ScreenKind::Category, Choice::Minor) => list(
            screen,
            trail.with_step(CATEGORY_PROMPT, MINOR_ARCANA),
            index.minors(),
        ),

        (ScreenKind::MajorLine, Choice::Line(line)) => list(
            screen,
            trail.with_step(LINE_PROMPT, line.label()),
            index.majors_by_line(line),
        ),
        (ScreenKind::MajorLine, Choice::AllMajors) => list(
            screen,
            trail.with_step(LINE_PROMPT, ALL_MAJORS),
            index.majors(),
        ),

        (ScreenKind::Suit, Choice::Suit(suit)) => Transition::to(Screen::SuitFilter {
            trail: trail.with_step(SUIT_PROMPT, suit.label()),
            suit,
            back: Box::new(screen),
        }),
        (ScreenKind::SuitFilter(suit), Choice::AllCards) => list(
            screen,
            trail.with_step(SUIT_FILTER_PROMPT, SHOW_ALL_CARDS),
            index.by_suit(suit),
        ),
        (ScreenKind::SuitFilter(suit), Choice::Kind(kind)) if kind != CardType::Major => list(
            screen,
            trail.with_step(SUIT_FILTER_PROMPT, kind.label()),
            index.by_type(kind, Some(suit)),
        ),

        (ScreenKind::Type, Choice::Kind(CardType::Major)) => list(
            screen,
            trail.with_step(TYPE_PROMPT, CardType::Major.label()),
            index.majors(),
        ),
        (ScreenKind::Type, Choice::Kind(kind)) => Transition::to(Screen::TypeSuitFilter {
            trail: trail.with_step(TYPE_PROMPT, kind.label()),
            kind,
            back: Box::new(screen),
        }),
        (ScreenKind::TypeSuitFilter(kind), Choice::AllSuits) => list(
            screen,
            trail.with_step(TYPE_FILTER_PROMPT, SHOW_ALL_SUITS),
            index.by_type(kind, None),
        ),
        (ScreenKind::TypeSuitFilter(kind), Choice::Suit(suit)) => list(
            screen,
            trail.with_step(TYPE_FILTER_PROMPT, suit.label()),
            index.by_type(kind, Some(suit)),
        ),

        (ScreenKind::SearchMiss, Choice::SearchAgain) => match screen {
            Screen::SearchMiss { search, .. } => Transition::to(*search),
            other => Transition::to(other),
        },
        (ScreenKind::SearchMiss, Choice::MainMenu) => go_back(screen),

        (ScreenKind::CardList, Choice::Card(card)) => Transition::to(Screen::CardDetail {
            trail: trail.with_step(CARD_PROMPT, display_name(&card)),
            card,
        }),

        (ScreenKind::CardDetail, Choice::MainMenu) => Transition::to(Screen::root()),

        (_, choice) => stay(screen, &format!("{:?}", choice)),
    }
}

fn submit(screen: Screen, text: String, index: &CardIndex<'_>) -> Transition {
    let trail = match &screen {
        Screen::Search { trail, .. } => trail.clone(),
        _ => return stay(screen, "text input"),
    };

    let query = text.trim();
    if query.is_empty() {
        return go_back(screen);
    }

    let results = index.search(query);
    match results.as_slice() {
        [] => Transition::with_notice(
            Screen::SearchMiss {
                query: query.to_string(),
                search: Box::new(screen),
            },
            format!("No cards found matching \"{}\"", query),
        ),
        [card] => Transition::with_notice(
            Screen::CardDetail {
                trail: trail
                    .with_step(SEARCH_STEP, shorten_query(query))
                    .with_step(CARD_PROMPT, display_name(card)),
                card: card.to_string(),
            },
            format!("Found 1 card(s) matching \"{}\"", query),
        ),
        _ => {
            let notice = format!("Found {} card(s) matching \"{}\"", results.len(), query);
            Transition::with_notice(
                Screen::CardList {
                    trail: trail.with_step(SEARCH_STEP, shorten_query(query)),
                    cards: results.iter().map(|c| c.to_string()).collect(),
                    back: Box::new(screen),
                },
                notice,
            )
        }
    }
}

/// Moves to a card list, or stays put with a notice when the filter matched nothing.
fn list(parent: Screen, trail: Breadcrumb, cards: Vec<&str>) -> Transition {
    if cards.is_empty() {
        return Transition::with_notice(parent, NO_CARDS_NOTICE);
    }
    Transition::to(Screen::CardList {
        trail,
        cards: cards.into_iter().map(String::from).collect(),
        back: Box::new(parent),
    })
}

/// Shortens long queries to fit the breadcrumb.
fn shorten_query(query: &str) -> String {
    if query.width() <= QUERY_WIDTH {
        return query.to_string();
    }

    let mut shortened = String::new();
    let mut width = 0;
    for c in query.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > QUERY_WIDTH - 3 {
            break;
        }
        shortened.push(c);
        width += w;
    }
    shortened.push_str("...");
    shortened
}

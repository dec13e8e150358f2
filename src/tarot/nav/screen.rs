//! Screens, their menus, and the choices a menu can return.
//!
//! Every screen below the main menu owns a boxed copy of the screen that produced
//! it (`back`). Going back returns that value as it was, breadcrumb included.

use crate::breadcrumb::Breadcrumb;
use crate::index::display_name;
use crate::model::{CardType, Line, Suit};

pub const ROOT_PROMPT: &str = "Select an option:";
pub const CATEGORY_PROMPT: &str = "Select a category:";
pub const LINE_PROMPT: &str = "Select a line:";
pub const SUIT_PROMPT: &str = "Select a suit:";
pub const SUIT_FILTER_PROMPT: &str = "How would you like to view these cards?";
pub const TYPE_PROMPT: &str = "Select a type:";
pub const TYPE_FILTER_PROMPT: &str = "Filter by suit?";
pub const SEARCH_PROMPT: &str = "Enter search term (or press Enter to go back):";
pub const SEARCH_STEP: &str = "Search:";
pub const CARD_PROMPT: &str = "Select a card:";
pub const ACTION_PROMPT: &str = "What would you like to do?";

pub const BROWSE_CATEGORY: &str = "Browse by Category (Major/Minor Arcana)";
pub const BROWSE_SUIT: &str = "Browse by Suit";
pub const BROWSE_TYPE: &str = "Browse by Type (Court/Numbered/Major)";
pub const SEARCH_CARD: &str = "Search for a Card";
pub const MAJOR_ARCANA: &str = "Major Arcana";
pub const MINOR_ARCANA: &str = "Minor Arcana";
pub const ALL_MAJORS: &str = "All Major Arcana";
pub const SHOW_ALL_CARDS: &str = "Show All Cards";
pub const SHOW_ALL_SUITS: &str = "Show All Suits";
pub const SEARCH_AGAIN: &str = "Search again";
pub const BACK_TO_MAIN: &str = "Back to Main Menu";
pub const RETURN_TO_MAIN: &str = "Return to Main Menu";
pub const BACK: &str = "Back";
pub const EXIT: &str = "Exit";

/// What a menu option stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    BrowseCategory,
    BrowseSuit,
    BrowseType,
    Search,
    Major,
    Minor,
    Line(Line),
    AllMajors,
    Suit(Suit),
    AllSuits,
    AllCards,
    Kind(CardType),
    Card(String),
    SearchAgain,
    MainMenu,
    Back,
    Exit,
}

/// A user's reply to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(Choice),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub choice: Choice,
}

impl MenuOption {
    fn new(label: impl Into<String>, choice: Choice) -> Self {
        Self {
            label: label.into(),
            choice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Select {
        message: &'static str,
        options: Vec<MenuOption>,
    },
    Text {
        message: &'static str,
    },
}

/// Name of a screen without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Root,
    Category,
    MajorLine,
    Suit,
    SuitFilter(Suit),
    Type,
    TypeSuitFilter(CardType),
    Search,
    SearchMiss,
    CardList,
    CardDetail,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Root {
        trail: Breadcrumb,
    },
    Category {
        trail: Breadcrumb,
        back: Box<Screen>,
    },
    MajorLine {
        trail: Breadcrumb,
        back: Box<Screen>,
    },
    Suit {
        trail: Breadcrumb,
        back: Box<Screen>,
    },
    SuitFilter {
        trail: Breadcrumb,
        suit: Suit,
        back: Box<Screen>,
    },
    Type {
        trail: Breadcrumb,
        back: Box<Screen>,
    },
    TypeSuitFilter {
        trail: Breadcrumb,
        kind: CardType,
        back: Box<Screen>,
    },
    Search {
        trail: Breadcrumb,
        back: Box<Screen>,
    },
    /// Follow-up after a search with no results; `search` is the screen to retry.
    SearchMiss {
        query: String,
        search: Box<Screen>,
    },
    CardList {
        trail: Breadcrumb,
        cards: Vec<String>,
        back: Box<Screen>,
    },
    CardDetail {
        trail: Breadcrumb,
        card: String,
    },
    Exit,
}

impl Screen {
    /// The main menu with an empty breadcrumb.
    pub fn root() -> Self {
        Screen::Root {
            trail: Breadcrumb::new(),
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Root { .. } => ScreenKind::Root,
            Screen::Category { .. } => ScreenKind::Category,
            Screen::MajorLine { .. } => ScreenKind::MajorLine,
            Screen::Suit { .. } => ScreenKind::Suit,
            Screen::SuitFilter { suit, .. } => ScreenKind::SuitFilter(*suit),
            Screen::Type { .. } => ScreenKind::Type,
            Screen::TypeSuitFilter { kind, .. } => ScreenKind::TypeSuitFilter(*kind),
            Screen::Search { .. } => ScreenKind::Search,
            Screen::SearchMiss { .. } => ScreenKind::SearchMiss,
            Screen::CardList { .. } => ScreenKind::CardList,
            Screen::CardDetail { .. } => ScreenKind::CardDetail,
            Screen::Exit => ScreenKind::Exit,
        }
    }

    /// Breadcrumb shown on this screen. `None` only for [`Screen::Exit`].
    pub fn trail(&self) -> Option<&Breadcrumb> {
        match self {
            Screen::Root { trail }
            | Screen::Category { trail, .. }
            | Screen::MajorLine { trail, .. }
            | Screen::Suit { trail, .. }
            | Screen::SuitFilter { trail, .. }
            | Screen::Type { trail, .. }
            | Screen::TypeSuitFilter { trail, .. }
            | Screen::Search { trail, .. }
            | Screen::CardList { trail, .. }
            | Screen::CardDetail { trail, .. } => Some(trail),
            Screen::SearchMiss { search, .. } => search.trail(),
            Screen::Exit => None,
        }
    }

    /// The prompt this screen asks. `None` for [`Screen::Exit`].
    pub fn prompt(&self) -> Option<Prompt> {
        let select = |message, options| Some(Prompt::Select { message, options });

        match self {
            Screen::Root { .. } => select(
                ROOT_PROMPT,
                vec![
                    MenuOption::new(BROWSE_CATEGORY, Choice::BrowseCategory),
                    MenuOption::new(BROWSE_SUIT, Choice::BrowseSuit),
                    MenuOption::new(BROWSE_TYPE, Choice::BrowseType),
                    MenuOption::new(SEARCH_CARD, Choice::Search),
                    MenuOption::new(EXIT, Choice::Exit),
                ],
            ),
            Screen::Category { .. } => select(
                CATEGORY_PROMPT,
                vec![
                    MenuOption::new(MAJOR_ARCANA, Choice::Major),
                    MenuOption::new(MINOR_ARCANA, Choice::Minor),
                    MenuOption::new(BACK_TO_MAIN, Choice::Back),
                ],
            ),
            Screen::MajorLine { .. } => {
                let mut options: Vec<MenuOption> = Line::all()
                    .iter()
                    .map(|line| {
                        MenuOption::new(
                            format!("{} ({})", line.label(), line.description()),
                            Choice::Line(*line),
                        )
                    })
                    .collect();
                options.push(MenuOption::new(ALL_MAJORS, Choice::AllMajors));
                options.push(MenuOption::new(BACK, Choice::Back));
                select(LINE_PROMPT, options)
            }
            Screen::Suit { .. } => {
                let mut options: Vec<MenuOption> = Suit::all()
                    .iter()
                    .map(|suit| {
                        MenuOption::new(
                            format!("{} ({})", suit.label(), suit.theme()),
                            Choice::Suit(*suit),
                        )
                    })
                    .collect();
                options.push(MenuOption::new(BACK_TO_MAIN, Choice::Back));
                select(SUIT_PROMPT, options)
            }
            Screen::SuitFilter { .. } => select(
                SUIT_FILTER_PROMPT,
                vec![
                    MenuOption::new(SHOW_ALL_CARDS, Choice::AllCards),
                    MenuOption::new(
                        CardType::Court.menu_label(),
                        Choice::Kind(CardType::Court),
                    ),
                    MenuOption::new(
                        CardType::Numbered.menu_label(),
                        Choice::Kind(CardType::Numbered),
                    ),
                    MenuOption::new(BACK, Choice::Back),
                ],
            ),
            Screen::Type { .. } => {
                let mut options: Vec<MenuOption> =
                    [CardType::Major, CardType::Court, CardType::Numbered]
                        .iter()
                        .map(|kind| MenuOption::new(kind.menu_label(), Choice::Kind(*kind)))
                        .collect();
                options.push(MenuOption::new(BACK_TO_MAIN, Choice::Back));
                select(TYPE_PROMPT, options)
            }
            Screen::TypeSuitFilter { .. } => {
                let mut options = vec![MenuOption::new(SHOW_ALL_SUITS, Choice::AllSuits)];
                options.extend(
                    Suit::all()
                        .iter()
                        .map(|suit| MenuOption::new(suit.label(), Choice::Suit(*suit))),
                );
                options.push(MenuOption::new(BACK, Choice::Back));
                select(TYPE_FILTER_PROMPT, options)
            }
            Screen::Search { .. } => Some(Prompt::Text {
                message: SEARCH_PROMPT,
            }),
            Screen::SearchMiss { .. } => select(
                ACTION_PROMPT,
                vec![
                    MenuOption::new(SEARCH_AGAIN, Choice::SearchAgain),
                    MenuOption::new(BACK_TO_MAIN, Choice::MainMenu),
                ],
            ),
            Screen::CardList { cards, .. } => {
                let mut options: Vec<MenuOption> = cards
                    .iter()
                    .map(|card| MenuOption::new(display_name(card), Choice::Card(card.clone())))
                    .collect();
                options.push(MenuOption::new(BACK, Choice::Back));
                select(CARD_PROMPT, options)
            }
            Screen::CardDetail { .. } => select(
                ACTION_PROMPT,
                vec![
                    MenuOption::new(RETURN_TO_MAIN, Choice::MainMenu),
                    MenuOption::new(EXIT, Choice::Exit),
                ],
            ),
            Screen::Exit => None,
        }
    }
}

//! # Navigation State Machine
//!
//! Interactive browsing is a loop over [`Screen`] values:
//!
//! 1. the current screen describes its prompt ([`Screen::prompt`]),
//! 2. the [`Terminal`] shows the screen's views and collects an [`Answer`],
//! 3. [`transition`] maps `(screen, answer)` to the next screen plus an optional notice.
//!
//! Step 3 is pure and holds all of the navigation rules, so it is tested without a
//! terminal. The loop in [`Navigator::run`] only wires the three together.
//!
//! ## The Terminal Seam
//!
//! The navigator never prints. Everything the user sees goes through
//! [`Terminal::show`] as a [`View`], and every question through
//! [`Terminal::select`] or [`Terminal::input`]. The CLI supplies a line-oriented
//! implementation; tests supply a scripted one.
//!
//! End of input on any prompt ([`TarotError::InputClosed`]) ends the session the same
//! way choosing "Exit" does.

pub mod screen;
pub mod transition;

pub use screen::{Answer, Choice, MenuOption, Prompt, Screen, ScreenKind};
pub use transition::{transition, Transition, NO_CARDS_NOTICE};

use crate::breadcrumb::Breadcrumb;
use crate::catalog::Catalog;
use crate::error::{Result, TarotError};
use crate::index::{display_name, CardIndex};
use crate::lookup::{LookupError, Reading, Resolver};
use log::debug;

/// Something the terminal should display.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Main menu title.
    Banner,
    Trail(&'a Breadcrumb),
    Notice(&'a str),
    /// Title line above a card's reading; carries the display name.
    CardHeader(&'a str),
    Reading(&'a std::result::Result<Reading, LookupError>),
    Farewell,
}

/// Prompting and display capabilities the navigator needs.
pub trait Terminal {
    fn show(&mut self, view: View<'_>) -> Result<()>;

    /// Asks the user to pick one of `options`; returns its position.
    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize>;

    /// Asks for one line of free text.
    fn input(&mut self, message: &str) -> Result<String>;
}

pub struct Navigator<'a> {
    index: CardIndex<'a>,
    resolver: Resolver<'a>,
}

impl<'a> Navigator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            index: CardIndex::new(catalog),
            resolver: Resolver::new(catalog),
        }
    }

    /// Runs a session from the main menu until the user exits.
    pub fn run<T: Terminal + ?Sized>(&self, term: &mut T) -> Result<()> {
        self.run_from(Screen::root(), term)
    }

    pub fn run_from<T: Terminal + ?Sized>(&self, start: Screen, term: &mut T) -> Result<()> {
        let mut screen = start;

        while let Some(prompt) = screen.prompt() {
            self.render(&screen, term)?;

            let answer = match ask(prompt, term) {
                Ok(answer) => answer,
                Err(TarotError::InputClosed) => {
                    debug!("Input closed on {:?}", screen.kind());
                    break;
                }
                Err(e) => return Err(e),
            };

            let from = screen.kind();
            let Transition { next, notice } = self.step(screen, answer);
            debug!(
                "{:?} -> {:?} (breadcrumb depth {})",
                from,
                next.kind(),
                next.trail().map_or(0, Breadcrumb::len)
            );

            if let Some(notice) = notice {
                term.show(View::Notice(&notice))?;
            }
            screen = next;
        }

        term.show(View::Farewell)
    }

    /// One transition, without any I/O.
    pub fn step(&self, screen: Screen, answer: Answer) -> Transition {
        transition(screen, answer, &self.index)
    }

    fn render<T: Terminal + ?Sized>(&self, screen: &Screen, term: &mut T) -> Result<()> {
        match screen {
            Screen::Root { trail } => {
                term.show(View::Banner)?;
                term.show(View::Trail(trail))
            }
            Screen::CardDetail { trail, card } => {
                let name = display_name(card);
                term.show(View::CardHeader(&name))?;
                term.show(View::Trail(trail))?;
                let reading = self.resolver.read(card);
                term.show(View::Reading(&reading))
            }
            other => match other.trail() {
                Some(trail) => term.show(View::Trail(trail)),
                None => Ok(()),
            },
        }
    }
}

fn ask<T: Terminal + ?Sized>(prompt: Prompt, term: &mut T) -> Result<Answer> {
    match prompt {
        Prompt::Select { message, options } => {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            let picked = term.select(message, &labels)?;
            let count = options.len();
            options
                .into_iter()
                .nth(picked)
                .map(|option| Answer::Choice(option.choice))
                .ok_or_else(|| {
                    TarotError::Prompt(format!(
                        "selection {} is out of range ({} options)",
                        picked, count
                    ))
                })
        }
        Prompt::Text { message } => term.input(message).map(Answer::Text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{builtin_catalog, sparse_catalog, Say, ScriptedTerminal};

    #[test]
    fn test_exit_from_the_main_menu() {
        let catalog = builtin_catalog();
        let mut term = ScriptedTerminal::new(vec![Say::Pick("Exit")]);

        Navigator::new(&catalog).run(&mut term).unwrap();

        assert_eq!(term.banners, 1);
        assert!(term.farewell);
        assert!(term.trails.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_browse_by_suit_to_a_card() {
        let catalog = builtin_catalog();
        let mut term = ScriptedTerminal::new(vec![
            Say::Pick("Browse by Suit"),
            Say::Pick("Swords (Communication, mindfulness, truth)"),
            Say::Pick("Court Cards (Page, Knight, Queen, King)"),
            Say::Pick("Knight of Swords"),
            Say::Pick("Exit"),
        ]);

        Navigator::new(&catalog).run(&mut term).unwrap();

        assert_eq!(term.headers, vec!["Knight of Swords"]);
        assert_eq!(
            term.trails.last().unwrap(),
            &vec!["Browse by Suit", "Swords", "Court Cards", "Knight of Swords"]
        );
        let reading = term.readings[0].as_ref().unwrap();
        assert_eq!(reading.key, "knight-swords");
        assert!(term.farewell);
    }

    #[test]
    fn test_back_replays_the_earlier_trail() {
        let catalog = builtin_catalog();
        let mut term = ScriptedTerminal::new(vec![
            Say::Pick("Browse by Category (Major/Minor Arcana)"),
            Say::Pick("Major Arcana"),
            Say::Pick("All Major Arcana"),
            Say::Pick("Back"),
            Say::Pick("Back"),
            Say::Pick("Back to Main Menu"),
            Say::Pick("Exit"),
        ]);

        Navigator::new(&catalog).run(&mut term).unwrap();

        let depths: Vec<usize> = term.trails.iter().map(Vec::len).collect();
        assert_eq!(depths, vec![0, 1, 2, 3, 2, 1, 0]);
        assert_eq!(term.trails[4], term.trails[2]);
        assert_eq!(term.trails[5], term.trails[1]);
        assert_eq!(term.banners, 2);
    }

    #[test]
    fn test_search_retry_then_single_match() {
        let catalog = builtin_catalog();
        let mut term = ScriptedTerminal::new(vec![
            Say::Pick("Search for a Card"),
            Say::Type("unicorn"),
            Say::Pick("Search again"),
            Say::Type("hanged man"),
            Say::Pick("Return to Main Menu"),
            Say::Pick("Exit"),
        ]);

        Navigator::new(&catalog).run(&mut term).unwrap();

        assert_eq!(
            term.notices,
            vec![
                "No cards found matching \"unicorn\"",
                "Found 1 card(s) matching \"hanged man\""
            ]
        );
        assert_eq!(term.headers, vec!["Suspension"]);
        let detail_trail = &term.trails[term.trails.len() - 2];
        assert_eq!(
            detail_trail,
            &vec!["Search for a Card", "hanged man", "Suspension"]
        );
        assert!(term.trails.last().unwrap().is_empty());
    }

    #[test]
    fn test_empty_filter_reports_and_stays() {
        let catalog = sparse_catalog();
        let mut term = ScriptedTerminal::new(vec![
            Say::Pick("Browse by Type (Court/Numbered/Major)"),
            Say::Pick("Court Cards (Page, Knight, Queen, King)"),
            Say::Pick("Show All Suits"),
            Say::Pick("Back"),
            Say::Pick("Back to Main Menu"),
            Say::Pick("Exit"),
        ]);

        Navigator::new(&catalog).run(&mut term).unwrap();

        assert_eq!(term.notices, vec![NO_CARDS_NOTICE]);
        let depths: Vec<usize> = term.trails.iter().map(Vec::len).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_detail_shows_lookup_errors() {
        let catalog = sparse_catalog();
        let mut term = ScriptedTerminal::new(vec![
            Say::Pick("Browse by Suit"),
            Say::Pick("Swords (Communication, mindfulness, truth)"),
            Say::Pick("Show All Cards"),
            Say::Pick("6 of Swords"),
            Say::Pick("Exit"),
        ]);

        Navigator::new(&catalog).run(&mut term).unwrap();

        let err = term.readings[0].as_ref().unwrap_err();
        assert_eq!(
            err.to_string(),
            "No outputs defined for card categories: swords, 6"
        );
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let catalog = builtin_catalog();
        let mut term = ScriptedTerminal::new(vec![Say::Pick("Browse by Suit")]);

        Navigator::new(&catalog).run(&mut term).unwrap();

        assert!(term.farewell);
        assert_eq!(term.trails.len(), 2);
    }

    #[test]
    fn test_out_of_range_selection_is_an_error() {
        struct Wild;
        impl Terminal for Wild {
            fn show(&mut self, _: View<'_>) -> Result<()> {
                Ok(())
            }
            fn select(&mut self, _: &str, options: &[&str]) -> Result<usize> {
                Ok(options.len())
            }
            fn input(&mut self, _: &str) -> Result<String> {
                Ok(String::new())
            }
        }

        let catalog = builtin_catalog();
        let err = Navigator::new(&catalog).run(&mut Wild).unwrap_err();
        assert!(matches!(err, TarotError::Prompt(_)));
    }

    #[test]
    fn test_step_is_pure() {
        let catalog = builtin_catalog();
        let nav = Navigator::new(&catalog);
        let a = nav.step(Screen::root(), Answer::Choice(Choice::BrowseSuit));
        let b = nav.step(Screen::root(), Answer::Choice(Choice::BrowseSuit));
        assert_eq!(a, b);
    }
}

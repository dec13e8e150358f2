//! # Rendering Module
//!
//! Every piece of terminal output is a minijinja template (see `templates.rs`) rendered
//! with a `style` filter backed by [`TAROT_THEME`]. Color is decided once, when the
//! [`Renderer`] is built; with color off the filter only checks the style name.

use super::styles::TAROT_THEME;
use super::templates::{
    BANNER_TEMPLATE, CARD_HEADER_TEMPLATE, CARD_LIST_TEMPLATE, FAREWELL_TEMPLATE, MENU_TEMPLATE,
    NOTICE_TEMPLATE, QUESTION_TEMPLATE, READING_TEMPLATE, TRAIL_TEMPLATE,
};
use log::warn;
use minijinja::{context, Environment, Value};
use serde::Serialize;
use tarot::api::CardSummary;
use tarot::breadcrumb::Breadcrumb;
use tarot::lookup::{LookupError, Reading};
use tarot::nav::View;
use unicode_width::UnicodeWidthStr;

pub const RULE_WIDTH: usize = 50;
pub const BANNER_TITLE: &str = "TAROT NAVIGATOR - Main Menu";

const TEMPLATES: [(&str, &str); 9] = [
    ("banner", BANNER_TEMPLATE),
    ("trail", TRAIL_TEMPLATE),
    ("notice", NOTICE_TEMPLATE),
    ("card_header", CARD_HEADER_TEMPLATE),
    ("reading", READING_TEMPLATE),
    ("farewell", FAREWELL_TEMPLATE),
    ("card_list", CARD_LIST_TEMPLATE),
    ("menu", MENU_TEMPLATE),
    ("question", QUESTION_TEMPLATE),
];

#[derive(Serialize)]
struct CardLine<'a> {
    key: &'a str,
    padding: String,
    name: &'a str,
}

#[derive(Serialize)]
struct MenuLine<'a> {
    number: usize,
    label: &'a str,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            TAROT_THEME.apply(&name, &value.to_string(), use_color)
        });

        for (name, source) in TEMPLATES {
            if let Err(e) = env.add_template(name, source) {
                warn!("Template {} failed to compile: {}", name, e);
            }
        }

        Self { env }
    }

    fn render<S: Serialize>(&self, name: &str, data: S) -> String {
        self.env
            .get_template(name)
            .and_then(|template| template.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn view(&self, view: View<'_>) -> String {
        match view {
            View::Banner => self.banner(),
            View::Trail(trail) => self.trail(trail),
            View::Notice(text) => self.notice(text),
            View::CardHeader(name) => self.card_header(name),
            View::Reading(reading) => self.reading(reading),
            View::Farewell => self.farewell(),
        }
    }

    pub fn banner(&self) -> String {
        self.render(
            "banner",
            context! { rule => "=".repeat(RULE_WIDTH), title => BANNER_TITLE },
        )
    }

    /// Empty for an empty breadcrumb.
    pub fn trail(&self, trail: &Breadcrumb) -> String {
        if trail.is_empty() {
            return String::new();
        }
        let steps: Vec<&str> = trail.selections().collect();
        self.render("trail", context! { steps })
    }

    pub fn notice(&self, text: &str) -> String {
        self.render("notice", context! { text })
    }

    pub fn card_header(&self, name: &str) -> String {
        self.render(
            "card_header",
            context! { rule => "=".repeat(RULE_WIDTH), name },
        )
    }

    pub fn reading(&self, reading: &Result<Reading, LookupError>) -> String {
        match reading {
            Ok(reading) => self.render("reading", context! { text => reading.to_text() }),
            Err(e) => self.render("reading", context! { error => e.to_string() }),
        }
    }

    pub fn farewell(&self) -> String {
        self.render("farewell", context! {})
    }

    pub fn card_list(&self, cards: &[CardSummary]) -> String {
        let key_width = cards.iter().map(|c| c.key.width()).max().unwrap_or(0);
        let lines: Vec<CardLine<'_>> = cards
            .iter()
            .map(|c| CardLine {
                key: &c.key,
                padding: " ".repeat(key_width - c.key.width()),
                name: &c.name,
            })
            .collect();
        self.render(
            "card_list",
            context! { cards => lines, count => cards.len() },
        )
    }

    /// A select prompt: the message and its options numbered from 1.
    pub fn menu(&self, message: &str, options: &[&str]) -> String {
        let options: Vec<MenuLine<'_>> = options
            .iter()
            .enumerate()
            .map(|(i, label)| MenuLine {
                number: i + 1,
                label,
            })
            .collect();
        self.render("menu", context! { message, options })
    }

    /// A one-line question, left open for the answer.
    pub fn question(&self, message: &str) -> String {
        self.render("question", context! { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer {
        Renderer::new(false)
    }

    #[test]
    fn test_banner_between_rules() {
        let rule = "=".repeat(RULE_WIDTH);
        assert_eq!(
            plain().banner(),
            format!("\n{rule}\n{BANNER_TITLE}\n{rule}\n")
        );
    }

    #[test]
    fn test_trail_joins_selections() {
        let trail = Breadcrumb::new()
            .with_step("Select an option:", "Browse by Suit")
            .with_step("Select a suit:", "Cups");
        assert_eq!(plain().trail(&trail), "\nBrowse by Suit → Cups\n\n");
        assert_eq!(plain().trail(&Breadcrumb::new()), "");
    }

    #[test]
    fn test_card_header_is_upper_cased() {
        let out = plain().card_header("Queen of Cups");
        assert!(out.contains("\nQUEEN OF CUPS\n"));
    }

    #[test]
    fn test_reading_text_and_errors() {
        let reading = Ok(Reading {
            key: "fool".into(),
            blocks: vec!["One.".into(), "Two.".into()],
        });
        assert_eq!(plain().reading(&reading), "\nOne.\n\nTwo.\n\n");

        let missing = Err(LookupError::NotFound {
            input: "nothing".into(),
        });
        assert_eq!(plain().reading(&missing), "No mapping found for: nothing\n");

        let empty = Err(LookupError::EmptyContent {
            key: "6-swords".into(),
            tags: vec!["swords".into(), "6".into()],
        });
        assert_eq!(
            plain().reading(&empty),
            "No outputs defined for card categories: swords, 6\n"
        );
    }

    #[test]
    fn test_card_list_aligns_names() {
        let cards = vec![
            CardSummary {
                key: "fool".into(),
                name: "Fool".into(),
            },
            CardSummary {
                key: "ace-cups".into(),
                name: "Ace of Cups".into(),
            },
        ];
        assert_eq!(
            plain().card_list(&cards),
            "fool      Fool\nace-cups  Ace of Cups\n\n2 cards\n"
        );
    }

    #[test]
    fn test_menu_numbers_from_one() {
        assert_eq!(
            plain().menu("Select a suit:", &["Cups", "Back"]),
            "\nSelect a suit:\n  1. Cups\n  2. Back\n"
        );
        assert_eq!(plain().question("Search:"), "Search: ");
    }

    #[test]
    fn test_farewell_and_notice() {
        assert_eq!(plain().farewell(), "\nGoodbye!\n");
        assert_eq!(plain().notice("Heads up"), "Heads up\n");
    }

    #[test]
    fn test_color_output_carries_escape_codes() {
        let colored = Renderer::new(true).notice("Heads up");
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains("Heads up"));
    }
}

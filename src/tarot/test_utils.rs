use crate::catalog::Catalog;
use crate::error::{Result, TarotError};
use crate::lookup::{LookupError, Reading};
use crate::nav::{Terminal, View};
use std::collections::VecDeque;

pub fn builtin_catalog() -> Catalog {
    Catalog::builtin().expect("bundled catalog parses")
}

/// Two cards with gaps in their content:
/// `5-cups` has content only through `cups`, `6-swords` has none at all.
pub fn sparse_catalog() -> Catalog {
    Catalog::from_entries(vec![
        ("5-cups", vec!["cups", "5"]),
        ("6-swords", vec!["swords", "6"]),
        ("cups", vec!["Water and feeling."]),
        ("5", vec![]),
        ("swords", vec![]),
    ])
}

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum Say {
    /// Select the option with this exact label.
    Pick(&'static str),
    Type(&'static str),
}

/// A [`Terminal`] that replays a script and records everything shown.
///
/// Running out of script behaves like a closed input stream.
#[derive(Default)]
pub struct ScriptedTerminal {
    script: VecDeque<Say>,
    pub banners: usize,
    /// Selections of every breadcrumb shown, empty ones included.
    pub trails: Vec<Vec<String>>,
    pub notices: Vec<String>,
    pub headers: Vec<String>,
    pub readings: Vec<std::result::Result<Reading, LookupError>>,
    pub farewell: bool,
}

impl ScriptedTerminal {
    pub fn new(script: Vec<Say>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn show(&mut self, view: View<'_>) -> Result<()> {
        match view {
            View::Banner => self.banners += 1,
            View::Trail(trail) => self
                .trails
                .push(trail.selections().map(String::from).collect()),
            View::Notice(text) => self.notices.push(text.to_string()),
            View::CardHeader(name) => self.headers.push(name.to_string()),
            View::Reading(reading) => self.readings.push(reading.clone()),
            View::Farewell => self.farewell = true,
        }
        Ok(())
    }

    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize> {
        match self.script.pop_front() {
            Some(Say::Pick(label)) => Ok(options
                .iter()
                .position(|o| *o == label)
                .unwrap_or_else(|| panic!("{label:?} not offered at {message:?}: {options:?}"))),
            Some(Say::Type(text)) => panic!("typed {text:?} at select prompt {message:?}"),
            None => Err(TarotError::InputClosed),
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        match self.script.pop_front() {
            Some(Say::Type(text)) => Ok(text.to_string()),
            Some(Say::Pick(label)) => panic!("picked {label:?} at text prompt {message:?}"),
            None => Err(TarotError::InputClosed),
        }
    }
}

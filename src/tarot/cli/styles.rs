use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style the theme does not define.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style names used by the templates.
pub mod names {
    pub const BANNER: &str = "banner";
    pub const RULE: &str = "rule";
    pub const TRAIL: &str = "trail";
    pub const NOTICE: &str = "notice";
    pub const HEADER: &str = "header";
    pub const BODY: &str = "body";
    pub const ERROR: &str = "error";
    pub const FAREWELL: &str = "farewell";
    pub const PROMPT: &str = "prompt";
    pub const NUMBER: &str = "number";
    pub const KEY: &str = "key";
    pub const NAME: &str = "name";
    pub const COUNT: &str = "count";
}

/// Named `console` styles applied through the template `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text`, or returns it unchanged when color is off.
    /// Unknown names are flagged with [`MISSING_STYLE_INDICATOR`] either way.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static TAROT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::BANNER, Style::new().magenta().bold())
        .add(names::RULE, Style::new().magenta())
        .add(names::TRAIL, Style::new().cyan().dim())
        .add(names::NOTICE, Style::new().yellow())
        .add(names::HEADER, Style::new().bold())
        .add(names::BODY, Style::new())
        .add(names::ERROR, Style::new().red())
        .add(names::FAREWELL, Style::new().magenta())
        .add(names::PROMPT, Style::new().green().bold())
        .add(names::NUMBER, Style::new().yellow())
        .add(names::KEY, Style::new().color256(245))
        .add(names::NAME, Style::new())
        .add(names::COUNT, Style::new().italic())
});

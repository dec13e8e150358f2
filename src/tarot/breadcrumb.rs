//! Breadcrumb trail of menu choices since the last return to the main menu.
//!
//! Trails are values. [`Breadcrumb::with_step`] returns a longer copy and leaves the
//! original alone, so a screen that hands its trail to a child still holds the
//! shorter one when the user comes back.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub prompt: String,
    pub selection: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    trail: Vec<Crumb>,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(&self, prompt: impl Into<String>, selection: impl Into<String>) -> Self {
        let mut trail = self.trail.clone();
        trail.push(Crumb {
            prompt: prompt.into(),
            selection: selection.into(),
        });
        Self { trail }
    }

    pub fn steps(&self) -> &[Crumb] {
        &self.trail
    }

    pub fn selections(&self) -> impl Iterator<Item = &str> {
        self.trail.iter().map(|c| c.selection.as_str())
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_step_leaves_the_original_untouched() {
        let root = Breadcrumb::new();
        let one = root.with_step("Select an option:", "Browse by Suit");
        let two = one.with_step("Select a suit:", "Cups");

        assert!(root.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.steps()[0], one.steps()[0]);
        assert_eq!(
            two.selections().collect::<Vec<_>>(),
            vec!["Browse by Suit", "Cups"]
        );
    }

    #[test]
    fn test_siblings_do_not_share_steps() {
        let base = Breadcrumb::new().with_step("Select a type:", "Court Cards");
        let cups = base.with_step("Filter by suit?", "Cups");
        let wands = base.with_step("Filter by suit?", "Wands");

        assert_eq!(cups.steps()[1].selection, "Cups");
        assert_eq!(wands.steps()[1].selection, "Wands");
        assert_eq!(base.len(), 1);
    }
}

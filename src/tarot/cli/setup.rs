use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tarot", bin_name = "tarot", version)]
#[command(
    about = "Look up tarot card correspondences, or browse them interactively",
    long_about = None,
    after_help = "Run without a CARD to browse the deck menu by menu."
)]
pub struct Cli {
    /// Card to look up, e.g. "five of cups", "The Magus", "queen-wands"
    #[arg(value_name = "CARD", conflicts_with_all = ["list", "random"])]
    pub card: Vec<String>,

    /// Card data file (JSON)
    #[arg(short, long, value_name = "FILE", env = "TAROT_DATA", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// List every card
    #[arg(short, long, conflicts_with = "random", help_heading = "Options")]
    pub list: bool,

    /// Draw a random card
    #[arg(short, long, help_heading = "Options")]
    pub random: bool,

    /// Disable styled output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

impl Cli {
    /// The card words joined with spaces, if any were given.
    pub fn card_text(&self) -> Option<String> {
        if self.card.is_empty() {
            None
        } else {
            Some(self.card.join(" "))
        }
    }
}

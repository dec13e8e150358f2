//! # CLI Layer
//!
//! The only place that writes to stdout/stderr. Everything here is glue: parse the
//! arguments, load configuration and the catalog, call [`TarotApi`], render.
//!
//! ## Modes
//!
//! - `tarot <CARD>...`: one lookup. Both success and lookup failures (unknown card,
//!   card without content) print to stdout and exit 0.
//! - `tarot --list`: every card key with its display name.
//! - `tarot --random`: one random card with its reading.
//! - `tarot`: interactive navigation on stdin/stdout until Exit or end of input.
//!
//! Only infrastructure failures (unreadable data file, broken stdout) reach `main`,
//! which prints `Error: ...` and exits 1.

use super::render::Renderer;
use super::setup::Cli;
use super::terminal::LineTerminal;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use log::{debug, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::io;
use tarot::api::TarotApi;
use tarot::config::TarotConfig;
use tarot::error::Result;

struct AppContext {
    api: TarotApi,
    renderer: Renderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    if cli.list {
        handle_list(&ctx)
    } else if cli.random {
        handle_random(&ctx)
    } else if let Some(card) = cli.card_text() {
        handle_lookup(&ctx, &card)
    } else {
        handle_browse(&ctx)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(level, log_config, io::stderr());
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match ProjectDirs::from("com", "tarot", "tarot") {
        Some(dirs) => TarotConfig::load_or_default(dirs.config_dir()),
        None => {
            warn!("Could not determine config dir, using defaults");
            TarotConfig::default()
        }
    };

    let source = config.data_source(cli.data.as_deref());
    let api = TarotApi::open(&source)?;

    let use_color = !cli.no_color
        && config.color_enabled()
        && Term::stdout().features().colors_supported();
    debug!("Styled output: {}", use_color);

    Ok(AppContext {
        api,
        renderer: Renderer::new(use_color),
    })
}

fn handle_lookup(ctx: &AppContext, card: &str) -> Result<()> {
    let reading = ctx.api.lookup(card);
    print!("{}", ctx.renderer.reading(&reading));
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let cards = ctx.api.list_cards();
    print!("{}", ctx.renderer.card_list(&cards));
    Ok(())
}

fn handle_random(ctx: &AppContext) -> Result<()> {
    let mut rng = rand::rng();
    match ctx.api.random_card(&mut rng) {
        Some(draw) => {
            print!("{}", ctx.renderer.card_header(&draw.card.name));
            print!("{}", ctx.renderer.reading(&draw.reading));
        }
        None => print!("{}", ctx.renderer.notice("No cards to draw from.")),
    }
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut term = LineTerminal::new(stdin.lock(), io::stdout(), &ctx.renderer);
    ctx.api.navigator().run(&mut term)
}

#![allow(non_snake_case)]

mod app;
mod context;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use cardmorph_core::{load_deck, DeckFile, DEFAULT_MAX_CARDS};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::{set_showcase, Showcase};

/// Card Morph - expandable card showcase
#[derive(Parser, Debug)]
#[command(name = "cardmorph-desktop")]
#[command(about = "Card Morph - expandable cards with shared-element transitions")]
struct Args {
    /// Deck JSON file (heading, paragraph, CTA and cards)
    #[arg(short, long)]
    cards: Option<PathBuf>,

    /// Label on each card's open control
    #[arg(long)]
    cta_label: Option<String>,

    /// Maximum number of cards shown
    #[arg(short, long, default_value_t = DEFAULT_MAX_CARDS)]
    max_cards: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let deck = match &args.cards {
        Some(path) => load_deck(path)
            .with_context(|| format!("Failed to load deck from {}", path.display()))?,
        None => DeckFile::default(),
    };

    let showcase = Showcase::new(deck, args.cta_label, args.max_cards);
    tracing::info!(
        cards = showcase.cards.len(),
        heading = %showcase.heading,
        "Starting showcase"
    );
    set_showcase(showcase);

    let window_width = 1200.0;
    let window_height = 900.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Card Morph")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

/// Setup logging based on verbosity level; `RUST_LOG` wins when set
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["cardmorph-desktop"]);
        assert!(args.cards.is_none());
        assert_eq!(args.max_cards, 3);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags() {
        let args = Args::parse_from([
            "cardmorph-desktop",
            "--cards",
            "deck.json",
            "--cta-label",
            "View",
            "--max-cards",
            "2",
            "-vv",
        ]);
        assert_eq!(args.cards, Some(PathBuf::from("deck.json")));
        assert_eq!(args.cta_label.as_deref(), Some("View"));
        assert_eq!(args.max_cards, 2);
        assert_eq!(args.verbose, 2);
    }
}

//! Browse command - list, search and resume from an ident token

use crate::{
    NautilusError,
    browse::{BrowseSettings, Browser},
    config::NautilusConfig,
    db::DocumentStore,
    ident::{Ident, pad_id},
    retrieval::RetrievalEngine,
    rows::RowAssembler,
    ui::{TerminalSurface, TextRenderer},
};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

type Result<T> = std::result::Result<T, NautilusError>;

/// Options of the browse command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOptions {
    /// Token to resume from
    pub ident: Option<String>,
    /// Search text, used when no token is given
    pub search: Option<String>,
    /// Pages to load, at least one
    pub pages: usize,
    pub page_size: Option<usize>,
    /// Force natural order
    pub sequential: bool,
    pub seed: Option<u64>,
    /// Document to open once the listing is shown
    pub player: Option<String>,
    pub about: bool,
}

impl BrowseOptions {
    /// Token the session starts from
    #[must_use]
    pub fn initial_token(&self) -> Option<String> {
        match (&self.ident, &self.search) {
            (Some(token), _) => Some(token.clone()),
            (None, Some(text)) => Some(Ident::search(0, text.as_str()).encode()),
            (None, None) => None,
        }
    }

    /// Session settings from the configuration and overrides
    #[must_use]
    pub fn settings(&self, config: &NautilusConfig) -> BrowseSettings {
        let mut settings = BrowseSettings::from_config(config);
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        if self.sequential {
            settings.randomize = false;
        }
        settings
    }
}

/// Run a browse session, writing rows to `writer`
///
/// Returns the final ident token.
///
/// # Errors
/// Returns an error if the settings are invalid or the writer fails
pub fn run<S, W>(
    store: &S,
    config: &NautilusConfig,
    options: &BrowseOptions,
    writer: W,
    renderer: TextRenderer,
    quiet: bool,
) -> Result<String>
where
    S: DocumentStore + ?Sized,
    W: Write,
{
    let engine = RetrievalEngine::new(store, RowAssembler::from_config(config));
    let surface = TerminalSurface::new(writer, renderer, config.i18n.clone())
        .with_fragment(options.initial_token())
        .quiet(quiet);
    let rng = options
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut browser = Browser::new(engine, surface, rng, options.settings(config))?
        .with_about(config.title.clone(), config.about.clone());

    browser.start()?;
    for _ in 1..options.pages.max(1) {
        let state = browser.state();
        if state.is_exhausted() || !state.settings().infinite_scroll {
            break;
        }
        browser.reached_scroll_bottom()?;
    }

    if let Some(id) = &options.player {
        browser.open_media_player(&pad_id(id))?;
    }
    if options.about {
        browser.about()?;
    }

    Ok(browser.token())
}

/// Execute the browse command
///
/// # Errors
/// Returns an error if the session cannot be set up or output fails
pub fn execute<S: DocumentStore + ?Sized>(
    store: &S,
    config: &NautilusConfig,
    options: &BrowseOptions,
    quiet: bool,
) -> Result<()> {
    let token = run(
        store,
        config,
        options,
        io::stdout().lock(),
        TextRenderer::colored(),
        quiet,
    )?;

    if quiet {
        println!("{token}");
    } else {
        println!("\n{} {}", "ident:".dimmed(), token.bold());
    }
    Ok(())
}

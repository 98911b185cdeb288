//! Browse module - the browsing controller
//!
//! Keeps track of what the user is looking at (random sample, sequential
//! listing or search results, plus the document open in the player) and
//! turns user actions into retrievals.
//!
//! # Architecture
//!
//! - `state`: [`BrowseState`], a pure state machine from [`Event`]s to
//!   [`Effect`]s
//! - [`Browser`]: the driver running effects against a [`RetrievalEngine`],
//!   a [`Surface`] and a random source, feeding results back as events
//!
//! # Examples
//!
//! ```
//! use nautilus::Document;
//! use nautilus::browse::{BrowseSettings, Browser};
//! use nautilus::db::{Database, DocumentStore};
//! use nautilus::retrieval::RetrievalEngine;
//! use nautilus::rows::RowAssembler;
//! use nautilus::ui::mock::RecordingSurface;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let db = Database::open(dir.path().join("db"))?;
//! let documents: Vec<Document> = (0..25)
//!     .map(|i| Document::new(format!("{i:05}"), format!("Book {i}"), vec![format!("{i}.pdf")]))
//!     .collect();
//! db.bulk_load(&documents)?;
//!
//! let settings = BrowseSettings { page_size: 10, randomize: false, infinite_scroll: true };
//! let engine = RetrievalEngine::new(&db, RowAssembler::default());
//! let mut browser = Browser::new(engine, RecordingSurface::new(), StdRng::seed_from_u64(1), settings)?;
//!
//! browser.start()?;
//! browser.reached_scroll_bottom()?;
//! assert_eq!(browser.surface().rows.len(), 20);
//! assert_eq!(browser.token(), "list--10");
//! # Ok(())
//! # }
//! ```

mod error;
mod state;

pub use error::{BrowseError, Result};
pub use state::{BrowseSettings, BrowseState, Effect, Event};

use crate::db::DocumentStore;
use crate::retrieval::{PageSignal, RetrievalEngine, draw_random_ids};
use crate::ui::Surface;
use rand::Rng;
use std::collections::VecDeque;

/// Drives a [`BrowseState`] against a store and a surface
pub struct Browser<'a, S: DocumentStore + ?Sized, U: Surface, R: Rng> {
    state: BrowseState,
    engine: RetrievalEngine<'a, S>,
    surface: U,
    rng: R,
    title: String,
    about: String,
}

impl<'a, S: DocumentStore + ?Sized, U: Surface, R: Rng> Browser<'a, S, U, R> {
    /// Create a browser
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::InvalidSettings` if the settings are unusable.
    pub fn new(
        engine: RetrievalEngine<'a, S>,
        surface: U,
        rng: R,
        settings: BrowseSettings,
    ) -> Result<Self> {
        Ok(Self {
            state: BrowseState::new(settings)?,
            engine,
            surface,
            rng,
            title: String::new(),
            about: String::new(),
        })
    }

    /// Set the content of the about overlay
    #[must_use]
    pub fn with_about(mut self, title: impl Into<String>, about: impl Into<String>) -> Self {
        self.title = title.into();
        self.about = about.into();
        self
    }

    pub const fn state(&self) -> &BrowseState {
        &self.state
    }

    pub const fn surface(&self) -> &U {
        &self.surface
    }

    pub fn into_surface(self) -> U {
        self.surface
    }

    /// Current ident token
    #[must_use]
    pub fn token(&self) -> String {
        self.state.token()
    }

    /// Count the collection, restore the persisted ident or run the default
    /// listing
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn start(&mut self) -> Result<()> {
        let total = self.engine.count();
        let token = self.surface.read_fragment();
        self.dispatch(Event::Start { total, token })
    }

    /// Search titles and authors, starting at `cursor`
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn search(&mut self, text: &str, cursor: Option<usize>) -> Result<()> {
        self.dispatch(Event::SearchSubmitted {
            text: text.to_string(),
            cursor: cursor.unwrap_or(0),
        })
    }

    /// Search from the first result
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn submit_search(&mut self, text: &str) -> Result<()> {
        self.search(text, None)
    }

    /// Load the next page of the current listing
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn reached_scroll_bottom(&mut self) -> Result<()> {
        self.dispatch(Event::ScrollBottom)
    }

    /// Open the player on a document
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn open_media_player(&mut self, id: &str) -> Result<()> {
        self.dispatch(Event::OpenPlayer { id: id.to_string() })
    }

    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn close_player(&mut self) -> Result<()> {
        self.dispatch(Event::ClosePlayer)
    }

    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn about(&mut self) -> Result<()> {
        self.dispatch(Event::About)
    }

    /// Apply an event and run every effect it leads to, in order
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Ui` if the surface fails.
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        let mut queue: VecDeque<Effect> = self.state.apply(event).into();
        while let Some(effect) = queue.pop_front() {
            if let Some(next) = self.run(effect)? {
                queue.extend(self.state.apply(next));
            }
        }
        Ok(())
    }

    fn run(&mut self, effect: Effect) -> Result<Option<Event>> {
        match effect {
            Effect::DrawRandom { count } => {
                let ids = draw_random_ids(&mut self.rng, self.state.total(), count);
                return Ok(Some(Event::RandomDrawn { ids }));
            }
            Effect::Retrieve { request, append } => {
                let page = self.engine.fetch(&request);
                return Ok(Some(Event::PageLoaded { page, append }));
            }
            Effect::LoadPlayer { id } => {
                let event = match self.engine.player(&id) {
                    Some(document) => Event::PlayerLoaded { document },
                    None => Event::PlayerMissing { id },
                };
                return Ok(Some(event));
            }
            Effect::ClearRows => self.surface.clear_rows()?,
            Effect::DisplayRows { rows } => self.surface.display_rows(&rows)?,
            Effect::Signal(PageSignal::NoResults) => self.surface.no_result()?,
            Effect::Signal(PageSignal::NoMoreResults) => self.surface.no_more_results()?,
            Effect::Signal(signal) => tracing::debug!("page signal: {signal}"),
            Effect::PersistIdent(token) => self.surface.write_fragment(&token),
            Effect::ShowPlayer(document) => self.surface.show_player(&document)?,
            Effect::HidePlayer => self.surface.hide_player()?,
            Effect::ShowAbout => self.surface.show_about(&self.title, &self.about)?,
            Effect::RemoveInfiniteScroll => self.surface.remove_infinite_scroll()?,
            Effect::SetLoading(loading) => self.surface.set_loading(loading)?,
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "browse_tests.rs"]
mod browse_tests;

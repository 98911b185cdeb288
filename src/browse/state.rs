//! Browsing state machine
//!
//! [`BrowseState::apply`] takes one [`Event`] and returns the [`Effect`]s the
//! driver must carry out. It performs no I/O: retrievals, random draws and
//! player lookups are requested as effects, and their results come back as
//! events.
//!
//! # Workflow
//!
//! ```text
//! Start ──> Retrieve / DrawRandom ──> (driver) ──> PageLoaded / RandomDrawn
//!                 ▲                                       │
//!                 └──── ScrollBottom / SearchSubmitted ◄──┘
//! ```
//!
//! Only one retrieval is in flight at a time. While `loading` is set,
//! `ScrollBottom` and `SearchSubmitted` are dropped.

use super::error::{BrowseError, Result};
use crate::config::NautilusConfig;
use crate::ident::{Ident, Mode};
use crate::retrieval::{Page, PageSignal, Request};
use crate::rows::{PlayerDocument, RowDescriptor};

/// Session options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseSettings {
    /// Documents per page
    pub page_size: usize,
    /// Start on a random sample instead of the first page
    pub randomize: bool,
    /// Load further pages when the end of the listing is reached
    pub infinite_scroll: bool,
}

impl BrowseSettings {
    #[must_use]
    pub const fn from_config(config: &NautilusConfig) -> Self {
        Self {
            page_size: config.page_size,
            randomize: config.randomize,
            infinite_scroll: true,
        }
    }

    /// # Errors
    ///
    /// Returns `BrowseError::InvalidSettings` if the page size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BrowseError::InvalidSettings(
                "page size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self::from_config(&NautilusConfig::default())
    }
}

/// Something that happened to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The session starts on a collection of `total` documents
    Start { total: usize, token: Option<String> },
    SearchSubmitted { text: String, cursor: usize },
    /// The user reached the end of the listing
    ScrollBottom,
    /// A random sample requested by [`Effect::DrawRandom`]
    RandomDrawn { ids: Vec<String> },
    /// A page requested by [`Effect::Retrieve`]
    PageLoaded { page: Page, append: bool },
    OpenPlayer { id: String },
    /// A document requested by [`Effect::LoadPlayer`]
    PlayerLoaded { document: PlayerDocument },
    /// [`Effect::LoadPlayer`] found nothing
    PlayerMissing { id: String },
    ClosePlayer,
    About,
}

/// Work the driver has to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Draw `count` random ids, answer with [`Event::RandomDrawn`]
    DrawRandom { count: usize },
    /// Run a request, answer with [`Event::PageLoaded`]
    Retrieve { request: Request, append: bool },
    ClearRows,
    DisplayRows { rows: Vec<RowDescriptor> },
    Signal(PageSignal),
    PersistIdent(String),
    /// Look a document up, answer with [`Event::PlayerLoaded`] or [`Event::PlayerMissing`]
    LoadPlayer { id: String },
    ShowPlayer(PlayerDocument),
    HidePlayer,
    ShowAbout,
    RemoveInfiniteScroll,
    SetLoading(bool),
}

/// State of one browsing session
#[derive(Debug, Clone)]
pub struct BrowseState {
    ident: Ident,
    settings: BrowseSettings,
    next_cursor: usize,
    total: usize,
    loading: bool,
    exhausted: bool,
    started: bool,
    /// Whether the pending random draw extends the listing
    draw_appends: bool,
}

impl BrowseState {
    /// # Errors
    ///
    /// Returns `BrowseError::InvalidSettings` if the settings are unusable.
    pub fn new(settings: BrowseSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            ident: Ident::empty(),
            settings,
            next_cursor: 0,
            total: 0,
            loading: false,
            exhausted: false,
            started: false,
            draw_appends: false,
        })
    }

    #[must_use]
    pub const fn ident(&self) -> &Ident {
        &self.ident
    }

    /// Effective settings, after the small-collection guard
    #[must_use]
    pub const fn settings(&self) -> &BrowseSettings {
        &self.settings
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the current listing has no further pages
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Offset the next scroll will request, past the rows loaded so far
    #[must_use]
    pub const fn next_cursor(&self) -> usize {
        self.next_cursor
    }

    /// Current ident token
    #[must_use]
    pub fn token(&self) -> String {
        self.ident.encode()
    }

    /// Process one event
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Start { total, token } => self.start(total, token.as_deref()),
            Event::SearchSubmitted { text, cursor } => self.search(&text, cursor),
            Event::ScrollBottom => self.scroll_bottom(),
            Event::RandomDrawn { ids } => self.random_drawn(ids),
            Event::PageLoaded { page, append } => self.page_loaded(page, append),
            Event::OpenPlayer { id } => self.open_player(id),
            Event::PlayerLoaded { document } => self.player_loaded(document),
            Event::PlayerMissing { id } => self.player_missing(&id),
            Event::ClosePlayer => self.close_player(),
            Event::About => vec![Effect::ShowAbout],
        }
    }

    fn start(&mut self, total: usize, token: Option<&str>) -> Vec<Effect> {
        if self.started {
            tracing::debug!("session already started");
            return Vec::new();
        }
        self.started = true;
        self.total = total;

        let mut effects = Vec::new();
        if total <= self.settings.page_size {
            tracing::debug!("{total} documents fit on one page, disabling scroll and random");
            self.settings.randomize = false;
            self.settings.infinite_scroll = false;
            if total > 0 {
                self.settings.page_size = total;
            }
            effects.push(Effect::RemoveInfiniteScroll);
        }

        let restored = token.map(Ident::decode).unwrap_or_default();
        let modal_id = restored.modal_id.clone();
        let page_size = self.settings.page_size;

        match restored.mode {
            Some(Mode::Random) if !restored.document_ids.is_empty() => {
                tracing::debug!("restoring random sample {}", restored.encode());
                let ids = restored.document_ids.clone();
                self.ident = restored;
                effects.extend(self.retrieve(Request::Documents { ids }, false));
            }
            Some(Mode::Sequential) => {
                let cursor = restored.cursor;
                self.ident = restored;
                self.next_cursor = cursor;
                effects.extend(self.retrieve(
                    Request::Sequential {
                        cursor,
                        limit: page_size,
                    },
                    false,
                ));
            }
            Some(Mode::Search) => {
                let (cursor, text) = (restored.cursor, restored.text.clone());
                self.ident = restored;
                self.next_cursor = cursor;
                effects.extend(self.retrieve(
                    Request::Search {
                        text,
                        cursor,
                        limit: page_size,
                    },
                    false,
                ));
            }
            Some(Mode::Random) | None => {
                effects.extend(self.default_retrieval(modal_id.clone()));
            }
        }

        if let Some(id) = modal_id {
            effects.push(Effect::LoadPlayer { id });
        }
        effects
    }

    fn default_retrieval(&mut self, modal_id: Option<String>) -> Vec<Effect> {
        if self.settings.randomize {
            self.ident = Ident::random(Vec::new());
            self.ident.modal_id = modal_id;
            self.draw(false)
        } else {
            self.ident = Ident::list(0);
            self.ident.modal_id = modal_id;
            self.next_cursor = 0;
            self.retrieve(
                Request::Sequential {
                    cursor: 0,
                    limit: self.settings.page_size,
                },
                false,
            )
        }
    }

    fn search(&mut self, text: &str, cursor: usize) -> Vec<Effect> {
        if !self.started || self.loading {
            tracing::debug!("search {text:?} ignored");
            return Vec::new();
        }
        let modal_id = self.ident.modal_id.take();
        self.ident = Ident::search(cursor, text);
        self.ident.modal_id = modal_id;
        self.next_cursor = cursor;
        self.retrieve(
            Request::Search {
                text: self.ident.text.clone(),
                cursor,
                limit: self.settings.page_size,
            },
            false,
        )
    }

    fn scroll_bottom(&mut self) -> Vec<Effect> {
        if !self.started || self.loading || !self.settings.infinite_scroll || self.exhausted {
            return Vec::new();
        }
        let limit = self.settings.page_size;
        match self.ident.mode {
            Some(Mode::Random) => self.draw(true),
            Some(Mode::Sequential) => {
                let cursor = self.advance();
                self.retrieve(Request::Sequential { cursor, limit }, true)
            }
            Some(Mode::Search) => {
                let cursor = self.advance();
                let text = self.ident.text.clone();
                self.retrieve(Request::Search { text, cursor, limit }, true)
            }
            None => Vec::new(),
        }
    }

    /// Point the ident at the next page and return its offset
    fn advance(&mut self) -> usize {
        let cursor = self.next_cursor;
        self.ident.cursor = cursor;
        cursor
    }

    fn draw(&mut self, append: bool) -> Vec<Effect> {
        self.loading = true;
        self.draw_appends = append;
        vec![
            Effect::SetLoading(true),
            Effect::DrawRandom {
                count: self.settings.page_size,
            },
        ]
    }

    fn random_drawn(&mut self, ids: Vec<String>) -> Vec<Effect> {
        if self.ident.mode != Some(Mode::Random) {
            tracing::debug!("random sample dropped, mode is {:?}", self.ident.mode);
            return Vec::new();
        }
        self.ident.document_ids.clone_from(&ids);
        self.retrieve(Request::Documents { ids }, self.draw_appends)
    }

    fn retrieve(&mut self, request: Request, append: bool) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(3);
        if !self.loading {
            self.loading = true;
            effects.push(Effect::SetLoading(true));
        }
        if !append {
            self.exhausted = false;
        }
        effects.push(Effect::PersistIdent(self.ident.encode()));
        effects.push(Effect::Retrieve { request, append });
        effects
    }

    fn page_loaded(&mut self, page: Page, append: bool) -> Vec<Effect> {
        if !self.loading {
            tracing::debug!("unexpected page dropped");
            return Vec::new();
        }
        self.loading = false;

        // Advance by the rows actually returned
        if let Request::Sequential { cursor, .. } | Request::Search { cursor, .. } = &page.request {
            self.next_cursor = cursor.saturating_add(page.returned);
        }

        let mut effects = Vec::with_capacity(4);
        if !append {
            effects.push(Effect::ClearRows);
        }
        effects.push(Effect::DisplayRows { rows: page.rows });
        match page.signal {
            PageSignal::More => {}
            signal @ (PageSignal::NoMoreResults | PageSignal::NoResults) => {
                self.exhausted = true;
                effects.push(Effect::Signal(signal));
            }
            PageSignal::Failed => effects.push(Effect::Signal(PageSignal::Failed)),
        }
        effects.push(Effect::SetLoading(false));
        effects
    }

    fn open_player(&mut self, id: String) -> Vec<Effect> {
        self.ident.modal_id = Some(id.clone());
        vec![
            Effect::PersistIdent(self.ident.encode()),
            Effect::LoadPlayer { id },
        ]
    }

    fn player_loaded(&mut self, document: PlayerDocument) -> Vec<Effect> {
        if self.ident.modal_id.as_deref() != Some(document.id.as_str()) {
            tracing::debug!("player for {} no longer wanted", document.id);
            return Vec::new();
        }
        vec![Effect::ShowPlayer(document)]
    }

    fn player_missing(&mut self, id: &str) -> Vec<Effect> {
        if self.ident.modal_id.as_deref() != Some(id) {
            return Vec::new();
        }
        self.close_player()
    }

    fn close_player(&mut self) -> Vec<Effect> {
        self.ident.modal_id = None;
        vec![Effect::PersistIdent(self.ident.encode()), Effect::HidePlayer]
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

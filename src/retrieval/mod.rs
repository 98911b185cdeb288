//! Retrieval engine
//!
//! Fetches pages of rows from a [`DocumentStore`] in one of three ways:
//! a sequential page of the collection, an explicit list of ids (the random
//! sample), or a title/author search. Each page carries a [`PageSignal`]
//! telling the controller whether more results can follow.
//!
//! Store failures never escape: they go to the configured [`ErrorReporter`]
//! and the call yields an empty page flagged [`PageSignal::Failed`].

use crate::db::types::document_id;
use crate::db::{DbError, DocumentField, DocumentFilter, DocumentStore};
use crate::rows::{PlayerDocument, RowAssembler, RowDescriptor};
use rand::Rng;
use std::fmt;

/// Fields every listing query projects
const LISTING_FIELDS: [DocumentField; 5] = [
    DocumentField::Id,
    DocumentField::Title,
    DocumentField::Description,
    DocumentField::Author,
    DocumentField::Files,
];

/// A page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `limit` documents in natural order, starting at `cursor`
    Sequential { cursor: usize, limit: usize },
    /// Exactly these documents, in this order
    Documents { ids: Vec<String> },
    /// `limit` documents whose title or author matches `text`, from `cursor`
    Search {
        text: String,
        cursor: usize,
        limit: usize,
    },
}

impl Request {
    /// Offset of the requested page, `0` for id lists
    #[must_use]
    pub const fn cursor(&self) -> usize {
        match self {
            Self::Sequential { cursor, .. } | Self::Search { cursor, .. } => *cursor,
            Self::Documents { .. } => 0,
        }
    }

    /// Maximum number of rows the request can yield
    #[must_use]
    pub fn limit(&self) -> usize {
        match self {
            Self::Sequential { limit, .. } | Self::Search { limit, .. } => *limit,
            Self::Documents { ids } => ids.len(),
        }
    }
}

/// What a page says about the rest of the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSignal {
    /// Further pages may exist
    More,
    /// This page is the last one
    NoMoreResults,
    /// A search matched nothing at all
    NoResults,
    /// The store failed; the page is empty
    Failed,
}

impl PageSignal {
    /// Whether the listing cannot grow past this page
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::NoMoreResults | Self::NoResults)
    }
}

impl fmt::Display for PageSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::More => "more",
            Self::NoMoreResults => "no more results",
            Self::NoResults => "no results",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Rows returned for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub request: Request,
    pub rows: Vec<RowDescriptor>,
    /// Documents the store returned for the request
    pub returned: usize,
    pub signal: PageSignal,
}

impl Page {
    fn failed(request: Request) -> Self {
        Self {
            request,
            rows: Vec::new(),
            returned: 0,
            signal: PageSignal::Failed,
        }
    }
}

/// Sink for store failures
pub trait ErrorReporter {
    /// Report a failure that happened while doing `context`
    fn report(&self, context: &str, error: &DbError);
}

/// Reports failures through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, context: &str, error: &DbError) {
        tracing::error!("{context}: {error}");
    }
}

/// Draw `count` ids uniformly from `[0, total)`, with replacement
///
/// Duplicates are kept. Nothing is drawn from an empty collection.
///
/// # Examples
///
/// ```
/// use nautilus::retrieval::draw_random_ids;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let ids = draw_random_ids(&mut rng, 3, 10);
/// assert_eq!(ids.len(), 10);
/// assert!(ids.iter().all(|id| ["00000", "00001", "00002"].contains(&id.as_str())));
/// ```
pub fn draw_random_ids<R: Rng + ?Sized>(rng: &mut R, total: usize, count: usize) -> Vec<String> {
    if total == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| document_id(rng.gen_range(0..total)))
        .collect()
}

/// Runs page requests against a store
pub struct RetrievalEngine<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
    assembler: RowAssembler,
    reporter: Box<dyn ErrorReporter + 'a>,
}

impl<'a, S: DocumentStore + ?Sized> RetrievalEngine<'a, S> {
    /// Create an engine reporting failures through `tracing`
    pub fn new(store: &'a S, assembler: RowAssembler) -> Self {
        Self {
            store,
            assembler,
            reporter: Box::new(TracingReporter),
        }
    }

    /// Replace the error reporter
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl ErrorReporter + 'a) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub const fn assembler(&self) -> &RowAssembler {
        &self.assembler
    }

    /// Run any request
    pub fn fetch(&self, request: &Request) -> Page {
        match request {
            Request::Sequential { cursor, limit } => self.sequential(*cursor, *limit),
            Request::Documents { ids } => self.documents(ids),
            Request::Search {
                text,
                cursor,
                limit,
            } => self.search(text, *cursor, *limit),
        }
    }

    /// Page of the collection in natural order
    pub fn sequential(&self, cursor: usize, limit: usize) -> Page {
        let request = Request::Sequential { cursor, limit };
        let documents =
            match self
                .store
                .query(&DocumentFilter::All, &LISTING_FIELDS, cursor, limit)
            {
                Ok(documents) => documents,
                Err(e) => {
                    self.reporter.report("sequential listing failed", &e);
                    return Page::failed(request);
                }
            };

        let returned = documents.len();
        let signal = if returned < limit {
            PageSignal::NoMoreResults
        } else {
            PageSignal::More
        };
        tracing::debug!("list from {cursor}: {returned} documents ({signal})");

        Page {
            request,
            rows: documents.iter().map(|d| self.assembler.assemble(d)).collect(),
            returned,
            signal,
        }
    }

    /// The given documents in the given order
    ///
    /// Ids without a document are dropped from the page.
    pub fn documents(&self, ids: &[String]) -> Page {
        let request = Request::Documents { ids: ids.to_vec() };
        let found = match self.store.get_many(ids) {
            Ok(found) => found,
            Err(e) => {
                self.reporter.report("document lookup failed", &e);
                return Page::failed(request);
            }
        };

        let rows: Vec<RowDescriptor> = found
            .into_iter()
            .filter_map(|(id, document)| {
                if document.is_none() {
                    tracing::warn!("document {id} not found");
                }
                document
            })
            .map(|d| self.assembler.assemble(&d))
            .collect();

        Page {
            request,
            returned: rows.len(),
            rows,
            signal: PageSignal::More,
        }
    }

    /// Documents whose title or author matches `text`, case-insensitively
    pub fn search(&self, text: &str, cursor: usize, limit: usize) -> Page {
        let text = text.trim();
        let request = Request::Search {
            text: text.to_string(),
            cursor,
            limit,
        };
        let filter = DocumentFilter::title_or_author(text);
        let documents = match self.store.query(&filter, &LISTING_FIELDS, cursor, limit) {
            Ok(documents) => documents,
            Err(e) => {
                self.reporter.report("search failed", &e);
                return Page::failed(request);
            }
        };

        let returned = documents.len();
        let signal = if returned == 0 && cursor == 0 {
            PageSignal::NoResults
        } else if returned < limit {
            PageSignal::NoMoreResults
        } else {
            PageSignal::More
        };
        tracing::debug!("search {text:?} from {cursor}: {returned} documents ({signal})");

        Page {
            request,
            rows: documents.iter().map(|d| self.assembler.assemble(d)).collect(),
            returned,
            signal,
        }
    }

    /// Number of documents in the collection, `0` if the store fails
    pub fn count(&self) -> usize {
        self.store.count_all().unwrap_or_else(|e| {
            self.reporter.report("count failed", &e);
            0
        })
    }

    /// Player view of a document, `None` if it is missing or the store fails
    pub fn player(&self, id: &str) -> Option<PlayerDocument> {
        match self.store.get(id) {
            Ok(Some(document)) => Some(self.assembler.player_document(&document)),
            Ok(None) => {
                tracing::warn!("document {id} not found");
                None
            }
            Err(e) => {
                self.reporter.report("player lookup failed", &e);
                None
            }
        }
    }
}

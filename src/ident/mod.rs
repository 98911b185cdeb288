//! Ident tokens: the browsing position as a URL fragment
//!
//! An ident captures everything needed to rebuild what the user was looking
//! at: the listing mode, where in the listing they were, the search text, the
//! exact random sample, and the document open in the player.
//!
//! # Format
//!
//! ```text
//! <kind>-<modalId>-<options>
//!
//! random-{modalId}-{id}.{id}.{id}
//! search-{modalId}-{cursor}_{text}
//! list-{modalId}-{cursor}
//! ```
//!
//! Decoding is lenient: a token that cannot be understood yields the empty
//! ident, which callers treat as "nothing to restore".
//!
//! # Examples
//!
//! ```
//! use nautilus::ident::{Ident, Mode};
//!
//! let ident = Ident::search(20, "jules verne").with_modal("00042");
//! let token = ident.encode();
//! assert_eq!(token, "search-00042-20_jules verne");
//!
//! let restored = Ident::decode(&token);
//! assert_eq!(restored.mode, Some(Mode::Search));
//! assert_eq!(restored, ident);
//! ```

use crate::db::types::{ID_WIDTH, document_id};
use std::fmt;

/// Listing mode of a browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A random sample of documents
    Random,
    /// The collection in natural order
    Sequential,
    /// Documents matching a search text
    Search,
}

impl Mode {
    /// Kind name used in tokens
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sequential => "list",
            Self::Search => "search",
        }
    }

    /// Parse a token kind name
    #[must_use]
    pub fn from_token(kind: &str) -> Option<Self> {
        match kind {
            "random" => Some(Self::Random),
            "list" => Some(Self::Sequential),
            "search" => Some(Self::Search),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Persisted browsing state
///
/// `mode == None` is the empty ident: nothing to restore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ident {
    pub mode: Option<Mode>,
    /// Document currently open in the player
    pub modal_id: Option<String>,
    /// Offset of the page last requested (list and search only)
    pub cursor: usize,
    /// Search text (search only)
    pub text: String,
    /// Last random sample, in draw order (random only)
    pub document_ids: Vec<String>,
}

impl Ident {
    /// The empty ident
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Random listing of exactly these ids
    #[must_use]
    pub fn random(document_ids: Vec<String>) -> Self {
        Self {
            mode: Some(Mode::Random),
            document_ids,
            ..Self::default()
        }
    }

    /// Sequential listing at `cursor`
    #[must_use]
    pub fn list(cursor: usize) -> Self {
        Self {
            mode: Some(Mode::Sequential),
            cursor,
            ..Self::default()
        }
    }

    /// Search listing for `text` at `cursor`
    #[must_use]
    pub fn search(cursor: usize, text: impl Into<String>) -> Self {
        Self {
            mode: Some(Mode::Search),
            cursor,
            text: text.into().trim().to_string(),
            ..Self::default()
        }
    }

    /// Same ident with a document open in the player
    #[must_use]
    pub fn with_modal(mut self, id: impl Into<String>) -> Self {
        self.modal_id = Some(id.into());
        self
    }

    /// Same ident with the player closed
    #[must_use]
    pub fn without_modal(mut self) -> Self {
        self.modal_id = None;
        self
    }

    /// Whether the ident describes a listing that can be replayed
    #[must_use]
    pub const fn is_restorable(&self) -> bool {
        self.mode.is_some()
    }

    /// Serialize into a token
    ///
    /// Never fails; the empty ident encodes as `--`.
    #[must_use]
    pub fn encode(&self) -> String {
        let kind = self.mode.map_or("", Mode::as_token);
        let modal = self.modal_id.as_deref().unwrap_or("");
        let options = match self.mode {
            Some(Mode::Random) => self.document_ids.join("."),
            Some(Mode::Search) => format!("{}_{}", self.cursor, self.text.trim()),
            Some(Mode::Sequential) => self.cursor.to_string(),
            None => String::new(),
        };
        format!("{kind}-{modal}-{options}")
    }

    /// Parse a token
    ///
    /// Unknown kinds and non-numeric cursors yield the empty ident.
    #[must_use]
    pub fn decode(token: &str) -> Self {
        Self::try_decode(token).unwrap_or_else(|| {
            tracing::debug!("invalid ident {token:?}");
            Self::empty()
        })
    }

    fn try_decode(token: &str) -> Option<Self> {
        let mut parts = token.splitn(3, '-');
        let kind = parts.next().unwrap_or("");
        let modal_id = parts
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let options = parts.next().unwrap_or("");

        let mut ident = match Mode::from_token(kind)? {
            Mode::Random => Self::random(parse_document_ids(options)),
            Mode::Search => {
                let (cursor, text) = match options.split_once('_') {
                    Some((cursor, text)) => (parse_cursor(cursor)?, text),
                    None => (0, options),
                };
                Self::search(cursor, text)
            }
            Mode::Sequential => Self::list(parse_cursor(options)?),
        };
        ident.modal_id = modal_id;
        Some(ident)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Empty means zero; anything else must be a plain decimal
fn parse_cursor(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse().ok()
}

/// Numeric ids only, re-padded to the stored width
fn parse_document_ids(raw: &str) -> Vec<String> {
    raw.trim()
        .split('.')
        .filter_map(|sid| sid.trim().parse::<usize>().ok())
        .map(document_id)
        .collect()
}

/// Pad a numeric id to the stored width, leaving other ids untouched
#[must_use]
pub fn pad_id(id: &str) -> String {
    if id.len() < ID_WIDTH && !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        format!("{id:0>width$}", width = ID_WIDTH)
    } else {
        id.to_string()
    }
}

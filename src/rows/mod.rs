//! Row assembly
//!
//! Turns documents into the data the renderer works from: one
//! [`RowDescriptor`] per listed document, and a [`PlayerDocument`] when a
//! document is opened in the media player. No markup is produced here.
//!
//! # Targets
//!
//! A row either links straight to its single file, or opens the player.
//! It opens the player (a *popup* row) when its document has several
//! attachments, or when its only attachment is audio or video.

use crate::Document;
use crate::classify::{Classifier, FileDetails};
use crate::config::NautilusConfig;
use serde::Serialize;

/// Where activating a row leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum RowTarget {
    /// Percent-encoded path of the single attachment
    File(String),
    /// Open the player for this document id
    Player(String),
}

/// Render-ready projection of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDescriptor {
    pub id: String,
    pub title: String,
    /// `None` when authors are not displayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// `None` when descriptions are not displayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target: RowTarget,
    pub popup: bool,
    pub multiple: bool,
    /// Classification of the first attachment
    #[serde(flatten)]
    pub details: FileDetails,
}

impl RowDescriptor {
    #[must_use]
    pub const fn is_audio(&self) -> bool {
        self.details.is_audio
    }

    #[must_use]
    pub const fn is_video(&self) -> bool {
        self.details.is_video
    }

    #[must_use]
    pub const fn is_plain_file(&self) -> bool {
        self.details.is_file
    }

    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.multiple
    }
}

/// One attachment of a document opened in the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerItem {
    /// Attachment name as stored
    pub name: String,
    /// Percent-encoded file path
    pub path: String,
    /// 1-based track number, only for documents with several attachments
    pub index: Option<usize>,
    #[serde(flatten)]
    pub details: FileDetails,
}

/// A document as shown in the player, attachments in stored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerDocument {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub multiple: bool,
    pub items: Vec<PlayerItem>,
}

/// Builds rows and player documents from store records
#[derive(Debug, Clone)]
pub struct RowAssembler {
    classifier: Classifier,
    files_prefix: String,
    show_author: bool,
    show_description: bool,
}

impl RowAssembler {
    #[must_use]
    pub fn new(classifier: Classifier, files_prefix: impl Into<String>) -> Self {
        Self {
            classifier,
            files_prefix: files_prefix.into(),
            show_author: true,
            show_description: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &NautilusConfig) -> Self {
        Self::new(
            Classifier::from_config(&config.media),
            config.files_prefix.clone(),
        )
        .show_author(config.show_author)
        .show_description(config.show_description)
    }

    #[must_use]
    pub const fn show_author(mut self, show: bool) -> Self {
        self.show_author = show;
        self
    }

    #[must_use]
    pub const fn show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    #[must_use]
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Path of an attachment, with its last segment percent-encoded
    #[must_use]
    pub fn file_path(&self, name: &str) -> String {
        encode_path(&format!("{}{name}", self.files_prefix))
    }

    /// Build the row of a document
    ///
    /// The first attachment decides the icon and media flags.
    #[must_use]
    pub fn assemble(&self, document: &Document) -> RowDescriptor {
        let first = document.files.first().map_or("", String::as_str);
        self.assemble_with(document, self.classifier.classify(first))
    }

    /// Build the row of a document from an existing classification
    #[must_use]
    pub fn assemble_with(&self, document: &Document, details: FileDetails) -> RowDescriptor {
        let multiple = document.is_multiple();
        let popup = details.is_audio || details.is_video || multiple;
        let target = if popup {
            RowTarget::Player(document.id.clone())
        } else {
            let first = document.files.first().map_or("", String::as_str);
            RowTarget::File(self.file_path(first))
        };

        RowDescriptor {
            id: document.id.clone(),
            title: document.title.clone(),
            author: self.show_author.then(|| document.author.clone()),
            description: self.show_description.then(|| document.description.clone()),
            target,
            popup,
            multiple,
            details,
        }
    }

    /// Classify every attachment of a document for the player
    #[must_use]
    pub fn player_document(&self, document: &Document) -> PlayerDocument {
        let multiple = document.is_multiple();
        let items = document
            .files
            .iter()
            .enumerate()
            .map(|(i, name)| PlayerItem {
                name: name.clone(),
                path: self.file_path(name),
                index: multiple.then_some(i + 1),
                details: self.classifier.classify(name),
            })
            .collect();

        PlayerDocument {
            id: document.id.clone(),
            title: document.title.clone(),
            author: document.author.clone(),
            description: document.description.clone(),
            multiple,
            items,
        }
    }
}

impl Default for RowAssembler {
    fn default() -> Self {
        Self::from_config(&NautilusConfig::default())
    }
}

/// Percent-encode the last segment of a path, keeping separators verbatim
#[must_use]
pub fn encode_path(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((dir, name)) => format!("{dir}/{}", urlencoding::encode(name)),
        None => urlencoding::encode(path).into_owned(),
    }
}

//! Attachment classification
//!
//! Decides from a filename alone whether an attachment is audio, video or a
//! plain document, and derives the MIME string and icon the renderer needs.
//! The extension sets come from [`MediaConfig`].
//!
//! ```
//! use nautilus::classify::{Classifier, MediaKind};
//! use nautilus::config::MediaConfig;
//!
//! let classifier = Classifier::from_config(&MediaConfig::default());
//! let details = classifier.classify("chapter01.ogg");
//! assert_eq!(details.kind, MediaKind::Audio);
//! assert_eq!(details.mime, "audio/ogg");
//! ```

use crate::config::MediaConfig;
use serde::Serialize;
use std::collections::HashSet;

/// What an attachment is, as far as playback goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
    Document,
}

/// Classification of a single filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDetails {
    /// Text after the last `.`, as written in the filename
    pub extension: String,
    pub kind: MediaKind,
    pub mime: String,
    pub is_audio: bool,
    pub is_video: bool,
    pub is_file: bool,
    /// Icon reference for the extension
    pub icon: String,
}

/// Filename classifier over configured audio and video extension sets
#[derive(Debug, Clone)]
pub struct Classifier {
    audio: HashSet<String>,
    video: HashSet<String>,
    case_insensitive: bool,
    icon_prefix: String,
}

impl Classifier {
    /// Build a classifier from explicit extension sets
    pub fn new<A, V>(audio: A, video: V, case_insensitive: bool) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let normalize = |ext: String| {
            if case_insensitive {
                ext.to_lowercase()
            } else {
                ext
            }
        };
        Self {
            audio: audio.into_iter().map(Into::into).map(normalize).collect(),
            video: video.into_iter().map(Into::into).map(normalize).collect(),
            case_insensitive,
            icon_prefix: String::new(),
        }
    }

    /// Build a classifier from the media configuration
    #[must_use]
    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(
            config.audio_extensions.iter().cloned(),
            config.video_extensions.iter().cloned(),
            config.case_insensitive_extensions,
        )
        .with_icon_prefix(config.icon_prefix.clone())
    }

    /// Set the prefix used to build icon references
    #[must_use]
    pub fn with_icon_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.icon_prefix = prefix.into();
        self
    }

    /// Extension of a filename: the text after its last `.`, or `""`
    #[must_use]
    pub fn extension_of(filename: &str) -> &str {
        filename.rsplit_once('.').map_or("", |(_, ext)| ext)
    }

    /// Classify a filename
    #[must_use]
    pub fn classify(&self, filename: &str) -> FileDetails {
        let extension = Self::extension_of(filename);
        let key = if self.case_insensitive {
            extension.to_lowercase()
        } else {
            extension.to_string()
        };

        let is_audio = self.audio.contains(&key);
        let is_video = !is_audio && self.video.contains(&key);
        let (kind, mime) = if is_audio {
            (MediaKind::Audio, format!("audio/{key}"))
        } else if is_video {
            (MediaKind::Video, format!("video/{key}"))
        } else {
            (MediaKind::Document, extension.to_string())
        };

        FileDetails {
            extension: extension.to_string(),
            kind,
            mime,
            is_audio,
            is_video,
            is_file: !is_audio && !is_video,
            icon: format!("{}{key}.svg", self.icon_prefix),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&MediaConfig::default())
    }
}

//! Media classification settings

use serde::{Deserialize, Serialize};

/// Extension sets used to tell audio and video attachments from plain files
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    /// Extensions played as audio
    #[serde(default = "default_audio_extensions")]
    pub audio_extensions: Vec<String>,

    /// Extensions played as video
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,

    /// Match extensions regardless of case (`track.OGG` is audio)
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive_extensions: bool,

    /// Prefix of the per-extension icon files
    #[serde(default = "default_icon_prefix")]
    pub icon_prefix: String,
}

fn default_audio_extensions() -> Vec<String> {
    ["ogg", "mp3", "aif", "mpa", "wav", "wma"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_video_extensions() -> Vec<String> {
    [
        "webm", "ogv", "mp4", "mpg", "mpeg", "avi", "mkv", "mov", "wmv", "m4v", "h264", "3gp",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

const fn default_case_insensitive() -> bool {
    true
}

fn default_icon_prefix() -> String {
    "vendors/ext-icons/".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            audio_extensions: default_audio_extensions(),
            video_extensions: default_video_extensions(),
            case_insensitive_extensions: default_case_insensitive(),
            icon_prefix: default_icon_prefix(),
        }
    }
}

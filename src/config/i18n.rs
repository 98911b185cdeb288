//! Interface labels handed to the renderer

use serde::{Deserialize, Serialize};

/// Labels used when rendering rows and the player
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct I18n {
    pub loading: String,
    pub no_result: String,
    pub close: String,
    pub about: String,
    /// Prefix of a numbered track ("Track 2")
    pub track: String,
    /// Label of the only track of a single-file document
    pub single_track: String,
    pub download: String,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            loading: "Loading…".to_string(),
            no_result: "No result for this search request.".to_string(),
            close: "Close".to_string(),
            about: "About this content".to_string(),
            track: "Track".to_string(),
            single_track: "Single track".to_string(),
            download: "download".to_string(),
        }
    }
}

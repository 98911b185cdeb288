//! Recording surface for testing
//!
//! Keeps every call the controller makes, plus the resulting listing, player
//! and fragment, so tests can assert on both the sequence and the outcome.

use super::error::Result;
use super::traits::Surface;
use crate::rows::{PlayerDocument, RowDescriptor};

/// One call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    WriteFragment(String),
    ClearRows,
    /// Ids of the displayed rows
    DisplayRows(Vec<String>),
    /// Id of the document shown
    ShowPlayer(String),
    HidePlayer,
    ShowAbout,
    NoResult,
    NoMoreResults,
    SetLoading(bool),
    RemoveInfiniteScroll,
}

/// Surface that records calls instead of displaying anything
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    /// Rows currently listed
    pub rows: Vec<RowDescriptor>,
    /// Document currently in the player
    pub player: Option<PlayerDocument>,
    pub fragment: Option<String>,
    pub loading: bool,
    pub infinite_scroll: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            infinite_scroll: true,
            ..Self::default()
        }
    }

    /// Start with a persisted token
    #[must_use]
    pub fn with_fragment(token: impl Into<String>) -> Self {
        Self {
            fragment: Some(token.into()),
            ..Self::new()
        }
    }

    /// Ids of the rows currently listed
    #[must_use]
    pub fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }

    /// How many times `call` was received
    #[must_use]
    pub fn count(&self, call: &SurfaceCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Every token written, in order
    #[must_use]
    pub fn fragments_written(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::WriteFragment(token) => Some(token.clone()),
                _ => None,
            })
            .collect()
    }

    /// Batches of row ids displayed, in order
    #[must_use]
    pub fn displayed_batches(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::DisplayRows(ids) => Some(ids.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn read_fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn write_fragment(&mut self, token: &str) {
        self.fragment = Some(token.to_string());
        self.calls.push(SurfaceCall::WriteFragment(token.to_string()));
    }

    fn clear_rows(&mut self) -> Result<()> {
        self.rows.clear();
        self.calls.push(SurfaceCall::ClearRows);
        Ok(())
    }

    fn display_rows(&mut self, rows: &[RowDescriptor]) -> Result<()> {
        self.rows.extend_from_slice(rows);
        self.calls.push(SurfaceCall::DisplayRows(
            rows.iter().map(|r| r.id.clone()).collect(),
        ));
        Ok(())
    }

    fn show_player(&mut self, player: &PlayerDocument) -> Result<()> {
        self.player = Some(player.clone());
        self.calls.push(SurfaceCall::ShowPlayer(player.id.clone()));
        Ok(())
    }

    fn hide_player(&mut self) -> Result<()> {
        self.player = None;
        self.calls.push(SurfaceCall::HidePlayer);
        Ok(())
    }

    fn show_about(&mut self, _title: &str, _about: &str) -> Result<()> {
        self.calls.push(SurfaceCall::ShowAbout);
        Ok(())
    }

    fn no_result(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::NoResult);
        Ok(())
    }

    fn no_more_results(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::NoMoreResults);
        Ok(())
    }

    fn set_loading(&mut self, loading: bool) -> Result<()> {
        self.loading = loading;
        self.calls.push(SurfaceCall::SetLoading(loading));
        Ok(())
    }

    fn remove_infinite_scroll(&mut self) -> Result<()> {
        self.infinite_scroll = false;
        self.calls.push(SurfaceCall::RemoveInfiniteScroll);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_fragments() {
        let mut surface = RecordingSurface::with_fragment("list--0");
        assert_eq!(surface.read_fragment().as_deref(), Some("list--0"));

        surface.write_fragment("list--10");
        surface.write_fragment("list--20");

        assert_eq!(surface.fragments_written(), vec!["list--10", "list--20"]);
        assert_eq!(surface.fragment.as_deref(), Some("list--20"));
    }

    #[test]
    fn test_clear_rows_empties_listing() {
        let mut surface = RecordingSurface::new();
        surface.display_rows(&[]).unwrap();
        surface.clear_rows().unwrap();

        assert!(surface.rows.is_empty());
        assert_eq!(surface.count(&SurfaceCall::ClearRows), 1);
        assert_eq!(surface.displayed_batches(), vec![Vec::<String>::new()]);
    }
}

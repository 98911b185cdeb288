//! Core traits for the presentation layer

use super::error::Result;
use crate::config::I18n;
use crate::rows::{PlayerDocument, RowDescriptor};

/// Turns row and player data into displayable text
///
/// Implementations decide the markup; callers only hand over data and the
/// interface labels.
pub trait Renderer {
    /// Render a batch of rows
    fn render_rows(&self, rows: &[RowDescriptor], i18n: &I18n) -> String;

    /// Render the title of an overlay
    fn render_modal_title(&self, text: &str) -> String;

    /// Render the body of the media player for a document
    fn render_player_body(&self, player: &PlayerDocument, i18n: &I18n) -> String;
}

/// Where the browsing controller shows its results
///
/// The surface owns the location fragment: the controller reads the
/// persisted ident from it once at start and writes it after every change.
pub trait Surface {
    /// Persisted ident token, if any
    fn read_fragment(&self) -> Option<String>;

    /// Persist the ident token
    fn write_fragment(&mut self, token: &str);

    /// Remove every displayed row
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be updated.
    fn clear_rows(&mut self) -> Result<()>;

    /// Append rows to the listing
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot be displayed.
    fn display_rows(&mut self, rows: &[RowDescriptor]) -> Result<()>;

    /// Open the player overlay on a document
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be displayed.
    fn show_player(&mut self, player: &PlayerDocument) -> Result<()>;

    /// Close the player overlay
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be updated.
    fn hide_player(&mut self) -> Result<()>;

    /// Show the about overlay
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay cannot be displayed.
    fn show_about(&mut self, title: &str, about: &str) -> Result<()>;

    /// Signal that a search matched nothing
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be updated.
    fn no_result(&mut self) -> Result<()>;

    /// Signal that the listing is complete
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be updated.
    fn no_more_results(&mut self) -> Result<()>;

    /// Show or hide the loading indicator
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be updated.
    fn set_loading(&mut self, loading: bool) -> Result<()>;

    /// Stop asking for more rows when the end of the listing is reached
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be updated.
    fn remove_infinite_scroll(&mut self) -> Result<()>;
}

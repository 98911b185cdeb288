//! Terminal surface
//!
//! Writes rendered rows, the player and status signals to any
//! [`std::io::Write`]. The location fragment is kept in memory; the browse
//! command seeds it from `--ident` and prints it when done.

use super::error::Result;
use super::traits::{Renderer, Surface};
use crate::config::I18n;
use crate::rows::{PlayerDocument, RowDescriptor};
use colored::Colorize;
use std::io::Write;

/// Surface printing to a writer through a [`Renderer`]
pub struct TerminalSurface<W: Write, R: Renderer> {
    writer: W,
    renderer: R,
    i18n: I18n,
    fragment: Option<String>,
    quiet: bool,
    infinite_scroll: bool,
}

impl<W: Write, R: Renderer> TerminalSurface<W, R> {
    #[must_use]
    pub fn new(writer: W, renderer: R, i18n: I18n) -> Self {
        Self {
            writer,
            renderer,
            i18n,
            fragment: None,
            quiet: false,
            infinite_scroll: true,
        }
    }

    /// Start from a persisted ident token
    #[must_use]
    pub fn with_fragment(mut self, token: Option<String>) -> Self {
        self.fragment = token.filter(|t| !t.is_empty());
        self
    }

    /// Suppress status lines (loading, end of listing)
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Current ident token
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether the listing still grows on demand
    #[must_use]
    pub const fn infinite_scroll(&self) -> bool {
        self.infinite_scroll
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn status(&mut self, message: &str) -> Result<()> {
        if !self.quiet {
            writeln!(self.writer, "{}", message.dimmed())?;
        }
        Ok(())
    }
}

impl<W: Write, R: Renderer> Surface for TerminalSurface<W, R> {
    fn read_fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn write_fragment(&mut self, token: &str) {
        tracing::debug!("ident {token}");
        self.fragment = Some(token.to_string());
    }

    fn clear_rows(&mut self) -> Result<()> {
        Ok(())
    }

    fn display_rows(&mut self, rows: &[RowDescriptor]) -> Result<()> {
        let text = self.renderer.render_rows(rows, &self.i18n);
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn show_player(&mut self, player: &PlayerDocument) -> Result<()> {
        let title = self.renderer.render_modal_title(&player.title);
        let body = self.renderer.render_player_body(player, &self.i18n);
        writeln!(self.writer, "\n{title}")?;
        self.writer.write_all(body.as_bytes())?;
        writeln!(self.writer, "{}", format!("[{}]", self.i18n.close).dimmed())?;
        Ok(())
    }

    fn hide_player(&mut self) -> Result<()> {
        Ok(())
    }

    fn show_about(&mut self, title: &str, about: &str) -> Result<()> {
        let title = if title.is_empty() {
            self.i18n.about.clone()
        } else {
            title.to_string()
        };
        let title = self.renderer.render_modal_title(&title);
        writeln!(self.writer, "{title}")?;
        if !about.is_empty() {
            writeln!(self.writer, "{about}")?;
        }
        Ok(())
    }

    fn no_result(&mut self) -> Result<()> {
        let message = self.i18n.no_result.clone();
        writeln!(self.writer, "{}", message.yellow())?;
        Ok(())
    }

    fn no_more_results(&mut self) -> Result<()> {
        self.status("-- end --")
    }

    fn set_loading(&mut self, loading: bool) -> Result<()> {
        if loading {
            let message = self.i18n.loading.clone();
            self.status(&message)?;
        }
        Ok(())
    }

    fn remove_infinite_scroll(&mut self) -> Result<()> {
        self.infinite_scroll = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;
    use crate::rows::RowAssembler;
    use crate::ui::TextRenderer;

    fn surface() -> TerminalSurface<Vec<u8>, TextRenderer> {
        TerminalSurface::new(Vec::new(), TextRenderer::plain(), I18n::default())
    }

    fn output(surface: TerminalSurface<Vec<u8>, TextRenderer>) -> String {
        String::from_utf8(surface.into_writer()).unwrap()
    }

    #[test]
    fn test_fragment_round_trip() {
        let mut surface = surface().with_fragment(Some("list--10".into()));
        assert_eq!(surface.read_fragment().as_deref(), Some("list--10"));

        surface.write_fragment("list--20");
        assert_eq!(surface.fragment(), Some("list--20"));
    }

    #[test]
    fn test_empty_fragment_is_none() {
        let surface = surface().with_fragment(Some(String::new()));
        assert_eq!(surface.read_fragment(), None);
    }

    #[test]
    fn test_display_rows_writes_rendered_text() {
        let mut surface = surface();
        let row = RowAssembler::default().assemble(&Document::new("00000", "Doc", vec!["a.pdf".into()]));

        surface.display_rows(&[row]).unwrap();

        let text = output(surface);
        assert!(text.contains("00000  Doc [pdf]"));
        assert!(text.contains("-> files/a.pdf"));
    }

    #[test]
    fn test_show_player_prints_title_and_close() {
        let mut surface = surface();
        let player = RowAssembler::default()
            .player_document(&Document::new("00001", "Album", vec!["a.mp3".into()]));

        surface.show_player(&player).unwrap();

        let text = output(surface);
        assert!(text.contains("Album"));
        assert!(text.contains("Single track: a.mp3"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_quiet_suppresses_status_lines() {
        let mut surface = surface().quiet(true);
        surface.set_loading(true).unwrap();
        surface.no_more_results().unwrap();
        assert_eq!(output(surface), "");
    }

    #[test]
    fn test_no_result_is_always_shown() {
        let mut surface = surface().quiet(true);
        surface.no_result().unwrap();
        assert!(output(surface).contains("No result for this search request."));
    }

    #[test]
    fn test_about_falls_back_to_label() {
        let mut surface = surface();
        surface.show_about("", "A collection of sea stories").unwrap();
        let text = output(surface);
        assert!(text.contains("About this content"));
        assert!(text.contains("A collection of sea stories"));
    }

    #[test]
    fn test_remove_infinite_scroll() {
        let mut surface = surface();
        assert!(surface.infinite_scroll());
        surface.remove_infinite_scroll().unwrap();
        assert!(!surface.infinite_scroll());
    }
}

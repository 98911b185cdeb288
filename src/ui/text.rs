//! Plain-text renderer for terminals

use super::traits::Renderer;
use crate::classify::MediaKind;
use crate::config::I18n;
use crate::rows::{PlayerDocument, PlayerItem, RowDescriptor, RowTarget};
use colored::{ColoredString, Colorize};

const INDENT: &str = "       ";

/// Renders rows and the player as indented text blocks
///
/// # Examples
///
/// ```
/// use nautilus::Document;
/// use nautilus::config::I18n;
/// use nautilus::rows::RowAssembler;
/// use nautilus::ui::{Renderer, TextRenderer};
///
/// let doc = Document::new("00001", "Twenty Thousand Leagues", vec!["book.pdf".into()]);
/// let row = RowAssembler::default().assemble(&doc);
/// let text = TextRenderer::plain().render_rows(&[row], &I18n::default());
///
/// assert!(text.starts_with("00001  Twenty Thousand Leagues [pdf]"));
/// assert!(text.contains("-> files/book.pdf"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    /// Renderer using terminal colors
    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    /// Renderer without escape codes
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn kind_label(kind: MediaKind, mime: &str, extension: &str) -> String {
        match kind {
            MediaKind::Audio | MediaKind::Video => mime.to_string(),
            MediaKind::Document if extension.is_empty() => "file".to_string(),
            MediaKind::Document => extension.to_string(),
        }
    }

    fn row_lines(&self, row: &RowDescriptor) -> Vec<String> {
        let mut label = Self::kind_label(row.details.kind, &row.details.mime, &row.details.extension);
        if row.multiple {
            label.push_str(", multiple");
        }
        let mut lines = vec![format!(
            "{}  {} {}",
            self.paint(&row.id, |s| s.dimmed()),
            self.paint(&row.title, |s| s.bold()),
            self.paint(&format!("[{label}]"), |s| s.cyan()),
        )];

        if let Some(author) = row.author.as_deref().filter(|a| !a.is_empty()) {
            lines.push(format!("{INDENT}{}", self.paint(author, |s| s.italic())));
        }
        if let Some(description) = row.description.as_deref().filter(|d| !d.is_empty()) {
            lines.extend(description.lines().map(|line| format!("{INDENT}{line}")));
        }

        let target = match &row.target {
            RowTarget::File(path) => path.clone(),
            RowTarget::Player(id) => format!("player {id}"),
        };
        lines.push(format!("{INDENT}-> {}", self.paint(&target, |s| s.blue())));
        lines
    }

    fn item_line(&self, item: &PlayerItem, i18n: &I18n) -> String {
        let label = match item.index {
            Some(n) => format!("{} {n}", i18n.track),
            None => i18n.single_track.clone(),
        };
        let kind = Self::kind_label(item.details.kind, &item.details.mime, &item.details.extension);
        let line = format!(
            "  {}: {} <{}> ({kind})",
            self.paint(&label, |s| s.bold()),
            item.name,
            item.path,
        );
        if item.details.is_file {
            format!("{line} [{}]", self.paint(&i18n.download, |s| s.green()))
        } else {
            line
        }
    }
}

/// One line per entry, each newline-terminated
fn join_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

impl Renderer for TextRenderer {
    fn render_rows(&self, rows: &[RowDescriptor], _i18n: &I18n) -> String {
        join_lines(rows.iter().flat_map(|row| self.row_lines(row)))
    }

    fn render_modal_title(&self, text: &str) -> String {
        self.paint(text, |s| s.bold().underline())
    }

    fn render_player_body(&self, player: &PlayerDocument, i18n: &I18n) -> String {
        let mut lines = Vec::with_capacity(player.items.len() + 2);
        if !player.author.is_empty() {
            lines.push(self.paint(&player.author, |s| s.italic()));
        }
        if !player.description.is_empty() {
            lines.push(player.description.clone());
        }
        lines.extend(player.items.iter().map(|item| self.item_line(item, i18n)));
        join_lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;
    use crate::rows::RowAssembler;

    fn files(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_render_single_file_row() {
        let doc = Document::new("00003", "Atlas", files(&["maps.pdf"]))
            .with_author("Mercator")
            .with_description("Old maps");
        let row = RowAssembler::default().assemble(&doc);

        let text = TextRenderer::plain().render_rows(&[row], &I18n::default());

        assert_eq!(
            text,
            "00003  Atlas [pdf]\n       Mercator\n       Old maps\n       -> files/maps.pdf\n"
        );
    }

    #[test]
    fn test_render_multiple_row_targets_player() {
        let doc = Document::new("00004", "Album", files(&["a.mp3", "b.mp3"]));
        let row = RowAssembler::default().assemble(&doc);

        let text = TextRenderer::plain().render_rows(&[row], &I18n::default());

        assert_eq!(text, "00004  Album [audio/mp3, multiple]\n       -> player 00004\n");
    }

    #[test]
    fn test_render_empty_rows() {
        assert_eq!(TextRenderer::plain().render_rows(&[], &I18n::default()), "");
    }

    #[test]
    fn test_render_player_numbers_tracks() {
        let doc = Document::new("00004", "Album", files(&["a.mp3", "notes.txt"])).with_author("Band");
        let player = RowAssembler::default().player_document(&doc);

        let text = TextRenderer::plain().render_player_body(&player, &I18n::default());

        assert_eq!(
            text,
            "Band\n  Track 1: a.mp3 <files/a.mp3> (audio/mp3)\n  Track 2: notes.txt <files/notes.txt> (txt) [download]\n"
        );
    }

    #[test]
    fn test_render_player_single_track_label() {
        let doc = Document::new("00001", "Solo", files(&["solo.ogg"]));
        let player = RowAssembler::default().player_document(&doc);
        let i18n = I18n {
            single_track: "Piste unique".into(),
            ..I18n::default()
        };

        let text = TextRenderer::plain().render_player_body(&player, &i18n);
        assert_eq!(text, "  Piste unique: solo.ogg <files/solo.ogg> (audio/ogg)\n");
    }

    #[test]
    fn test_render_rows_one_block_per_row() {
        let first = Document::new("00001", "Logbook", files(&["log.txt"]))
            .with_description("Day one\nDay two");
        let second = Document::new("00002", "Chart", files(&["noext"]));
        let assembler = RowAssembler::default().show_author(false);
        let rows = [assembler.assemble(&first), assembler.assemble(&second)];

        let text = TextRenderer::plain().render_rows(&rows, &I18n::default());

        assert_eq!(
            text,
            "00001  Logbook [txt]\n       Day one\n       Day two\n       -> files/log.txt\n\
             00002  Chart [file]\n       -> files/noext\n"
        );
    }

    #[test]
    fn test_render_player_with_description() {
        let doc = Document::new("00007", "Clip", files(&["clip.mp4"])).with_description("Short film");
        let player = RowAssembler::default().player_document(&doc);

        let text = TextRenderer::plain().render_player_body(&player, &I18n::default());
        assert_eq!(text, "Short film\n  Single track: clip.mp4 <files/clip.mp4> (video/mp4)\n");
    }

    #[test]
    fn test_plain_modal_title() {
        assert_eq!(TextRenderer::plain().render_modal_title("About"), "About");
    }
}

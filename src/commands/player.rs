//! Player command - show the attachments of one document

use crate::{
    NautilusError,
    config::NautilusConfig,
    db::DocumentStore,
    ident::pad_id,
    retrieval::RetrievalEngine,
    rows::RowAssembler,
    ui::{Surface, TerminalSurface, TextRenderer},
};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, NautilusError>;

/// Show a document in the player, writing to `writer`
///
/// # Errors
/// Returns an error if the document does not exist or output fails
pub fn run<S, W>(store: &S, config: &NautilusConfig, id: &str, writer: W, renderer: TextRenderer) -> Result<()>
where
    S: DocumentStore + ?Sized,
    W: Write,
{
    let id = pad_id(id);
    let engine = RetrievalEngine::new(store, RowAssembler::from_config(config));
    let player = engine
        .player(&id)
        .ok_or_else(|| NautilusError::InvalidInput(format!("Document '{id}' not found")))?;

    let mut surface = TerminalSurface::new(writer, renderer, config.i18n.clone());
    surface
        .show_player(&player)
        .map_err(crate::browse::BrowseError::from)?;
    Ok(())
}

/// Execute the player command
///
/// # Errors
/// Returns an error if the document does not exist or output fails
pub fn execute<S: DocumentStore + ?Sized>(store: &S, config: &NautilusConfig, id: &str) -> Result<()> {
    run(store, config, id, io::stdout().lock(), TextRenderer::colored())
}

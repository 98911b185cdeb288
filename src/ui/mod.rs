//! Presentation layer
//!
//! The browsing controller never formats anything itself. It hands rows and
//! player documents to a [`Surface`], which usually delegates the markup to
//! a [`Renderer`].
//!
//! # Core Traits
//!
//! - **`Renderer`** - rows and player body to text
//! - **`Surface`** - listing, player overlay, status signals, fragment
//!
//! # Implementations
//!
//! - [`TextRenderer`] - indented text blocks, optionally colored
//! - [`TerminalSurface`] - prints to any writer
//! - [`mock::RecordingSurface`] - records calls for tests
//!
//! ```
//! use nautilus::config::I18n;
//! use nautilus::ui::{Surface, TerminalSurface, TextRenderer};
//!
//! let mut surface = TerminalSurface::new(Vec::new(), TextRenderer::plain(), I18n::default())
//!     .with_fragment(Some("list--0".into()));
//! assert_eq!(surface.read_fragment().as_deref(), Some("list--0"));
//!
//! surface.write_fragment("list--10");
//! assert_eq!(surface.fragment(), Some("list--10"));
//! ```

mod error;
mod terminal;
mod text;
mod traits;

pub mod mock;

pub use error::{Result, UiError};
pub use terminal::TerminalSurface;
pub use text::TextRenderer;
pub use traits::{Renderer, Surface};

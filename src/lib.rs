//! Ethereal Canvas - generates the Ethereal Canvas pitch deck as a PowerPoint
//! (.pptx) file.
//!
//! The crate is split into three layers:
//!
//! - [`deck`]: the fixed 15-slide content model ([`DeckBuilder`], [`Deck`])
//! - [`render`]: turns a deck into a `.pptx` file ([`DeckRenderer`])
//! - `ooxml` (feature `pptx`, on by default): the PresentationML writer and
//!   reader on top of an Open Packaging Conventions layer
//!
//! Shared helpers (errors, colors, units, XML escaping) live in [`common`].
//!
//! # Example
//!
//! ```no_run
//! use ethereal_deck::{DeckBuilder, DeckRenderer, OUTPUT_FILENAME};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = DeckBuilder::build();
//! let report = DeckRenderer::render(&deck, OUTPUT_FILENAME)?;
//! println!("Wrote {} slides to {}", report.slide_count, report.path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `pptx` (default): the presentation writer. Without it a deck can still
//!   be built, but rendering fails with an error for which
//!   [`Error::is_dependency_missing`] returns `true`.

pub mod common;
pub mod deck;
#[cfg(feature = "pptx")]
pub mod ooxml;
pub mod render;

pub use common::{Error, RGBColor, Result};
pub use deck::{Deck, DeckBuilder, Layout, OUTPUT_FILENAME, SlideRecord};
pub use render::{DeckRenderer, RenderOptions, RenderReport};

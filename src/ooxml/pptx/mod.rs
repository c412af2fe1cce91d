//! PowerPoint (.pptx) presentation support.
//!
//! The write side builds a presentation from slides placed on one of two
//! layouts and serializes it into an OPC package:
//!
//! - `MutablePresentation` / `MutableSlide`: the presentation under
//!   construction
//! - `template`: slide master, layouts, theme and property parts shared by
//!   every generated deck
//!
//! The read side opens a finished package and summarizes its slides:
//!
//! - `Package`: the .pptx file package
//! - `parts`: views over presentation, slide and slide layout XML
//!
//! # Example
//!
//! ```rust
//! use ethereal_deck::common::RGBColor;
//! use ethereal_deck::deck::Layout;
//! use ethereal_deck::ooxml::pptx::{MutablePresentation, read_deck_summary};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(Layout::Title)
//!     .set_title("Thank You!")
//!     .set_title_format(Some(54), Some(RGBColor::new(78, 205, 196)));
//!
//! let slides = read_deck_summary(&pres.to_bytes()?)?;
//! assert_eq!(slides[0].title_font_size_pt, Some(54));
//! # Ok::<(), ethereal_deck::ooxml::OoxmlError>(())
//! ```

pub mod package;
pub mod parts;
pub mod template;
pub mod writer;

pub use package::{Package, SlideSummary, read_deck_summary};
pub use writer::{DocumentProperties, MutablePresentation, MutableSlide, TextFormat};

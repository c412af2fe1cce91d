//! Read-side views over the XML parts of a presentation package.

pub mod layout;
pub mod presentation;
pub mod slide;

pub use layout::SlideLayoutPart;
pub use presentation::PresentationPart;
pub use slide::{PlaceholderKind, PlaceholderText, SlidePart};

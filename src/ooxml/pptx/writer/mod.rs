//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod props;
pub mod slide;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use props::DocumentProperties;
pub use slide::MutableSlide;
pub use text::TextFormat;

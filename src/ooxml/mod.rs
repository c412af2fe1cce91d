//! Office Open XML (OOXML) support for presentation packages.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package structure (ZIP, parts, relationships,
//!    content types)
//! 2. **PresentationML** (`pptx`): slide, layout, master and theme parts,
//!    written by `pptx::writer` and read back by `pptx::Package`
//!
//! # Example
//!
//! ```rust
//! use ethereal_deck::deck::Layout;
//! use ethereal_deck::ooxml::pptx::{MutablePresentation, Package};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(Layout::Title).set_title("Hello");
//! let bytes = pres.to_bytes()?;
//!
//! let pkg = Package::from_bytes(&bytes)?;
//! assert_eq!(pkg.slides()?[0].title, "Hello");
//! # Ok::<(), ethereal_deck::ooxml::OoxmlError>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};

//! XML text helpers shared by the package writer and reader.

pub mod escape;

pub use escape::{escape_text, escape_xml, resolve_entity};

//! Open Packaging Conventions (OPC) support for writing presentation packages.
//!
//! An OPC package is a ZIP container holding parts (XML or binary blobs), a
//! `[Content_Types].xml` map and `.rels` files describing how parts refer to
//! each other. This module covers what is needed to emit such a package and
//! to read one back for verification:
//!
//! - Part names (`PackURI`)
//! - Relationships between parts
//! - In-memory package model (`OpcPackage`, `Part`)
//! - ZIP serialization (`PackageWriter`, `PhysPkgReader`)

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use phys_pkg::PhysPkgReader;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};

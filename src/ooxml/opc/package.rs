//! In-memory model of an OPC package being assembled for writing.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An Open Packaging Convention package: package-level relationships plus
/// an ordered list of parts.
///
/// Parts are serialized in the order they were added, which keeps the
/// produced archive stable from run to run.
#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part. Part names must be unique within a package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    pub fn part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Iterate over parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part (e.g. the main document part).
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    fn part(name: &str) -> Part {
        Part::from_xml(PackURI::new(name).unwrap(), ct::XML, "<x/>")
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/ppt/presentation.xml")).unwrap();
        let err = pkg.add_part(part("/ppt/presentation.xml")).unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(_)));
        assert_eq!(pkg.part_count(), 1);
    }

    #[test]
    fn test_package_relationship_target() {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(part(pres.as_str())).unwrap();
        assert_eq!(pkg.relate_to(&pres, rt::OFFICE_DOCUMENT), "rId1");
        assert_eq!(pkg.rels().get("rId1").unwrap().target_ref(), "ppt/presentation.xml");
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert!(matches!(pkg.part(&uri), Err(OpcError::PartNotFound(_))));
    }
}

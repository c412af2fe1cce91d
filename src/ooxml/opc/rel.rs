//! Relationships between parts of an OPC package.
//!
//! Every source (a part, or the package itself) owns one `Relationships`
//! collection. Targets are stored relative to the source's directory, the way
//! they appear in the `.rels` XML.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference relative to the source directory
    target_ref: String,

    /// Directory of the source part, used to resolve `target_ref`
    base_uri: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, base_uri: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Absolute part name of the target.
    pub fn target_partname(&self) -> Result<PackURI> {
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Ordered collection of relationships belonging to one source.
///
/// Insertion order is kept, so `rId1..rIdN` come out in the order parts were
/// related.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    base_uri: String,
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty collection for a source living in `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    #[inline]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relationship> {
        self.rels.iter()
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// First relationship of the given type, if any.
    pub fn first_of_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.reltype == reltype)
    }

    /// Relate to `target`, reusing an existing relationship of the same type
    /// and target. Returns the rId.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> String {
        let target_ref = target.relative_ref(&self.base_uri);

        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref,
            self.base_uri.clone(),
        ));
        r_id
    }

    /// Lowest `rIdN` not yet in use.
    fn next_r_id(&self) -> String {
        (1..)
            .map(|n| format!("rId{}", n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_default()
    }

    /// Serialize to `.rels` XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }

    /// Parse `.rels` XML for a source living in `base_uri`.
    ///
    /// External relationships are skipped; a deck never contains any.
    pub fn from_xml(base_uri: &str, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_uri.to_string());
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target = None;
                    let mut external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = std::str::from_utf8(&attr.value)?.to_string();
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target = Some(value),
                            b"TargetMode" => external = value == "External",
                            _ => {},
                        }
                    }

                    if external {
                        continue;
                    }

                    match (r_id, reltype, target) {
                        (Some(r_id), Some(reltype), Some(target)) => {
                            rels.rels.push(Relationship::new(
                                r_id,
                                reltype,
                                target,
                                base_uri.to_string(),
                            ));
                        },
                        _ => {
                            return Err(OpcError::XmlError(
                                "Relationship element missing Id, Type or Target".to_string(),
                            ));
                        },
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(rels)
    }
}

impl<'a> IntoIterator for &'a Relationships {
    type Item = &'a Relationship;
    type IntoIter = std::slice::Iter<'a, Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.rels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new("/ppt".to_string());
        let master = PackURI::new("/ppt/slideMasters/slideMaster1.xml").unwrap();
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();

        assert_eq!(rels.get_or_add(rt::SLIDE_MASTER, &master), "rId1");
        assert_eq!(rels.get_or_add(rt::SLIDE, &slide), "rId2");
        // same target and type is reused
        assert_eq!(rels.get_or_add(rt::SLIDE, &slide), "rId2");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2").unwrap().target_ref(), "slides/slide1.xml");
    }

    #[test]
    fn test_xml_round_trip_resolves_targets() {
        let mut rels = Relationships::new("/ppt/slides".to_string());
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout2.xml").unwrap();
        rels.get_or_add(rt::SLIDE_LAYOUT, &layout);

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout2.xml""#));

        let parsed = Relationships::from_xml("/ppt/slides", xml.as_bytes()).unwrap();
        let rel = parsed.first_of_type(rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(rel.r_id(), "rId1");
        assert_eq!(rel.target_partname().unwrap(), layout);
    }

    #[test]
    fn test_external_relationships_skipped() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="http://x/hyperlink" Target="https://example.com" TargetMode="External"/>
        </Relationships>"#;
        let rels = Relationships::from_xml("/ppt/slides", xml).unwrap();
        assert!(rels.is_empty());
    }
}

/// Presentation part - the main part in a .pptx package.
///
/// Corresponds to `/ppt/presentation.xml` in the package.
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Read-only view over `presentation.xml`.
pub struct PresentationPart<'a> {
    xml: &'a [u8],
}

impl<'a> PresentationPart<'a> {
    pub fn from_xml(xml: &'a [u8]) -> Self {
        Self { xml }
    }

    /// Relationship ids of the slides listed in `sldIdLst`, in presentation
    /// order.
    pub fn slide_rel_ids(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.xml);
        reader.config_mut().trim_text(true);

        let mut ids = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"sldId" {
                        let r_id = attr_value(&e, b"r:id")?.ok_or_else(|| {
                            OoxmlError::InvalidRelationship("sldId without r:id".to_string())
                        })?;
                        ids.push(r_id);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(ids)
    }

    /// Slide width and height in EMUs, if `sldSz` is present.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let mut reader = Reader::from_reader(self.xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"sldSz" {
                        let cx = parse_emu(attr_value(&e, b"cx")?)?;
                        let cy = parse_emu(attr_value(&e, b"cy")?)?;
                        return Ok(cx.zip(cy));
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }
}

/// Value of the attribute with the exact qualified name `key`.
pub(crate) fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
        if attr.key.as_ref() == key {
            let value = std::str::from_utf8(&attr.value)
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}

fn parse_emu(value: Option<String>) -> Result<Option<i64>> {
    value
        .map(|v| {
            v.parse::<i64>()
                .map_err(|e| OoxmlError::Xml(format!("Invalid slide size: {}", e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &[u8] = br#"<?xml version="1.0"?><p:presentation xmlns:p="p" xmlns:r="r"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst><p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/></p:sldIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#;

    #[test]
    fn test_slide_rel_ids_in_order() {
        let part = PresentationPart::from_xml(XML);
        assert_eq!(part.slide_rel_ids().unwrap(), vec!["rId2", "rId3"]);
    }

    #[test]
    fn test_slide_size() {
        let part = PresentationPart::from_xml(XML);
        assert_eq!(part.slide_size().unwrap(), Some((9144000, 6858000)));
    }

    #[test]
    fn test_no_slides() {
        let part = PresentationPart::from_xml(br#"<p:presentation xmlns:p="p"/>"#);
        assert!(part.slide_rel_ids().unwrap().is_empty());
        assert_eq!(part.slide_size().unwrap(), None);
    }
}

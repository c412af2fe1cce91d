/// Slide layout part - identifies which layout a slide was placed on.
use crate::deck::Layout;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

use super::presentation::attr_value;

/// Read-only view over a `slideLayoutN.xml` part.
pub struct SlideLayoutPart<'a> {
    xml: &'a [u8],
}

impl<'a> SlideLayoutPart<'a> {
    pub fn from_xml(xml: &'a [u8]) -> Self {
        Self { xml }
    }

    /// The `type` attribute of the root `sldLayout` element.
    ///
    /// `None` means a custom layout (`type="cust"` is the default).
    pub fn layout_type(&self) -> Result<Option<String>> {
        let mut reader = Reader::from_reader(self.xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"sldLayout" {
                        return attr_value(&e, b"type");
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Err(OoxmlError::InvalidFormat(
            "slide layout part has no sldLayout element".to_string(),
        ))
    }

    /// Map the layout type onto the deck's two layouts.
    pub fn layout(&self) -> Result<Layout> {
        match self.layout_type()?.as_deref() {
            Some("title") => Ok(Layout::Title),
            Some("obj") | Some("tx") => Ok(Layout::Content),
            other => Err(OoxmlError::InvalidFormat(format!(
                "unsupported slide layout type: {}",
                other.unwrap_or("cust")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::template;

    #[test]
    fn test_bundled_layouts() {
        let title = SlideLayoutPart::from_xml(template::slide_layout_1_xml().as_bytes());
        assert_eq!(title.layout().unwrap(), Layout::Title);

        let content = SlideLayoutPart::from_xml(template::slide_layout_2_xml().as_bytes());
        assert_eq!(content.layout_type().unwrap().as_deref(), Some("obj"));
        assert_eq!(content.layout().unwrap(), Layout::Content);
    }

    #[test]
    fn test_custom_layout_is_rejected() {
        let part = SlideLayoutPart::from_xml(br#"<p:sldLayout xmlns:p="p"/>"#);
        assert_eq!(part.layout_type().unwrap(), None);
        assert!(part.layout().is_err());
    }
}

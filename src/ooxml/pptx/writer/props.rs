//! Document property parts (`docProps/core.xml` and `docProps/app.xml`).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::common::xml::escape_xml;

/// Core properties written to `docProps/core.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    /// Author
    pub creator: Option<String>,
    pub last_modified_by: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the author. Also recorded as the last editor.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self.last_modified_by = Some(creator.to_string());
        self
    }

    /// Stamp both creation and modification time.
    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate core.xml content.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(768);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        push_element(&mut xml, "dc:title", self.title.as_deref());
        push_element(&mut xml, "dc:subject", self.subject.as_deref());
        push_element(&mut xml, "dc:creator", self.creator.as_deref());
        push_element(&mut xml, "cp:lastModifiedBy", self.last_modified_by.as_deref());

        if let Some(ref created) = self.created {
            xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
            xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:created>");
        }
        if let Some(ref modified) = self.modified {
            xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
            xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

fn push_element(xml: &mut String, tag: &str, value: Option<&str>) {
    if let Some(value) = value {
        xml.push('<');
        xml.push_str(tag);
        xml.push('>');
        xml.push_str(&escape_xml(value));
        xml.push_str("</");
        xml.push_str(tag);
        xml.push('>');
    }
}

/// Generate app.xml (extended properties) for a deck of `slide_count` slides.
pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{}</Application>",
            "<PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
            "<Slides>{}</Slides>",
            "<Notes>0</Notes>",
            "<HiddenSlides>0</HiddenSlides>",
            "<AppVersion>{}</AppVersion>",
            "</Properties>"
        ),
        env!("CARGO_PKG_NAME"),
        slide_count,
        app_version()
    )
}

/// Crate version as `MAJOR.MINOR`, the shape readers expect in `AppVersion`.
fn app_version() -> String {
    format!(
        "{}.{:0>4}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_xml() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let xml = DocumentProperties::new()
            .title("Ethereal Canvas")
            .creator("Studio & Co")
            .timestamp(at)
            .to_xml();

        assert!(xml.contains("<dc:title>Ethereal Canvas</dc:title>"));
        assert!(xml.contains("<dc:creator>Studio &amp; Co</dc:creator>"));
        assert!(xml.contains("<cp:lastModifiedBy>Studio &amp; Co</cp:lastModifiedBy>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2025-03-01T12:30:00Z</dcterms:created>"#
        ));
    }

    #[test]
    fn test_empty_core_xml() {
        let xml = DocumentProperties::new().to_xml();
        assert!(!xml.contains("<dc:title>"));
        assert!(xml.ends_with("</cp:coreProperties>"));
    }

    #[test]
    fn test_app_xml_slide_count() {
        let xml = app_props_xml(15);
        assert!(xml.contains("<Slides>15</Slides>"));
        assert!(xml.contains("<Application>ethereal-deck</Application>"));
        assert!(xml.contains("<AppVersion>0.0001</AppVersion>"));
    }
}

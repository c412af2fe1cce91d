/// Slide types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::deck::Layout;
use crate::ooxml::error::Result;

use super::text::{TextFormat, write_paragraphs};

/// A slide placed on one of the two placeholder layouts.
///
/// Both layouts expose the same pair of placeholders: a title and a text
/// body (the subtitle on [`Layout::Title`], the content area on
/// [`Layout::Content`]). The slide fills them; position and base styling
/// are inherited from the layout.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique within `sldIdLst`)
    pub(crate) slide_id: u32,
    pub(crate) layout: Layout,
    /// Slide title (stored in title placeholder)
    pub(crate) title: Option<String>,
    pub(crate) title_format: TextFormat,
    /// Subtitle or content text, one paragraph per line
    pub(crate) body: Option<String>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout: Layout) -> Self {
        Self {
            slide_id,
            layout,
            title: None,
            title_format: TextFormat::default(),
            body: None,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Set the slide title.
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Override the size and color of the title run.
    pub fn set_title_format(&mut self, size_pt: Option<u32>, color: Option<RGBColor>) -> &mut Self {
        self.title_format = TextFormat::new(size_pt, color);
        self
    }

    pub fn title_format(&self) -> &TextFormat {
        &self.title_format
    }

    /// Set the body placeholder text. Each `\n` starts a new paragraph.
    pub fn set_body(&mut self, body: &str) -> &mut Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        if let Some(ref title) = self.title {
            self.write_title_shape(&mut xml, title)?;
        }
        if let Some(ref body) = self.body {
            self.write_body_shape(&mut xml, body)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Write the title placeholder shape.
    fn write_title_shape(&self, xml: &mut String, title: &str) -> Result<()> {
        let placeholder = match self.layout {
            Layout::Title => r#"<p:ph type="ctrTitle"/>"#,
            Layout::Content => r#"<p:ph type="title"/>"#,
        };

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        // Group shape uses id=1
        xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str("<p:nvPr>");
        xml.push_str(placeholder);
        xml.push_str("</p:nvPr>");
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        write_paragraphs(xml, title, &self.title_format)?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }

    /// Write the subtitle or content placeholder shape.
    fn write_body_shape(&self, xml: &mut String, body: &str) -> Result<()> {
        let (name, placeholder) = match self.layout {
            Layout::Title => ("Subtitle 2", r#"<p:ph type="subTitle" idx="1"/>"#),
            Layout::Content => ("Content Placeholder 2", r#"<p:ph idx="1"/>"#),
        };

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name=""#);
        xml.push_str(name);
        xml.push_str(r#""/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str("<p:nvPr>");
        xml.push_str(placeholder);
        xml.push_str("</p:nvPr>");
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr><a:normAutofit/></a:bodyPr>");
        xml.push_str("<a:lstStyle/>");
        write_paragraphs(xml, body, &TextFormat::default())?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }
}

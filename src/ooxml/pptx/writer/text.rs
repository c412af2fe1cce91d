/// Run formatting and paragraph output for placeholder text bodies.
use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_text;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Run-level formatting applied on top of the placeholder's inherited style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormat {
    /// Font size in points
    pub size_pt: Option<u32>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    pub fn new(size_pt: Option<u32>, color: Option<RGBColor>) -> Self {
        Self { size_pt, color }
    }

    pub fn is_empty(&self) -> bool {
        self.size_pt.is_none() && self.color.is_none()
    }

    /// Write `<a:rPr>` for a run carrying this format.
    pub(crate) fn write_run_properties(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0""#);

        if let Some(size) = self.size_pt {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }

        match self.color {
            Some(color) => {
                xml.push('>');
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    color.to_hex()
                )?;
                xml.push_str("</a:rPr>");
            },
            None => xml.push_str("/>"),
        }

        Ok(())
    }
}

/// Write one `<a:p>` per line of `text`.
///
/// Empty lines become empty paragraphs so blank spacing survives a round trip.
pub(crate) fn write_paragraphs(xml: &mut String, text: &str, format: &TextFormat) -> Result<()> {
    for line in text.split('\n') {
        xml.push_str("<a:p>");
        if line.is_empty() {
            xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
        } else {
            xml.push_str("<a:r>");
            format.write_run_properties(xml)?;
            write!(xml, "<a:t>{}</a:t>", escape_text(line))?;
            xml.push_str("</a:r>");
        }
        xml.push_str("</a:p>");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run_properties() {
        let mut xml = String::new();
        TextFormat::default().write_run_properties(&mut xml).unwrap();
        assert_eq!(xml, r#"<a:rPr lang="en-US" dirty="0"/>"#);
    }

    #[test]
    fn test_sized_colored_run() {
        let mut xml = String::new();
        TextFormat::new(Some(54), Some(RGBColor::new(102, 126, 234)))
            .write_run_properties(&mut xml)
            .unwrap();
        assert_eq!(
            xml,
            r#"<a:rPr lang="en-US" dirty="0" sz="5400"><a:solidFill><a:srgbClr val="667EEA"/></a:solidFill></a:rPr>"#
        );
    }

    #[test]
    fn test_paragraph_per_line() {
        let mut xml = String::new();
        write_paragraphs(&mut xml, "one\n\nR&D <two>", &TextFormat::default()).unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 3);
        assert!(xml.contains(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#));
        assert!(xml.contains("<a:t>R&amp;D &lt;two&gt;</a:t>"));
    }
}

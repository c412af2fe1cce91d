/// Slide part - text and run formatting of placeholder shapes.
use crate::common::RGBColor;
use crate::common::unit::centipoints_to_pt;
use crate::common::xml::resolve_entity;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

use super::presentation::attr_value;

/// Role of a placeholder, from its `<p:ph type="...">` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Title,
    CenteredTitle,
    Subtitle,
    /// `type="body"` or a bare `<p:ph idx="..."/>`
    Body,
    Other,
}

impl PlaceholderKind {
    fn from_type(ph_type: Option<&str>) -> Self {
        match ph_type {
            Some("title") => PlaceholderKind::Title,
            Some("ctrTitle") => PlaceholderKind::CenteredTitle,
            Some("subTitle") => PlaceholderKind::Subtitle,
            Some("body") | Some("obj") | None => PlaceholderKind::Body,
            Some(_) => PlaceholderKind::Other,
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, PlaceholderKind::Title | PlaceholderKind::CenteredTitle)
    }

    /// Subtitle or content area.
    pub fn is_body(&self) -> bool {
        matches!(self, PlaceholderKind::Subtitle | PlaceholderKind::Body)
    }
}

/// Text of one placeholder shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderText {
    pub kind: PlaceholderKind,
    /// Paragraphs joined with `\n`
    pub text: String,
    /// Size of the first run, in points
    pub first_run_size_pt: Option<u32>,
    /// Solid color of the first run
    pub first_run_color: Option<RGBColor>,
}

/// Read-only view over a `slideN.xml` part.
pub struct SlidePart<'a> {
    xml: &'a [u8],
}

#[derive(Default)]
struct ShapeState {
    ph_type: Option<String>,
    is_placeholder: bool,
    paragraphs: Vec<String>,
    paragraph: Option<String>,
    run_count: usize,
    in_first_rpr: bool,
    size_pt: Option<u32>,
    color: Option<RGBColor>,
}

impl<'a> SlidePart<'a> {
    pub fn from_xml(xml: &'a [u8]) -> Self {
        Self { xml }
    }

    /// All placeholder shapes in document order.
    pub fn placeholders(&self) -> Result<Vec<PlaceholderText>> {
        // Whitespace inside <a:t> is content, so text is not trimmed
        let mut reader = Reader::from_reader(self.xml);

        let mut placeholders = Vec::new();
        let mut shape: Option<ShapeState> = None;
        let mut in_text = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"sp" => shape = Some(ShapeState::default()),
                    b"p" => {
                        if let Some(s) = shape.as_mut() {
                            s.paragraph = Some(String::new());
                        }
                    },
                    b"r" => {
                        if let Some(s) = shape.as_mut() {
                            s.run_count += 1;
                        }
                    },
                    b"rPr" => {
                        if let Some(s) = shape.as_mut().filter(|s| s.run_count == 1) {
                            s.in_first_rpr = true;
                            s.size_pt = run_size(&e)?;
                        }
                    },
                    b"t" => in_text = true,
                    _ => {},
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"ph" => {
                        if let Some(s) = shape.as_mut() {
                            s.is_placeholder = true;
                            s.ph_type = attr_value(&e, b"type")?;
                        }
                    },
                    b"p" => {
                        if let Some(s) = shape.as_mut() {
                            s.paragraphs.push(String::new());
                        }
                    },
                    b"rPr" => {
                        if let Some(s) = shape.as_mut().filter(|s| s.run_count == 1) {
                            s.size_pt = run_size(&e)?;
                        }
                    },
                    b"srgbClr" => {
                        if let Some(s) = shape.as_mut().filter(|s| s.in_first_rpr) {
                            s.color =
                                attr_value(&e, b"val")?.and_then(|v| RGBColor::from_hex(&v));
                        }
                    },
                    _ => {},
                },
                Ok(Event::Text(e)) if in_text => {
                    if let Some(p) = shape.as_mut().and_then(|s| s.paragraph.as_mut()) {
                        let text = std::str::from_utf8(e.as_ref())
                            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                        p.push_str(text);
                    }
                },
                Ok(Event::GeneralRef(e)) if in_text => {
                    if let Some(p) = shape.as_mut().and_then(|s| s.paragraph.as_mut()) {
                        let name = std::str::from_utf8(e.as_ref())
                            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                        match resolve_entity(name) {
                            Some(c) => p.push(c),
                            None => {
                                p.push('&');
                                p.push_str(name);
                                p.push(';');
                            },
                        }
                    }
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"rPr" => {
                        if let Some(s) = shape.as_mut() {
                            s.in_first_rpr = false;
                        }
                    },
                    b"p" => {
                        if let Some(s) = shape.as_mut()
                            && let Some(text) = s.paragraph.take()
                        {
                            s.paragraphs.push(text);
                        }
                    },
                    b"sp" => {
                        if let Some(s) = shape.take()
                            && s.is_placeholder
                        {
                            placeholders.push(PlaceholderText {
                                kind: PlaceholderKind::from_type(s.ph_type.as_deref()),
                                text: s.paragraphs.join("\n"),
                                first_run_size_pt: s.size_pt,
                                first_run_color: s.color,
                            });
                        }
                    },
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(placeholders)
    }
}

fn run_size(e: &quick_xml::events::BytesStart<'_>) -> Result<Option<u32>> {
    attr_value(e, b"sz")?
        .map(|sz| {
            sz.parse::<u32>()
                .map(centipoints_to_pt)
                .map_err(|e| OoxmlError::Xml(format!("Invalid font size: {}", e)))
        })
        .transpose()
}

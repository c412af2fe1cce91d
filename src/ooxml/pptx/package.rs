/// Package implementation for reading back PowerPoint presentations.
use crate::common::RGBColor;
use crate::deck::Layout;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::packuri::PACKAGE_URI;
use crate::ooxml::opc::{PackURI, PhysPkgReader, Relationships};
use crate::ooxml::pptx::parts::presentation::attr_value;
use crate::ooxml::pptx::parts::{PresentationPart, SlideLayoutPart, SlidePart};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// What one slide of a package says, as far as the deck model cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSummary {
    /// 1-based position in the presentation
    pub index: u32,
    pub layout: Layout,
    pub title: String,
    /// Subtitle or content text, paragraphs joined with `\n`
    pub body: String,
    pub title_font_size_pt: Option<u32>,
    pub title_color: Option<RGBColor>,
}

/// A PowerPoint (.pptx) package opened for reading.
///
/// # Examples
///
/// ```rust,no_run
/// use ethereal_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("Ethereal_Canvas_Presentation.pptx")?;
/// for slide in pkg.slides()? {
///     println!("{}: {}", slide.index, slide.title);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    data: Vec<u8>,
    /// Part name of `presentation.xml`
    main_part: PackURI,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_vec(std::fs::read(path)?)
    }

    /// Create a package from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data)
    }

    /// Create a package from in-memory bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_vec(bytes.to_vec())
    }

    fn from_vec(data: Vec<u8>) -> Result<Self> {
        let main_part = {
            let phys = PhysPkgReader::new(&data)?;
            let main_part = main_part_name(&phys)?;

            // Verify it's a PowerPoint presentation by checking the main part's content type
            let content_type = content_type_for(&phys.content_types_xml()?, &main_part)?
                .unwrap_or_default();
            if content_type != ct::PML_PRESENTATION_MAIN {
                return Err(OoxmlError::InvalidContentType {
                    expected: ct::PML_PRESENTATION_MAIN.to_string(),
                    got: content_type,
                });
            }
            main_part
        };

        Ok(Self { data, main_part })
    }

    /// Part name of the main presentation part.
    pub fn main_part(&self) -> &PackURI {
        &self.main_part
    }

    /// Number of slides listed in `presentation.xml`.
    pub fn slide_count(&self) -> Result<usize> {
        let phys = PhysPkgReader::new(&self.data)?;
        let xml = phys.blob_for(&self.main_part)?;
        Ok(PresentationPart::from_xml(&xml).slide_rel_ids()?.len())
    }

    /// Slide width and height in EMUs.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let phys = PhysPkgReader::new(&self.data)?;
        let xml = phys.blob_for(&self.main_part)?;
        PresentationPart::from_xml(&xml).slide_size()
    }

    /// Summaries of every slide, in presentation order.
    pub fn slides(&self) -> Result<Vec<SlideSummary>> {
        let phys = PhysPkgReader::new(&self.data)?;
        let pres_xml = phys.blob_for(&self.main_part)?;
        let pres_rels = rels_for(&phys, &self.main_part)?;

        let mut layouts: BTreeMap<PackURI, Layout> = BTreeMap::new();
        let mut summaries = Vec::new();

        for (n, r_id) in PresentationPart::from_xml(&pres_xml)
            .slide_rel_ids()?
            .iter()
            .enumerate()
        {
            let rel = pres_rels
                .get(r_id)
                .filter(|rel| rel.reltype() == rt::SLIDE)
                .ok_or_else(|| {
                    OoxmlError::InvalidRelationship(format!("{} is not a slide relationship", r_id))
                })?;
            let slide_uri = rel.target_partname()?;

            let layout_uri = rels_for(&phys, &slide_uri)?
                .first_of_type(rt::SLIDE_LAYOUT)
                .ok_or_else(|| {
                    OoxmlError::InvalidRelationship(format!("{} has no slide layout", slide_uri))
                })?
                .target_partname()?;
            let layout = match layouts.get(&layout_uri) {
                Some(layout) => *layout,
                None => {
                    let xml = phys.blob_for(&layout_uri)?;
                    let layout = SlideLayoutPart::from_xml(&xml).layout()?;
                    layouts.insert(layout_uri, layout);
                    layout
                },
            };

            let slide_xml = phys.blob_for(&slide_uri)?;
            let placeholders = SlidePart::from_xml(&slide_xml).placeholders()?;
            let title = placeholders.iter().find(|ph| ph.kind.is_title());
            let body = placeholders.iter().find(|ph| ph.kind.is_body());

            summaries.push(SlideSummary {
                index: n as u32 + 1,
                layout,
                title: title.map(|ph| ph.text.clone()).unwrap_or_default(),
                body: body.map(|ph| ph.text.clone()).unwrap_or_default(),
                title_font_size_pt: title.and_then(|ph| ph.first_run_size_pt),
                title_color: title.and_then(|ph| ph.first_run_color),
            });
        }

        tracing::debug!(slides = summaries.len(), "read presentation package");
        Ok(summaries)
    }
}

/// Read every slide of a `.pptx` held in memory.
pub fn read_deck_summary(bytes: &[u8]) -> Result<Vec<SlideSummary>> {
    Package::from_bytes(bytes)?.slides()
}

fn main_part_name(phys: &PhysPkgReader<'_>) -> Result<PackURI> {
    let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
    rels_for(phys, &package_uri)?
        .first_of_type(rt::OFFICE_DOCUMENT)
        .ok_or_else(|| OoxmlError::PartNotFound("main presentation part".to_string()))?
        .target_partname()
        .map_err(OoxmlError::from)
}

/// Relationships of `source`; empty if it has no `.rels` part.
fn rels_for(phys: &PhysPkgReader<'_>, source: &PackURI) -> Result<Relationships> {
    match phys.rels_xml_for(source)? {
        Some(xml) => Ok(Relationships::from_xml(source.base_uri(), &xml)?),
        None => Ok(Relationships::new(source.base_uri().to_string())),
    }
}

/// Content type of `partname` per `[Content_Types].xml`: an Override for the
/// part wins over the Default for its extension.
fn content_type_for(xml: &[u8], partname: &PackURI) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut by_extension = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"Override" => {
                    let name = attr_value(&e, b"PartName")?;
                    if name.as_deref() == Some(partname.as_str()) {
                        return attr_value(&e, b"ContentType");
                    }
                },
                b"Default" => {
                    let ext = attr_value(&e, b"Extension")?;
                    if ext
                        .as_deref()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(partname.ext()))
                    {
                        by_extension = attr_value(&e, b"ContentType")?;
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

    Ok(by_extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::{OpcPackage, PackageWriter, Part};
    use crate::ooxml::pptx::MutablePresentation;

    fn sample_bytes() -> Vec<u8> {
        let mut pres = MutablePresentation::new();
        pres.add_slide(Layout::Title)
            .set_title("🎨 Ethereal Canvas")
            .set_title_format(Some(54), Some(RGBColor::new(102, 126, 234)))
            .set_body("Where AI Meets Art & Blockchain");
        pres.add_slide(Layout::Content)
            .set_title("📋 Agenda")
            .set_body("• Problem\n\n• Solution");
        pres.to_bytes().unwrap()
    }

    #[test]
    fn test_read_back_slides() {
        let slides = read_deck_summary(&sample_bytes()).unwrap();
        assert_eq!(slides.len(), 2);

        assert_eq!(slides[0].index, 1);
        assert_eq!(slides[0].layout, Layout::Title);
        assert_eq!(slides[0].title, "🎨 Ethereal Canvas");
        assert_eq!(slides[0].body, "Where AI Meets Art & Blockchain");
        assert_eq!(slides[0].title_font_size_pt, Some(54));
        assert_eq!(slides[0].title_color, Some(RGBColor::new(102, 126, 234)));

        assert_eq!(slides[1].layout, Layout::Content);
        assert_eq!(slides[1].body, "• Problem\n\n• Solution");
        assert_eq!(slides[1].title_font_size_pt, None);
    }

    #[test]
    fn test_package_metadata() {
        let pkg = Package::from_bytes(&sample_bytes()).unwrap();
        assert_eq!(pkg.main_part().as_str(), "/ppt/presentation.xml");
        assert_eq!(pkg.slide_count().unwrap(), 2);
        assert_eq!(pkg.slide_size().unwrap(), Some((9144000, 6858000)));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(Package::from_bytes(b"definitely not a package").is_err());
    }

    #[test]
    fn test_wrong_main_content_type() {
        let mut opc = OpcPackage::new();
        let uri = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Part::from_xml(
            uri.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            "<w:document/>",
        ))
        .unwrap();
        opc.relate_to(&uri, rt::OFFICE_DOCUMENT);
        let bytes = PackageWriter::to_bytes(&opc).unwrap();

        match Package::from_bytes(&bytes) {
            Err(OoxmlError::InvalidContentType { got, .. }) => {
                assert!(got.contains("wordprocessingml"))
            },
            other => panic!("expected InvalidContentType, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_content_type_lookup() {
        let xml = br#"<Types xmlns="t"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="pres"/></Types>"#;
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        let other = PackURI::new("/ppt/viewProps.xml").unwrap();
        assert_eq!(content_type_for(xml, &pres).unwrap().as_deref(), Some("pres"));
        assert_eq!(
            content_type_for(xml, &other).unwrap().as_deref(),
            Some("application/xml")
        );
    }
}

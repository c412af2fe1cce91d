/// Presentation writer for PPTX.
use crate::common::unit::inches_to_emu;
use crate::deck::Layout;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part, Relationships};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;

use super::props::{DocumentProperties, app_props_xml};
use super::slide::MutableSlide;

/// Default slide width, 10 inches.
pub const DEFAULT_SLIDE_WIDTH: i64 = 9144000;
/// Default slide height, 7.5 inches.
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6858000;

const NOTES_WIDTH: i64 = 6858000;
const NOTES_HEIGHT: i64 = 9144000;

/// A PowerPoint presentation under construction.
///
/// Slides are appended in presentation order. [`to_package`](Self::to_package)
/// lays out the full part graph: presentation, one slide master with two
/// layouts, the theme, presentation-level property parts and the document
/// properties.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    properties: DocumentProperties,
    compress: bool,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            properties: DocumentProperties::default(),
            compress: true,
        }
    }

    /// Add a new slide on `layout` and return it for filling in.
    pub fn add_slide(&mut self, layout: Layout) -> &mut MutableSlide {
        let slide_id = template::FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        let index = self.slides.len() - 1;
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Set the slide size in inches.
    pub fn set_slide_size_inches(&mut self, width: f64, height: f64) {
        self.set_slide_size(inches_to_emu(width), inches_to_emu(height));
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Deflate package members (the default) or store them uncompressed.
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rel_ids` holds the presentation-part relationship id of each
    /// slide, in slide order.
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::InvalidRelationship(format!(
                "{} slides but {} slide relationships",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // The master is always the presentation part's first relationship
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="rId1"/>"#,
            template::SLIDE_MASTER_ID
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            NOTES_WIDTH, NOTES_HEIGHT
        )?;
        xml.push_str("<p:defaultTextStyle><a:defPPr><a:defRPr lang=\"en-US\"/></a:defPPr></p:defaultTextStyle>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Build the in-memory OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = partname("/ppt/presentation.xml")?;
        let master_uri = partname("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_uri = partname("/ppt/theme/theme1.xml")?;
        let pres_props_uri = partname("/ppt/presProps.xml")?;
        let view_props_uri = partname("/ppt/viewProps.xml")?;
        let table_styles_uri = partname("/ppt/tableStyles.xml")?;
        let core_uri = partname("/docProps/core.xml")?;
        let app_uri = partname("/docProps/app.xml")?;

        let layout_uris = (1..=template::all_slide_layouts().len())
            .map(|n| partname(&format!("/ppt/slideLayouts/slideLayout{}.xml", n)))
            .collect::<Result<Vec<_>>>()?;
        let slide_uris = (1..=self.slides.len())
            .map(|n| partname(&format!("/ppt/slides/slide{}.xml", n)))
            .collect::<Result<Vec<_>>>()?;

        // Presentation part. Relationship order: master, slides, then the
        // presentation-level parts.
        let mut pres_rels = Relationships::new(pres_uri.base_uri().to_string());
        pres_rels.get_or_add(rt::SLIDE_MASTER, &master_uri);
        let slide_rel_ids: Vec<String> = slide_uris
            .iter()
            .map(|uri| pres_rels.get_or_add(rt::SLIDE, uri))
            .collect();
        pres_rels.get_or_add(rt::THEME, &theme_uri);
        pres_rels.get_or_add(rt::PRES_PROPS, &pres_props_uri);
        pres_rels.get_or_add(rt::VIEW_PROPS, &view_props_uri);
        pres_rels.get_or_add(rt::TABLE_STYLES, &table_styles_uri);

        let pres_xml = self.generate_presentation_xml(&slide_rel_ids)?;
        let mut pres_part = Part::from_xml(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, pres_xml);
        *pres_part.rels_mut() = pres_rels;
        pkg.add_part(pres_part)?;

        // Master and layouts. Master rIds must match its sldLayoutIdLst.
        let mut master_part = Part::from_xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml(),
        );
        for layout_uri in &layout_uris {
            master_part.relate_to(layout_uri, rt::SLIDE_LAYOUT);
        }
        master_part.relate_to(&theme_uri, rt::THEME);
        pkg.add_part(master_part)?;

        for (layout_uri, layout_xml) in layout_uris.iter().zip(template::all_slide_layouts()) {
            let mut layout_part = Part::from_xml(layout_uri.clone(), ct::PML_SLIDE_LAYOUT, layout_xml);
            layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            pkg.add_part(layout_part)?;
        }

        for (slide, slide_uri) in self.slides.iter().zip(&slide_uris) {
            let layout_uri = &layout_uris[template::layout_number(slide.layout()) - 1];
            let mut slide_part = Part::from_xml(slide_uri.clone(), ct::PML_SLIDE, slide.to_xml()?);
            slide_part.relate_to(layout_uri, rt::SLIDE_LAYOUT);
            tracing::debug!(
                slide = %slide_uri,
                layout = slide.layout().name(),
                "added slide part"
            );
            pkg.add_part(slide_part)?;
        }

        pkg.add_part(Part::from_xml(theme_uri, ct::OFC_THEME, template::theme_xml()))?;
        pkg.add_part(Part::from_xml(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::pres_props_xml(),
        ))?;
        pkg.add_part(Part::from_xml(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::view_props_xml(),
        ))?;
        pkg.add_part(Part::from_xml(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml(),
        ))?;

        pkg.add_part(Part::from_xml(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml(),
        ))?;
        pkg.add_part(Part::from_xml(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            app_props_xml(self.slides.len()),
        ))?;

        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pkg = self.to_package()?;
        let bytes = PackageWriter::to_bytes_with_compression(&pkg, self.compress)?;
        tracing::debug!(
            parts = pkg.part_count(),
            bytes = bytes.len(),
            "serialized presentation package"
        );
        Ok(bytes)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

fn partname(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(|e| OoxmlError::Opc(OpcError::InvalidPackUri(e)))
}

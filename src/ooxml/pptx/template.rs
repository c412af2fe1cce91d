//! Static parts every generated presentation carries.
//!
//! The slide master, the two slide layouts and the theme never change between
//! decks, so they are embedded verbatim from `resources/`. Anything that
//! depends on the deck (presentation.xml, slides, document properties) is
//! produced by the writer instead.

use crate::deck::Layout;

/// Id of the only slide master in `sldMasterIdLst`.
pub const SLIDE_MASTER_ID: u32 = 2147483648;

/// First slide id handed out by `sldIdLst`. Values below 256 are reserved.
pub const FIRST_SLIDE_ID: u32 = 256;

/// Slide master with title and body placeholders and the deck text styles.
pub fn slide_master_xml() -> &'static str {
    include_str!("resources/slideMasters/slideMaster1.xml")
}

/// Slide layout 1 (Title Slide)
pub fn slide_layout_1_xml() -> &'static str {
    include_str!("resources/slideLayouts/slideLayout1.xml")
}

/// Slide layout 2 (Title and Content)
pub fn slide_layout_2_xml() -> &'static str {
    include_str!("resources/slideLayouts/slideLayout2.xml")
}

/// Layout XML in the order the master lists them.
pub fn all_slide_layouts() -> [&'static str; 2] {
    [slide_layout_1_xml(), slide_layout_2_xml()]
}

/// 1-based number of the `slideLayoutN.xml` part a layout is written to.
pub fn layout_number(layout: Layout) -> usize {
    match layout {
        Layout::Title => 1,
        Layout::Content => 2,
    }
}

pub fn theme_xml() -> &'static str {
    include_str!("resources/theme/theme1.xml")
}

pub fn table_styles_xml() -> &'static str {
    include_str!("resources/tableStyles.xml")
}

pub fn view_props_xml() -> &'static str {
    include_str!("resources/viewProps.xml")
}

pub fn pres_props_xml() -> &'static str {
    include_str!("resources/presProps.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_lists_both_layouts() {
        let xml = slide_master_xml();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#));
    }

    #[test]
    fn test_layout_types() {
        assert!(slide_layout_1_xml().contains(r#"type="title""#));
        assert!(slide_layout_1_xml().contains(r#"<p:cSld name="Title Slide">"#));
        assert!(slide_layout_2_xml().contains(r#"type="obj""#));
        assert!(slide_layout_2_xml().contains(r#"<p:cSld name="Title and Content">"#));
    }

    #[test]
    fn test_layout_number() {
        assert_eq!(layout_number(Layout::Title), 1);
        assert_eq!(layout_number(Layout::Content), 2);
        assert_eq!(all_slide_layouts().len(), 2);
    }

    #[test]
    fn test_theme_carries_brand_accents() {
        let xml = theme_xml();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="667EEA"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:accent3><a:srgbClr val="4ECDC4"/></a:accent3>"#));
    }
}

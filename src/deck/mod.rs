//! Slide content model for the Ethereal Canvas deck.
//!
//! A [`Deck`] is an ordered list of [`SlideRecord`]s. Insertion order is
//! presentation order; nothing here knows about the file format.
//!
//! # Example
//!
//! ```rust
//! use ethereal_deck::deck::{DeckBuilder, Layout};
//!
//! let deck = DeckBuilder::build();
//! assert_eq!(deck.len(), 15);
//! assert_eq!(deck.slides()[0].layout, Layout::Title);
//! ```

mod content;

use crate::common::RGBColor;

pub use content::{DeckBuilder, OUTPUT_FILENAME};

/// Brand purple, `#667EEA`.
pub const PURPLE: RGBColor = RGBColor::new(102, 126, 234);
/// Brand blue, `#764BA2`.
pub const BLUE: RGBColor = RGBColor::new(118, 75, 162);
/// Brand teal, `#4ECDC4`.
pub const TEAL: RGBColor = RGBColor::new(78, 205, 196);
/// Brand coral, `#FF6B6B`.
pub const CORAL: RGBColor = RGBColor::new(255, 107, 107);

/// Structural template a slide is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Centered title with a subtitle underneath.
    Title,
    /// Title bar with a bulleted content body.
    Content,
}

impl Layout {
    /// Display name of the layout, as shown in the slide layout gallery.
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Title => "Title Slide",
            Layout::Content => "Title and Content",
        }
    }
}

/// One slide worth of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRecord {
    /// 1-based position in the deck
    pub index: u32,
    pub layout: Layout,
    pub title: &'static str,
    /// Subtitle (title layout) or content body. One paragraph per `\n`.
    pub body: &'static str,
    /// Overrides the title run size, in points
    pub title_font_size_pt: Option<u32>,
    /// Overrides the title run color
    pub title_color: Option<RGBColor>,
}

impl SlideRecord {
    /// Whether the title carries any run-level formatting.
    pub fn has_title_style(&self) -> bool {
        self.title_font_size_pt.is_some() || self.title_color.is_some()
    }

    /// Body text split into paragraphs, empty lines included.
    pub fn body_paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.body.split('\n')
    }
}

/// The ordered collection of slides making up the presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<SlideRecord>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide; it is presented after every slide already in the deck.
    pub fn push(&mut self, record: SlideRecord) {
        self.slides.push(record);
    }

    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideRecord> {
        self.slides.iter()
    }

    /// Look up a slide by its 1-based index.
    pub fn get(&self, index: u32) -> Option<&SlideRecord> {
        self.slides.iter().find(|s| s.index == index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl FromIterator<SlideRecord> for Deck {
    fn from_iter<I: IntoIterator<Item = SlideRecord>>(iter: I) -> Self {
        Self {
            slides: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a SlideRecord;
    type IntoIter = std::slice::Iter<'a, SlideRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

//! Rendering a [`Deck`] into a `.pptx` file.
//!
//! Every slide record becomes one slide on its layout: the title goes into
//! the title placeholder (with the record's size and color applied to the
//! run), the body into the subtitle or content placeholder, one paragraph per
//! line. The package is serialized in memory first and then saved
//! atomically, so a failed render never leaves a partial file behind.
//!
//! # Example
//!
//! ```rust,no_run
//! use ethereal_deck::deck::{DeckBuilder, OUTPUT_FILENAME};
//! use ethereal_deck::render::DeckRenderer;
//!
//! let deck = DeckBuilder::build();
//! let report = DeckRenderer::render(&deck, OUTPUT_FILENAME)?;
//! println!("{} slides, {} bytes", report.slide_count, report.bytes_written);
//! # Ok::<(), ethereal_deck::common::Error>(())
//! ```

use crate::common::unit::inches_to_emu;
use crate::common::{Error, Result};
use crate::deck::Deck;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Options controlling how a deck is rendered.
///
/// # Examples
///
/// ```rust
/// use ethereal_deck::render::RenderOptions;
///
/// let options = RenderOptions::new()
///     .with_author("Ethereal Canvas Team")
///     .with_compression(false);
/// assert_eq!(options.slide_width, 9144000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Slide width in EMUs
    pub slide_width: i64,
    /// Slide height in EMUs
    pub slide_height: i64,
    /// Document title stored in the core properties
    pub title: Option<String>,
    /// Author stored in the core properties
    pub author: Option<String>,
    /// Deflate package members
    pub compress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            slide_width: inches_to_emu(10.0),
            slide_height: inches_to_emu(7.5),
            title: Some("Ethereal Canvas".to_string()),
            author: None,
            compress: true,
        }
    }
}

impl RenderOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide size in inches.
    #[inline]
    pub fn with_slide_size_inches(mut self, width: f64, height: f64) -> Self {
        self.slide_width = inches_to_emu(width);
        self.slide_height = inches_to_emu(height);
        self
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Store package members uncompressed when `false`.
    #[inline]
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub path: PathBuf,
    pub slide_count: usize,
    pub bytes_written: usize,
}

/// Turns a [`Deck`] into a PowerPoint package.
pub struct DeckRenderer;

impl DeckRenderer {
    /// Render `deck` to `path` with default options.
    pub fn render<P: AsRef<Path>>(deck: &Deck, path: P) -> Result<RenderReport> {
        Self::render_with_options(deck, path, &RenderOptions::default())
    }

    /// Render `deck` to `path`.
    ///
    /// The file is written to a temporary sibling first and renamed over
    /// `path` once complete. The destination directory must exist.
    pub fn render_with_options<P: AsRef<Path>>(
        deck: &Deck,
        path: P,
        options: &RenderOptions,
    ) -> Result<RenderReport> {
        let path = path.as_ref();
        let bytes = Self::to_bytes_with_options(deck, options)?;
        atomic_write(path, &bytes)?;

        tracing::info!(
            path = %path.display(),
            slides = deck.len(),
            bytes = bytes.len(),
            "saved presentation"
        );

        Ok(RenderReport {
            path: path.to_path_buf(),
            slide_count: deck.len(),
            bytes_written: bytes.len(),
        })
    }

    /// Render `deck` into `.pptx` bytes with default options.
    pub fn to_bytes(deck: &Deck) -> Result<Vec<u8>> {
        Self::to_bytes_with_options(deck, &RenderOptions::default())
    }

    /// Render `deck` into `.pptx` bytes.
    #[cfg(feature = "pptx")]
    pub fn to_bytes_with_options(deck: &Deck, options: &RenderOptions) -> Result<Vec<u8>> {
        use crate::ooxml::pptx::{DocumentProperties, MutablePresentation};

        let mut pres = MutablePresentation::new();
        pres.set_slide_size(options.slide_width, options.slide_height);
        pres.set_compression(options.compress);

        let mut props = DocumentProperties::new().timestamp(chrono::Utc::now());
        if let Some(ref title) = options.title {
            props = props.title(title);
        }
        if let Some(ref author) = options.author {
            props = props.creator(author);
        }
        pres.set_properties(props);

        for record in deck {
            tracing::debug!(
                index = record.index,
                layout = record.layout.name(),
                "adding slide"
            );
            let slide = pres.add_slide(record.layout);
            slide.set_title(record.title).set_body(record.body);
            if record.has_title_style() {
                slide.set_title_format(record.title_font_size_pt, record.title_color);
            }
        }

        Ok(pres.to_bytes()?)
    }

    /// Always fails: the presentation writer is not compiled in.
    #[cfg(not(feature = "pptx"))]
    pub fn to_bytes_with_options(deck: &Deck, _options: &RenderOptions) -> Result<Vec<u8>> {
        tracing::debug!(slides = deck.len(), "pptx writer not compiled in");
        Err(Error::FeatureDisabled("pptx".to_string()))
    }
}

/// Write `data` to `path` via a temporary file in the same directory.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Name the destination, not the temporary sibling, in the error
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("cannot write {}: {}", path.display(), e.kind()),
        ))
    })?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckBuilder;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::new();
        assert_eq!(options.slide_width, 9144000);
        assert_eq!(options.slide_height, 6858000);
        assert!(options.compress);
        assert_eq!(options.title.as_deref(), Some("Ethereal Canvas"));
    }

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_slide_size_inches(13.333, 7.5)
            .with_title("Pitch")
            .with_author("Team")
            .with_compression(false);
        assert_eq!(options.slide_height, 6858000);
        assert_eq!(options.title.as_deref(), Some("Pitch"));
        assert_eq!(options.author.as_deref(), Some("Team"));
        assert!(!options.compress);
    }

    #[test]
    fn test_atomic_write_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.bin");
        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_error_names_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.pptx");

        let err = atomic_write(&path, b"data").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::Io(_)));
        assert!(message.contains(&path.display().to_string()));
        assert!(!message.contains(".tmp"));
    }

    #[cfg(feature = "pptx")]
    mod pptx {
        use super::*;
        use crate::deck::{Layout, OUTPUT_FILENAME, PURPLE, TEAL};
        use crate::ooxml::pptx::{Package, read_deck_summary};

        #[test]
        fn test_render_creates_file() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join(OUTPUT_FILENAME);

            let report = DeckRenderer::render(&DeckBuilder::build(), &path).unwrap();
            assert!(path.exists());
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
            assert_eq!(report.path, path);
            assert_eq!(report.slide_count, 15);
            assert_eq!(
                report.bytes_written as u64,
                std::fs::metadata(&path).unwrap().len()
            );
        }

        #[test]
        fn test_rendered_deck_reads_back() {
            let deck = DeckBuilder::build();
            let slides = read_deck_summary(&DeckRenderer::to_bytes(&deck).unwrap()).unwrap();

            assert_eq!(slides.len(), 15);
            for (slide, record) in slides.iter().zip(deck.iter()) {
                assert_eq!(slide.index, record.index);
                assert_eq!(slide.layout, record.layout);
                assert_eq!(slide.title, record.title);
                assert_eq!(slide.body, record.body);
            }
        }

        #[test]
        fn test_layouts_by_position() {
            let slides = read_deck_summary(&DeckRenderer::to_bytes(&DeckBuilder::build()).unwrap())
                .unwrap();
            assert_eq!(slides[0].layout, Layout::Title);
            assert_eq!(slides[14].layout, Layout::Title);
            assert!(slides[1..14].iter().all(|s| s.layout == Layout::Content));
        }

        #[test]
        fn test_title_styles() {
            let slides = read_deck_summary(&DeckRenderer::to_bytes(&DeckBuilder::build()).unwrap())
                .unwrap();

            assert_eq!(slides[0].title, "🎨 Ethereal Canvas");
            assert_eq!(slides[0].title_font_size_pt, Some(54));
            assert_eq!(slides[0].title_color, Some(PURPLE));
            assert_eq!(slides[0].title_color.unwrap().to_hex(), "667EEA");

            assert_eq!(slides[14].title, "Thank You! 🙏");
            assert_eq!(slides[14].title_font_size_pt, Some(54));
            assert_eq!(slides[14].title_color, Some(TEAL));

            assert_eq!(slides[1].title_font_size_pt, None);
            assert_eq!(slides[1].title_color, None);
        }

        #[test]
        fn test_renders_are_repeatable() {
            let deck = DeckBuilder::build();
            let first = read_deck_summary(&DeckRenderer::to_bytes(&deck).unwrap()).unwrap();
            let second = read_deck_summary(&DeckRenderer::to_bytes(&deck).unwrap()).unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn test_options_reach_package() {
            let options = RenderOptions::new()
                .with_slide_size_inches(13.333, 7.5)
                .with_compression(false);
            let bytes = DeckRenderer::to_bytes_with_options(&DeckBuilder::build(), &options).unwrap();
            let pkg = Package::from_bytes(&bytes).unwrap();
            assert_eq!(pkg.slide_size().unwrap(), Some((inches_to_emu(13.333), 6858000)));
            assert_eq!(pkg.slide_count().unwrap(), 15);
        }

        #[test]
        fn test_missing_directory_leaves_no_file() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("missing").join(OUTPUT_FILENAME);

            let err = DeckRenderer::render(&DeckBuilder::build(), &path).unwrap_err();
            assert!(matches!(err, Error::Io(_)));
            assert!(!err.is_dependency_missing());
            assert!(!path.exists());
            assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        }
    }

    #[cfg(not(feature = "pptx"))]
    #[test]
    fn test_without_writer_reports_dependency_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.pptx");

        let err = DeckRenderer::render(&DeckBuilder::build(), &path).unwrap_err();
        assert!(err.is_dependency_missing());
        assert!(!path.exists());
    }
}

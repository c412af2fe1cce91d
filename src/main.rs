//! ethereal-deck CLI - writes the Ethereal Canvas pitch deck as a .pptx file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ethereal_deck::common::{Error, Result};
use ethereal_deck::deck::{DeckBuilder, OUTPUT_FILENAME};
use ethereal_deck::render::{DeckRenderer, RenderOptions, RenderReport};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "ethereal-deck")]
#[command(about = "Generate the Ethereal Canvas pitch deck as a PowerPoint file")]
#[command(version)]
struct Cli {
    /// Where to write the presentation
    #[arg(short, long, default_value = OUTPUT_FILENAME)]
    output: PathBuf,

    /// Read the written file back and check its slides
    #[arg(long)]
    verify: bool,

    /// Author recorded in the document properties
    #[arg(long)]
    author: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the result lines
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let (lines, code) = outcome(&run(&cli));
    for line in lines {
        println!("{}", line);
    }
    ExitCode::from(code)
}

/// Stdout lines and exit status for the result of a run.
fn outcome(result: &Result<RenderReport>) -> (Vec<String>, u8) {
    match result {
        Ok(report) => (
            vec![
                "✅ PowerPoint presentation created successfully!".to_string(),
                format!("📄 File: {}", report.path.display()),
                format!("📊 Total slides: {}", report.slide_count),
            ],
            0,
        ),
        Err(err) if err.is_dependency_missing() => (
            vec![
                "❌ Error: pptx writer not available".to_string(),
                "📦 Install with: cargo build --features pptx".to_string(),
            ],
            1,
        ),
        Err(err) => (vec![format!("❌ Error creating presentation: {}", err)], 1),
    }
}

fn run(cli: &Cli) -> Result<RenderReport> {
    let deck = DeckBuilder::build();
    tracing::debug!(slides = deck.len(), "built deck");

    let mut options = RenderOptions::new();
    if let Some(ref author) = cli.author {
        options = options.with_author(author.as_str());
    }

    let report = DeckRenderer::render_with_options(&deck, &cli.output, &options)?;
    if cli.verify {
        verify(&report.path, deck.len())?;
    }
    Ok(report)
}

#[cfg(feature = "pptx")]
fn verify(path: &Path, expected: usize) -> Result<()> {
    let slides = ethereal_deck::ooxml::pptx::Package::open(path)?.slides()?;
    if slides.len() != expected {
        return Err(Error::InvalidFormat(format!(
            "expected {} slides, found {}",
            expected,
            slides.len()
        )));
    }
    tracing::info!(path = %path.display(), slides = slides.len(), "verified presentation");
    Ok(())
}

#[cfg(not(feature = "pptx"))]
fn verify(_path: &Path, _expected: usize) -> Result<()> {
    Err(Error::FeatureDisabled("pptx".to_string()))
}

//! `idsvg` CLI: render Ideographic Description Sequences to SVG.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use idsvg_core::{DEFAULT_FONT_SIZE, DEFAULT_MAX_DEPTH};
use idsvg_fonts::FontData;
use idsvg_svg::{RenderOptions, Renderer};

#[derive(Parser)]
#[command(version, about = "Render Ideographic Description Sequences to SVG")]
struct Cli {
    /// Sequences to render, e.g. ⿰王⿱丿⿻乚龷
    #[arg(required = true)]
    ids: Vec<String>,

    /// Font file (.otf, .ttf) providing the leaf glyphs
    #[arg(short, long, value_name = "FILE")]
    font: PathBuf,

    /// Side of the square output box
    #[arg(short = 's', long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: f64,

    /// Fill colour (accepted, not applied yet: output is always black)
    #[arg(short, long, default_value = "black")]
    color: String,

    /// Output directory for SVG files; prints to stdout when omitted
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Deepest operator nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let font = match FontData::load(&cli.font) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    debug!(?font, "font loaded");

    let options = RenderOptions {
        font_size: cli.font_size,
        color: cli.color.clone(),
        max_depth: cli.max_depth,
    };
    let renderer = Renderer::new(&font, options);

    let mut ok = true;
    for (i, ids) in cli.ids.iter().enumerate() {
        let svg = match renderer.render_to_string(ids) {
            Ok(svg) => svg,
            Err(e) => {
                eprintln!("Error: {ids}: {e}");
                ok = false;
                continue;
            }
        };
        match &cli.output {
            Some(dir) => {
                let filename = if cli.ids.len() == 1 {
                    "output.svg".to_owned()
                } else {
                    format!("output.{}.svg", i + 1)
                };
                ok &= write_svg(dir, &filename, &svg);
            }
            None => println!("{svg}"),
        }
    }

    if !ok {
        process::exit(1);
    }
}

fn write_svg(output_dir: &Path, filename: &str, content: &str) -> bool {
    let path = output_dir.join(filename);
    match fs::write(&path, content) {
        Ok(()) => {
            info!(path = %path.display(), "wrote svg");
            eprintln!("Wrote {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", path.display());
            false
        }
    }
}

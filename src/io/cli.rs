//! Command-line interface for rendering snow headers and bare textures

use crate::algorithm::texture::TextureGenerator;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED, MAX_DAY, MIN_DAY, MIN_YEAR,
};
use crate::io::error::{Result, WithPath};
use crate::io::progress::AnnealProgress;
use crate::render::HeaderCompositor;
use crate::render::header::{check_content, header_seed, render_grid};
use crate::spatial::Grid;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "snowdrift")]
#[command(
    author,
    version,
    about = "Decorate puzzle solutions with annealed ASCII snow"
)]
/// Command-line arguments for the snow renderer
pub struct Cli {
    /// What to render
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available renderings
#[derive(Subcommand)]
pub enum Command {
    /// Title and URL centered in a snow header
    Header(HeaderArgs),
    /// A bare annealed texture
    Texture(TextureArgs),
}

/// Arguments for the header command
#[derive(Args)]
pub struct HeaderArgs {
    /// Puzzle year
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_YEAR)..))]
    pub year: u16,

    /// Puzzle day
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_DAY)..=i64::from(MAX_DAY))
    )]
    pub day: u8,

    /// Puzzle title
    #[arg(short, long)]
    pub title: String,

    /// Puzzle URL
    #[arg(short, long)]
    pub url: String,

    /// Render without comment markers
    #[arg(long)]
    pub plain: bool,

    /// Write the header to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the texture command
#[derive(Args)]
pub struct TextureArgs {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Texture height
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Texture width
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the parsed command and delivers its output
pub struct CommandProcessor {
    cli: Cli,
}

impl CommandProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render and deliver the requested output
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the output file cannot be written
    pub fn process(&self) -> Result<()> {
        let rendered = self.render()?;

        match &self.cli.command {
            Command::Header(HeaderArgs {
                output: Some(path),
                force,
                ..
            }) => self.write_output(path, &rendered, *force),
            _ => {
                Self::print_output(&rendered);
                Ok(())
            }
        }
    }

    /// Produce the text for the requested command without delivering it
    ///
    /// # Errors
    ///
    /// Returns an error if the texture dimensions are invalid or the header text
    /// holds a control character
    pub fn render(&self) -> Result<String> {
        match &self.cli.command {
            Command::Header(args) => {
                let compositor = HeaderCompositor::standard()?;
                let comment_prefix = !args.plain;
                let content = compositor.content_lines(&args.title, &args.url);
                check_content(&content)?;
                let (rows, cols) = compositor.dimensions(&content, comment_prefix);
                let seed = header_seed(args.year, args.day);

                let label = format!("{}/{:02}", args.year, args.day);
                let grid = self.anneal(compositor.generator(), seed, rows, cols, &label)?;
                Ok(HeaderCompositor::stamp(grid, &content, comment_prefix))
            }
            Command::Texture(args) => {
                let generator = TextureGenerator::standard()?;
                let label = format!("seed {}", args.seed);
                let grid = self.anneal(&generator, args.seed, args.rows, args.cols, &label)?;
                Ok(render_grid(&grid, ""))
            }
        }
    }

    fn anneal(
        &self,
        generator: &TextureGenerator,
        seed: u64,
        rows: usize,
        cols: usize,
        label: &str,
    ) -> Result<Grid> {
        let mut annealer = generator.annealer(seed, rows, cols)?;
        let temperatures = annealer.schedule().len();
        let mut progress = if self.cli.should_show_progress() {
            AnnealProgress::new(label, temperatures)
        } else {
            AnnealProgress::hidden(temperatures)
        };

        while let Some(report) = annealer.step_temperature() {
            progress.update(&report);
        }
        progress.finish();

        Ok(annealer.into_grid())
    }

    // Allow print for user feedback when refusing to overwrite
    #[allow(clippy::print_stderr)]
    fn write_output(&self, path: &Path, rendered: &str, force: bool) -> Result<()> {
        if path.exists() && !force {
            if !self.cli.quiet {
                eprintln!(
                    "Skipping: {} (already exists, use --force to overwrite)",
                    path.display()
                );
            }
            return Ok(());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        std::fs::write(path, format!("{rendered}\n")).with_path(path, "write")
    }

    // The rendered block is the program's output
    #[allow(clippy::print_stdout)]
    fn print_output(rendered: &str) {
        println!("{rendered}");
    }
}

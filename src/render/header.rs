//! Centers text lines inside an annealed snow texture

use crate::algorithm::texture::TextureGenerator;
use crate::io::configuration::{
    COMMENT_MARKER, HEADER_BUFFER_LINES, HEADER_LINE_WIDTH, HEADER_PADDING,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Coordinate, Grid};

/// Lays text over texture and renders the result as equal-width lines
#[derive(Debug, Clone)]
pub struct HeaderCompositor {
    generator: TextureGenerator,
    line_width: usize,
    padding: usize,
    buffer_lines: usize,
}

impl HeaderCompositor {
    /// Create a compositor
    ///
    /// `line_width` is the minimum rendered width including any comment marker.
    pub const fn new(
        generator: TextureGenerator,
        line_width: usize,
        padding: usize,
        buffer_lines: usize,
    ) -> Self {
        Self {
            generator,
            line_width,
            padding,
            buffer_lines,
        }
    }

    /// Fixed texture configuration, 80 columns, padding 3, one buffer line each side
    ///
    /// # Errors
    ///
    /// Fails only if the built-in texture configuration is inconsistent
    pub fn standard() -> Result<Self> {
        Ok(Self::new(
            TextureGenerator::standard()?,
            HEADER_LINE_WIDTH,
            HEADER_PADDING,
            HEADER_BUFFER_LINES,
        ))
    }

    /// Blank buffer lines around the title and URL
    pub fn content_lines<'a>(&self, title: &'a str, url: &'a str) -> Vec<&'a str> {
        let mut lines = vec![""; self.buffer_lines];
        lines.push(title);
        lines.push(url);
        lines.extend(std::iter::repeat_n("", self.buffer_lines));
        lines
    }

    /// Texture generator used for the background
    pub const fn generator(&self) -> &TextureGenerator {
        &self.generator
    }

    /// Line marker for the chosen output style
    pub const fn marker(comment_prefix: bool) -> &'static str {
        if comment_prefix { COMMENT_MARKER } else { "" }
    }

    /// Texture (rows, cols) needed to hold `content`
    pub fn dimensions(&self, content: &[&str], comment_prefix: bool) -> (usize, usize) {
        let marker = Self::marker(comment_prefix);
        let min_width = self.line_width.saturating_sub(marker.chars().count());
        (content.len(), line_length(content, min_width, self.padding))
    }

    /// Stamp `content` onto an already annealed `grid` and render it
    ///
    /// # Panics
    ///
    /// Panics if the rendered lines differ in width
    pub fn stamp(mut grid: Grid, content: &[&str], comment_prefix: bool) -> String {
        embed_content(&mut grid, content);
        render_grid(&grid, Self::marker(comment_prefix))
    }

    /// Render `content` over a texture seeded with `seed`
    ///
    /// # Errors
    ///
    /// Returns [`crate::SnowError::InvalidDimensions`] if `content` is empty, or
    /// an invalid parameter error if a content line holds a control character
    ///
    /// # Panics
    ///
    /// Panics if the rendered lines differ in width
    pub fn compose(&self, content: &[&str], seed: u64, comment_prefix: bool) -> Result<String> {
        check_content(content)?;
        let (rows, cols) = self.dimensions(content, comment_prefix);
        let grid = self.generator.generate(seed, rows, cols)?;
        Ok(Self::stamp(grid, content, comment_prefix))
    }

    /// Header for a puzzle, seeded by its year and day
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `title` or `url` holds a control
    /// character such as a line break
    ///
    /// # Panics
    ///
    /// Panics if the rendered lines differ in width
    pub fn render(
        &self,
        year: u16,
        day: u8,
        title: &str,
        url: &str,
        comment_prefix: bool,
    ) -> Result<String> {
        let content = self.content_lines(title, url);
        self.compose(&content, header_seed(year, day), comment_prefix)
    }
}

/// Seed derived from a puzzle date, `year * 100 + day`
pub fn header_seed(year: u16, day: u8) -> u64 {
    u64::from(year) * 100 + u64::from(day)
}

/// Columns needed to hold the longest line with a space each side and `padding` spare
pub fn line_length(content: &[&str], min_width: usize, padding: usize) -> usize {
    let longest = content
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    min_width.max(longest + 2 + padding)
}

/// Reject content that would break a row apart once rendered
///
/// # Errors
///
/// Returns an invalid parameter error naming the first offending line
pub fn check_content(content: &[&str]) -> Result<()> {
    match content.iter().find(|line| line.chars().any(char::is_control)) {
        Some(line) => Err(invalid_parameter(
            "content",
            &line.escape_debug(),
            &"control characters would split or skew the rendered line",
        )),
        None => Ok(()),
    }
}

/// Overwrite the middle of row `i` with `" " + content[i] + " "`
///
/// Empty lines leave their row untouched. Text wider than the grid is clipped.
pub fn embed_content(grid: &mut Grid, content: &[&str]) {
    let cols = grid.cols();
    for (row, text) in content.iter().enumerate().take(grid.rows()) {
        if text.is_empty() {
            continue;
        }

        let insert: Vec<char> = format!(" {text} ").chars().collect();
        let shift = cols.saturating_sub(insert.len()) / 2;
        for (offset, &symbol) in insert.iter().enumerate() {
            grid.set(Coordinate::new(row, shift + offset), symbol);
        }
    }
}

/// Join the grid into newline-separated lines, each starting with `marker`
///
/// # Panics
///
/// Panics if the lines are not all the same width
pub fn render_grid(grid: &Grid, marker: &str) -> String {
    let rendered = grid
        .to_lines()
        .into_iter()
        .map(|row| format!("{marker}{row}"))
        .collect::<Vec<_>>()
        .join("\n");

    // Measured on the joined block, breaks inside a cell included
    let mut lines = rendered.split(['\n', '\r']);
    let width = lines.next().map_or(0, |line| line.chars().count());
    assert!(
        lines.all(|line| line.chars().count() == width),
        "rendered header lines differ in width"
    );

    rendered
}

/// Header for a puzzle using the fixed configuration
///
/// # Errors
///
/// Returns an invalid parameter error if `title` or `url` holds a control character
///
/// # Panics
///
/// Panics if the rendered lines differ in width
pub fn render_header(
    year: u16,
    day: u8,
    title: &str,
    url: &str,
    comment_prefix: bool,
) -> Result<String> {
    HeaderCompositor::standard()?.render(year, day, title, url, comment_prefix)
}

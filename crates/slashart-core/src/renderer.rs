//! # Glyph Renderer
//!
//! Turns text into rows of slash art. Each input character becomes a
//! [`GLYPH_WIDTH`]-column cell of [`GLYPH_HEIGHT`] rows, with its `/`, `=` and
//! space cells swapped for whatever the [`Substitutions`] say.
//!
//! Two layouts exist:
//! - [`Layout::Lines`] follows the line breaks of the input.
//! - [`Layout::Title`] puts every whitespace-separated word on its own block.
//!
//! Randomness is drawn per cell from the generator passed to the `*_with_rng`
//! methods. The plain methods use the thread-local generator.

use crate::glyphs::{GlyphDictionary, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::substitution::{GlyphClass, SpecDialect, Substitutions};
use rand::Rng;

/// Text shown when the user has not typed anything
pub const DEFAULT_DISPLAY_TEXT: &str = "ASCII\nART";

/// Fallback text for the title layout
pub const DEFAULT_TITLE_TEXT: &str = "ASCII ART";

/// Void cells between two neighbouring glyphs
pub const CHAR_SPACING: usize = 2;

/// Row width of a rendered line of `char_count` characters
pub fn line_width(char_count: usize) -> usize {
    match char_count {
        0 => 0,
        n => n * GLYPH_WIDTH + (n - 1) * CHAR_SPACING,
    }
}

/// How input text is split into blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One block per input line
    #[default]
    Lines,
    /// One block per word
    Title,
}

impl Layout {
    /// Spec dialect that belongs to this layout
    pub fn dialect(&self) -> SpecDialect {
        match self {
            Layout::Lines => SpecDialect::Standard,
            Layout::Title => SpecDialect::Title,
        }
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Lines => "Lines",
            Layout::Title => "Title",
        }
    }
}

/// Configuration for rendering
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Replacement for each glyph class
    pub substitutions: Substitutions,
    /// Block layout
    pub layout: Layout,
}

impl RenderConfig {
    /// Build from raw user spec strings, normalizing them for `layout`
    pub fn from_user_input(slash: &str, equals: &str, void: &str, layout: Layout) -> Self {
        Self {
            substitutions: Substitutions::from_user_input(slash, equals, void, layout.dialect()),
            layout,
        }
    }
}

/// Slash art renderer
pub struct GlyphRenderer {
    config: RenderConfig,
    dictionary: &'static GlyphDictionary,
}

impl GlyphRenderer {
    /// Create a new renderer with default specs
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            dictionary: GlyphDictionary::global(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render using the thread-local random generator
    pub fn render(&self, text: &str) -> Vec<String> {
        self.render_with_rng(text, &mut rand::rng())
    }

    /// Render drawing every random pick from `rng`
    pub fn render_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<String> {
        let rows = match self.config.layout {
            Layout::Lines => self.render_lines(text, rng),
            Layout::Title => self.render_title(text, rng),
        };
        tracing::trace!(
            layout = self.config.layout.name(),
            rows = rows.len(),
            "Rendered slash art"
        );
        rows
    }

    fn render_lines<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let input_lines: Vec<&str> = text.split('\n').collect();
        let last = input_lines.len() - 1;
        let mut output = Vec::with_capacity(input_lines.len() * (GLYPH_HEIGHT + 1));

        for (index, line) in input_lines.iter().enumerate() {
            // Blank lines in the middle keep their vertical space
            if line.trim().is_empty() && index < last {
                output.extend(std::iter::repeat_n(String::new(), GLYPH_HEIGHT));
                continue;
            }

            let chars: Vec<char> = line.chars().map(upper_char).collect();
            output.extend(self.render_block(&chars, rng));

            if index < last {
                output.push(String::new());
            }
        }

        output
    }

    fn render_title<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<String> {
        let text = match text.trim() {
            "" => DEFAULT_TITLE_TEXT,
            trimmed => trimmed,
        };

        let words: Vec<&str> = text.split_whitespace().collect();
        let mut output = Vec::with_capacity(words.len() * (GLYPH_HEIGHT + 1));

        for (index, word) in words.iter().enumerate() {
            let chars: Vec<char> = word.to_uppercase().chars().collect();
            output.extend(self.render_block(&chars, rng));

            if index + 1 < words.len() {
                output.push(String::new());
            }
        }

        output
    }

    /// Lay out one block of upper-cased characters side by side
    fn render_block<R: Rng + ?Sized>(&self, chars: &[char], rng: &mut R) -> Vec<String> {
        let subs = &self.config.substitutions;
        let mut rows = vec![String::new(); GLYPH_HEIGHT];

        for (i, &ch) in chars.iter().enumerate() {
            let pattern = self.dictionary.get_or_space(ch);

            for (row, pattern_row) in rows.iter_mut().zip(pattern.rows()) {
                let cells = substitute_row(pattern_row, ch, subs, rng);
                let used = cells.chars().count();
                row.push_str(&cells);

                // Pad character is drawn once per row, apart from the interior void cells
                let fill = subs.void.resolve(ch, rng);
                for _ in used..GLYPH_WIDTH {
                    row.push(fill);
                }

                if i + 1 < chars.len() {
                    for _ in 0..CHAR_SPACING {
                        row.push(subs.void.resolve(ch, rng));
                    }
                }
            }
        }

        rows
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace each glyph class in turn.
///
/// The passes run in [`GlyphClass::all`] order over the output of the previous
/// pass, so a slash spec of `=` feeds into the equals pass.
fn substitute_row<R: Rng + ?Sized>(
    pattern_row: &str,
    input_char: char,
    subs: &Substitutions,
    rng: &mut R,
) -> String {
    let mut cells: Vec<char> = pattern_row.chars().collect();

    for class in GlyphClass::all() {
        let spec = subs.get(*class);
        let marker = class.marker();
        for cell in cells.iter_mut().filter(|cell| **cell == marker) {
            *cell = spec.resolve(input_char, rng);
        }
    }

    cells.into_iter().collect()
}

/// Upper-case a single character, leaving it alone if it would expand
fn upper_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Render `text` line by line with the given specs
pub fn render(text: &str, substitutions: &Substitutions) -> Vec<String> {
    GlyphRenderer::with_config(RenderConfig {
        substitutions: substitutions.clone(),
        layout: Layout::Lines,
    })
    .render(text)
}

/// Render `text` word by word with the given specs
pub fn render_title(text: &str, substitutions: &Substitutions) -> Vec<String> {
    GlyphRenderer::with_config(RenderConfig {
        substitutions: substitutions.clone(),
        layout: Layout::Title,
    })
    .render(text)
}

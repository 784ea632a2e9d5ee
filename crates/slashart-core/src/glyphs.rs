//! Glyph dictionary
//!
//! Every supported character maps to a 7-row pattern drawn with three glyph
//! classes: `/` for strokes, `=` for the drop shadow and space for the void.
//! Rows are stored without trailing padding; the renderer pads each row to
//! [`GLYPH_WIDTH`] columns.
//!
//! ```text
//!   //////
//! // =====//
//! //=     //=
//! //////////=
//! //======//=
//! //=     //=
//!  ==      ==
//! ```

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Rows per glyph
pub const GLYPH_HEIGHT: usize = 7;

/// Fixed column width of one rendered glyph cell
pub const GLYPH_WIDTH: usize = 14;

/// Every character with a glyph, in dictionary order
pub const SUPPORTED_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !.,?:_-[]{}/=+#<>";

/// One character's glyph rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPattern {
    rows: [&'static str; GLYPH_HEIGHT],
}

impl GlyphPattern {
    /// Pattern rows, top to bottom
    pub fn rows(&self) -> &[&'static str; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Widest row, before padding
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }
}

/// Immutable character → glyph lookup table
#[derive(Debug)]
pub struct GlyphDictionary {
    glyphs: HashMap<char, GlyphPattern>,
}

static DICTIONARY: Lazy<GlyphDictionary> = Lazy::new(GlyphDictionary::build);

impl GlyphDictionary {
    /// The process-wide dictionary, built on first use
    pub fn global() -> &'static GlyphDictionary {
        &DICTIONARY
    }

    fn build() -> Self {
        let glyphs: HashMap<char, GlyphPattern> = SUPPORTED_CHARS
            .chars()
            .filter_map(|ch| slash_glyph(ch).map(|rows| (ch, GlyphPattern { rows })))
            .collect();
        tracing::debug!("Glyph dictionary built with {} glyphs", glyphs.len());
        Self { glyphs }
    }

    /// Exact lookup. Callers upper-case before calling.
    pub fn get(&self, ch: char) -> Option<&GlyphPattern> {
        self.glyphs.get(&ch)
    }

    /// Lookup with the space glyph as fallback
    pub fn get_or_space(&self, ch: char) -> &GlyphPattern {
        self.glyphs
            .get(&ch)
            .unwrap_or_else(|| &self.glyphs[&' '])
    }

    /// Whether `ch` has a glyph of its own
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Supported characters in dictionary order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        SUPPORTED_CHARS.chars().filter(|ch| self.glyphs.contains_key(ch))
    }
}

fn slash_glyph(ch: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match ch {
        'A' => [
            "  //////",
            "// =====//",
            "//=     //=",
            "//////////=",
            "//======//=",
            "//=     //=",
            " ==      ==",
        ],
        'B' => [
            "////////",
            "//======//",
            "//////// ==",
            "//======//",
            "//=     //=",
            "//////// ==",
            " ========",
        ],
        'C' => [
            "  ////////",
            "// ========",
            "//=",
            "//=",
            "//=",
            " =////////",
            "   ========",
        ],
        'D' => [
            "////////",
            "//======//",
            "//=     //=",
            "//=     //=",
            "//=     //=",
            "//////// ==",
            " ========",
        ],
        'E' => [
            "//////////",
            "//=========",
            "////////",
            "//=======",
            "//=",
            "//////////",
            " ==========",
        ],
        'F' => [
            "//////////",
            "//=========",
            "////////",
            "//=======",
            "//=",
            "//=",
            " ==",
        ],
        'G' => [
            "  ////////",
            "// ========",
            "//=",
            "//=   ////",
            "//=    =//=",
            " =////////=",
            "   ========",
        ],
        'H' => [
            "//      //",
            "//=     //=",
            "//////////=",
            "//======//=",
            "//=     //=",
            "//=     //=",
            " ==      ==",
        ],
        'I' => [
            "//////",
            " =//===",
            "  //=",
            "  //=",
            "  //=",
            "//////",
            " ======",
        ],
        'J' => [
            "    //////",
            "     =//===",
            "      //=",
            "      //=",
            "//    //=",
            " =//// ==",
            "   ====",
        ],
        'K' => [
            "//      //",
            "//=   // ==",
            "////// ==",
            "//====//",
            "//=    =//",
            "//=     //=",
            " ==      ==",
        ],
        'L' => [
            "//",
            "//=",
            "//=",
            "//=",
            "//=",
            "//////////",
            " ==========",
        ],
        'M' => [
            "//      //",
            "////  ////=",
            "//==// =//=",
            "//=  == //=",
            "//=     //=",
            "//=     //=",
            " ==      ==",
        ],
        'N' => [
            "//      //",
            "////    //=",
            "//==//  //=",
            "//=  =////=",
            "//=    =//=",
            "//=     //=",
            " ==      ==",
        ],
        'O' => [
            "  //////",
            "// =====//",
            "//=     //=",
            "//=     //=",
            "//=     //=",
            " =////// ==",
            "   ======",
        ],
        'P' => [
            "////////",
            "//======//",
            "//=     //=",
            "//////// ==",
            "//=======",
            "//=",
            " ==",
        ],
        'Q' => [
            "  //////",
            "// =====//",
            "//=     //=",
            "//= //  //=",
            "//=  =// ==",
            " =//// =//",
            "   ====  ==",
        ],
        'R' => [
            "////////",
            "//======//",
            "//=     //=",
            "//////// ==",
            "//====//=",
            "//=    =//",
            " ==      ==",
        ],
        'S' => [
            "  ////////",
            "// ========",
            " =//////",
            "   =====//",
            "        //=",
            "//////// ==",
            " ========",
        ],
        'T' => [
            "//////////",
            " ===//=====",
            "    //=",
            "    //=",
            "    //=",
            "    //=",
            "     ==",
        ],
        'U' => [
            "//      //",
            "//=     //=",
            "//=     //=",
            "//=     //=",
            "//=     //=",
            " =////// ==",
            "   ======",
        ],
        'V' => [
            "//      //",
            "//=     //=",
            "//=     //=",
            "//=     //=",
            " =//  // ==",
            "   =// ==",
            "     ==",
        ],
        'W' => [
            "//      //",
            "//=     //=",
            "//=     //=",
            "//= //  //=",
            "//// =////=",
            "//===  =//=",
            " ==      ==",
        ],
        'X' => [
            "//      //",
            " =//  // ==",
            "   =// ==",
            "    //=",
            "  // =//",
            "// ==  =//",
            " ==      ==",
        ],
        'Y' => [
            "//      //",
            " =//  // ==",
            "   =// ==",
            "    //=",
            "    //=",
            "    //=",
            "     ==",
        ],
        'Z' => [
            "//////////",
            " =====//===",
            "    // ==",
            "  // ==",
            "// ==",
            "//////////",
            " ==========",
        ],
        '0' => [
            "  //////",
            "// ===////",
            "//= // =//=",
            "//= //= //=",
            "//// == //=",
            " =////// ==",
            "   ======",
        ],
        '1' => [
            "  //",
            "////=",
            " =//=",
            "  //=",
            "  //=",
            "//////",
            " ======",
        ],
        '2' => [
            "  //////",
            "// =====//",
            " ==   // ==",
            "    // ==",
            "  // ==",
            "//////////",
            " ==========",
        ],
        '3' => [
            "////////",
            " =======//",
            "  ////// ==",
            "   =====//",
            "        //=",
            "//////// ==",
            " ========",
        ],
        '4' => [
            "//    //",
            "//=   //=",
            "//=   //=",
            "//////////",
            " =====//===",
            "      //=",
            "       ==",
        ],
        '5' => [
            "//////////",
            "//=========",
            "////////",
            " =======//",
            "        //=",
            "//////// ==",
            " ========",
        ],
        '6' => [
            "  //////",
            "// ======",
            "////////",
            "//======//",
            "//=     //=",
            " =////// ==",
            "   ======",
        ],
        '7' => [
            "//////////",
            " =======//=",
            "      // ==",
            "    // ==",
            "    //=",
            "    //=",
            "     ==",
        ],
        '8' => [
            "  //////",
            "// =====//",
            " =////// ==",
            "// =====//",
            "//=     //=",
            " =////// ==",
            "   ======",
        ],
        '9' => [
            "  //////",
            "// =====//",
            "//=     //=",
            " =////////=",
            "   =====//=",
            "  ////// ==",
            "   ======",
        ],
        ' ' => [
            "      ",
            "      ",
            "      ",
            "      ",
            "      ",
            "      ",
            "      ",
        ],
        '!' => [
            "//",
            "//=",
            "//=",
            "//=",
            " ==",
            "//",
            " ==",
        ],
        '.' => [
            "",
            "",
            "",
            "",
            "",
            "//",
            " ==",
        ],
        ',' => [
            "",
            "",
            "",
            "",
            "  //",
            "// ==",
            " ==",
        ],
        '?' => [
            "  //////",
            "// =====//",
            " ==   // ==",
            "    // ==",
            "     ==",
            "    //",
            "     ==",
        ],
        ':' => [
            "",
            "//",
            " ==",
            "",
            "//",
            " ==",
            "",
        ],
        '_' => [
            "",
            "",
            "",
            "",
            "",
            "//////////",
            " ==========",
        ],
        '-' => [
            "",
            "",
            "////////",
            " ========",
            "",
            "",
            "",
        ],
        '[' => [
            "//////",
            "//=====",
            "//=",
            "//=",
            "//=",
            "//////",
            " ======",
        ],
        ']' => [
            "//////",
            " ===//=",
            "    //=",
            "    //=",
            "    //=",
            "//////=",
            " ======",
        ],
        '{' => [
            "  ////",
            "// ====",
            "////",
            "//===",
            "//=",
            " =////",
            "   ====",
        ],
        '}' => [
            "////",
            " ===//",
            "  ////=",
            "   =//=",
            "    //=",
            "//// ==",
            " ====",
        ],
        '/' => [
            "        //",
            "      // ==",
            "    // ==",
            "    //=",
            "  // ==",
            "// ==",
            " ==",
        ],
        '=' => [
            "",
            "////////",
            " ========",
            "////////",
            " ========",
            "",
            "",
        ],
        '+' => [
            "",
            "    //",
            "//////////",
            " ===//=====",
            "     ==",
            "",
            "",
        ],
        '#' => [
            "  //  //",
            "//////////",
            " =//==//===",
            "  //= //=",
            "//////////",
            " =//==//===",
            "   ==  ==",
        ],
        '<' => [
            "      //",
            "    // ==",
            "  // ==",
            "// ==",
            " =//",
            "   =//",
            "     ==",
        ],
        '>' => [
            "//",
            " =//",
            "   =//",
            "     =//",
            "    // ==",
            "  // ==",
            "   ==",
        ],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_char_has_glyph() {
        let dict = GlyphDictionary::global();
        assert_eq!(dict.len(), SUPPORTED_CHARS.chars().count());
        for ch in SUPPORTED_CHARS.chars() {
            assert!(dict.contains(ch), "missing glyph for {:?}", ch);
        }
    }

    #[test]
    fn test_rows_use_only_glyph_classes() {
        for ch in SUPPORTED_CHARS.chars() {
            let pattern = GlyphDictionary::global().get(ch).unwrap();
            for row in pattern.rows() {
                assert!(
                    row.chars().all(|c| matches!(c, '/' | '=' | ' ')),
                    "glyph {:?} has a foreign cell in {:?}",
                    ch,
                    row
                );
            }
        }
    }

    #[test]
    fn test_glyphs_fit_cell() {
        for ch in SUPPORTED_CHARS.chars() {
            let pattern = GlyphDictionary::global().get(ch).unwrap();
            assert!(pattern.width() <= GLYPH_WIDTH, "glyph {:?} too wide", ch);
        }
    }

    #[test]
    fn test_lowercase_not_keyed() {
        let dict = GlyphDictionary::global();
        assert!(dict.get('a').is_none());
        assert!(dict.get('A').is_some());
    }

    #[test]
    fn test_fallback_is_space() {
        let dict = GlyphDictionary::global();
        assert_eq!(dict.get_or_space('~'), dict.get(' ').unwrap());
        assert_eq!(dict.get_or_space('Z'), dict.get('Z').unwrap());
    }

    #[test]
    fn test_chars_in_order() {
        let chars: String = GlyphDictionary::global().chars().collect();
        assert_eq!(chars, SUPPORTED_CHARS);
    }
}

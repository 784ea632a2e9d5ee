//! Substitution specs
//!
//! A glyph pattern only knows three cell kinds. A [`SubstitutionSpec`] says
//! what each kind of cell becomes in the output: a fixed character, a random
//! pick from a set, or the input character itself.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel that renders the input character in place of the glyph class
pub const ALPHA_SENTINEL: &str = "!ALPHA";

/// Title-layout sentinel for the same behaviour
pub const TITLE_ALPHA_SENTINEL: &str = "!ASCII";

/// The three cell kinds of a glyph pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphClass {
    /// Stroke cells, `/`
    Slash,
    /// Shadow cells, `=`
    Equals,
    /// Background cells, space
    Void,
}

impl GlyphClass {
    /// The character marking this class inside a pattern
    pub fn marker(&self) -> char {
        match self {
            GlyphClass::Slash => '/',
            GlyphClass::Equals => '=',
            GlyphClass::Void => ' ',
        }
    }

    /// Spec string used when the user leaves this class blank
    pub fn default_spec(&self) -> &'static str {
        match self {
            GlyphClass::Slash => "/",
            GlyphClass::Equals => "=",
            GlyphClass::Void => " ",
        }
    }

    /// All classes, in substitution order
    pub fn all() -> &'static [GlyphClass] {
        &[GlyphClass::Slash, GlyphClass::Equals, GlyphClass::Void]
    }

    /// Display name for help output
    pub fn name(&self) -> &'static str {
        match self {
            GlyphClass::Slash => "Slash",
            GlyphClass::Equals => "Equals",
            GlyphClass::Void => "Void",
        }
    }
}

/// How spec strings are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecDialect {
    /// `!ALPHA` means the input character, anything else is a candidate set
    #[default]
    Standard,
    /// `!ASCII` means the input character and `!xyz` is a candidate set `xyz`
    Title,
}

/// What one glyph class is replaced with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionSpec {
    /// The upper-cased input character
    Alpha,
    /// Always the same character
    Literal(char),
    /// A fresh uniform pick per cell. Holds at least two characters.
    Random(Vec<char>),
}

impl SubstitutionSpec {
    /// Parse an already-normalized spec string in the standard dialect
    pub fn parse(spec: &str, class: GlyphClass) -> Self {
        Self::parse_with(spec, class, SpecDialect::Standard)
    }

    /// Parse an already-normalized spec string.
    ///
    /// An empty string falls back to the class default so the result is never
    /// empty.
    pub fn parse_with(spec: &str, class: GlyphClass, dialect: SpecDialect) -> Self {
        let spec = if spec.is_empty() {
            class.default_spec()
        } else {
            spec
        };

        match dialect {
            SpecDialect::Standard if spec == ALPHA_SENTINEL => SubstitutionSpec::Alpha,
            SpecDialect::Title if spec == TITLE_ALPHA_SENTINEL => SubstitutionSpec::Alpha,
            SpecDialect::Title if spec.len() > 1 && spec.starts_with('!') => {
                Self::from_candidates(&spec[1..])
            }
            _ => Self::from_candidates(spec),
        }
    }

    /// Normalize raw user input, then parse it.
    ///
    /// Whitespace is stripped unless the input is exactly one space.
    /// Input that is empty after stripping resets to the class default.
    pub fn from_user_input(raw: &str, class: GlyphClass, dialect: SpecDialect) -> Self {
        Self::parse_with(&normalize_user_input(raw, class), class, dialect)
    }

    fn from_candidates(spec: &str) -> Self {
        let chars: Vec<char> = spec.chars().collect();
        match chars.as_slice() {
            [single] => SubstitutionSpec::Literal(*single),
            _ => SubstitutionSpec::Random(chars),
        }
    }

    /// Resolve one cell for `input_char`
    pub fn resolve<R: Rng + ?Sized>(&self, input_char: char, rng: &mut R) -> char {
        match self {
            SubstitutionSpec::Alpha => input_char,
            SubstitutionSpec::Literal(ch) => *ch,
            SubstitutionSpec::Random(chars) => chars[rng.random_range(0..chars.len())],
        }
    }

    /// Whether resolution consumes randomness
    pub fn is_random(&self) -> bool {
        matches!(self, SubstitutionSpec::Random(_))
    }

    /// Characters this spec can produce, `None` for [`SubstitutionSpec::Alpha`]
    pub fn candidates(&self) -> Option<Vec<char>> {
        match self {
            SubstitutionSpec::Alpha => None,
            SubstitutionSpec::Literal(ch) => Some(vec![*ch]),
            SubstitutionSpec::Random(chars) => Some(chars.clone()),
        }
    }

    /// Whether every producible character occupies exactly one terminal column
    pub fn is_single_width(&self) -> bool {
        use unicode_width::UnicodeWidthChar;

        self.candidates()
            .map(|chars| chars.iter().all(|ch| ch.width() == Some(1)))
            .unwrap_or(true)
    }
}

impl fmt::Display for SubstitutionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionSpec::Alpha => f.write_str(ALPHA_SENTINEL),
            SubstitutionSpec::Literal(ch) => write!(f, "{}", ch),
            SubstitutionSpec::Random(chars) => {
                for ch in chars {
                    write!(f, "{}", ch)?;
                }
                Ok(())
            }
        }
    }
}

/// Strip whitespace from a user-supplied spec.
///
/// A lone space is kept so the void class can stay blank. Empty results are
/// replaced by the class default.
pub fn normalize_user_input(raw: &str, class: GlyphClass) -> String {
    if raw == " " {
        return raw.to_string();
    }
    let stripped: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    if stripped.is_empty() {
        class.default_spec().to_string()
    } else {
        stripped
    }
}

/// Specs for all three glyph classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    pub slash: SubstitutionSpec,
    pub equals: SubstitutionSpec,
    pub void: SubstitutionSpec,
}

impl Substitutions {
    /// Parse three normalized spec strings in the standard dialect
    pub fn new(slash: &str, equals: &str, void: &str) -> Self {
        Self::with_dialect(slash, equals, void, SpecDialect::Standard)
    }

    /// Parse three normalized spec strings in `dialect`
    pub fn with_dialect(slash: &str, equals: &str, void: &str, dialect: SpecDialect) -> Self {
        Self {
            slash: SubstitutionSpec::parse_with(slash, GlyphClass::Slash, dialect),
            equals: SubstitutionSpec::parse_with(equals, GlyphClass::Equals, dialect),
            void: SubstitutionSpec::parse_with(void, GlyphClass::Void, dialect),
        }
    }

    /// Normalize and parse three raw user strings
    pub fn from_user_input(slash: &str, equals: &str, void: &str, dialect: SpecDialect) -> Self {
        Self {
            slash: SubstitutionSpec::from_user_input(slash, GlyphClass::Slash, dialect),
            equals: SubstitutionSpec::from_user_input(equals, GlyphClass::Equals, dialect),
            void: SubstitutionSpec::from_user_input(void, GlyphClass::Void, dialect),
        }
    }

    /// Spec for one class
    pub fn get(&self, class: GlyphClass) -> &SubstitutionSpec {
        match class {
            GlyphClass::Slash => &self.slash,
            GlyphClass::Equals => &self.equals,
            GlyphClass::Void => &self.void,
        }
    }
}

impl Default for Substitutions {
    fn default() -> Self {
        Self {
            slash: SubstitutionSpec::Literal('/'),
            equals: SubstitutionSpec::Literal('='),
            void: SubstitutionSpec::Literal(' '),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_variants() {
        assert_eq!(
            SubstitutionSpec::parse("!ALPHA", GlyphClass::Slash),
            SubstitutionSpec::Alpha
        );
        assert_eq!(
            SubstitutionSpec::parse("#", GlyphClass::Slash),
            SubstitutionSpec::Literal('#')
        );
        assert_eq!(
            SubstitutionSpec::parse("&@#", GlyphClass::Slash),
            SubstitutionSpec::Random(vec!['&', '@', '#'])
        );
    }

    #[test]
    fn test_empty_resets_to_class_default() {
        assert_eq!(
            SubstitutionSpec::parse("", GlyphClass::Equals),
            SubstitutionSpec::Literal('=')
        );
        assert_eq!(
            SubstitutionSpec::from_user_input("  \t ", GlyphClass::Slash, SpecDialect::Standard),
            SubstitutionSpec::Literal('/')
        );
    }

    #[test]
    fn test_user_input_strips_whitespace() {
        assert_eq!(normalize_user_input(" & @ ", GlyphClass::Slash), "&@");
        assert_eq!(normalize_user_input(" ", GlyphClass::Slash), " ");
        assert_eq!(normalize_user_input("  ", GlyphClass::Void), " ");
        assert_eq!(normalize_user_input("", GlyphClass::Equals), "=");
    }

    #[test]
    fn test_title_dialect() {
        let title = SpecDialect::Title;
        assert_eq!(
            SubstitutionSpec::parse_with("!ASCII", GlyphClass::Slash, title),
            SubstitutionSpec::Alpha
        );
        assert_eq!(
            SubstitutionSpec::parse_with("!&@", GlyphClass::Slash, title),
            SubstitutionSpec::Random(vec!['&', '@'])
        );
        assert_eq!(
            SubstitutionSpec::parse_with("!*", GlyphClass::Slash, title),
            SubstitutionSpec::Literal('*')
        );
        assert_eq!(
            SubstitutionSpec::parse_with("!", GlyphClass::Slash, title),
            SubstitutionSpec::Literal('!')
        );
        // the standard sentinel is just five candidates in title layout
        assert_eq!(
            SubstitutionSpec::parse_with("!ALPHA", GlyphClass::Slash, title),
            SubstitutionSpec::Random("ALPHA".chars().collect())
        );
    }

    #[test]
    fn test_resolve() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(SubstitutionSpec::Alpha.resolve('Q', &mut rng), 'Q');
        assert_eq!(SubstitutionSpec::Literal('*').resolve('Q', &mut rng), '*');

        let random = SubstitutionSpec::Random(vec!['x', 'y']);
        for _ in 0..50 {
            assert!(matches!(random.resolve('Q', &mut rng), 'x' | 'y'));
        }
    }

    #[test]
    fn test_display_round_trips() {
        for spec in ["!ALPHA", "#", "&@#", " "] {
            assert_eq!(SubstitutionSpec::parse(spec, GlyphClass::Void).to_string(), spec);
        }
    }

    #[test]
    fn test_single_width() {
        assert!(SubstitutionSpec::Literal('#').is_single_width());
        assert!(SubstitutionSpec::Alpha.is_single_width());
        assert!(!SubstitutionSpec::Literal('字').is_single_width());
    }

    #[test]
    fn test_default_substitutions() {
        assert_eq!(Substitutions::default(), Substitutions::new("/", "=", " "));
        assert_eq!(
            Substitutions::default().get(GlyphClass::Void),
            &SubstitutionSpec::Literal(' ')
        );
    }
}

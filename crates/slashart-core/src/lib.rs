//! # slashart core
//!
//! Text to retro slash art.
//!
//! This crate provides:
//! - The glyph dictionary: 7-row `/` `=` patterns for A-Z, 0-9 and punctuation
//! - Substitution specs for the three glyph classes
//! - The renderer, line and title layouts
//! - Validation of input against the supported character set
//! - Plain, chat and JSON export
//!
//! ```text
//!   //////      ////////
//! // =====//    //======//
//! //=     //=   //////// ==
//! //////////=   //======//
//! //======//=   //=     //=
//! //=     //=   //////// ==
//!  ==      ==    ========
//! ```

pub mod error;
pub mod export;
pub mod glyphs;
pub mod renderer;
pub mod substitution;
pub mod validation;

pub use error::{CoreError, Result};
pub use export::{export, write_lines, ExportFormat};
pub use glyphs::{GlyphDictionary, GlyphPattern, GLYPH_HEIGHT, GLYPH_WIDTH, SUPPORTED_CHARS};
pub use renderer::{
    line_width, render, render_title, GlyphRenderer, Layout, RenderConfig, DEFAULT_DISPLAY_TEXT,
    DEFAULT_TITLE_TEXT,
};
pub use substitution::{
    normalize_user_input, GlyphClass, SpecDialect, SubstitutionSpec, Substitutions,
    ALPHA_SENTINEL,
};
pub use validation::{validate, Validation};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core, building the glyph dictionary up front
pub fn init() -> Result<()> {
    tracing::info!("Initializing slashart core v{}", VERSION);
    let glyphs = GlyphDictionary::global().len();
    tracing::debug!("{} glyphs available", glyphs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert!(init().is_ok());
    }
}

//! Built-in substitution presets
//!
//! Quick picks offered for each glyph class, e.g. by `--list-presets`.

use slashart_core::GlyphClass;

/// A named spec string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Short label for display
    pub label: &'static str,
    /// Spec string
    pub value: &'static str,
}

const SLASH_PRESETS: &[Preset] = &[
    Preset { label: "/", value: "/" },
    Preset { label: "ALPHA", value: "!ALPHA" },
    Preset { label: "|", value: "|" },
    Preset { label: "#", value: "#" },
    Preset { label: "*", value: "*" },
    Preset { label: "&@#", value: "&@#" },
];

const EQUALS_PRESETS: &[Preset] = &[
    Preset { label: "=", value: "=" },
    Preset { label: "Space", value: " " },
    Preset { label: "-", value: "-" },
    Preset { label: "_", value: "_" },
    Preset { label: "#", value: "#" },
];

const VOID_PRESETS: &[Preset] = &[
    Preset { label: "Space", value: " " },
    Preset { label: ".", value: "." },
    Preset { label: "·", value: "·" },
    Preset { label: "_", value: "_" },
    Preset { label: "*", value: "*" },
];

/// Presets for one glyph class, default first
pub fn presets(class: GlyphClass) -> &'static [Preset] {
    match class {
        GlyphClass::Slash => SLASH_PRESETS,
        GlyphClass::Equals => EQUALS_PRESETS,
        GlyphClass::Void => VOID_PRESETS,
    }
}

/// Find a preset by label, ignoring case
pub fn find_preset(class: GlyphClass, label: &str) -> Option<&'static Preset> {
    presets(class)
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slashart_core::SubstitutionSpec;

    #[test]
    fn test_default_preset_first() {
        for class in GlyphClass::all() {
            assert_eq!(presets(*class)[0].value, class.default_spec());
        }
    }

    #[test]
    fn test_presets_parse() {
        for class in GlyphClass::all() {
            for preset in presets(*class) {
                assert!(preset.value.chars().count() >= 1);
                let spec = SubstitutionSpec::parse(preset.value, *class);
                assert!(spec.is_single_width(), "{}", preset.label);
            }
        }
    }

    #[test]
    fn test_find_preset() {
        let alpha = find_preset(GlyphClass::Slash, "alpha").unwrap();
        assert_eq!(alpha.value, "!ALPHA");
        assert_eq!(
            find_preset(GlyphClass::Equals, "space").map(|p| p.value),
            Some(" ")
        );
        assert!(find_preset(GlyphClass::Void, "nope").is_none());
    }
}

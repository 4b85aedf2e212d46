//! Icon Set
//!
//! Fixed icon identifiers with their glyphs and per-icon progress colors.
//! Unknown identifiers fall back to the default green pair.

/// Category options offered by the picker: (label, icon identifier)
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("Pet", "Pet"),
    ("Personal", "Personal"),
    ("Self Care", "SelfCare"),
    ("Shop", "Shop"),
    ("Work", "Work"),
];

/// Progress-ring color pair (filled stroke, unfilled track)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IconColors {
    pub filled: &'static str,
    pub unfilled: &'static str,
}

const DEFAULT_COLORS: IconColors = IconColors {
    filled: "#06D6A0",
    unfilled: "#D5F7EE",
};

/// Glyph for an icon identifier
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "Pet" => "\u{1F43E}",       // paw prints
        "Personal" => "\u{1F464}",  // bust
        "SelfCare" => "\u{1F9D8}",  // person in lotus position
        "Shop" => "\u{1F6CD}",      // shopping bags
        "Work" => "\u{1F4BC}",      // briefcase
        _ => "\u{1F4CB}",           // clipboard
    }
}

/// Progress colors for an icon identifier
pub fn icon_colors(icon: &str) -> IconColors {
    match icon {
        "Work" => IconColors {
            filled: "#5F33E1",
            unfilled: "#EDE8FF",
        },
        "Personal" => IconColors {
            filled: "#F478B8",
            unfilled: "#FFE3F1",
        },
        "Pet" => IconColors {
            filled: "#FF7D53",
            unfilled: "#FFE6D4",
        },
        "SelfCare" => IconColors {
            filled: "#0087FF",
            unfilled: "#D7EBFF",
        },
        "Shop" => IconColors {
            filled: "#FFB800",
            unfilled: "#FFF3D6",
        },
        _ => DEFAULT_COLORS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_option_has_distinct_colors() {
        for (_, icon) in CATEGORY_OPTIONS {
            assert_ne!(icon_colors(icon).filled, icon_colors(icon).unfilled);
        }
    }

    #[test]
    fn unknown_icon_falls_back_to_default() {
        assert_eq!(icon_colors("Nonsense").filled, DEFAULT_COLORS.filled);
        assert_eq!(icon_glyph("Nonsense"), "\u{1F4CB}");
    }
}

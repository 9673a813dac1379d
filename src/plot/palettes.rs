//! Named Vega color schemes
//!
//! Vega resolves scheme names itself; this registry only lets the plot helpers
//! warn early about names Vega will not recognise.

use crate::chart::ChartWarning;

// =============================================================================
// Categorical Schemes
// =============================================================================

pub const CATEGORICAL_SCHEMES: &[&str] = &[
    "accent", "category10", "category20", "category20b", "category20c",
    "dark2", "observable10", "paired", "pastel1", "pastel2",
    "set1", "set2", "set3", "tableau10", "tableau20",
];

// =============================================================================
// Sequential Schemes
// =============================================================================

pub const SEQUENTIAL_SCHEMES: &[&str] = &[
    // single hue
    "blues", "tealblues", "teals", "greens", "browns", "oranges", "reds",
    "purples", "warmgreys", "greys",
    // multi-hue
    "viridis", "magma", "inferno", "plasma", "cividis", "turbo",
    "bluegreen", "bluepurple", "goldgreen", "goldorange", "goldred",
    "greenblue", "orangered", "purplebluegreen", "purpleblue", "purplered",
    "redpurple", "yellowgreenblue", "yellowgreen", "yelloworangebrown",
    "yelloworangered",
    // for dark backgrounds
    "darkblue", "darkgold", "darkgreen", "darkmulti", "darkred",
    // for light backgrounds
    "lightgreyred", "lightgreyteal", "lightmulti", "lightorange", "lighttealblue",
    // cyclical
    "rainbow", "sinebow",
];

// =============================================================================
// Diverging Schemes
// =============================================================================

pub const DIVERGING_SCHEMES: &[&str] = &[
    "blueorange", "brownbluegreen", "purplegreen", "pinkyellowgreen",
    "purpleorange", "redblue", "redgrey", "redyellowblue", "redyellowgreen",
    "spectral",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    Categorical,
    Sequential,
    Diverging,
}

/// Look up a scheme by name (case-insensitive)
pub fn scheme_kind(name: &str) -> Option<SchemeKind> {
    let name = name.to_lowercase();
    let name = name.as_str();
    if CATEGORICAL_SCHEMES.contains(&name) {
        Some(SchemeKind::Categorical)
    } else if SEQUENTIAL_SCHEMES.contains(&name) {
        Some(SchemeKind::Sequential)
    } else if DIVERGING_SCHEMES.contains(&name) {
        Some(SchemeKind::Diverging)
    } else {
        None
    }
}

/// Warn about a scheme name Vega does not know
pub(crate) fn check_scheme(name: &str) -> Option<ChartWarning> {
    if scheme_kind(name).is_some() {
        return None;
    }
    tracing::warn!(scheme = name, "Unknown Vega color scheme, Vega will fall back to its default");
    Some(ChartWarning::UnknownColorScheme {
        scheme: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_lookup() {
        assert_eq!(scheme_kind("tableau20"), Some(SchemeKind::Categorical));
        assert_eq!(scheme_kind("yellowgreenblue"), Some(SchemeKind::Sequential));
        assert_eq!(scheme_kind("blueorange"), Some(SchemeKind::Diverging));
        assert_eq!(scheme_kind("Dark2"), Some(SchemeKind::Categorical));
        assert_eq!(scheme_kind("nope"), None);
    }

    #[test]
    fn test_check_scheme() {
        assert!(check_scheme("dark2").is_none());
        assert_eq!(
            check_scheme("rainbowz"),
            Some(ChartWarning::UnknownColorScheme {
                scheme: "rainbowz".to_string()
            })
        );
    }

    #[test]
    fn test_scheme_lists_are_disjoint() {
        for name in CATEGORICAL_SCHEMES {
            assert!(!SEQUENTIAL_SCHEMES.contains(name));
            assert!(!DIVERGING_SCHEMES.contains(name));
        }
        for name in SEQUENTIAL_SCHEMES {
            assert!(!DIVERGING_SCHEMES.contains(name));
        }
    }
}

//! Category and severity presentation: total color mappings with a fallback.

use ratatui::style::Color;

use crate::core::analysis::Severity;

/// Display color for a bias category. The taxonomy is open-ended, so
/// unrecognized categories get a gray fallback rather than failing.
pub(crate) fn category_color(category: &str) -> Color {
    match category {
        "gender" => Color::Rgb(236, 72, 153),        // pink
        "race" => Color::Rgb(168, 85, 247),          // purple
        "religion" => Color::Rgb(99, 102, 241),      // indigo
        "political" => Color::Rgb(249, 115, 22),     // orange
        "socioeconomic" => Color::Rgb(20, 184, 166), // teal
        "age" => Color::Rgb(6, 182, 212),            // cyan
        _ => Color::Gray,
    }
}

pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Severe => Color::Rgb(239, 68, 68),    // red
        Severity::Moderate => Color::Rgb(234, 179, 8),  // yellow
        Severity::Mild => Color::Rgb(96, 165, 250),     // blue
        Severity::None => Color::Rgb(74, 222, 128),     // green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_gray() {
        assert_eq!(category_color("ableist"), Color::Gray);
    }

    #[test]
    fn known_categories_have_distinct_colors() {
        let known = ["gender", "race", "religion", "political", "socioeconomic", "age"];
        for category in known {
            assert_ne!(category_color(category), Color::Gray);
        }
    }
}

use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category → Color32
// ---------------------------------------------------------------------------

/// Maps the categories of one column (the candidate level) to distinct colours.
///
/// Built from the full table so a category keeps its colour while filtering.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
    /// Legend name for empty cells, distinct from every real category.
    unspecified: String,
}

impl ColorMap {
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();

        let mut unspecified = "(unspecified)".to_string();
        let mut n = 2;
        while categories.contains(&unspecified) {
            unspecified = format!("(unspecified {n})");
            n += 1;
        }

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
            unspecified,
        }
    }

    /// Legend name for a category; empty cells get their own entry.
    pub fn series_name<'a>(&'a self, category: Option<&'a str>) -> &'a str {
        category.unwrap_or(self.unspecified.as_str())
    }

    /// Look up the colour for a category; empty or unknown ones are grey.
    pub fn color_for(&self, category: Option<&str>) -> Color32 {
        category
            .and_then(|c| self.mapping.get(c))
            .copied()
            .unwrap_or(self.default_color)
    }
}

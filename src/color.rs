use std::collections::BTreeMap;

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
// Color mapping: company name → Color32
// ---------------------------------------------------------------------------

/// Maps company names to distinct colours for the scatter charts.
#[derive(Debug, Clone)]
pub struct CompanyColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CompanyColors {
    /// Build a colour map from the distinct company names.
    pub fn new<'a>(companies: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = companies.into_iter().collect();
        let palette = generate_palette(names.len());
        let mapping: BTreeMap<String, Color32> = names
            .into_iter()
            .zip(palette)
            .map(|(name, color)| (name.to_string(), color))
            .collect();

        CompanyColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a company.
    pub fn color_for(&self, company: &str) -> Color32 {
        self.mapping
            .get(company)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_entries() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        let mut unique = palette.clone();
        unique.dedup();
        assert_eq!(unique.len(), 8);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_company_gets_the_default_colour() {
        let colors = CompanyColors::new(["Acme", "Globex"]);
        assert_ne!(colors.color_for("Acme"), Color32::GRAY);
        assert_eq!(colors.color_for("Unknown"), Color32::GRAY);
    }
}

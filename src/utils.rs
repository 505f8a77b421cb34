//! Colour helpers shared by the dialogs and the configuration.

use crate::Swatch;
use slint::Color;

/// Colours offered by the colour dialog, in display order.
pub const PALETTE: [&str; 8] = [
    "#4e5661", "#4e6159", "#61574e", "#5a4e61", "#8c5a5a", "#5a6f8c", "#c7c7c7", "#212121",
];

/// Parse a hex color string (e.g., "#ff0000") to a Slint Color
pub fn parse_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::from_rgb_u8(r, g, b))
    } else {
        None
    }
}

/// Like [`parse_color`], but logs and falls back when the value is malformed.
pub fn parse_color_or(hex: &str, fallback: Color) -> Color {
    parse_color(hex).unwrap_or_else(|| {
        log::warn!("Ignoring malformed colour {hex:?}");
        fallback
    })
}

/// Lowercase `#rrggbb`; alpha is dropped.
pub fn color_to_hex(color: Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        color.red(),
        color.green(),
        color.blue()
    )
}

pub fn palette_swatches() -> Vec<Swatch> {
    PALETTE
        .iter()
        .filter_map(|hex| {
            parse_color(hex).map(|color| Swatch {
                color,
                hex: (*hex).into(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_color("#4e5661"), Some(Color::from_rgb_u8(0x4e, 0x56, 0x61)));
        assert_eq!(parse_color(" C7C7C7 "), Some(Color::from_rgb_u8(0xc7, 0xc7, 0xc7)));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gg0000"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn hex_formatting_matches_parsing() {
        let color = Color::from_rgb_u8(0x21, 0x21, 0x21);
        assert_eq!(color_to_hex(color), "#212121");
        assert_eq!(parse_color(&color_to_hex(color)), Some(color));
    }

    #[test]
    fn fallback_used_for_bad_config_values() {
        let fallback = Color::from_rgb_u8(1, 2, 3);
        assert_eq!(parse_color_or("blue", fallback), fallback);
    }

    #[test]
    fn every_palette_entry_becomes_a_swatch() {
        let swatches = palette_swatches();
        assert_eq!(swatches.len(), PALETTE.len());
        assert_eq!(swatches[0].hex.as_str(), PALETTE[0]);
    }
}

//! CSS colour strings as stored on elements and in the config.

use image::Rgba;

use crate::error::{EditorError, EditorResult};

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("gold", [255, 215, 0]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
];

/// Parse a CSS colour (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`,
/// `rgba()` or a basic named colour).
pub fn parse_css_color(input: &str) -> EditorResult<Rgba<u8>> {
    let s = input.trim();
    let invalid = || EditorError::InvalidInput(format!("unrecognised colour '{}'", input));

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(args).ok_or_else(invalid);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, [r, g, b])| Rgba([*r, *g, *b, 255]))
        .ok_or_else(invalid)
}

/// Format as `#rrggbb`, dropping alpha.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, _] = color.0;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, 255])),
        4 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?])),
        6 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Rgba<u8>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |s: &str| s.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);
    let alpha = match parts.get(3) {
        Some(a) => (a.parse::<f32>().ok()?.clamp(0.0, 1.0) * 255.0).round() as u8,
        None => 255,
    };

    Some(Rgba([channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_hex() {
        assert_eq!(parse_css_color("#fff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_css_color("#00ccff").unwrap(), Rgba([0, 204, 255, 255]));
        assert_eq!(parse_css_color("#1e1e1e80").unwrap(), Rgba([30, 30, 30, 128]));
    }

    #[test]
    fn test_functional_and_named() {
        assert_eq!(parse_css_color("rgb(10, 20, 30)").unwrap(), Rgba([10, 20, 30, 255]));
        assert_eq!(parse_css_color("rgba(10,20,30,0)").unwrap(), Rgba([10, 20, 30, 0]));
        assert_eq!(parse_css_color("White").unwrap(), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_invalid_colors() {
        for bad in ["", "#12", "#zzzzzz", "rgb(1,2)", "chartreuse-ish"] {
            assert!(matches!(parse_css_color(bad), Err(EditorError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(to_hex(Rgba([153, 255, 153, 255])), "#99ff99");
    }
}

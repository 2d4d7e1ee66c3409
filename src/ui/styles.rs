//! Display colors derived from an event's `#RRGGBB` base color.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::error::{AppError, AppResult};

/// Default blend toward white for the light tint.
pub const LIGHT_TINT_FACTOR: f64 = 0.85;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
        .expect("hex color pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Blend each channel `factor` of the way toward white.
    pub fn lighten(self, factor: f64) -> Rgb {
        let blend = |c: u8| {
            let c = f64::from(c);
            (c + (255.0 - c) * factor).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: blend(self.r),
            g: blend(self.g),
            b: blend(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Light background tint and solid border tone for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventShades {
    pub light: String,
    pub border: String,
}

pub fn parse_hex_color(value: &str) -> AppResult<Rgb> {
    let caps = HEX_COLOR
        .captures(value)
        .ok_or_else(|| AppError::invalid_color(value))?;

    let channel = |i: usize| {
        u8::from_str_radix(&caps[i], 16).map_err(|_| AppError::invalid_color(value))
    };

    Ok(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// The same color re-expressed as `rgb(r, g, b)`.
pub fn border(hex: &str) -> AppResult<String> {
    Ok(parse_hex_color(hex)?.to_string())
}

pub fn lighten(hex: &str) -> AppResult<String> {
    lighten_by(hex, LIGHT_TINT_FACTOR)
}

pub fn lighten_by(hex: &str, factor: f64) -> AppResult<String> {
    Ok(parse_hex_color(hex)?.lighten(factor).to_string())
}

pub fn shade(hex: &str, factor: f64) -> AppResult<EventShades> {
    let base = parse_hex_color(hex)?;
    Ok(EventShades {
        light: base.lighten(factor).to_string(),
        border: base.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_black_and_white() {
        assert_eq!(lighten("#000000").unwrap(), "rgb(217, 217, 217)");
        assert_eq!(lighten("#FFFFFF").unwrap(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_border_keeps_color() {
        assert_eq!(border("#3B82F6").unwrap(), "rgb(59, 130, 246)");
        assert_eq!(border("#3b82f6").unwrap(), "rgb(59, 130, 246)");
    }

    #[test]
    fn test_lighten_blue() {
        // 59 + 196 * 0.85 = 225.6, 130 + 125 * 0.85 = 236.25, 246 + 9 * 0.85 = 253.65
        assert_eq!(lighten("#3B82F6").unwrap(), "rgb(226, 236, 254)");
    }

    #[test]
    fn test_lighten_by_zero_is_identity() {
        assert_eq!(lighten_by("#10B981", 0.0).unwrap(), border("#10B981").unwrap());
        assert_eq!(lighten_by("#10B981", 1.0).unwrap(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_shade_pairs_tint_and_border() {
        let shades = shade("#EF4444", LIGHT_TINT_FACTOR).unwrap();
        assert_eq!(shades.border, "rgb(239, 68, 68)");
        assert_eq!(shades.light, lighten("#EF4444").unwrap());
    }

    #[test]
    fn test_malformed_colors_fail() {
        for bad in ["", "#FFF", "3B82F6", "#3B82F", "#3B82F6A", "#GG0000", "red", " #3B82F6"] {
            match parse_hex_color(bad) {
                Err(AppError::InvalidColorFormat(value)) => assert_eq!(value, bad),
                other => panic!("expected InvalidColorFormat for {:?}, got {:?}", bad, other),
            }
            assert!(!is_hex_color(bad));
        }
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB colour, (de)serialized as `#RRGGBB`
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

/// Colours assigned to cargo in the order it is added to a manifest
pub const PALETTE: [Color; 8] = [
    Color(0xF9, 0x73, 0x16), // ORANGE
    Color(0xF5, 0x9E, 0x0B), // AMBER
    Color(0x3B, 0x82, 0xF6), // BLUE
    Color(0x6B, 0x72, 0x80), // GRAY
    Color(0xA8, 0x55, 0xF7), // PURPLE
    Color(0xEC, 0x48, 0x99), // PINK
    Color(0x22, 0xC5, 0x5E), // GREEN
    Color(0xEF, 0x44, 0x44), // RED
];

/// Colour for the cargo at position `index`, wrapping around the palette
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

impl Color {
    pub fn change_brightness(self, fraction: f32) -> Color {
        let Color(r, g, b) = self;

        let r = (r as f32 * fraction).min(255.0) as u8;
        let g = (g as f32 * fraction).min(255.0) as u8;
        let b = (b as f32 * fraction).min(255.0) as u8;
        Color(r, g, b)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid colour '{s}', expected #RRGGBB");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c: Color = "#3b82f6".parse().unwrap();
        assert_eq!(c, PALETTE[2]);
        assert_eq!(c.to_string(), "#3B82F6");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(palette_color(0), palette_color(8));
        assert_eq!(palette_color(9), PALETTE[1]);
    }
}

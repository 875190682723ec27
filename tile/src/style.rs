use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

pub const BLUE: Color = Color(0x477984);
pub const ORANGE: Color = Color(0xEEAA4D);
pub const RED: Color = Color(0xC03C44);
pub const WHITE: Color = Color(0xFEF5EB);

pub const DEFAULT_FILL: Color = BLUE;
pub const DEFAULT_STROKE: Color = Color(0x313E4A);

// Color is a 0xRRGGBB value. It serializes as a "#rrggbb" string and deserializes from either
// that string form or a plain integer.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "SerializedColor", into = "String")]
pub struct Color(pub u32);

#[derive(Deserialize)]
#[serde(untagged)]
pub enum SerializedColor {
    Code(String),
    Value(u32),
}

impl Color {
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

impl TryFrom<SerializedColor> for Color {
    type Error = String;

    fn try_from(value: SerializedColor) -> Result<Color, String> {
        match value {
            SerializedColor::Value(value) if value <= 0xffffff => Ok(Color(value)),
            SerializedColor::Value(value) => Err(format!("color {:#x} does not fit in 0xRRGGBB", value)),
            SerializedColor::Code(code) => {
                let digits = code.trim_start_matches('#').trim_start_matches("0x");
                if digits.len() != 6 {
                    return Err(format!("color {} is not of the form #rrggbb", code))
                }
                u32::from_str_radix(digits, 16)
                    .map(Color)
                    .map_err(|_| format!("color {} is not of the form #rrggbb", code))
            },
        }
    }
}

// Style carries the visual attributes of a polygon. Geometry never reads it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
}

impl Style {
    pub fn fill(fill: Color) -> Style {
        Style { fill, ..Style::default() }
    }
}

impl Default for Style {
    fn default() -> Style {
        Style {
            fill: DEFAULT_FILL,
            stroke: DEFAULT_STROKE,
        }
    }
}

// Palette assigns fills by side count: triangles take the first color, squares the second and so on,
// wrapping around when there are more side counts than colors.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Palette(pub Vec<Color>);

impl Palette {
    pub fn style_for(&self, sides: usize) -> Style {
        if self.0.is_empty() {
            return Style::default()
        }
        let index = sides.saturating_sub(3) % self.0.len();
        Style::fill(self.0[index])
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette(vec![BLUE, ORANGE, RED, WHITE])
    }
}

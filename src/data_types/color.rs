use eyre::{bail, eyre, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// RGBA colour carried through to the rendering adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            bail!("invalid hex colour {hex:?}");
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| eyre!("invalid hex colour {hex:?}: {e}"))
        };
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, c) in out.iter_mut().zip(digits.chars()) {
                    let v = c
                        .to_digit(16)
                        .ok_or_else(|| eyre!("invalid hex colour {hex:?}"))?
                        as u8;
                    *slot = v * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            n => bail!("invalid hex colour {hex:?}: expected 3, 6 or 8 digits, got {n}"),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        crate::theme::FALLBACK_COLOR
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Color {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Ordered colour cycle injected through `ChartConfig`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Cyclic lookup; an empty palette yields the fallback colour.
    pub fn color_at(&self, index: usize) -> Color {
        if self.0.is_empty() {
            return crate::theme::FALLBACK_COLOR;
        }
        self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(crate::theme::DEFAULT_PALETTE.to_vec())
    }
}

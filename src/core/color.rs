use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BindError, BindResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex_str(input: &str) -> BindResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        // Non-ASCII bytes would land the channel slices off char boundaries.
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(BindError::InvalidData(format!(
                "hex color `{input}` must have 6 or 8 hex digits"
            )));
        }
        let channel = |range: std::ops::Range<usize>| -> BindResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| BindError::InvalidData(format!("hex color `{input}` is malformed")))
        };
        let red = channel(0..2)?;
        let green = channel(2..4)?;
        let blue = channel(4..6)?;
        let alpha = if digits.len() == 8 { channel(6..8)? } else { 1.0 };
        Ok(Self::rgba(red, green, blue, alpha))
    }

    pub fn validate(self) -> BindResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(BindError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Qualitative fallback palette used for categories absent from a [`ColorMap`].
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::rgb(99.0 / 255.0, 110.0 / 255.0, 250.0 / 255.0),
    Color::rgb(239.0 / 255.0, 85.0 / 255.0, 59.0 / 255.0),
    Color::rgb(0.0, 204.0 / 255.0, 150.0 / 255.0),
    Color::rgb(171.0 / 255.0, 99.0 / 255.0, 250.0 / 255.0),
    Color::rgb(255.0 / 255.0, 161.0 / 255.0, 90.0 / 255.0),
    Color::rgb(25.0 / 255.0, 211.0 / 255.0, 243.0 / 255.0),
    Color::rgb(255.0 / 255.0, 102.0 / 255.0, 146.0 / 255.0),
    Color::rgb(182.0 / 255.0, 232.0 / 255.0, 128.0 / 255.0),
    Color::rgb(255.0 / 255.0, 151.0 / 255.0, 255.0 / 255.0),
    Color::rgb(254.0 / 255.0, 203.0 / 255.0, 82.0 / 255.0),
];

/// Fixed category-to-color configuration plus a deterministic fallback
/// palette.
///
/// Supplied once at binder construction. Categories listed here always render
/// in their configured color; everything else takes palette colors in
/// first-encounter order within one bind call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    entries: IndexMap<String, Color>,
    palette: Vec<Color>,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ColorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, key: impl Into<String>, color: Color) -> Self {
        self.entries.insert(key.into(), color);
        self
    }

    /// Replaces the fallback palette. An empty palette fails `validate`.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn color_for(&self, key: &str) -> Option<Color> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> BindResult<()> {
        if self.palette.is_empty() {
            return Err(BindError::InvalidData(
                "color map fallback palette must not be empty".to_owned(),
            ));
        }
        for (key, color) in &self.entries {
            color.validate().map_err(|_| {
                BindError::InvalidData(format!("color map entry `{key}` has invalid channels"))
            })?;
        }
        for color in &self.palette {
            color.validate()?;
        }
        Ok(())
    }

    /// Starts a per-bind resolution pass over this map.
    #[must_use]
    pub fn assigner(&self) -> ColorAssigner<'_> {
        ColorAssigner {
            map: self,
            assigned: IndexMap::new(),
            cursor: 0,
        }
    }
}

/// One bind call's category-to-color resolution state.
///
/// Configured entries win; unmapped categories are memoized so the same key
/// resolves to the same palette color for the lifetime of the assigner.
#[derive(Debug)]
pub struct ColorAssigner<'a> {
    map: &'a ColorMap,
    assigned: IndexMap<String, Color>,
    cursor: usize,
}

impl ColorAssigner<'_> {
    pub fn resolve(&mut self, key: &str) -> Color {
        if let Some(configured) = self.map.color_for(key) {
            return configured;
        }
        if let Some(assigned) = self.assigned.get(key) {
            return *assigned;
        }
        // An empty palette is a validate-level config error; resolution
        // still has to stay total for maps that skipped validation.
        let palette = &self.map.palette;
        let color = if palette.is_empty() {
            DEFAULT_PALETTE[0]
        } else {
            palette[self.cursor % palette.len()]
        };
        self.cursor += 1;
        self.assigned.insert(key.to_owned(), color);
        color
    }
}

use crate::error::ConfigurationError;
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::{Srgb, Srgba};
use serde::Deserialize;
use serde_with::DeserializeFromStr;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};

/// A color written the way a stylesheet would: a CSS name, a hex code, or `transparent`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr)]
pub struct CssColor(pub Srgba<f64>);

impl CssColor {
    pub fn transparent() -> Self {
        Self(Srgba::new(0.0, 0.0, 0.0, 0.0))
    }
}

impl FromStr for CssColor {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "transparent" {
            return Ok(Self::transparent());
        }

        let rgb = palette::named::from_str(&name)
            .or_else(|| {
                name.strip_prefix('#')
                    .and_then(|hex| hex.parse::<Srgb<u8>>().ok())
            })
            .ok_or_else(|| ConfigurationError::InvalidColor(s.to_string()))?;

        let (r, g, b) = rgb.into_format::<f64>().into_components();
        Ok(Self(Srgba::new(r, g, b, 1.0)))
    }
}

impl From<CssColor> for Srgba<f64> {
    fn from(color: CssColor) -> Self {
        color.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BullseyeColors {
    pub inner: CssColor,
    pub outer: CssColor,
}

/// The `[colors]` config table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorConfig {
    pub background: CssColor,
    pub numbers: CssColor,
    pub wire: CssColor,
    pub shadow: CssColor,
    pub segment: [CssColor; 2],
    pub multiplier: [CssColor; 2],
    pub bullseye: BullseyeColors,
}

/// Validated board palette. Alternating pairs are indexed by segment parity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub background: Srgba<f64>,
    pub label: Srgba<f64>,
    pub outline: Srgba<f64>,
    pub shadow: Srgba<f64>,
    pub segment: [Srgba<f64>; 2],
    pub multiplier: [Srgba<f64>; 2],
    pub inner_bullseye: Srgba<f64>,
    pub outer_bullseye: Srgba<f64>,
}

impl ColorScheme {
    pub fn new(config: &ColorConfig) -> Result<Self, ConfigurationError> {
        let pair = |colors: [CssColor; 2], name: &'static str| {
            if colors[0] == colors[1] {
                Err(ConfigurationError::IdenticalAlternates(name))
            } else {
                Ok(colors.map(|c| c.0))
            }
        };

        Ok(Self {
            background: config.background.into(),
            label: config.numbers.into(),
            outline: config.wire.into(),
            shadow: config.shadow.into(),
            segment: pair(config.segment, "segment")?,
            multiplier: pair(config.multiplier, "multiplier")?,
            inner_bullseye: config.bullseye.inner.into(),
            outer_bullseye: config.bullseye.outer.into(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct FontFamily(String);

crate::impl_string_newtype!(FontFamily);

/// A CSS-style font shorthand such as `bold 22px arial`.
#[derive(Debug, Clone, PartialEq, DeserializeFromStr)]
pub struct FontSpec {
    pub slant: FontSlant,
    pub weight: FontWeight,
    pub size: f64,
    pub family: FontFamily,
}

impl FromStr for FontSpec {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigurationError::InvalidFont(s.to_string());
        let mut tokens = s.split_whitespace();

        let mut slant = FontSlant::default();
        let mut weight = FontWeight::default();
        let mut size = None;
        // style keywords must come before the size
        for token in tokens.by_ref() {
            if let Some(px) = token.strip_suffix("px") {
                size = px.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0);
                break;
            } else if let Ok(w) = token.parse::<FontWeight>() {
                weight = w;
            } else if let Ok(sl) = token.parse::<FontSlant>() {
                slant = sl;
            } else {
                return Err(invalid());
            }
        }

        let size = size.ok_or_else(invalid)?;
        let family = tokens.collect::<Vec<_>>().join(" ");
        if family.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            slant,
            weight,
            size,
            family: FontFamily::new(family),
        })
    }
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.slant != FontSlant::Normal {
            write!(f, "{} ", self.slant)?;
        }
        if self.weight != FontWeight::Normal {
            write!(f, "{} ", self.weight)?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Srgba<f64>) -> (u8, u8, u8, u8) {
        let c = color.into_format::<u8, u8>();
        (c.red, c.green, c.blue, c.alpha)
    }

    #[test]
    fn test_css_color_names() {
        let cases = [
            ("wheat", (245, 222, 179, 255)),
            ("Green", (0, 128, 0, 255)),
            ("RED", (255, 0, 0, 255)),
            ("whitesmoke", (245, 245, 245, 255)),
            ("silver", (192, 192, 192, 255)),
            ("#102030", (16, 32, 48, 255)),
            ("transparent", (0, 0, 0, 0)),
        ];

        for (input, expected) in cases {
            let color: CssColor = input.parse().unwrap();
            assert_eq!(rgb(color.0), expected, "{input}");
        }
    }

    #[test]
    fn test_css_color_rejects_unknown() {
        assert_eq!(
            "not-a-color".parse::<CssColor>(),
            Err(ConfigurationError::InvalidColor("not-a-color".into()))
        );
        assert!("#zzzzzz".parse::<CssColor>().is_err());
    }

    #[test]
    fn test_css_color_deserialization() {
        let color: CssColor = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(rgb(color.0), (0, 0, 0, 255));
        assert!(serde_json::from_str::<CssColor>("\"blurple\"").is_err());
    }

    fn color_config(segment: [&str; 2]) -> ColorConfig {
        let c = |s: &str| s.parse::<CssColor>().unwrap();
        ColorConfig {
            background: c("black"),
            numbers: c("whitesmoke"),
            wire: c("silver"),
            shadow: c("black"),
            segment: segment.map(c),
            multiplier: [c("green"), c("red")],
            bullseye: BullseyeColors {
                inner: c("red"),
                outer: c("green"),
            },
        }
    }

    #[test]
    fn test_color_scheme_alternates() {
        let scheme = ColorScheme::new(&color_config(["wheat", "black"])).unwrap();
        assert_ne!(scheme.segment[0], scheme.segment[1]);
        assert_ne!(scheme.multiplier[0], scheme.multiplier[1]);
        assert_eq!(rgb(scheme.label), (245, 245, 245, 255));
    }

    #[test]
    fn test_color_scheme_rejects_identical_alternates() {
        assert_eq!(
            ColorScheme::new(&color_config(["black", "#000000"])),
            Err(ConfigurationError::IdenticalAlternates("segment"))
        );
    }

    #[test]
    fn test_font_parsing() {
        let font: FontSpec = "bold 22px arial".parse().unwrap();
        assert_eq!(font.weight, FontWeight::Bold);
        assert_eq!(font.slant, FontSlant::Normal);
        assert_eq!(font.size, 22.0);
        assert_eq!(font.family.as_str(), "arial");
        assert_eq!(font.to_string(), "bold 22px arial");

        let font: FontSpec = "Italic 12.5px DejaVu Sans".parse().unwrap();
        assert_eq!(font.slant, FontSlant::Italic);
        assert_eq!(font.weight, FontWeight::Normal);
        assert_eq!(font.family.as_str(), "DejaVu Sans");
    }

    #[test]
    fn test_font_rejects_malformed() {
        for input in [
            "",
            "bold arial",
            "22px",
            "heavy 22px arial",
            "bold -3px arial",
            "bold infpx arial",
            "NaNpx arial",
        ] {
            assert!(input.parse::<FontSpec>().is_err(), "{input}");
        }
    }
}

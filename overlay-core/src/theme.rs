use serde::{Serialize, Serializer};

use crate::config::ButtonConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba(self.0, self.1, self.2, (255.0 * alpha.clamp(0.0, 1.0)).round() as u8)
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.0,
            self.1,
            self.2,
            self.3 as f64 / 255.0
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

const LIGHT_BG: Rgba = Rgba(245, 245, 245, 255);
const DARK_BG: Rgba = Rgba(32, 32, 32, 255);
const LIGHT_TEXT: Rgba = Rgba(0, 0, 0, 255);
const DARK_TEXT: Rgba = Rgba(255, 255, 255, 255);
const LIGHT_BORDER: Rgba = Rgba(220, 220, 220, 150);
const DARK_BORDER: Rgba = Rgba(100, 100, 100, 150);
const ACCENT: Rgba = Rgba(0, 120, 215, 255);
const HOVER_GLOW: Rgba = Rgba(0, 120, 215, 100);

/// Colours handed to the webview, serialized as CSS `rgba()` strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub theme: Theme,
    pub background: Rgba,
    pub background_hover: Rgba,
    pub text: Rgba,
    pub border: Rgba,
    pub accent: Rgba,
    pub hover_glow: Rgba,
}

impl Theme {
    pub fn palette(self, button: &ButtonConfig) -> Palette {
        let (background, text, border) = match self {
            Theme::Light => (LIGHT_BG, LIGHT_TEXT, LIGHT_BORDER),
            Theme::Dark => (DARK_BG, DARK_TEXT, DARK_BORDER),
        };
        Palette {
            theme: self,
            background: background.with_alpha(button.opacity),
            background_hover: background.with_alpha(button.hover_opacity),
            text,
            border,
            accent: ACCENT,
            hover_glow: HOVER_GLOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_uses_configured_opacity() {
        let palette = Theme::Dark.palette(&ButtonConfig::default());
        assert_eq!(palette.background, Rgba(32, 32, 32, 191));
        assert_eq!(palette.text, DARK_TEXT);
    }

    #[test]
    fn palette_serializes_as_css() {
        let json = serde_json::to_value(Theme::Light.palette(&ButtonConfig::default())).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["accent"], "rgba(0, 120, 215, 1.000)");
    }
}

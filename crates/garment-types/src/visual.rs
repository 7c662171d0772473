use serde::{Deserialize, Serialize};

use crate::ids::PartId;

/// An sRGB color in `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RgbHex(String);

impl RgbHex {
    /// Parse and normalize a `#RRGGBB` string (lowercased).
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.strip_prefix('#').ok_or_else(|| ColorParseError {
            input: s.to_string(),
        })?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError {
                input: s.to_string(),
            });
        }
        Ok(Self(format!("#{}", hex.to_ascii_lowercase())))
    }

    /// The neutral default garment color (undyed white).
    pub fn neutral() -> Self {
        Self("#f5f5f0".to_string())
    }

    /// Default monogram thread color (navy).
    pub fn default_thread() -> Self {
        Self("#1a2a4a".to_string())
    }

    /// Default button color (dark horn).
    pub fn default_button() -> Self {
        Self("#3a2f23".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid RGB hex color: {input:?} (expected #RRGGBB)")]
pub struct ColorParseError {
    pub input: String,
}

/// PBR-style material scalar parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub roughness: f64,
    pub metalness: f64,
    pub opacity: f64,
}

impl Default for MaterialParams {
    fn default() -> Self {
        // Matte woven fabric.
        Self {
            roughness: 0.85,
            metalness: 0.0,
            opacity: 1.0,
        }
    }
}

impl MaterialParams {
    /// Default parameters for button hardware.
    pub fn button_default() -> Self {
        Self {
            roughness: 0.35,
            metalness: 0.1,
            opacity: 1.0,
        }
    }
}

/// Visual attributes an option value carries into the rendered model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    #[serde(default)]
    pub color: Option<RgbHex>,
    #[serde(default)]
    pub material: Option<MaterialParams>,
}

/// Explicit show/hide part overrides attached to an option value.
///
/// Applied after family visibility resolution, so a value can reveal or
/// conceal parts outside its own category's family (e.g. a belted style
/// hiding the belt-loop parts).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderEffects {
    #[serde(default)]
    pub show: Vec<PartId>,
    #[serde(default)]
    pub hide: Vec<PartId>,
}

/// A resolved color + material pair for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAssignment {
    pub color: RgbHex,
    pub params: MaterialParams,
}

impl MaterialAssignment {
    pub fn fabric(color: RgbHex) -> Self {
        Self {
            color,
            params: MaterialParams::default(),
        }
    }
}

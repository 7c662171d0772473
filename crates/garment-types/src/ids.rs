use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// A customization axis (fabric, collar, button style, ...).
    CategoryId
}

string_id! {
    /// One selectable value within a category.
    ValueId
}

string_id! {
    /// A named, independently toggleable element of the 3D garment model.
    PartId
}

string_id! {
    /// A garment-specific measurement key (chest, waist, sleeve, ...).
    MeasurementKey
}

/// Well-known category ids the projector and pricing rules key on.
///
/// These are authored conventions of the catalog format, not magic: a
/// catalog that omits one of them simply leaves that axis unconfigured.
pub mod categories {
    pub const FABRIC: &str = "fabric";
    pub const BUTTON_STYLE: &str = "button-style";
    pub const BUTTON_COLOR: &str = "button-color";
    pub const BUTTON_MATERIAL: &str = "button-material";
    pub const BUTTON_LAYOUT: &str = "button-layout";
    pub const LINING_COLOR: &str = "lining-color";
    pub const MONOGRAM_POSITION: &str = "monogram-position";
}

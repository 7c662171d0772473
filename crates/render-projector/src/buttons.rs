use garment_types::{PartId, ValueId};

use crate::directives::ButtonPosition;

/// The largest button part count any layout produces. Parts
/// `button_1..button_6` beyond the active layout are explicitly hidden.
pub const MAX_BUTTON_PARTS: usize = 6;

/// Known button count/layout configurations.
///
/// Single-column layouts place buttons down the front center line;
/// double-breasted layouts use two columns of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLayout {
    OneButton,
    TwoButton,
    ThreeButton,
    FourButtonDoubleBreasted,
    SixButtonDoubleBreasted,
}

impl ButtonLayout {
    /// The fallback layout for unknown configuration ids.
    pub const DEFAULT: Self = ButtonLayout::TwoButton;

    pub fn from_value_id(id: &ValueId) -> Option<Self> {
        match id.as_str() {
            "one-button" => Some(ButtonLayout::OneButton),
            "two-button" => Some(ButtonLayout::TwoButton),
            "three-button" => Some(ButtonLayout::ThreeButton),
            // Four functional buttons on a double-breasted front still
            // renders the full 2x3 grid of six.
            "four-button" => Some(ButtonLayout::FourButtonDoubleBreasted),
            "six-button" => Some(ButtonLayout::SixButtonDoubleBreasted),
            _ => None,
        }
    }

    /// Fixed per-layout offsets, in normalized garment-front
    /// coordinates (x across the front, y up from the hem).
    pub fn offsets(self) -> Vec<[f64; 2]> {
        const ROWS: [f64; 3] = [0.44, 0.32, 0.20];
        match self {
            ButtonLayout::OneButton => vec![[0.0, 0.38]],
            ButtonLayout::TwoButton => vec![[0.0, ROWS[0]], [0.0, ROWS[1]]],
            ButtonLayout::ThreeButton => ROWS.iter().map(|&y| [0.0, y]).collect(),
            ButtonLayout::FourButtonDoubleBreasted | ButtonLayout::SixButtonDoubleBreasted => {
                // Two columns of three.
                let mut offsets = Vec::with_capacity(6);
                for &y in &ROWS {
                    offsets.push([-0.07, y]);
                    offsets.push([0.07, y]);
                }
                offsets
            }
        }
    }
}

/// Expand a layout id into the positional button part list.
///
/// Unknown layout ids degrade to the two-button default with a warning
/// rather than erroring; an absent id is simply the default.
pub fn expand_layout(layout_id: Option<&ValueId>) -> (Vec<ButtonPosition>, Option<String>) {
    let (layout, warning) = match layout_id {
        None => (ButtonLayout::DEFAULT, None),
        Some(id) => match ButtonLayout::from_value_id(id) {
            Some(layout) => (layout, None),
            None => (
                ButtonLayout::DEFAULT,
                Some(format!(
                    "unknown button layout {}, falling back to two-button",
                    id
                )),
            ),
        },
    };

    let positions = layout
        .offsets()
        .into_iter()
        .enumerate()
        .map(|(i, offset)| ButtonPosition {
            part: PartId::new(format!("button_{}", i + 1)),
            offset,
        })
        .collect();

    (positions, warning)
}

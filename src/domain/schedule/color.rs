//! Colour policy for schedule cells.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ClassId;

/// Colour used when nothing else is configured.
pub const DEFAULT_COLOR: &str = "red";

/// Palette for per-class colouring.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "red", "blue", "green", "orange", "purple", "teal", "pink", "brown",
];

/// How schedule cells are coloured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "colors")]
pub enum ColorScheme {
    /// Every cell gets the same colour.
    Fixed(String),
    /// Each class gets a stable colour picked from the palette by its id.
    PerClass(Vec<String>),
}

impl ColorScheme {
    pub fn fixed(color: impl Into<String>) -> Self {
        ColorScheme::Fixed(color.into())
    }

    pub fn per_class() -> Self {
        ColorScheme::PerClass(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }

    /// Colour for a class. Same id, same colour, on every call.
    pub fn color_for(&self, class_id: &ClassId) -> &str {
        match self {
            ColorScheme::Fixed(color) => color,
            ColorScheme::PerClass(palette) if !palette.is_empty() => {
                let index = (class_id.as_uuid().as_u128() % palette.len() as u128) as usize;
                &palette[index]
            }
            ColorScheme::PerClass(_) => DEFAULT_COLOR,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Fixed(DEFAULT_COLOR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fixed_red() {
        assert_eq!(ColorScheme::default().color_for(&ClassId::new()), "red");
    }

    #[test]
    fn per_class_is_stable() {
        let scheme = ColorScheme::per_class();
        let id = ClassId::new();
        assert_eq!(scheme.color_for(&id), scheme.color_for(&id));
        assert!(DEFAULT_PALETTE.contains(&scheme.color_for(&id)));
    }

    #[test]
    fn empty_palette_falls_back() {
        assert_eq!(ColorScheme::PerClass(vec![]).color_for(&ClassId::new()), DEFAULT_COLOR);
    }
}

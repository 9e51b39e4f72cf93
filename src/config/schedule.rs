//! Schedule presentation configuration

use serde::Deserialize;
use std::sync::Arc;

use super::error::ValidationError;
use crate::domain::presentation::{CapitalizedTitle, MinuteParityTitle, TitlePolicy};
use crate::domain::schedule::{ColorScheme, DEFAULT_COLOR};

/// How schedule cells are coloured.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Fixed,
    PerClass,
}

/// How page titles are cased.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TitleStyle {
    /// Capitalized on even minutes, lowercase on odd ones
    #[default]
    MinuteParity,
    Capitalized,
}

/// Schedule page settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub color_mode: ColorMode,

    /// Colour for `fixed` mode
    #[serde(default = "default_color")]
    pub color: String,

    /// Comma-separated palette for `per_class` mode
    pub palette: Option<String>,

    #[serde(default)]
    pub title_style: TitleStyle,
}

impl ScheduleConfig {
    pub fn color_scheme(&self) -> ColorScheme {
        match self.color_mode {
            ColorMode::Fixed => ColorScheme::fixed(self.color.clone()),
            ColorMode::PerClass => match self.palette_list() {
                Some(palette) => ColorScheme::PerClass(palette),
                None => ColorScheme::per_class(),
            },
        }
    }

    pub fn title_policy(&self) -> Arc<dyn TitlePolicy> {
        match self.title_style {
            TitleStyle::MinuteParity => Arc::new(MinuteParityTitle),
            TitleStyle::Capitalized => Arc::new(CapitalizedTitle),
        }
    }

    fn palette_list(&self) -> Option<Vec<String>> {
        self.palette.as_ref().map(|s| {
            s.split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect()
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.color_mode == ColorMode::Fixed && self.color.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SCHEDULE__COLOR"));
        }
        if matches!(self.palette_list(), Some(p) if p.is_empty()) {
            return Err(ValidationError::EmptyPalette);
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::default(),
            color: default_color(),
            palette: None,
            title_style: TitleStyle::default(),
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

//! Design tokens shared by presentation layers

use serde::{Deserialize, Serialize};

/// Colours and font sizes
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub colors: ThemeColors,
    #[serde(default)]
    pub font_sizes: FontSizes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub white: String,
    pub gray: String,
    pub light_gray: String,
    pub text_dark: String,
    pub text_light: String,
    pub disabled: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#007AFF".to_string(),
            secondary: "#555555".to_string(),
            white: "#FFFFFF".to_string(),
            gray: "#8E8E93".to_string(),
            light_gray: "#F2F2F7".to_string(),
            text_dark: "#333333".to_string(),
            text_light: "#666666".to_string(),
            disabled: "#CCCCCC".to_string(),
        }
    }
}

impl ThemeColors {
    /// Name and value of every colour token
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("white", &self.white),
            ("gray", &self.gray),
            ("light_gray", &self.light_gray),
            ("text_dark", &self.text_dark),
            ("text_light", &self.text_light),
            ("disabled", &self.disabled),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontSizes {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            xs: 12,
            sm: 14,
            md: 16,
            lg: 20,
            xl: 24,
        }
    }
}

impl FontSizes {
    /// Sizes from smallest to largest
    pub fn ascending(&self) -> [u16; 5] {
        [self.xs, self.sm, self.md, self.lg, self.xl]
    }
}

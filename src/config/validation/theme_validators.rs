//! Theme configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for ThemeConfig {
    fn validate(&self) -> Result<(), String> {
        self.colors.validate()?;
        self.font_sizes.validate()
    }
}

impl Validate for ThemeColors {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in self.entries() {
            if !is_valid_color(value) {
                return Err(format!("Invalid colour for {}: {}", name, value));
            }
        }
        Ok(())
    }
}

impl Validate for FontSizes {
    fn validate(&self) -> Result<(), String> {
        let sizes = self.ascending();

        if sizes[0] == 0 {
            return Err("Font sizes must be greater than 0".to_string());
        }

        if sizes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err("Font sizes must increase strictly from xs to xl".to_string());
        }

        Ok(())
    }
}

/// Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA` and `rgba(r, g, b, a)`
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let Some(body) = value
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return false;
    }

    let channels_ok = parts[..3]
        .iter()
        .all(|part| part.parse::<u8>().is_ok());
    let alpha_ok = parts[3]
        .parse::<f64>()
        .is_ok_and(|alpha| (0.0..=1.0).contains(&alpha));

    channels_ok && alpha_ok
}

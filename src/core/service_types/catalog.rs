//! Static catalog of service tiers

use crate::utils::error::{HomeserveError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Id of the tier every new draft starts on
pub const STANDARD_SERVICE_TYPE: &str = "standard";

/// One selectable service tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceTypeOption {
    /// Short unique identifier ("standard", "priority", ...)
    pub id: String,
    /// Label shown on the tier card
    pub display_name: String,
    /// Icon name the rendering surface draws next to the label
    #[serde(default)]
    pub icon: String,
    /// Factor applied to hourly rate × hours, always ≥ 1
    pub multiplier: f64,
}

impl ServiceTypeOption {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        icon: impl Into<String>,
        multiplier: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon: icon.into(),
            multiplier,
        }
    }

    /// The three tiers offered by the booking sheet
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(STANDARD_SERVICE_TYPE, "Standard", "checkmark-circle", 1.0),
            Self::new("priority", "Priority", "flash", 1.5),
            Self::new("emergency", "Emergency", "alert-circle", 2.0),
        ]
    }
}

/// Read-only, ordered list of service tiers
///
/// Insertion order is display order. Lookups are a linear scan; the catalog
/// never holds more than a handful of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTypeCatalog {
    options: Vec<ServiceTypeOption>,
}

impl Default for ServiceTypeCatalog {
    fn default() -> Self {
        Self {
            options: ServiceTypeOption::defaults(),
        }
    }
}

impl ServiceTypeCatalog {
    /// Build a catalog, enforcing the tier invariants
    pub fn new(options: Vec<ServiceTypeOption>) -> Result<Self> {
        Self::check_options(&options).map_err(HomeserveError::validation)?;
        Ok(Self { options })
    }

    /// Check a candidate tier list without building a catalog
    pub fn check_options(options: &[ServiceTypeOption]) -> std::result::Result<(), String> {
        if options.is_empty() {
            return Err("Service type catalog must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for option in options {
            if option.id.trim().is_empty() {
                return Err("Service type id must not be empty".to_string());
            }
            if !seen.insert(option.id.as_str()) {
                return Err(format!("Duplicate service type id: {}", option.id));
            }
            if option.display_name.trim().is_empty() {
                return Err(format!(
                    "Service type {} must have a display name",
                    option.id
                ));
            }
            if !option.multiplier.is_finite() || option.multiplier < 1.0 {
                return Err(format!(
                    "Service type {} multiplier must be a finite number >= 1, got {}",
                    option.id, option.multiplier
                ));
            }
        }

        if !seen.contains(STANDARD_SERVICE_TYPE) {
            return Err(format!(
                "Service type catalog must contain a '{}' entry",
                STANDARD_SERVICE_TYPE
            ));
        }

        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ServiceTypeOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Multiplier for a tier, `None` when the id is unknown
    pub fn multiplier(&self, id: &str) -> Option<f64> {
        self.get(id).map(|option| option.multiplier)
    }

    /// The default tier
    pub fn standard(&self) -> &ServiceTypeOption {
        // `new` and `default` both guarantee the entry exists
        self.get(STANDARD_SERVICE_TYPE)
            .unwrap_or(&self.options[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceTypeOption> {
        self.options.iter()
    }

    pub fn options(&self) -> &[ServiceTypeOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

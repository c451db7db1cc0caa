//! Configuration validation integration tests
//!
//! Tests for loading and validating configuration files and environment
//! overrides.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::ConfigFactory;
    use homeserve_rs::HomeserveError;
    use homeserve_rs::config::{Config, Validate};
    use homeserve_rs::config::models::{BookingConfig, FontSizes, ThemeConfig};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== Loading ====================

    /// Test that a full config file loads every section
    #[tokio::test]
    async fn test_full_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ConfigFactory::yaml().as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.booking().currency_symbol, "$");
        assert_eq!(config.booking().service_types.len(), 3);
        assert_eq!(config.logging().level, "warn");
        assert!(config.logging().json);
        assert_eq!(config.theme().colors.secondary, "#555");
        assert_eq!(config.theme().colors.white, "#FFFFFF");
        assert_eq!(config.theme().font_sizes.xl, 22);
    }

    /// Test that an empty document yields defaults
    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.booking().currency_symbol, "₦");
        assert_eq!(config.booking().service_types[2].display_name, "Emergency");
    }

    /// Test that malformed YAML surfaces the YAML error
    #[test]
    fn test_malformed_yaml() {
        let err = Config::from_yaml_str("booking: [unclosed").unwrap_err();
        assert!(matches!(err, HomeserveError::Yaml(_)));
        assert!(err.is_input_error());
    }

    /// Test that YAML output can be read back
    #[test]
    fn test_yaml_round_trip() {
        let config = Config::from_yaml_str(ConfigFactory::yaml()).unwrap();
        let reloaded = Config::from_yaml_str(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reloaded, config);
    }

    // ==================== Validation ====================

    /// Test that section errors name their section
    #[test]
    fn test_section_errors_are_prefixed() {
        let err = Config::from_yaml_str("logging:\n  level: loud\n").unwrap_err();
        assert!(err.to_string().contains("Logging config error"));

        let err = Config::from_yaml_str("booking:\n  currency_symbol: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("Booking config error"));

        let err = Config::from_yaml_str("theme:\n  colors:\n    primary: blue\n").unwrap_err();
        assert!(err.to_string().contains("Theme config error"));
    }

    /// Test that a tier list without the standard tier is rejected
    #[test]
    fn test_missing_standard_tier() {
        let yaml = r#"
booking:
  service_types:
    - id: priority
      display_name: Priority
      multiplier: 1.5
"#;
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("standard"));
    }

    /// Test that a multiplier below 1 is rejected
    #[test]
    fn test_discount_multiplier_rejected() {
        let mut config = BookingConfig::default();
        config.service_types[1].multiplier = 0.9;
        assert!(config.validate().unwrap_err().contains("multiplier"));
    }

    /// Test font size ordering
    #[test]
    fn test_font_sizes_must_increase() {
        let mut theme = ThemeConfig::default();
        theme.font_sizes = FontSizes {
            xs: 12,
            sm: 12,
            md: 16,
            lg: 20,
            xl: 24,
        };
        assert!(theme.validate().is_err());
    }

    // ==================== Environment ====================

    /// Test environment overrides through an injected lookup
    #[test]
    fn test_env_overrides() {
        let config = Config::from_env_with(|key| match key {
            "HOMESERVE_CURRENCY_SYMBOL" => Some("$".to_string()),
            "HOMESERVE_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.booking().currency_symbol, "$");
        assert_eq!(config.logging().level, "debug");
        assert!(config.catalog().providers_path.is_none());
    }

    /// Test that an invalid override fails validation
    #[test]
    fn test_env_invalid_level() {
        let err = Config::from_env_with(|key| {
            (key == "HOMESERVE_LOG_LEVEL").then(|| "chatty".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, HomeserveError::Config(_)));
    }
}

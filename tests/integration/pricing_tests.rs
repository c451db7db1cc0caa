//! Pricing integration tests
//!
//! Totals computed through configured service tiers and the booking sheet.

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::common::fixtures::ConfigFactory;
    use homeserve_rs::config::Config;
    use homeserve_rs::{
        BookingSession, ParsedHours, PricingRule, ServiceOffer, ServiceTypeCatalog,
        ServiceTypeOption, display_amount, format_total,
    };
    use std::sync::Arc;

    // ==================== Default tiers ====================

    /// Test the reference totals for each default tier
    #[test]
    fn test_default_tier_totals() {
        let pricing = PricingRule::default();
        assert_approx_eq!(pricing.compute_total(35.0, "2", "standard"), 70.0);
        assert_approx_eq!(pricing.compute_total(35.0, "2", "priority"), 105.0);
        assert_approx_eq!(pricing.compute_total(35.0, "2", "emergency"), 140.0);
        assert_approx_eq!(pricing.compute_total(35.0, "", "emergency"), 0.0);
    }

    /// Test that totals scale linearly with the rate
    #[test]
    fn test_total_is_product_of_factors() {
        let pricing = PricingRule::default();
        for rate in [0.0, 12.5, 35.0, 99.99] {
            for hours in ["0.5", "1", "2.25", "8"] {
                for tier in ServiceTypeCatalog::default().iter() {
                    let expected = rate * hours.parse::<f64>().unwrap() * tier.multiplier;
                    assert_approx_eq!(pricing.compute_total(rate, hours, &tier.id), expected);
                }
            }
        }
    }

    /// Test the lenient hours readings
    #[test]
    fn test_lenient_hours() {
        let pricing = PricingRule::default();
        assert_approx_eq!(pricing.compute_total(10.0, "2h", "standard"), 20.0);
        assert_approx_eq!(pricing.compute_total(10.0, " 3 ", "standard"), 30.0);
        assert_approx_eq!(pricing.compute_total(10.0, ".5", "standard"), 5.0);
        assert_approx_eq!(pricing.compute_total(10.0, "-2", "standard"), -20.0);
        assert_approx_eq!(pricing.compute_total(35.0, "-3", "standard"), -105.0);
        assert_approx_eq!(pricing.compute_total(10.0, "NaN", "standard"), 0.0);
    }

    /// Test that the strict parse flags what the lenient one forgives
    #[test]
    fn test_strict_parse_flags_input() {
        assert_eq!(ParsedHours::parse(""), ParsedHours::Empty);
        assert_eq!(ParsedHours::parse("2"), ParsedHours::Valid(2.0));
        assert!(ParsedHours::parse("2h").is_invalid());
        assert!(ParsedHours::parse("-1").is_invalid());
    }

    // ==================== Configured tiers ====================

    /// Test totals with tiers loaded from YAML
    #[test]
    fn test_configured_tiers() {
        let config = Config::from_yaml_str(ConfigFactory::yaml()).unwrap();
        let pricing = PricingRule::from_config(config.booking()).unwrap();

        assert_approx_eq!(pricing.compute_total(40.0, "2", "weekend"), 100.0);
        assert_approx_eq!(pricing.multiplier_for("priority"), 1.0);
    }

    /// Test that a session built from config formats with the configured symbol
    #[test]
    fn test_session_from_config_display() {
        let config = Config::from_yaml_str(ConfigFactory::yaml()).unwrap();
        let mut session = BookingSession::from_config(config.booking()).unwrap();

        session.open(ServiceOffer::new("Chioma Eze", 28.0).unwrap(), |_| {});
        session.set_hours_text("3");
        session.set_service_type("weekend");
        assert_eq!(session.current_total_display(), "$105.00");
    }

    /// Test a hand-built catalog shared between rules
    #[test]
    fn test_shared_catalog() {
        let catalog = Arc::new(
            ServiceTypeCatalog::new(vec![
                ServiceTypeOption::new("standard", "Standard", "checkmark-circle", 1.0),
                ServiceTypeOption::new("night", "Night", "moon", 1.75),
            ])
            .unwrap(),
        );
        let first = PricingRule::new(Arc::clone(&catalog));
        let second = PricingRule::new(catalog);

        assert_eq!(
            first.compute_total(20.0, "2", "night"),
            second.compute_total(20.0, "2", "night")
        );
        assert_approx_eq!(first.compute_total(20.0, "2", "night"), 70.0);
    }

    // ==================== Formatting ====================

    /// Test two-decimal rendering of totals
    #[test]
    fn test_formatting() {
        assert_eq!(format_total(70.0), "70.00");
        assert_eq!(format_total(0.0), "0.00");
        assert_eq!(format_total(52.5), "52.50");
        assert_eq!(display_amount("₦", 105.0), "₦105.00");
    }
}

//! Catalog integration tests
//!
//! Loading provider documents from disk and querying them.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::ProviderFactory;
    use crate::{assert_contains, assert_err, assert_ok};
    use homeserve_rs::config::CatalogConfig;
    use homeserve_rs::services::catalog::{CATEGORIES, ReviewSummary, category_by_slug};
    use homeserve_rs::{HomeserveError, ProviderCatalog, ServiceOffer};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== Loading ====================

    /// Test that a written document loads back through the config path
    #[tokio::test]
    async fn test_load_configured_file() {
        let providers = vec![
            ProviderFactory::john_smith(),
            ProviderFactory::with_price(2, 18.0),
            ProviderFactory::in_category(3, 8),
        ];
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ProviderFactory::document(&providers).as_bytes())
            .unwrap();

        let config = CatalogConfig {
            providers_path: Some(file.path().to_path_buf()),
        };
        let catalog = assert_ok!(ProviderCatalog::load(&config).await);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.providers()[0], providers[0]);
        assert_eq!(catalog.count_in_category(8), 1);
    }

    /// Test that invalid providers are rejected as a whole
    #[test]
    fn test_invalid_document_rejected() {
        let document = ProviderFactory::document(&[
            ProviderFactory::create(1),
            ProviderFactory::with_rating(2, 7.0),
        ]);
        let err = assert_err!(ProviderCatalog::from_json_str(&document));
        assert!(matches!(err, HomeserveError::Validation(_)));
        assert!(err.is_input_error());
    }

    /// Test that an empty provider list is allowed
    #[test]
    fn test_empty_catalog() {
        let catalog = assert_ok!(ProviderCatalog::from_json_str(r#"{"providers": []}"#));
        assert!(catalog.is_empty());
        assert_eq!(catalog.statistics().total_providers, 0);
    }

    // ==================== Queries ====================

    /// Test statistics over a fixture catalog
    #[test]
    fn test_statistics() {
        let catalog = ProviderFactory::catalog(vec![
            ProviderFactory::with_price(1, 10.0),
            ProviderFactory::with_price(2, 45.0),
            ProviderFactory::in_category(3, 4),
        ]);

        let stats = catalog.statistics();
        assert_eq!(stats.total_providers, 3);
        assert_eq!(stats.per_category.get(&1), Some(&2));
        assert_eq!(stats.per_category.get(&4), Some(&1));

        let range = stats.price_range.unwrap();
        assert_eq!((range.min, range.max), (10.0, 45.0));
    }

    /// Test the bundled data against the category list
    #[test]
    fn test_bundled_providers_use_known_categories() {
        let catalog = ProviderCatalog::bundled().unwrap();
        for provider in catalog.providers() {
            assert!(
                provider.category_name().is_some(),
                "provider {} has unknown category {}",
                provider.id,
                provider.category_id
            );
        }
        assert_contains!(CATEGORIES, |category| catalog.count_in_category(category.id) > 0);
    }

    /// Test that a provider converts into a booking offer
    #[test]
    fn test_provider_to_offer() {
        let provider = ProviderFactory::john_smith();
        let offer = assert_ok!(ServiceOffer::try_from(&provider));
        assert_eq!(offer.name(), "John Smith");
        assert_eq!(offer.hourly_rate(), 35.0);

        let summary = ReviewSummary::for_provider(&provider);
        assert_eq!(summary.count, 156);
    }

    /// Test that a hand-built provider with an unusable rate is not bookable
    #[test]
    fn test_provider_with_bad_rate_is_rejected() {
        for rate in [f64::NAN, f64::INFINITY, -5.0] {
            let mut provider = ProviderFactory::john_smith();
            provider.price_per_hour = rate;
            let err = assert_err!(ServiceOffer::try_from(&provider));
            assert!(matches!(err, HomeserveError::Validation(_)));
        }

        let mut provider = ProviderFactory::john_smith();
        provider.name = "   ".to_string();
        assert_err!(ServiceOffer::try_from(&provider));
    }

    /// Test category lookup by slug
    #[test]
    fn test_category_lookup() {
        let category = category_by_slug("gardening").unwrap();
        assert_eq!(category.icon, "leaf");
        assert_eq!(category.gradient, ["#27AE60", "#52BE80"]);
    }
}

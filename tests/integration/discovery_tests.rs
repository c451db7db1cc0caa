//! Discovery integration tests
//!
//! The home feed over a fixture catalog: search, carousel, filter sheet and
//! sorting together.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::ProviderFactory;
    use homeserve_rs::{HomeFeed, Provider, ProviderFilter, SortOption};

    fn fixture_feed() -> HomeFeed {
        let mut cheap_plumber = ProviderFactory::in_category(2, 2);
        cheap_plumber.price_per_hour = 15.0;
        cheap_plumber.rating = 3.5;

        let mut electrician = ProviderFactory::in_category(3, 3);
        electrician.price_per_hour = 50.0;
        electrician.rating = 4.9;
        electrician.location.city = "Abuja".to_string();

        HomeFeed::new(ProviderFactory::catalog(vec![
            ProviderFactory::john_smith(),
            cheap_plumber,
            electrician,
            ProviderFactory::create(4),
        ]))
    }

    fn ids(providers: Vec<&Provider>) -> Vec<u32> {
        providers.into_iter().map(|provider| provider.id).collect()
    }

    // ==================== Sorting ====================

    /// Test each sort option over the feed
    #[test]
    fn test_sort_options() {
        let expected = [
            (SortOption::Popular, vec![1, 2, 3, 4]),
            (SortOption::Rating, vec![3, 1, 4, 2]),
            (SortOption::PriceLowToHigh, vec![2, 4, 1, 3]),
            (SortOption::PriceHighToLow, vec![3, 1, 4, 2]),
        ];

        for (sort, order) in expected {
            let mut feed = fixture_feed();
            feed.open_filter();
            feed.pending_mut().unwrap().sort = Some(sort);
            feed.apply_filters();
            assert_eq!(ids(feed.visible_providers()), order, "sort {}", sort);
        }
    }

    // ==================== Filter sheet ====================

    /// Test a full filter sheet session
    #[test]
    fn test_filter_sheet_flow() {
        let mut feed = fixture_feed();

        feed.open_filter();
        {
            let pending = feed.pending_mut().unwrap();
            pending.min_rating = Some(4.0);
            pending.max_price = Some(40.0);
        }
        let applied = feed.apply_filters().clone();

        assert_eq!(
            applied,
            ProviderFilter {
                min_rating: Some(4.0),
                max_price: Some(40.0),
                ..Default::default()
            }
        );
        assert_eq!(feed.active_filter_count(), 2);
        assert_eq!(ids(feed.visible_providers()), vec![1, 4]);
    }

    /// Test that closing the sheet throws pending edits away
    #[test]
    fn test_close_discards_pending() {
        let mut feed = fixture_feed();
        feed.open_filter();
        feed.pending_mut().unwrap().category_id = Some(3);
        feed.close_filter();

        assert_eq!(feed.visible_providers().len(), 4);
        feed.open_filter();
        assert_eq!(feed.pending().unwrap().category_id, None);
    }

    // ==================== Search and carousel ====================

    /// Test search together with the carousel
    #[test]
    fn test_search_and_carousel() {
        let mut feed = fixture_feed();

        feed.set_search("abuja");
        assert_eq!(ids(feed.visible_providers()), vec![3]);

        feed.set_search("plumbing");
        assert_eq!(ids(feed.visible_providers()), vec![1, 2]);

        feed.select_category(3);
        assert!(feed.visible_providers().is_empty());

        feed.clear_search();
        assert_eq!(ids(feed.visible_providers()), vec![3]);

        feed.select_category(3);
        assert_eq!(feed.visible_providers().len(), 4);
    }
}

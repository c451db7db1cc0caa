//! Home screen view-model

use super::filter::ProviderFilter;
use crate::services::catalog::{Provider, ProviderCatalog};
use tracing::debug;

/// State behind the home screen
///
/// The filter sheet edits a pending copy of the filter. Nothing changes the
/// visible list until [`apply_filters`](Self::apply_filters) commits it.
#[derive(Debug, Clone)]
pub struct HomeFeed {
    catalog: ProviderCatalog,
    search: String,
    carousel_category: Option<u32>,
    applied: ProviderFilter,
    pending: Option<ProviderFilter>,
}

impl HomeFeed {
    pub fn new(catalog: ProviderCatalog) -> Self {
        Self {
            catalog,
            search: String::new(),
            carousel_category: None,
            applied: ProviderFilter::default(),
            pending: None,
        }
    }

    pub fn catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    // ==================== Search ====================

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    // ==================== Category carousel ====================

    /// Select a category; selecting the current one deselects it
    pub fn select_category(&mut self, category_id: u32) {
        if self.carousel_category == Some(category_id) {
            self.carousel_category = None;
        } else {
            self.carousel_category = Some(category_id);
        }
        debug!(category = ?self.carousel_category, "carousel selection changed");
    }

    pub fn selected_category(&self) -> Option<u32> {
        self.carousel_category
    }

    // ==================== Filter sheet ====================

    /// Open the sheet, seeding pending selections from the applied filter
    pub fn open_filter(&mut self) {
        self.pending = Some(self.applied.clone());
    }

    pub fn is_filter_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Pending selections, `None` while the sheet is closed
    pub fn pending(&self) -> Option<&ProviderFilter> {
        self.pending.as_ref()
    }

    pub fn pending_mut(&mut self) -> Option<&mut ProviderFilter> {
        self.pending.as_mut()
    }

    /// Clear pending selections; the applied filter is untouched
    pub fn reset_filters(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            *pending = ProviderFilter::default();
        }
    }

    /// Commit pending selections and close the sheet
    ///
    /// Returns the filter now in effect. Does nothing while the sheet is closed.
    pub fn apply_filters(&mut self) -> &ProviderFilter {
        if let Some(pending) = self.pending.take() {
            debug!(active = pending.active_count(), "filters applied");
            self.applied = pending;
        }
        &self.applied
    }

    /// Close the sheet, discarding pending selections
    pub fn close_filter(&mut self) {
        self.pending = None;
    }

    pub fn applied_filter(&self) -> &ProviderFilter {
        &self.applied
    }

    pub fn active_filter_count(&self) -> usize {
        self.applied.active_count()
    }

    // ==================== Results ====================

    /// Providers to list, after search, carousel, filters and sort
    pub fn visible_providers(&self) -> Vec<&Provider> {
        let mut effective = self.applied.clone();
        if self.carousel_category.is_some() {
            effective.category_id = self.carousel_category;
        }
        effective.apply(self.catalog.providers(), &self.search)
    }
}

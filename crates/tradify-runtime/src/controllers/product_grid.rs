use tradify_engine::{RatingFilter, RatingMatch, grid_listing};
use tradify_types::{GridFilterState, Product, Section};

use crate::config::GridConfig;
use crate::host::{Host, QueryListener};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    pub top_rating: f64,
    pub rating_match: RatingMatch,
}

impl From<&GridConfig> for GridSettings {
    fn from(config: &GridConfig) -> Self {
        Self {
            top_rating: config.top_rating,
            rating_match: config.rating_match,
        }
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self::from(&GridConfig::default())
    }
}

/// Main product listing. `visible` is recomputed on every input change.
pub struct ProductGrid<'c> {
    catalog: &'c [Product],
    settings: GridSettings,
    filter: GridFilterState,
    visible: Vec<&'c Product>,
}

impl<'c> ProductGrid<'c> {
    pub fn new(catalog: &'c [Product], settings: GridSettings) -> Self {
        let mut grid = Self {
            catalog,
            settings,
            filter: GridFilterState::default(),
            visible: Vec::new(),
        };
        grid.recompute();
        grid
    }

    pub fn visible(&self) -> &[&'c Product] {
        &self.visible
    }

    pub fn filter_state(&self) -> &GridFilterState {
        &self.filter
    }

    pub fn settings(&self) -> GridSettings {
        self.settings
    }

    pub fn set_query(&mut self, raw: &str) {
        if self.filter.query == raw {
            return;
        }
        self.filter.query = raw.to_string();
        self.recompute();
    }

    pub fn set_rating_filter(&mut self, rating: Option<f64>) {
        self.filter.rating_filter = rating;
        self.recompute();
    }

    /// Filter to the top rating and bring the listing into view
    pub fn show_top_rated(&mut self, host: &mut dyn Host) {
        self.set_rating_filter(Some(self.settings.top_rating));
        host.scroll_to_section(Section::Products);
        tracing::debug!(
            rating = self.settings.top_rating,
            visible = self.visible.len(),
            "showing top rated products"
        );
    }

    pub fn clear_rating_filter(&mut self) {
        self.set_rating_filter(None);
    }

    fn recompute(&mut self) {
        let rating = self.filter.rating_filter.map(|threshold| RatingFilter {
            threshold,
            mode: self.settings.rating_match,
        });
        self.visible = grid_listing(self.catalog, &self.filter.query, rating);
    }
}

impl QueryListener for ProductGrid<'_> {
    fn on_query(&mut self, raw: &str) {
        self.set_query(raw);
    }
}

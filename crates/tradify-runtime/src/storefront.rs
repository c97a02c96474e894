use tradify_types::{ContactField, Product, Section};

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::controllers::{
    ContactForm, ContactSubmission, GridSettings, NavigationMenu, ProductGrid, SearchOverlay,
};
use crate::host::Host;

/// Top-level page state.
///
/// Owns every controller and sequences the effects that span more than one
/// of them: opening search collapses the menu, and the overlay's query is
/// fed to the grid as it changes.
pub struct Storefront<'c> {
    catalog: &'c CatalogStore,
    menu: NavigationMenu,
    overlay: SearchOverlay<'c>,
    grid: ProductGrid<'c>,
    contact: ContactForm,
}

impl<'c> Storefront<'c> {
    pub fn new(catalog: &'c CatalogStore, config: &Config) -> Self {
        Self {
            catalog,
            menu: NavigationMenu::default(),
            overlay: SearchOverlay::new(catalog.all()),
            grid: ProductGrid::new(catalog.all(), GridSettings::from(&config.grid)),
            contact: ContactForm::new(config.contact.recipient.clone()),
        }
    }

    pub fn catalog(&self) -> &'c CatalogStore {
        self.catalog
    }

    pub fn menu(&self) -> &NavigationMenu {
        &self.menu
    }

    pub fn overlay(&self) -> &SearchOverlay<'c> {
        &self.overlay
    }

    pub fn grid(&self) -> &ProductGrid<'c> {
        &self.grid
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn open_search(&mut self, host: &mut dyn Host) {
        self.menu.close();
        self.overlay.open(host);
    }

    pub fn close_search(&mut self, host: &mut dyn Host) {
        self.overlay.close(host, &mut self.grid);
    }

    pub fn type_query(&mut self, raw: &str) {
        self.overlay.on_query_change(raw, &mut self.grid);
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.overlay.query().to_string();
        query.push(c);
        self.type_query(&query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.overlay.query().to_string();
        query.pop();
        self.type_query(&query);
    }

    pub fn select_search_result(
        &mut self,
        index: usize,
        host: &mut dyn Host,
    ) -> Option<&'c Product> {
        self.overlay.select_result(index, host, &mut self.grid)
    }

    /// Hero call-to-action
    pub fn discover_top_picks(&mut self, host: &mut dyn Host) {
        self.grid.show_top_rated(host);
    }

    pub fn clear_rating_filter(&mut self) {
        self.grid.clear_rating_filter();
    }

    /// No-op while search is active; the menu is hidden then
    pub fn toggle_menu(&mut self) {
        if !self.overlay.is_active() {
            self.menu.toggle();
        }
    }

    pub fn follow_link(&mut self, section: Section, host: &mut dyn Host) {
        self.menu.follow(section, host);
    }

    pub fn edit_contact(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.set_field(field, value);
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn submit_contact(&mut self, host: &mut dyn Host) -> ContactSubmission {
        self.contact.submit(host)
    }
}

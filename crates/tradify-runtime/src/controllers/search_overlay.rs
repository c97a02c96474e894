use tradify_engine::search_overlay;
use tradify_types::{OverlayPhase, Product, SearchState};

use crate::host::{Host, QueryListener};

/// What the panel shows instead of a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMessage {
    /// Nothing typed yet
    Prompt,
    /// A query was typed but nothing matched
    NoResults,
}

impl PanelMessage {
    pub fn title(&self) -> &'static str {
        match self {
            PanelMessage::Prompt => "Start typing to find amazing products!",
            PanelMessage::NoResults => "Sorry, this product is not currently available!",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            PanelMessage::Prompt => None,
            PanelMessage::NoResults => Some("Try searching for something else."),
        }
    }
}

/// Full-screen search panel.
///
/// `Closed -> Active` on `open`, `Active -> Closed` on `close`. While active
/// the page behind it is scroll-locked.
pub struct SearchOverlay<'c> {
    catalog: &'c [Product],
    state: SearchState<'c>,
}

impl<'c> SearchOverlay<'c> {
    pub fn new(catalog: &'c [Product]) -> Self {
        Self {
            catalog,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState<'c> {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn results(&self) -> &[&'c Product] {
        &self.state.results
    }

    pub fn open(&mut self, host: &mut dyn Host) {
        if self.state.is_active() {
            host.focus_search_input();
            return;
        }

        self.state.clear();
        self.state.phase = OverlayPhase::Active;
        host.set_scroll_locked(true);
        host.focus_search_input();
        tracing::debug!("search overlay opened");
    }

    /// Clears query and results and tells `listener` the query is now empty.
    /// Safe to call when already closed.
    pub fn close(&mut self, host: &mut dyn Host, listener: &mut dyn QueryListener) {
        let was_active = self.state.is_active();
        self.state.phase = OverlayPhase::Closed;
        self.state.clear();
        host.set_scroll_locked(false);
        listener.on_query("");
        if was_active {
            tracing::debug!("search overlay closed");
        }
    }

    /// Ignored while closed.
    pub fn on_query_change(&mut self, raw: &str, listener: &mut dyn QueryListener) {
        if !self.state.is_active() {
            tracing::debug!(query = raw, "query change ignored, overlay closed");
            return;
        }

        self.state.query = raw.to_string();
        listener.on_query(raw);
        self.state.results = search_overlay(self.catalog, raw);
        tracing::debug!(query = raw, results = self.state.results.len(), "search updated");
    }

    /// Open the affiliate link of the result at `index` and close the panel.
    pub fn select_result(
        &mut self,
        index: usize,
        host: &mut dyn Host,
        listener: &mut dyn QueryListener,
    ) -> Option<&'c Product> {
        let product = *self.state.results.get(index)?;
        if let Err(err) = host.open_external(&product.affiliate_link) {
            tracing::warn!(product = %product.id, error = %err, "could not open affiliate link");
        }
        self.close(host, listener);
        Some(product)
    }

    /// `None` when there are results to list
    pub fn panel_message(&self) -> Option<PanelMessage> {
        if self.state.is_blank() {
            Some(PanelMessage::Prompt)
        } else if self.state.results.is_empty() {
            Some(PanelMessage::NoResults)
        } else {
            None
        }
    }
}

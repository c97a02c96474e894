//! Side effects the controllers ask of whatever is presenting the storefront.
//!
//! The controllers never touch a terminal, a browser or the OS directly.
//! Every call here is fire-and-forget: nothing reports back into the
//! controller state.

use tradify_types::Section;

pub trait Host {
    /// Suspend or restore scrolling of the page behind the search overlay
    fn set_scroll_locked(&mut self, locked: bool);

    /// Move keyboard focus into the search input
    fn focus_search_input(&mut self);

    /// Bring a named section into view
    fn scroll_to_section(&mut self, section: Section);

    /// Hand a URI (affiliate link or `mailto:`) to the OS default handler
    fn open_external(&mut self, uri: &str) -> std::io::Result<()>;
}

/// Receives every raw query the search overlay sees, so other views can
/// follow the same live text.
pub trait QueryListener {
    fn on_query(&mut self, raw: &str);
}

/// Listener that ignores everything
pub struct NoopListener;

impl QueryListener for NoopListener {
    fn on_query(&mut self, _raw: &str) {}
}

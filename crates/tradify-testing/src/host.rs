//! Recording host for controller tests.

use tradify_runtime::Host;
use tradify_types::Section;

/// One side effect requested by a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ScrollLock(bool),
    FocusSearch,
    ScrollTo(Section),
    Open(String),
}

/// Host that records calls in order.
///
/// Set `fail_open` to simulate a machine without a mail client or browser.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub fail_open: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_open() -> Self {
        Self {
            calls: Vec::new(),
            fail_open: true,
        }
    }

    /// Current scroll lock, as last requested
    pub fn scroll_locked(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HostCall::ScrollLock(locked) => Some(*locked),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn opened(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Open(uri) => Some(uri.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn scrolled_to(&self) -> Vec<Section> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::ScrollTo(section) => Some(*section),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.calls.push(HostCall::ScrollLock(locked));
    }

    fn focus_search_input(&mut self) {
        self.calls.push(HostCall::FocusSearch);
    }

    fn scroll_to_section(&mut self, section: Section) {
        self.calls.push(HostCall::ScrollTo(section));
    }

    fn open_external(&mut self, uri: &str) -> std::io::Result<()> {
        self.calls.push(HostCall::Open(uri.to_string()));
        if self.fail_open {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no handler registered",
            ));
        }
        Ok(())
    }
}

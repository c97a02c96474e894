use tradify_runtime::Host;
use tradify_types::Section;

/// `Host` backed by the terminal page: the visible section, the scroll lock
/// and input focus live here and are read back when drawing.
pub struct TuiHost {
    launch: bool,
    scroll_locked: bool,
    input_focused: bool,
    section: Section,
    opened: Vec<String>,
    status: Option<String>,
}

impl TuiHost {
    pub fn new() -> Self {
        Self {
            launch: true,
            scroll_locked: false,
            input_focused: false,
            section: Section::Products,
            opened: Vec::new(),
            status: None,
        }
    }

    /// Never hand URIs to the OS; they are only shown in the status bar
    pub fn dry_run() -> Self {
        Self {
            launch: false,
            ..Self::new()
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl Default for TuiHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TuiHost {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        if !locked {
            self.input_focused = false;
        }
    }

    fn focus_search_input(&mut self) {
        self.input_focused = true;
    }

    fn scroll_to_section(&mut self, section: Section) {
        self.section = section;
    }

    fn open_external(&mut self, uri: &str) -> std::io::Result<()> {
        self.opened.push(uri.to_string());
        if self.launch {
            if let Err(err) = open::that(uri) {
                self.status = Some(format!("Could not open {}", uri));
                return Err(err);
            }
            self.status = Some(format!("Opened {}", uri));
        } else {
            self.status = Some(format!("Link: {}", uri));
        }
        Ok(())
    }
}

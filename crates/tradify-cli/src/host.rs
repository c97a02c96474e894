//! `Host` for one-shot commands: there is no page to scroll, only the OS
//! handlers for URIs.

use tradify_runtime::Host;
use tradify_types::Section;

pub struct SystemHost {
    launch: bool,
    requested: Vec<String>,
    launched: usize,
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            launch: true,
            requested: Vec::new(),
            launched: 0,
        }
    }

    /// Record URIs without launching anything
    pub fn dry_run() -> Self {
        Self {
            launch: false,
            ..Self::new()
        }
    }

    /// Every URI a controller asked to open, launched or not
    pub fn requested(&self) -> &[String] {
        &self.requested
    }

    /// Whether at least one URI reached the OS handler
    pub fn launched_any(&self) -> bool {
        self.launched > 0
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SystemHost {
    fn set_scroll_locked(&mut self, _locked: bool) {}

    fn focus_search_input(&mut self) {}

    fn scroll_to_section(&mut self, _section: Section) {}

    fn open_external(&mut self, uri: &str) -> std::io::Result<()> {
        self.requested.push(uri.to_string());
        if self.launch {
            open::that(uri)?;
            self.launched += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_records_without_launching() {
        let mut host = SystemHost::dry_run();
        host.open_external("mailto:hello@tradify.shop").unwrap();
        assert_eq!(host.requested(), ["mailto:hello@tradify.shop".to_string()]);
        assert!(!host.launched_any());
    }
}

use tradify_types::{MenuState, Section};

use crate::host::Host;

/// Collapsible header menu
#[derive(Debug, Default)]
pub struct NavigationMenu {
    state: MenuState,
}

impl NavigationMenu {
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Following a link always collapses the menu
    pub fn follow(&mut self, section: Section, host: &mut dyn Host) {
        self.close();
        host.scroll_to_section(section);
    }
}

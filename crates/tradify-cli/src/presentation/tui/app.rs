use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tradify_runtime::{ACKNOWLEDGMENT, Host, Storefront};
use tradify_types::{ContactField, NAV_LINKS, Section};

use super::host::TuiHost;
use super::ui;

/// Browse application state
///
/// Page content lives in the `Storefront` controllers; this struct only keeps
/// cursor positions and the quit flag.
pub struct BrowseApp<'c> {
    storefront: Storefront<'c>,
    host: TuiHost,

    /// Highlighted row in the product grid
    selected_product: usize,
    /// Highlighted row in the search results
    selected_result: usize,
    /// Highlighted link in the open menu
    menu_cursor: usize,

    contact_field: ContactField,
    editing_contact: bool,

    should_quit: bool,
}

impl<'c> BrowseApp<'c> {
    pub fn new(storefront: Storefront<'c>, host: TuiHost) -> Self {
        Self {
            storefront,
            host,
            selected_product: 0,
            selected_result: 0,
            menu_cursor: 0,
            contact_field: ContactField::FullName,
            editing_contact: false,
            should_quit: false,
        }
    }

    pub fn storefront(&self) -> &Storefront<'c> {
        &self.storefront
    }

    pub fn host(&self) -> &TuiHost {
        &self.host
    }

    pub fn selected_product(&self) -> usize {
        self.selected_product
    }

    pub fn selected_result(&self) -> usize {
        self.selected_result
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn contact_field(&self) -> ContactField {
        self.contact_field
    }

    pub fn editing_contact(&self) -> bool {
        self.editing_contact
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| ui::render(f, self))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.storefront.overlay().is_active() {
            self.handle_search_key(key.code);
        } else if self.storefront.menu().is_open() {
            self.handle_menu_key(key.code);
        } else if self.editing_contact {
            self.handle_contact_key(key.code);
        } else {
            self.handle_page_key(key.code);
        }

        self.clamp_selection();
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.storefront.close_search(&mut self.host);
                self.selected_result = 0;
            }
            KeyCode::Enter => {
                let index = self.selected_result;
                if let Some(product) = self.storefront.select_search_result(index, &mut self.host)
                {
                    tracing::info!(product = %product.id, "search result selected");
                    self.selected_result = 0;
                }
            }
            KeyCode::Up => {
                self.selected_result = self.selected_result.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selected_result = self.selected_result.saturating_add(1);
            }
            KeyCode::Backspace => {
                self.storefront.pop_query_char();
                self.selected_result = 0;
            }
            KeyCode::Char(c) => {
                self.storefront.push_query_char(c);
                self.selected_result = 0;
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('m') => self.storefront.toggle_menu(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_cursor = (self.menu_cursor + 1).min(NAV_LINKS.len() - 1);
            }
            KeyCode::Enter => {
                let section = NAV_LINKS[self.menu_cursor].section;
                self.follow(section);
            }
            KeyCode::Char('/') => self.open_search(),
            KeyCode::Char(c) => {
                if let Some(section) = link_for_digit(c) {
                    self.follow(section);
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, code: KeyCode) {
        let section = self.host.section();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.open_search(),
            KeyCode::Char('m') => {
                self.menu_cursor = 0;
                self.storefront.toggle_menu();
            }
            KeyCode::Char('t') => {
                self.storefront.discover_top_picks(&mut self.host);
                self.selected_product = 0;
            }
            KeyCode::Char('x') => {
                self.storefront.clear_rating_filter();
                self.selected_product = 0;
            }
            KeyCode::Tab => self.scroll_by(1),
            KeyCode::BackTab => self.scroll_by(NAV_LINKS.len() - 1),
            KeyCode::Up | KeyCode::Char('k') if section == Section::Products => {
                self.selected_product = self.selected_product.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') if section == Section::Products => {
                self.selected_product = self.selected_product.saturating_add(1);
            }
            KeyCode::Enter if section == Section::Products => self.open_selected_product(),
            KeyCode::Enter | KeyCode::Char('e') if section == Section::Contact => {
                if !self.storefront.contact().is_submitted() {
                    self.editing_contact = true;
                    self.host.clear_status();
                }
            }
            KeyCode::Char(c) => {
                if let Some(section) = link_for_digit(c) {
                    self.follow(section);
                }
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, code: KeyCode) {
        let field = self.contact_field;
        match code {
            KeyCode::Esc => self.editing_contact = false,
            KeyCode::Tab | KeyCode::Down => self.contact_field = field.next(),
            KeyCode::BackTab | KeyCode::Up => self.contact_field = field.next().next(),
            KeyCode::Enter => self.submit_contact(),
            KeyCode::Backspace => self.storefront.contact_mut().pop_char(field),
            KeyCode::Char(c) => self.storefront.contact_mut().push_char(field, c),
            _ => {}
        }
    }

    fn open_search(&mut self) {
        self.selected_result = 0;
        self.storefront.open_search(&mut self.host);
    }

    fn follow(&mut self, section: Section) {
        self.storefront.follow_link(section, &mut self.host);
    }

    /// Move `steps` sections down the page, wrapping at the end
    fn scroll_by(&mut self, steps: usize) {
        if self.host.scroll_locked() {
            return;
        }
        let current = NAV_LINKS
            .iter()
            .position(|link| link.section == self.host.section())
            .unwrap_or(0);
        let next = NAV_LINKS[(current + steps) % NAV_LINKS.len()].section;
        tracing::debug!(section = %next, "scrolling");
        self.host.scroll_to_section(next);
    }

    fn open_selected_product(&mut self) {
        let Some(product) = self
            .storefront
            .grid()
            .visible()
            .get(self.selected_product)
            .copied()
        else {
            return;
        };
        if let Err(err) = self.host.open_external(&product.affiliate_link) {
            tracing::warn!(product = %product.id, error = %err, "could not open affiliate link");
        }
    }

    fn submit_contact(&mut self) {
        let missing = self.storefront.contact().draft().missing_fields();
        if let Some(first) = missing.first() {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            self.host
                .set_status(format!("Please fill in: {}", labels.join(", ")));
            self.contact_field = *first;
            return;
        }

        self.storefront.submit_contact(&mut self.host);
        self.editing_contact = false;
        self.host.set_status(ACKNOWLEDGMENT);
    }

    fn clamp_selection(&mut self) {
        let visible = self.storefront.grid().visible().len();
        self.selected_product = self.selected_product.min(visible.saturating_sub(1));

        let results = self.storefront.overlay().results().len();
        self.selected_result = self.selected_result.min(results.saturating_sub(1));
    }
}

/// `1`..`4` jump to the header links in order
fn link_for_digit(c: char) -> Option<Section> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    NAV_LINKS.get(index).map(|link| link.section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradify_runtime::{CatalogStore, Config};
    use tradify_testing::fixtures::blue_catalog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut BrowseApp, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app(catalog: &CatalogStore) -> BrowseApp<'_> {
        let storefront = Storefront::new(catalog, &Config::default());
        BrowseApp::new(storefront, TuiHost::dry_run())
    }

    #[test]
    fn test_search_filters_overlay_and_grid_then_restores() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('/')));
        assert!(app.storefront().overlay().is_active());
        assert!(app.host().scroll_locked());
        assert!(app.host().input_focused());

        type_text(&mut app, "widget");
        assert_eq!(app.storefront().overlay().results().len(), 1);
        assert_eq!(app.storefront().grid().visible().len(), 1);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.storefront().overlay().is_active());
        assert!(!app.host().scroll_locked());
        assert_eq!(app.storefront().grid().visible().len(), 2);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_q_is_typed_while_searching() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.storefront().overlay().query(), "q");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.storefront().overlay().query(), "");
    }

    #[test]
    fn test_enter_on_result_opens_link_and_closes() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('/')));
        type_text(&mut app, "blue");
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_result(), 1);
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.host().opened(), ["https://shop.example/gadget".to_string()]);
        assert!(!app.storefront().overlay().is_active());
        assert!(!app.host().scroll_locked());
    }

    #[test]
    fn test_opening_search_collapses_menu() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('m')));
        assert!(app.storefront().menu().is_open());

        app.handle_key(key(KeyCode::Char('/')));
        assert!(!app.storefront().menu().is_open());
        assert!(app.storefront().overlay().is_active());
    }

    #[test]
    fn test_menu_link_scrolls_and_closes() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.host().section(), Section::Testimonials);
        assert!(!app.storefront().menu().is_open());

        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.host().section(), Section::About);
    }

    #[test]
    fn test_top_picks_then_clear() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.host().section(), Section::Products);
        let names: Vec<&str> = app
            .storefront()
            .grid()
            .visible()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Blue Widget"]);

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.storefront().grid().visible().len(), 2);
    }

    #[test]
    fn test_grid_selection_is_clamped_and_opens_link() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(app.selected_product(), 1);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.host().opened(), ["https://shop.example/gadget".to_string()]);
    }

    #[test]
    fn test_tab_cycles_sections() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.host().section(), Section::Testimonials);
        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.host().section(), Section::Contact);
    }

    #[test]
    fn test_contact_submission_flow() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.editing_contact());

        type_text(&mut app, "Ada");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Hi");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.storefront().contact().is_submitted());
        assert!(!app.editing_contact());
        assert_eq!(app.host().status(), Some(ACKNOWLEDGMENT));
        assert!(app.host().opened()[0].starts_with("mailto:hello@tradify.shop?subject="));
    }

    #[test]
    fn test_incomplete_contact_is_not_sent() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "Ada");
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.storefront().contact().is_submitted());
        assert!(app.host().opened().is_empty());
        assert_eq!(
            app.host().status(),
            Some("Please fill in: Email Address, Message")
        );
        assert_eq!(app.contact_field(), ContactField::Email);
    }

    #[test]
    fn test_q_quits_from_page() {
        let catalog = blue_catalog().unwrap();
        let mut app = app(&catalog);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use tradify_types::Section;

use super::app::BrowseApp;
use super::components::{
    AboutView, ContactView, HeaderView, MenuPopup, ProductsView, SearchOverlayView,
    StatusBarView, TestimonialsView, centered_rect,
};

const PAGE_HELP: &[(&str, &str)] = &[
    ("q", "uit"),
    ("Tab", " section"),
    ("j/k", " move"),
    ("Enter", " open"),
    ("x", " clear filter"),
];
const SEARCH_HELP: &[(&str, &str)] = &[("Esc", " close"), ("Enter", " open")];
const MENU_HELP: &[(&str, &str)] = &[("1-4", " jump"), ("Esc", " close")];
const CONTACT_HELP: &[(&str, &str)] = &[("Tab", " next"), ("Enter", " send"), ("Esc", " done")];

pub fn render(frame: &mut Frame, app: &BrowseApp) {
    let storefront = app.storefront();
    let host = app.host();
    let catalog = storefront.catalog();

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        HeaderView::new(host.section(), storefront.menu().is_open()),
        header_area,
    );

    match host.section() {
        Section::Products => frame.render_widget(
            ProductsView::new(
                catalog.hero(),
                storefront.grid().visible(),
                storefront.grid().filter_state(),
                app.selected_product(),
            ),
            body_area,
        ),
        Section::Testimonials => {
            frame.render_widget(TestimonialsView::new(catalog.testimonials()), body_area)
        }
        Section::About => frame.render_widget(
            AboutView::new(catalog.benefits(), catalog.trust_badges()),
            body_area,
        ),
        Section::Contact => frame.render_widget(
            ContactView::new(
                storefront.contact(),
                app.contact_field(),
                app.editing_contact(),
            ),
            body_area,
        ),
    }

    let help = if storefront.overlay().is_active() {
        SEARCH_HELP
    } else if storefront.menu().is_open() {
        MENU_HELP
    } else if app.editing_contact() {
        CONTACT_HELP
    } else {
        PAGE_HELP
    };
    frame.render_widget(StatusBarView::new(host.status(), help), status_area);

    if storefront.menu().is_open() {
        frame.render_widget(MenuPopup::new(app.menu_cursor()), MenuPopup::area(frame.area()));
    }

    let overlay = storefront.overlay();
    if overlay.is_active() {
        let area = centered_rect(80, 80, frame.area());
        frame.render_widget(
            SearchOverlayView::new(
                overlay.query(),
                overlay.results(),
                overlay.panel_message(),
                app.selected_result(),
            ),
            area,
        );

        if host.input_focused() {
            frame.set_cursor_position(SearchOverlayView::input_cursor(area, overlay.query()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::tui::TuiHost;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};
    use tradify_runtime::{Config, Storefront};
    use tradify_testing::fixtures::blue_catalog;

    fn screen(app: &BrowseApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn press(app: &mut BrowseApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_landing_page_shows_hero_and_grid() {
        let catalog = blue_catalog().unwrap();
        let app = BrowseApp::new(Storefront::new(&catalog, &Config::default()), TuiHost::dry_run());

        let out = screen(&app);
        assert!(out.contains("Tradify"));
        assert!(out.contains("Shop Smart, Save Big!"));
        assert!(out.contains("Top Picks (2)"));
        assert!(out.contains("Blue Widget"));
        assert!(out.contains("Red Gadget"));
    }

    #[test]
    fn test_search_overlay_shows_prompt_then_no_results() {
        let catalog = blue_catalog().unwrap();
        let mut app =
            BrowseApp::new(Storefront::new(&catalog, &Config::default()), TuiHost::dry_run());

        press(&mut app, KeyCode::Char('/'));
        assert!(screen(&app).contains("Start typing to find amazing products!"));

        for c in "zzz".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let out = screen(&app);
        assert!(out.contains("Sorry, this product is not currently available!"));
        assert!(out.contains("Try searching for something else."));
    }

    #[test]
    fn test_long_search_query_keeps_cursor_in_input_box() {
        let catalog = blue_catalog().unwrap();
        let mut app =
            BrowseApp::new(Storefront::new(&catalog, &Config::default()), TuiHost::dry_run());

        press(&mut app, KeyCode::Char('/'));
        for _ in 0..300 {
            press(&mut app, KeyCode::Char('w'));
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let overlay = centered_rect(80, 80, Rect::new(0, 0, 100, 30));
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < overlay.right() - 2);
        assert_eq!(cursor.y, overlay.y + 2);
    }

    #[test]
    fn test_contact_section_shows_acknowledgment_after_send() {
        let catalog = blue_catalog().unwrap();
        let mut app =
            BrowseApp::new(Storefront::new(&catalog, &Config::default()), TuiHost::dry_run());

        press(&mut app, KeyCode::Char('4'));
        assert!(screen(&app).contains("Full Name"));

        press(&mut app, KeyCode::Char('e'));
        for (text, last) in [("Ada", false), ("ada@example.com", false), ("Hello", true)] {
            for c in text.chars() {
                press(&mut app, KeyCode::Char(c));
            }
            press(&mut app, if last { KeyCode::Enter } else { KeyCode::Tab });
        }

        let out = screen(&app);
        assert!(out.contains("Thank you for your message!"));
        assert!(out.contains("We'll get back to you as soon as possible."));
    }

    #[test]
    fn test_reviews_and_about_sections() {
        let catalog = blue_catalog().unwrap();
        let mut app =
            BrowseApp::new(Storefront::new(&catalog, &Config::default()), TuiHost::dry_run());

        press(&mut app, KeyCode::Char('2'));
        assert!(screen(&app).contains("Quick and honest."));

        press(&mut app, KeyCode::Char('3'));
        assert!(screen(&app).contains("Secure Checkout"));
    }
}

use tradify_runtime::{Config, PanelMessage, Storefront};
use tradify_testing::fixtures::blue_catalog;
use tradify_testing::{HostCall, RecordingHost};
use tradify_types::{ContactField, Section};

#[test]
fn test_open_type_close_resets_everything() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut store = Storefront::new(&catalog, &Config::default());
    let mut host = RecordingHost::new();

    store.open_search(&mut host);
    store.type_query("blue");

    assert_eq!(store.overlay().results().len(), 2);
    assert_eq!(store.grid().filter_state().query, "blue");
    assert_eq!(store.grid().visible().len(), 2);
    assert!(host.scroll_locked());

    store.close_search(&mut host);

    assert!(!store.overlay().is_active());
    assert!(store.overlay().query().is_empty());
    assert!(store.overlay().results().is_empty());
    assert_eq!(store.grid().filter_state().query, "");
    assert!(!host.scroll_locked());
    Ok(())
}

#[test]
fn test_opening_search_closes_menu() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut store = Storefront::new(&catalog, &Config::default());
    let mut host = RecordingHost::new();

    store.toggle_menu();
    assert!(store.menu().is_open());

    store.open_search(&mut host);
    assert!(!store.menu().is_open());
    assert_eq!(
        host.calls,
        vec![HostCall::ScrollLock(true), HostCall::FocusSearch]
    );

    store.toggle_menu();
    assert!(!store.menu().is_open(), "menu stays hidden while searching");
    Ok(())
}

#[test]
fn test_typing_char_by_char() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut store = Storefront::new(&catalog, &Config::default());
    let mut host = RecordingHost::new();

    store.open_search(&mut host);
    for c in "red".chars() {
        store.push_query_char(c);
    }
    assert_eq!(store.overlay().results().len(), 1);

    for _ in 0..3 {
        store.pop_query_char();
    }
    assert_eq!(store.overlay().panel_message(), Some(PanelMessage::Prompt));
    assert_eq!(store.grid().visible().len(), 2);
    Ok(())
}

#[test]
fn test_selecting_a_result_follows_the_affiliate_link() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut store = Storefront::new(&catalog, &Config::default());
    let mut host = RecordingHost::new();

    store.open_search(&mut host);
    store.type_query("widget");
    let picked = store.select_search_result(0, &mut host);

    assert_eq!(picked.map(|p| p.name.as_str()), Some("Blue Widget"));
    assert_eq!(host.opened(), vec!["https://shop.example/widget"]);
    assert!(!store.overlay().is_active());
    assert_eq!(store.grid().filter_state().query, "");
    Ok(())
}

#[test]
fn test_discover_top_picks() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut store = Storefront::new(&catalog, &Config::default());
    let mut host = RecordingHost::new();

    store.discover_top_picks(&mut host);

    let names: Vec<&str> = store.grid().visible().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Blue Widget"]);
    assert_eq!(host.scrolled_to(), vec![Section::Products]);

    store.clear_rating_filter();
    assert_eq!(store.grid().visible().len(), 2);
    Ok(())
}

#[test]
fn test_nav_link_closes_menu_and_scrolls() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut store = Storefront::new(&catalog, &Config::default());
    let mut host = RecordingHost::new();

    store.toggle_menu();
    store.follow_link(Section::Testimonials, &mut host);

    assert!(!store.menu().is_open());
    assert_eq!(host.scrolled_to(), vec![Section::Testimonials]);
    Ok(())
}

#[test]
fn test_contact_submission_is_synchronous_and_unconditional() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut store = Storefront::new(&catalog, &Config::default());
    let mut host = RecordingHost::failing_open();

    store.edit_contact(ContactField::FullName, "Jane");
    store.edit_contact(ContactField::Email, "jane@x.com");
    store.edit_contact(ContactField::Message, "Hi");
    let submission = store.submit_contact(&mut host);

    assert!(store.contact().is_submitted());
    assert_eq!(host.opened(), vec![submission.uri.as_str()]);

    let body_lines: Vec<&str> = submission.message.body.lines().collect();
    assert!(body_lines.contains(&"Full Name: Jane"));
    assert!(body_lines.contains(&"Email Address: jane@x.com"));
    assert!(body_lines.contains(&"Message:"));
    assert!(body_lines.contains(&"Hi"));
    Ok(())
}

#[test]
fn test_configured_recipient_is_used() -> anyhow::Result<()> {
    let catalog = blue_catalog()?;
    let mut config = Config::default();
    config.contact.recipient = "sales@example.org".to_string();
    let store = Storefront::new(&catalog, &config);

    assert!(
        store
            .contact()
            .prepare()
            .uri
            .starts_with("mailto:sales@example.org?subject=")
    );
    Ok(())
}

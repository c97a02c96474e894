use tradify_testing::TestWorld;

const CONTACT: [&str; 8] = [
    "contact",
    "--name",
    "Ada Lovelace",
    "--email",
    "ada@example.com",
    "--message",
    "Do you ship abroad?",
    "--print-only",
];

#[test]
fn test_print_only_shows_mailto_and_acknowledgment() {
    let world = TestWorld::new();
    let result = world.run(&CONTACT).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("To:      hello@tradify.shop"));
    assert!(result.stdout.contains("Subject: New Message from Ada Lovelace via Tradify"));
    assert!(result.stdout.contains(
        "mailto:hello@tradify.shop?subject=New%20Message%20from%20Ada%20Lovelace%20via%20Tradify&body="
    ));
    assert!(result.stdout.contains("Thank you for your message!"));
    assert!(result.stdout.contains("We'll get back to you as soon as possible."));
}

#[test]
fn test_json_carries_full_message() {
    let world = TestWorld::new();
    let json = world.run_json(&CONTACT).unwrap();

    let content = &json["content"];
    assert_eq!(content["launched"], false);
    assert_eq!(content["acknowledgment"], "Thank you for your message!");
    assert_eq!(
        content["body"],
        "You have received a new message from your website contact form.\n\n\
         Here are the details:\n\n\
         Full Name: Ada Lovelace\n\
         Email Address: ada@example.com\n\n\
         Message:\nDo you ship abroad?"
    );
    assert!(
        content["mailto"]
            .as_str()
            .unwrap()
            .contains("Do%20you%20ship%20abroad%3F")
    );
}

#[test]
fn test_recipient_comes_from_config() {
    let world = TestWorld::new().with_config("[contact]\nrecipient = \"sales@example.com\"\n");
    let json = world.run_json(&CONTACT).unwrap();

    assert_eq!(json["content"]["recipient"], "sales@example.com");
    assert!(
        json["content"]["mailto"]
            .as_str()
            .unwrap()
            .starts_with("mailto:sales@example.com?subject=")
    );
}

#[test]
fn test_blank_field_is_rejected() {
    let world = TestWorld::new();
    let result = world
        .run(&[
            "contact",
            "--name",
            "Ada",
            "--email",
            "  ",
            "--message",
            "Hi",
            "--print-only",
        ])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("Email Address is required"));
}

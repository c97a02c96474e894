use assert_cmd::Command;
use predicates::prelude::*;
use tradify_testing::TestWorld;

#[allow(deprecated)]
fn tradify() -> Command {
    Command::cargo_bin("tradify").unwrap()
}

#[test]
fn test_version_flag() {
    tradify()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tradify "));
}

#[test]
fn test_help_lists_commands() {
    tradify()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("products")
                .and(predicate::str::contains("search"))
                .and(predicate::str::contains("contact"))
                .and(predicate::str::contains("browse")),
        );
}

#[test]
fn test_unknown_format_is_rejected() {
    tradify()
        .args(["--format", "xml", "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

#[test]
fn test_no_command_prints_guidance() {
    let world = TestWorld::new();
    let result = world.run(&[]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Shop Smart, Save Big!"));
    assert!(result.stdout.contains("tradify browse"));
    assert!(result.stdout.contains("tradify config init"));
}

#[test]
fn test_guidance_json_counts_products() {
    let world = TestWorld::new().with_blue_catalog();
    let json = world.run_json(&[]).unwrap();

    assert_eq!(json["content"]["product_count"], 2);
    assert_eq!(json["content"]["config_exists"], false);
}

#[test]
fn test_browse_needs_a_terminal() {
    let world = TestWorld::new().with_blue_catalog();
    let result = world.run(&["browse", "--no-open"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("interactive terminal"));
}

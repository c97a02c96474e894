use tradify_testing::TestWorld;

#[test]
fn test_show_reports_defaults_without_file() {
    let world = TestWorld::new();
    let json = world.run_json(&["config", "show"]).unwrap();

    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["config"]["grid"]["top_rating"], 5.0);
    assert_eq!(json["content"]["config"]["grid"]["rating_match"], "exact");
    assert_eq!(
        json["content"]["config"]["contact"]["recipient"],
        "hello@tradify.shop"
    );
}

#[test]
fn test_init_writes_file_once() {
    let world = TestWorld::new();

    let result = world.run(&["config", "init"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Config written"));
    assert!(world.config_path().exists());

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("[grid]"));
    assert!(written.contains("recipient = \"hello@tradify.shop\""));

    let result = world.run(&["config", "init"]).unwrap();
    assert!(result.success());
    assert!(result.stdout.contains("Config already exists"));
    assert!(result.stdout.contains("tradify config init --force"));
}

#[test]
fn test_init_force_overwrites() {
    let world = TestWorld::new().with_config("[contact]\nrecipient = \"old@example.com\"\n");

    let json = world.run_json(&["config", "init", "--force"]).unwrap();
    assert_eq!(json["content"]["written"], true);

    let json = world.run_json(&["config", "show"]).unwrap();
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(
        json["content"]["config"]["contact"]["recipient"],
        "hello@tradify.shop"
    );
}

#[test]
fn test_invalid_config_fails() {
    let world = TestWorld::new().with_config("[grid]\ntop_rating = \"high\"\n");
    let result = world.run(&["products"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr.starts_with("Error:"));
}

#[test]
fn test_data_dir_from_environment() {
    let world = TestWorld::new();
    let env_dir = world.temp_dir().join("from-env");

    let mut cmd = assert_cmd_command();
    cmd.env("TRADIFY_PATH", &env_dir)
        .env_remove("RUST_LOG")
        .args(["--format", "json", "config", "show"]);
    let output = cmd.output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let path = json["content"]["path"].as_str().unwrap();
    assert!(path.starts_with(env_dir.to_str().unwrap()));
}

#[allow(deprecated)]
fn assert_cmd_command() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("tradify").unwrap()
}

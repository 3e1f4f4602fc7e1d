use crate::common::{cmd_in, TestContext};
use predicates::prelude::*;

#[test]
fn test_missing_map_file() {
    let ctx = TestContext::default();
    cmd_in(&ctx.temp_path())
        .args(["check", "--map", "/nonexistent/path/sourcemap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn test_resource_not_on_search_path() {
    let ctx = TestContext::default();
    cmd_in(&ctx.temp_path())
        .args(["dump", "--search-path", "."])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("META-INF/please_sourcemap")
                .and(predicate::str::contains("not found on search path")),
        );
}

#[test]
fn test_malformed_map_reports_file_and_line() {
    let ctx = TestContext::default();
    let map = ctx
        .create_file("broken_map.txt", "a/B.java=src/a/B.java\nno separator here\n")
        .unwrap();

    cmd_in(&ctx.temp_path())
        .args(["check", "--map"])
        .arg(&map)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("line 2").and(predicate::str::contains("broken_map.txt")),
        );
}

#[test]
fn test_explicit_config_must_exist() {
    let ctx = TestContext::default();
    cmd_in(&ctx.temp_path())
        .args(["--config", "missing.toml", "derive", "a/B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_invalid_default_config_falls_back() {
    let ctx = TestContext::default();
    ctx.create_file(".srcmap.toml", "[derive\nsource_root = ").unwrap();

    cmd_in(&ctx.temp_path())
        .args(["derive", "a/B"])
        .assert()
        .success()
        .stdout("a/B\n");
}

#[test]
fn test_map_and_search_path_conflict() {
    let ctx = TestContext::default();
    cmd_in(&ctx.temp_path())
        .args(["lookup", "a/B", "--map", "x", "--search-path", "y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_configured_format_warns_and_uses_text() {
    let ctx = TestContext::default();
    let map = ctx
        .create_file("sourcemap", "a/B.java=src/a/B.java\n")
        .unwrap();
    ctx.create_file(".srcmap.toml", "[output]\nformat = \"yaml\"\n")
        .unwrap();

    cmd_in(&ctx.temp_path())
        .args(["dump", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout("a/B.java -> src/a/B.java\n")
        .stderr(predicate::str::contains("Unknown output format `yaml`"));
}

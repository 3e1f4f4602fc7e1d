use crate::common::{cmd_in, TestContext};
use predicates::prelude::*;

#[test]
fn test_derive_with_overlapping_source_root() {
    let ctx = TestContext::default();
    cmd_in(&ctx.temp_path())
        .args([
            "derive",
            "build/please/test/TestCoverage",
            "--source-root",
            "junit_runner/src/build/please/test",
        ])
        .assert()
        .success()
        .stdout("junit_runner/src/build/please/test/TestCoverage\n");
}

#[test]
fn test_derive_without_source_root_echoes_path() {
    let ctx = TestContext::default();
    cmd_in(&ctx.temp_path())
        .args(["derive", "build/please/test/TestCoverage"])
        .assert()
        .success()
        .stdout("build/please/test/TestCoverage\n");
}

#[test]
fn test_derive_reads_source_root_from_config() {
    let ctx = TestContext::default();
    ctx.create_file(".srcmap.toml", "[derive]\nsource_root = \"junit_runner/src\"\n")
        .unwrap();

    cmd_in(&ctx.temp_path())
        .args(["derive", "build/please/test/TestCoverage"])
        .assert()
        .success()
        .stdout("junit_runner/src/build/please/test/TestCoverage\n");
}

#[test]
fn test_derive_verbose_reports_overlap() {
    let ctx = TestContext::default();
    cmd_in(&ctx.temp_path())
        .args([
            "derive",
            "build/please/test/TestCoverage",
            "-s",
            "junit_runner/src/build/please/test",
            "--verbose",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("shares 3 segment(s)"));
}

use std::path::PathBuf;
use tempfile::TempDir;

/// Helper struct for managing test resources
pub struct TestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    /// Get the path to the temporary directory
    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a file (and its parent directories) with given content
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let file_path = self.temp_path().join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// Get the srcmap command, running inside `dir` with colors and env logging off
#[allow(deprecated)]
pub fn cmd_in(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("srcmap").expect("Failed to find srcmap binary");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SRCMAP_LOG_JSON");
    cmd
}

/// Path to the checked-in fixture tree
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Sample source map in the on-disk format
pub fn sample_source_map() -> String {
    [
        "# generated for tests",
        "build/please/common/source/SourceMap.java=junit_runner/src/build/please/common/source/SourceMap.java",
        "build/please/test/TestCoverage.java=junit_runner/src/build/please/test/TestCoverage.java",
        "",
    ]
    .join("\n")
}

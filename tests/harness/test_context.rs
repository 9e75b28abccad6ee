//! Shared testing harness for `prognote` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::docx;

pub(crate) const TEMPLATE_FILE: &str = "Progress Note Template.docx";
pub(crate) const REPORTS_DIR: &str = "Generated Reports";

/// Isolated application directory with a template, an API key, and a config
/// pointing the completion client at a local mock server.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create an application directory without an endpoint configuration.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::write(root.path().join(TEMPLATE_FILE), docx::progress_note_template())
            .expect("Failed to write template");
        Self { root }
    }

    /// Create an application directory wired to `server` with an API key in `.env`.
    pub(crate) fn with_server(server: &mockito::Server) -> Self {
        let ctx = Self::new();
        ctx.write_config(&format!(
            "[completion]\napi_url = \"{}/v1/chat/completions\"\n",
            server.url()
        ));
        ctx.write_file(".env", "OPENAI_API_KEY=sk-test\n");
        ctx
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn write_config(&self, content: &str) {
        self.write_file("prognote.toml", content);
    }

    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub(crate) fn template_path(&self) -> PathBuf {
        self.root().join(TEMPLATE_FILE)
    }

    pub(crate) fn template_bytes(&self) -> Vec<u8> {
        fs::read(self.template_path()).expect("Failed to read template")
    }

    /// Default export location for a client and session.
    pub(crate) fn report_path(&self, file_name: &str) -> PathBuf {
        self.root().join(REPORTS_DIR).join(file_name)
    }

    /// Build a command for invoking the compiled `prognote` binary in the
    /// application directory, isolated from the caller's API key.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prognote").expect("Failed to locate prognote binary");
        cmd.current_dir(self.root()).env_remove("OPENAI_API_KEY").env("RUST_LOG", "warn");
        cmd
    }

    /// `generate` with a complete form for Jane Doe, session 3.
    pub(crate) fn generate_cmd(&self, notes: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg("generate").args(METADATA_ARGS).args(["--notes", notes]);
        cmd
    }
}

/// Complete metadata flags for Jane Doe, session 3, 01-JAN-2025 10:30 AM.
pub(crate) const METADATA_ARGS: [&str; 16] = [
    "--name", "Jane Doe", "--sessions", "3", "--day", "01", "--month", "JAN", "--year", "2025",
    "--hour", "10", "--minute", "30", "--ampm", "AM",
];

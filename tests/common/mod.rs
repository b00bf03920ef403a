#![allow(dead_code)]

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the code-checker binary.
#[macro_export]
macro_rules! code_checker {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("code-checker"))
    };
}

/// Fake tool that prints the contents of the file it is asked to check.
pub const ECHO_TARGET_TOOL: &str = "#!/bin/sh\nfor last; do :; done\ncat \"$last\"\n";

/// Creates a temporary project with a private `bin/` directory for fake tools.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_dir("bin");
        fixture.create_dir("project");
        fixture
    }

    /// Creates a file with the given content under `project/`.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.project().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a Python file whose fake pylint output reports `score`.
    pub fn create_scored_file(&self, relative_path: &str, score: &str) -> PathBuf {
        self.create_file(
            relative_path,
            &format!(
                "************* Module sample\n\
                 sample.py:1:0: C0114: Missing module docstring (missing-module-docstring)\n\n\
                 ------------------------------------------------------------------\n\
                 Your code has been rated at {score}/10\n"
            ),
        )
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Installs an executable shell script named `name` into `bin/`.
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin().join(name);
        fs::write(&path, script).expect("Failed to write tool script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
    }

    /// Creates a code-checker config file in the project directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".code-checker.toml", content);
    }

    /// Returns the project directory checks run in.
    pub fn project(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `PATH` value with the fake tools first, followed by the inherited `PATH`.
    pub fn search_path(&self) -> OsString {
        let mut paths = vec![self.bin()];
        if let Some(inherited) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&inherited));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }
}

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};


pub use data::{long_quotation, quotes_file, SAMPLE_FILE, SAMPLE_QUOTES};

/// Path to the `yow` binary built by cargo for this test run
const YOW_BIN: &str = env!("CARGO_BIN_EXE_yow");

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Exit code of the process, `None` if it was killed by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let root_dir = tempfile::TempDir::new().unwrap();
        let path = root_dir.path().join(name);
        fs::write(&path, contents).unwrap();

        Self { root_dir }
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run `yow` with the specified arguments
    pub async fn run_yow(&self, args: &[&str]) -> Output {
        self.run_yow_with_invocation(args, None).await
    }

    /// Run `yow` with the `_` variable set as a shell would after running `invoked`
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaiting its output fails.
    pub async fn run_yow_with_invocation(&self, args: &[&str], invoked: Option<&str>) -> Output {
        let mut command = tokio::process::Command::new(YOW_BIN);
        command
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("_")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(invoked) = invoked {
            command.env("_", OsStr::new(invoked));
        }

        let raw_output = command.output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout_raw: raw_output.stdout.clone(),
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}

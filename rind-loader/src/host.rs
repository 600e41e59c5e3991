// Host adapters: the "run this script" seam consumed by the dispatcher

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

/// The load primitive.
///
/// Run the script at `path` with `args` and report its exit status. The
/// dispatcher treats implementations as opaque; errors raised here come
/// back to the dispatcher's caller exactly as raised.
pub trait ScriptHost {
    fn load(&mut self, path: &Path, args: &[String]) -> Result<i32>;
}

/// Runs scripts through an external interpreter process.
pub struct ExecHost {
    interpreter: PathBuf,
}

impl ExecHost {
    /// Use `interpreter` as given, without a PATH lookup
    pub fn new<P: Into<PathBuf>>(interpreter: P) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Locate `command` on PATH
    ///
    /// # Errors
    /// Fails when no such command is installed
    pub fn from_command(command: &str) -> Result<Self> {
        let interpreter = which::which(command)
            .with_context(|| format!("interpreter '{}' not found on PATH", command))?;
        Ok(Self { interpreter })
    }

    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }
}

impl ScriptHost for ExecHost {
    /// Blocks until the child exits. A child killed by a signal reports
    /// status 1, the same mapping applied to every unreadable exit.
    fn load(&mut self, path: &Path, args: &[String]) -> Result<i32> {
        log::info!(
            "running {} {}",
            self.interpreter.display(),
            path.display()
        );
        let status = Command::new(&self.interpreter)
            .arg(path)
            .args(args)
            .status()
            .with_context(|| format!("failed to run '{}'", self.interpreter.display()))?;
        Ok(status.code().unwrap_or(1))
    }
}

/// Records load calls instead of running anything.
///
/// For tests and for embedders that want resolution without execution.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub loads: Vec<(PathBuf, Vec<String>)>,
    pub status: i32,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScriptHost for RecordingHost {
    fn load(&mut self, path: &Path, args: &[String]) -> Result<i32> {
        self.loads.push((path.to_path_buf(), args.to_vec()));
        Ok(self.status)
    }
}

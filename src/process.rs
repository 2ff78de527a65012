//! Subprocess invocation with check-call semantics.
//!
//! Every external tool is invoked as a fixed argv (never through a shell),
//! blocks until it exits, and inherits stderr so the tool's own diagnostics
//! reach the operator. A non-zero exit maps to
//! [`NbenvError::CommandFailed`] and aborts the whole run; there are no
//! retries and no timeouts.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{NbenvError, Result};

/// A single external tool invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    suppress_stdout: bool,
}

impl Invocation {
    /// Start building an invocation of `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            suppress_stdout: false,
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Discard the child's stdout instead of inheriting it.
    pub fn suppress_stdout(mut self) -> Self {
        self.suppress_stdout = true;
        self
    }

    /// Human-readable command line for messages and dry-run output.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    /// Run the tool, inheriting stderr, failing on non-zero exit.
    ///
    /// A spawn failure (missing executable) is reported as the same error
    /// kind with no exit code.
    pub fn check_call(&self) -> Result<()> {
        tracing::debug!("Running: {}", self.display());

        let mut cmd = self.command();
        cmd.stdout(if self.suppress_stdout {
            Stdio::null()
        } else {
            Stdio::inherit()
        });
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| {
            tracing::debug!("Spawn failed: {}", e);
            NbenvError::CommandFailed {
                command: self.display(),
                code: None,
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(NbenvError::CommandFailed {
                command: self.display(),
                code: status.code(),
            })
        }
    }

    /// Run the tool and capture stdout, failing on non-zero exit.
    ///
    /// stderr is discarded: Jupyter tooling prints harmless migration
    /// chatter there that would pollute status output.
    pub fn capture_stdout(&self) -> Result<String> {
        tracing::debug!("Running (captured): {}", self.display());

        let mut cmd = self.command();
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::null());

        let output = cmd.output().map_err(|_| NbenvError::CommandFailed {
            command: self.display(),
            code: None,
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(NbenvError::CommandFailed {
                command: self.display(),
                code: output.status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_invocation(script: &str) -> Invocation {
        if cfg!(target_os = "windows") {
            Invocation::new("cmd").arg("/C").arg(script)
        } else {
            Invocation::new("sh").arg("-c").arg(script)
        }
    }

    #[test]
    fn check_call_succeeds_on_zero_exit() {
        assert!(shell_invocation("exit 0").check_call().is_ok());
    }

    #[test]
    fn check_call_propagates_exit_code() {
        let err = shell_invocation("exit 3").check_call().unwrap_err();
        match err {
            NbenvError::CommandFailed { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn check_call_reports_missing_executable() {
        let err = Invocation::new("/nonexistent/tool-xyz")
            .check_call()
            .unwrap_err();
        match err {
            NbenvError::CommandFailed { code, command } => {
                assert_eq!(code, None);
                assert!(command.contains("tool-xyz"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn capture_stdout_returns_output() {
        let out = shell_invocation("echo hello").capture_stdout().unwrap();
        assert!(out.contains("hello"));
    }

    #[test]
    fn capture_stdout_fails_on_nonzero_exit() {
        assert!(shell_invocation("exit 1").capture_stdout().is_err());
    }

    #[test]
    fn cwd_changes_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let inv = if cfg!(target_os = "windows") {
            Invocation::new("cmd").arg("/C").arg("cd")
        } else {
            Invocation::new("pwd")
        }
        .cwd(temp.path());

        assert!(inv.check_call().is_ok());
    }

    #[test]
    fn display_joins_program_and_args() {
        let inv = Invocation::new("python")
            .arg("-m")
            .arg("venv")
            .arg("/proj/venv");
        assert_eq!(inv.display(), "python -m venv /proj/venv");
    }
}

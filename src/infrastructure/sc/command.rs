use crate::domain::errors::ControlError;
use anyhow::{anyhow, Result};
use std::process::Command;

// Win32 error codes surfaced as sc.exe exit codes. Classification keys off
// these, never off the localized message text.
const ERROR_ACCESS_DENIED: i32 = 5;
const ERROR_SERVICE_ALREADY_RUNNING: i32 = 1056;
const ERROR_SERVICE_DOES_NOT_EXIST: i32 = 1060;
const ERROR_SERVICE_NOT_ACTIVE: i32 = 1062;

pub struct ScOutput {
    pub stdout: String,
    pub stderr: String,
}

pub struct ScCommand;

impl ScCommand {
    /// Runs `sc query <name>` and returns its stdout for status parsing.
    pub fn query(name: &str) -> Result<String> {
        tracing::debug!("Running: sc query {}", name);
        let output = Command::new("sc").args(["query", name]).output()?;

        if !output.status.success() {
            return Err(anyhow!(
                "sc query failed: {}",
                String::from_utf8_lossy(&output.stdout).trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Runs `sc <verb> <name>` with the caller's current privileges.
    pub fn run_verb(verb: &str, name: &str) -> Result<(), ControlError> {
        tracing::debug!("Running: sc {} {}", verb, name);
        let output = Command::new("sc")
            .args([verb, name])
            .output()
            .map_err(|e| ControlError::Io(e.to_string()))?;

        if !output.status.success() {
            return Err(Self::classify(name, output.status.code(), &output));
        }

        let out = Self::capture(output);
        if !out.stdout.is_empty() {
            tracing::info!("sc {} output: {}", verb, out.stdout.trim());
        }
        if !out.stderr.is_empty() {
            tracing::info!("sc {} stderr: {}", verb, out.stderr.trim());
        }
        Ok(())
    }

    /// Re-issues the verb through an elevated shell. Start-Process throws on
    /// a declined UAC prompt, so a decline surfaces as a nonzero powershell
    /// exit; otherwise the elevated sc exit code is propagated back through
    /// `exit $p.ExitCode` and checked here rather than fired and forgotten.
    pub fn run_verb_elevated(verb: &str, name: &str) -> Result<(), ControlError> {
        tracing::info!("Retrying elevated: sc {} {}", verb, name);
        let script = format!(
            "$p = Start-Process -FilePath sc.exe -ArgumentList '{} \"{}\"' -Verb RunAs -Wait -PassThru; exit $p.ExitCode",
            verb, name
        );
        let output = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command", &script])
            .output()
            .map_err(|e| ControlError::Io(e.to_string()))?;

        if !output.status.success() {
            return Err(match output.status.code() {
                Some(ERROR_SERVICE_DOES_NOT_EXIST) => ControlError::NotFound(name.to_string()),
                Some(ERROR_SERVICE_NOT_ACTIVE) => ControlError::NotRunning(name.to_string()),
                Some(ERROR_SERVICE_ALREADY_RUNNING) => {
                    ControlError::AlreadyRunning(name.to_string())
                }
                _ => ControlError::ElevationFailed(name.to_string()),
            });
        }
        Ok(())
    }

    fn classify(name: &str, code: Option<i32>, output: &std::process::Output) -> ControlError {
        match code {
            Some(ERROR_ACCESS_DENIED) => ControlError::AccessDenied(name.to_string()),
            Some(ERROR_SERVICE_DOES_NOT_EXIST) => ControlError::NotFound(name.to_string()),
            Some(ERROR_SERVICE_NOT_ACTIVE) => ControlError::NotRunning(name.to_string()),
            Some(ERROR_SERVICE_ALREADY_RUNNING) => ControlError::AlreadyRunning(name.to_string()),
            Some(code) => ControlError::CommandFailed {
                code,
                detail: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            },
            None => ControlError::Io("sc terminated by signal".to_string()),
        }
    }

    fn capture(output: std::process::Output) -> ScOutput {
        ScOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

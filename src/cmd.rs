use std::process::{Command, Output, Stdio};

use crate::error::{CheckError, CheckResult};

/// Run a command and capture its stdout. Fails if the command
/// returns a non-zero exit code.
pub fn run(program: &str, args: &[&str]) -> CheckResult<String> {
    let output = spawn(program, args)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        eprintln!("stderr: {stderr}");
        Err(CheckError::CommandFailed {
            command: format_command(program, args),
            status: output.status,
        })
    }
}

/// Run a command and capture stdout and stderr merged, in that
/// order. Probe commands write diagnostics to either stream, so
/// the caller inspects both.
pub fn run_combined(program: &str, args: &[&str]) -> CheckResult<String> {
    let output = spawn(program, args)?;

    let mut combined = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&stderr);
    }

    if output.status.success() {
        Ok(combined)
    } else {
        eprintln!("stderr: {stderr}");
        Err(CheckError::CommandFailed {
            command: format_command(program, args),
            status: output.status,
        })
    }
}

/// Check if a command exists on PATH.
#[must_use]
pub fn command_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

fn spawn(program: &str, args: &[&str]) -> CheckResult<Output> {
    Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CheckError::CommandNotFound(program.to_string())
            } else {
                CheckError::Io(e)
            }
        })
}

fn format_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| (*a).to_string()));
    parts.join(" ")
}

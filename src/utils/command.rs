//! Command execution utilities

use crate::error::{FetchError, Result};
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Hard ceiling per helper invocation so a hung command cannot hang the run.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

/// Execute a command and return trimmed stdout.
///
/// The child is polled against [`COMMAND_TIMEOUT`] and killed when it
/// overruns; stdout is drained on a separate thread so a chatty child
/// cannot deadlock on a full pipe.
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let stdout = child.stdout.take();
    let reader = thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut out) = stdout {
            let _ = out.read_to_string(&mut buf);
        }
        buf
    });

    let deadline = Instant::now() + COMMAND_TIMEOUT;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(FetchError::Timeout(program.to_string()));
                }
                thread::sleep(Duration::from_millis(10));
            }
        }
    };

    let output = reader.join().unwrap_or_default();

    if status.success() {
        Ok(output.trim().to_string())
    } else {
        Err(FetchError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            status.code()
        )))
    }
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    use std::env;

    if let Ok(path) = env::var("PATH") {
        for dir in path.split(':') {
            let full_path = std::path::Path::new(dir).join(program);
            if full_path.exists() && full_path.is_file() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_command_captures_stdout() {
        let out = run_command("echo", &["hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn run_command_reports_missing_program() {
        assert!(run_command("ferrofetch-no-such-binary", &[]).is_err());
    }

    #[test]
    fn run_command_kills_hung_child() {
        let start = Instant::now();
        let result = run_command("sleep", &["30"]);
        assert!(matches!(result, Err(FetchError::Timeout(_))));
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn nonzero_exit_is_an_error() {
        assert!(run_command("false", &[]).is_err());
    }
}

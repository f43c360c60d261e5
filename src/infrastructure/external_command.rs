use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} timed out after {secs}s")]
    TimedOut { program: String, secs: u64 },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Runs an external tool to completion and returns its stdout.
///
/// The child is killed if the timeout elapses.
pub async fn run_command(cmd: &mut Command, timeout: Duration) -> Result<Vec<u8>, CommandError> {
    let program = cmd.as_std().get_program().to_string_lossy().into_owned();

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| CommandError::TimedOut {
            program: program.clone(),
            secs: timeout.as_secs(),
        })?
        .map_err(|source| CommandError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommandError::Failed {
            program,
            status: output.status.to_string(),
            stderr: last_lines(stderr.trim(), 5),
        });
    }

    Ok(output.stdout)
}

// ffmpeg in particular prints its whole banner to stderr.
fn last_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}

//! Spawning external CLIs and capturing their output

use crate::error::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Run `program` with `args` and return its stdout.
///
/// A spawn failure or non-zero exit becomes [`Error::Command`] carrying the
/// trimmed stderr (or the spawn error).
pub async fn run(program: &str, args: &[String]) -> Result<String> {
    debug!(program, ?args, "executing");

    let command_error = |message: String| Error::Command {
        program: program.to_string(),
        args: args.to_vec(),
        message,
    };

    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| command_error(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        debug!(program, %message, "command failed");
        return Err(command_error(message));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

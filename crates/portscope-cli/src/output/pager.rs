//! Paged display for buffered search output.

use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};

/// Display a buffer through the user's pager, falling back to stdout.
///
/// Honors `$PAGER`, defaulting to `less -R` so color directives pass
/// through. When stdout is not a terminal, or the pager cannot be
/// spawned, the buffer is written to stdout unchanged.
pub fn page_or_print(buffer: &str) -> Result<()> {
    if console::user_attended() && spawn_pager(buffer).is_ok() {
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    stdout.write_all(buffer.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn spawn_pager(buffer: &str) -> std::io::Result<()> {
    let pager = std::env::var("PAGER").unwrap_or_else(|_| String::from("less -R"));

    let mut parts = pager.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(std::io::Error::other("PAGER is set but empty"));
    };

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // The pager quitting early closes the pipe; that is not a failure.
        let _ = stdin.write_all(buffer.as_bytes());
    }

    child.wait()?;
    Ok(())
}

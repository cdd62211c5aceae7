// src/exec/shell.rs

use tokio::process::Command;

use crate::startup::ResolvedCommand;

/// The command line handed to the shell.
///
/// Package-manager commands are passed through as-is; script paths are
/// quoted so spaces and shell metacharacters in the path survive.
pub fn shell_line(command: &ResolvedCommand) -> String {
    match command {
        ResolvedCommand::Shell(line) => line.clone(),
        ResolvedCommand::Path(path) => quote(&path.to_string_lossy()),
    }
}

/// Build a shell command appropriate for the platform.
pub fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(line);
        c
    }
}

#[cfg(not(windows))]
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(windows)]
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

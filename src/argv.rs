// src/argv.rs

//! Raw argv flag lookup.
//!
//! Independent of `clap`, for code that only has the raw token list at hand.
//!
//! Supported forms, matched by exact string equality after trimming:
//! - `--key=value`
//! - `--key value`
//! - `--key` (presence switch, when followed by another `--` flag or nothing)

use std::str::FromStr;

/// Result of looking up a single flag.
///
/// Absence is expressed as `None` by [`read_flag`], so a `FlagValue` always
/// means "the flag was present".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag carried a value (`--port 4242` or `--port=4242`).
    Value(String),
    /// The flag was given on its own (`--verbose`).
    Switch,
}

impl FlagValue {
    /// The string value, if this is not a bare switch.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Value(v) => Some(v.as_str()),
            FlagValue::Switch => None,
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, FlagValue::Switch)
    }

    /// Parse the value into `T`. A bare switch has nothing to parse and
    /// yields `None`, as does a value that fails to parse.
    pub fn parse<T: FromStr>(&self) -> Option<T> {
        self.as_str().and_then(|v| v.parse().ok())
    }
}

/// Look up `flag` (e.g. `"--port"`) in `tokens`.
///
/// The first matching occurrence wins. Tokens not starting with `--` are
/// skipped, and a non-matching `--` token never stops the scan.
pub fn read_flag<S: AsRef<str>>(tokens: &[S], flag: &str) -> Option<FlagValue> {
    let flag = flag.trim();

    for (index, token) in tokens.iter().enumerate() {
        let token = AsRef::<str>::as_ref(token).trim();
        if !token.starts_with("--") {
            continue;
        }

        if let Some((key, value)) = token.split_once('=') {
            if key.trim() != flag {
                continue;
            }
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            return Some(FlagValue::Value(value.to_string()));
        }

        if token != flag {
            continue;
        }

        match tokens.get(index + 1).map(AsRef::<str>::as_ref) {
            None => return Some(FlagValue::Switch),
            Some(next) if next.trim().starts_with("--") => return Some(FlagValue::Switch),
            Some(next) => {
                let next = next.trim();
                if !next.is_empty() {
                    return Some(FlagValue::Value(next.to_string()));
                }
                // Whitespace-only value: this occurrence carries nothing.
            }
        }
    }

    None
}

/// [`read_flag`] applied to the current process arguments.
pub fn read_process_flag(flag: &str) -> Option<FlagValue> {
    let tokens: Vec<String> = std::env::args().collect();
    read_flag(&tokens, flag)
}

//! JSON error events for `--json` mode

use std::io::{self, Write};

use serde::Serialize;

/// Failure reported on stdout instead of the tree
#[derive(Debug, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub kind: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(kind: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            kind,
            message: message.into(),
        }
    }
}

/// Write `event` as a single JSON line
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Write `event` to stdout
pub fn emit<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)?;
    out.flush()
}

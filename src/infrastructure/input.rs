//! Line input adapters
//!
//! Implements the `LineSource` port for stdin, files and arbitrary readers.
//! Every adapter materializes the full line list before returning, since
//! the parser and builder need all edges up front.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use is_terminal::IsTerminal;
use tracing::debug;

use crate::domain::ports::LineSource;
use crate::error::{TreeError, TreeResult};

/// Read lines until EOF, stripping a trailing `\r` from each
pub fn read_all_lines<R: BufRead>(reader: R) -> TreeResult<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(strip_cr).map_err(TreeError::from))
        .collect()
}

fn strip_cr(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Read lines on a background thread, returning whatever arrived once the
/// input ends or `grace` has elapsed, whichever comes first.
///
/// The reader thread is left running if the grace period expires; it is
/// torn down with the process.
pub fn read_deferred<R>(reader: R, grace: Duration) -> TreeResult<Vec<String>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<io::Result<String>>();
    thread::spawn(move || {
        for line in BufReader::new(reader).lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });

    let deadline = Instant::now() + grace;
    let mut lines = Vec::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(line) => lines.push(strip_cr(line?)),
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                debug!(
                    received = lines.len(),
                    grace_ms = grace.as_millis() as u64,
                    "grace period elapsed before input ended"
                );
                break;
            }
        }
    }

    Ok(lines)
}

/// How stdin is consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Read synchronously until EOF
    Blocking,
    /// Read on a background thread for at most `grace`
    Deferred { grace: Duration },
}

impl ReadMode {
    /// Pick the mode for a given `MSYSTEM` value.
    ///
    /// MinGW shells can hold an empty pipe open, so a blocking read there
    /// may never return.
    pub fn detect(msystem: Option<&str>, grace: Duration) -> Self {
        match msystem {
            Some(value) if value.to_lowercase().contains("mingw") => ReadMode::Deferred { grace },
            _ => ReadMode::Blocking,
        }
    }

    /// Pick the mode from the process environment
    pub fn from_env(grace: Duration) -> Self {
        Self::detect(std::env::var("MSYSTEM").ok().as_deref(), grace)
    }
}

/// Standard input
#[derive(Debug, Clone, Copy)]
pub struct StdinSource {
    mode: ReadMode,
}

impl StdinSource {
    pub fn new(mode: ReadMode) -> Self {
        Self { mode }
    }
}

impl LineSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read_lines(&mut self) -> TreeResult<Vec<String>> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(TreeError::NoInput);
        }

        debug!(mode = ?self.mode, "reading stdin");
        match self.mode {
            ReadMode::Blocking => read_all_lines(stdin.lock()),
            ReadMode::Deferred { grace } => read_deferred(stdin, grace),
        }
    }
}

/// A file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&mut self) -> TreeResult<Vec<String>> {
        debug!(path = %self.path.display(), "reading file");
        let file = File::open(&self.path)?;
        read_all_lines(BufReader::new(file))
    }
}

/// Any buffered reader, consumed on the first read
pub struct ReaderSource<R> {
    reader: Option<R>,
    label: String,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader: Some(reader),
            label: label.into(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn read_lines(&mut self) -> TreeResult<Vec<String>> {
        match self.reader.take() {
            Some(reader) => read_all_lines(reader),
            None => Ok(Vec::new()),
        }
    }
}

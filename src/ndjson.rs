use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Minimal NDJSON reader with buffering and empty-line trimming.
pub struct NdjsonReader {
    rdr: BufReader<File>,
}

impl NdjsonReader {
    pub fn open(path: &Path) -> io::Result<Self> {
        let f = File::open(path)?;
        Ok(Self { rdr: BufReader::with_capacity(64 * 1024, f) })
    }

    /// Read the next line into `buf`. Returns the number of bytes read (0 on EOF).
    /// Strips trailing `\r?\n`.
    pub fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n == 0 { return Ok(0); }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') { buf.pop(); }
        }
        Ok(n)
    }
}

/// Load every non-blank line of `path` as `T`, in file order.
/// A line that fails to parse aborts the whole read with path and line number attached.
pub fn read_ndjson<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = NdjsonReader::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    let mut buf = String::with_capacity(16 * 1024);
    let mut lineno = 0usize;
    loop {
        let n = rdr.read_line(&mut buf).with_context(|| format!("read {}", path.display()))?;
        if n == 0 { break; }
        lineno += 1;
        if buf.trim().is_empty() { continue; }
        let rec: T = serde_json::from_str(&buf)
            .with_context(|| format!("parse {}:{}", path.display(), lineno))?;
        out.push(rec);
    }
    Ok(out)
}

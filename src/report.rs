use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AnalyzeError;
use crate::types::ResultTable;

/// Report file name, relative to the working directory.
pub const OUTPUT_FILE: &str = "success-ips.txt";

/// What `write_report` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The table had entries and the file was written.
    Written(PathBuf),
    /// Nothing qualified; no file was created.
    Empty,
}

/// Write one `<address> <count>` line per entry, in table order.
pub fn write_table<W: Write>(table: &ResultTable, mut w: W) -> io::Result<()> {
    for (addr, count) in table.iter() {
        writeln!(w, "{addr} {count}")?;
    }
    w.flush()
}

/// Write `table` to `path`, or do nothing if it is empty.
pub fn write_report(
    table: &ResultTable,
    path: impl AsRef<Path>,
) -> Result<ReportOutcome, AnalyzeError> {
    if table.is_empty() {
        return Ok(ReportOutcome::Empty);
    }
    let path = path.as_ref();
    let failed = |source: io::Error| AnalyzeError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(failed)?;
    write_table(table, BufWriter::new(file)).map_err(failed)?;
    info!(path = %path.display(), addresses = table.len(), "report written");
    Ok(ReportOutcome::Written(path.to_path_buf()))
}

/// Read a report back into a table.
///
/// Each non-blank line is split on its last whitespace into address and count.
/// An address may appear only once, as `write_table` never repeats one.
pub fn parse_report(s: &str) -> Result<ResultTable, AnalyzeError> {
    let mut table = ResultTable::new();
    for (idx, raw_line) in s.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || AnalyzeError::MalformedReport {
            line_no: idx + 1,
            line: raw_line.to_string(),
        };
        let (addr, count) = line.rsplit_once(char::is_whitespace).ok_or_else(malformed)?;
        let count: u64 = count.parse().map_err(|_| malformed())?;
        let addr = addr.trim_end();
        if count == 0 || addr.is_empty() || table.get(addr).is_some() {
            return Err(malformed());
        }
        table.push_new(addr, count);
    }
    Ok(table)
}

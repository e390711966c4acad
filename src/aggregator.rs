use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::AnalyzeError;
use crate::patterns;
use crate::types::{AddressKind, ResultTable};

/// Count the line against `table` if it records a successful GET.
///
/// The IPv4 and IPv6 rules are checked independently, so a line carrying
/// both token shapes bumps both addresses. Lines that match nothing are
/// left alone.
pub fn process_line(line: &str, table: &mut ResultTable) {
    counted_addresses(line, table);
}

fn counted_addresses(line: &str, table: &mut ResultTable) -> usize {
    let ip4 = patterns::find_ipv4(line);
    let ip6 = patterns::find_ipv6(line);
    if ip4.is_none() && ip6.is_none() {
        return 0;
    }
    if !patterns::has_success_status(line) {
        return 0;
    }

    let mut n = 0;
    for (kind, addr) in [(AddressKind::V4, ip4), (AddressKind::V6, ip6)] {
        if let Some(addr) = addr {
            debug!(?kind, addr, "counted successful GET");
            table.increment(addr);
            n += 1;
        }
    }
    n
}

/// Aggregate an in-memory sequence of lines.
pub fn aggregate_lines<I, S>(lines: I) -> ResultTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = ResultTable::new();
    for line in lines {
        process_line(line.as_ref(), &mut table);
    }
    table
}

/// Aggregate every line a reader yields, in order.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line is simply skipped. Any I/O error aborts the whole pass.
pub fn aggregate_reader<R: BufRead>(mut reader: R) -> io::Result<ResultTable> {
    let mut table = ResultTable::new();
    let mut buf = Vec::new();
    let mut lines_read = 0u64;
    let mut lines_counted = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines_read += 1;
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if counted_addresses(line, &mut table) > 0 {
            lines_counted += 1;
        }
    }

    info!(
        lines_read,
        lines_counted,
        addresses = table.len(),
        "aggregation finished"
    );
    Ok(table)
}

/// Open the log at `path` and aggregate it.
///
/// The file handle is dropped before returning on every path.
pub fn aggregate_path(path: impl AsRef<Path>) -> Result<ResultTable, AnalyzeError> {
    let path = path.as_ref();
    let unreadable = |source: io::Error| AnalyzeError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    };
    if !path.is_file() {
        return Err(AnalyzeError::MissingInputFile(path.to_path_buf()));
    }
    debug!(path = %path.display(), "opening log file");
    let file = File::open(path).map_err(unreadable)?;
    aggregate_reader(BufReader::new(file)).map_err(unreadable)
}

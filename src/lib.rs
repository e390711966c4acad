//! Library crate for success-ips: count successful GET requests per client address.
pub mod aggregator;
pub mod error;
pub mod logging;
pub mod patterns;
pub mod report;
pub mod types;

pub use aggregator::{aggregate_lines, aggregate_path, aggregate_reader, process_line};
pub use error::AnalyzeError;
pub use report::{write_report, ReportOutcome, OUTPUT_FILE};
pub use types::{ResultTable, StatusCode};

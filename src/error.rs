use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("the given input file does not exist: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("failed to read log file {}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report to {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line_no}: malformed report entry: {line}")]
    MalformedReport { line_no: usize, line: String },
}

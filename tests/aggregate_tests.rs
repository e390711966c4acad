use std::fs;
use std::io::{self, BufReader, Read};

use success_ips::{aggregate_lines, aggregate_path, aggregate_reader, AnalyzeError};

const SAMPLE: &str = r#"10.0.0.1 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 2326
10.0.0.2 - - [10/Oct/2023:13:55:37 -0700] "GET /missing HTTP/1.1" 404 512
2001:db8:0:0:0:0:0:1 - - [10/Oct/2023:13:55:38 -0700] "GET /x HTTP/1.1" 200 77
10.0.0.3 - - [10/Oct/2023:13:55:39 -0700] "POST /form HTTP/1.1" 200 12
10.0.0.1 - - [10/Oct/2023:13:55:40 -0700] "GET /about.html HTTP/1.1" 200 981

garbage line without structure
10.0.0.2 - - [10/Oct/2023:13:55:41 -0700] "GET /again HTTP/1.1" 200 10
"#;

#[test]
fn sample_log_counts_in_first_seen_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, SAMPLE).unwrap();

    let table = aggregate_path(&path).expect("aggregate ok");
    let got: Vec<_> = table.iter().collect();
    assert_eq!(
        got,
        vec![
            ("10.0.0.1", 2),
            ("2001:db8:0:0:0:0:0:1", 1),
            ("10.0.0.2", 1),
        ]
    );
}

#[test]
fn rerunning_gives_identical_tables() {
    let a = aggregate_lines(SAMPLE.lines());
    let b = aggregate_lines(SAMPLE.lines());
    assert_eq!(a, b);
}

#[test]
fn empty_file_gives_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "").unwrap();
    assert!(aggregate_path(&path).unwrap().is_empty());
}

#[test]
fn errors_and_posts_only_give_empty_table() {
    let lines = [
        r#"10.0.0.1 - - "POST /a HTTP/1.1" 200"#,
        r#"10.0.0.1 - - "GET /b HTTP/1.1" 500"#,
        r#"10.0.0.1 - - "GET /c HTTP/1.1" 302"#,
    ];
    assert!(aggregate_lines(lines).is_empty());
}

#[test]
fn nonexistent_path_is_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = aggregate_path(dir.path().join("nope.log")).unwrap_err();
    assert!(matches!(err, AnalyzeError::MissingInputFile(_)));

    // a directory is not a regular file either
    let err = aggregate_path(dir.path()).unwrap_err();
    assert!(matches!(err, AnalyzeError::MissingInputFile(_)));
}

struct BrokenSource {
    served: bool,
}

impl Read for BrokenSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        self.served = true;
        let line = b"10.0.0.1 - - \"GET / HTTP/1.1\" 200\n";
        buf[..line.len()].copy_from_slice(line);
        Ok(line.len())
    }
}

#[test]
fn read_failure_returns_no_partial_table() {
    let res = aggregate_reader(BufReader::new(BrokenSource { served: false }));
    assert!(res.is_err());
}

use regex::Regex;
use std::sync::LazyLock;

use crate::types::StatusCode;

macro_rules! line_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// Dotted quad, shape only: 999.999.999.999 still matches.
line_pattern!(RE_IPV4, r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}");

// Eight colon-separated groups; no `::` compression.
line_pattern!(
    RE_IPV6,
    r"\b\w{1,4}:\w{1,4}:\w{1,4}:\w{1,4}:\w{1,4}:\w{1,4}:\w{1,4}:\w{1,4}"
);

line_pattern!(
    RE_GET_STATUS,
    r#""GET .*? HTTP/1\.1"\s(200|301|302|401|404|500|502)"#
);

/// First IPv4-shaped token on the line.
pub fn find_ipv4(line: &str) -> Option<&str> {
    RE_IPV4.as_ref()?.find(line).map(|m| m.as_str())
}

/// First IPv6-shaped token on the line.
pub fn find_ipv6(line: &str) -> Option<&str> {
    RE_IPV6.as_ref()?.find(line).map(|m| m.as_str())
}

/// Every allow-listed status that follows a `"GET ... HTTP/1.1"` request on the line.
pub fn status_codes(line: &str) -> Vec<StatusCode> {
    let Some(re) = RE_GET_STATUS.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// True when any recognized GET request on the line was answered with 200.
pub fn has_success_status(line: &str) -> bool {
    status_codes(line).iter().any(|c| c.is_success())
}

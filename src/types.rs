use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// HTTP status codes recognized inside a `"GET ... HTTP/1.1" <code>` request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok,
    MovedPermanently,
    Found,
    Unauthorized,
    NotFound,
    InternalServerError,
    BadGateway,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::Found => 302,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::BadGateway => 502,
        }
    }

    /// Only `200` counts towards the result table.
    pub fn is_success(self) -> bool {
        self == StatusCode::Ok
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "200" => Ok(StatusCode::Ok),
            "301" => Ok(StatusCode::MovedPermanently),
            "302" => Ok(StatusCode::Found),
            "401" => Ok(StatusCode::Unauthorized),
            "404" => Ok(StatusCode::NotFound),
            "500" => Ok(StatusCode::InternalServerError),
            "502" => Ok(StatusCode::BadGateway),
            other => Err(format!("unrecognized status code: {other}")),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Which address rule produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    V4,
    V6,
}

/// Address -> success count, iterated in the order each address was first counted.
///
/// Entries live in a `Vec` for ordering; `index` maps an address to its slot.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `addr`, inserting it with a count of 1 on first sight.
    pub fn increment(&mut self, addr: &str) {
        if let Some(&slot) = self.index.get(addr) {
            let count = &mut self.entries[slot].1;
            *count = count.saturating_add(1);
            return;
        }
        self.push_new(addr, 1);
    }

    /// Append an address that is not yet in the table.
    pub(crate) fn push_new(&mut self, addr: &str, count: u64) {
        debug_assert!(!self.index.contains_key(addr));
        self.index.insert(addr.to_string(), self.entries.len());
        self.entries.push((addr.to_string(), count));
    }

    pub fn get(&self, addr: &str) -> Option<u64> {
        self.index.get(addr).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(a, c)| (a.as_str(), *c))
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, c)| acc.saturating_add(*c))
    }
}

impl PartialEq for ResultTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ResultTable {}

//! Referral detection in server responses.

use std::fmt;

/// Where a response told us to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referral {
    /// Server name, possibly `host:port` when no port was given separately
    pub server: String,
    /// Explicit port
    pub port: Option<String>,
}

impl Referral {
    /// Create a referral
    pub fn new(server: impl Into<String>, port: Option<String>) -> Self {
        Self {
            server: server.into(),
            port,
        }
    }
}

impl fmt::Display for Referral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.port {
            Some(port) => write!(f, "{}:{port}", self.server),
            None => f.write_str(&self.server),
        }
    }
}

/// Line-by-line scanner looking for the next server to ask.
pub trait HopScanner {
    /// Inspect one response line
    fn observe(&mut self, line: &str);

    /// The next hop, once the response is complete
    fn into_next_hop(self) -> Option<Referral>;
}

/// Scanner for generic servers: `% referto:` and `ReferralServer:` lines.
///
/// Only the first referral in a response counts.
#[derive(Debug, Default)]
pub struct ReferralScanner {
    found: Option<Referral>,
}

impl ReferralScanner {
    /// Create an empty scanner
    #[must_use]
    pub const fn new() -> Self {
        Self { found: None }
    }
}

impl HopScanner for ReferralScanner {
    fn observe(&mut self, line: &str) {
        if self.found.is_none() {
            self.found = parse_referto(line).or_else(|| parse_referral_server(line));
        }
    }

    fn into_next_hop(self) -> Option<Referral> {
        self.found
    }
}

/// Parse `% referto: host port query` or `% referto: whois -h host -p port query`.
///
/// The query carried by the line is ignored.
pub(crate) fn parse_referto(line: &str) -> Option<Referral> {
    let rest = line.strip_prefix("% referto:")?;
    let tokens: Vec<&str> = rest.split_whitespace().collect();

    let (host, port, query) = match tokens.as_slice() {
        ["whois", "-h", host, "-p", port, query @ ..] => (*host, *port, query),
        [host, port, query @ ..] => (*host, *port, query),
        _ => return None,
    };
    if query.is_empty() {
        return None;
    }
    Some(Referral::new(host, Some(port.to_string())))
}

/// Parse an ARIN-style `ReferralServer: whois://host[:port]/` line.
pub(crate) fn parse_referral_server(line: &str) -> Option<Referral> {
    let rest = line.strip_prefix("ReferralServer:")?;
    let start = match rest.find("rwhois://") {
        Some(at) => at + "rwhois://".len(),
        None => rest.find("whois://")? + "whois://".len(),
    };
    let server = rest[start..]
        .split(|c: char| c == '/' || c.is_whitespace())
        .next()
        .unwrap_or_default();
    (!server.is_empty()).then(|| Referral::new(server, None))
}

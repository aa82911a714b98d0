//! Registries whose records name the registrar's whois server.

use tracing::debug;
use whois_core::AdapterKind;

use crate::referral::{HopScanner, Referral};

/// Request line an adapter sends for `query`.
#[must_use]
pub fn adapter_request(kind: AdapterKind, query: &str) -> String {
    match kind {
        AdapterKind::Crsnic(_) => format!("={query}"),
        AdapterKind::Pir(_) => format!("FULL {query}"),
        AdapterKind::SixToFour => query.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RecordState {
    #[default]
    SeekingRecord,
    SeekingServer,
    Done,
}

/// Scanner for `Domain Name:` / `Whois Server:` records.
#[derive(Debug, Default)]
pub struct CrsnicScanner {
    state: RecordState,
    server: Option<String>,
}

impl CrsnicScanner {
    /// Create a scanner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HopScanner for CrsnicScanner {
    fn observe(&mut self, line: &str) {
        match self.state {
            RecordState::SeekingRecord if line.starts_with("   Domain Name:") => {
                self.state = RecordState::SeekingServer;
            }
            RecordState::SeekingServer if line.starts_with("   Whois Server:") => {
                self.state = RecordState::Done;
                self.server = line
                    .split_once(':')
                    .and_then(|(_, value)| first_token(value, &[' ', '\r', '\n']));
                debug!(server = ?self.server, "registrar whois server");
            }
            _ => {}
        }
    }

    fn into_next_hop(self) -> Option<Referral> {
        self.server.map(|server| Referral::new(server, None))
    }
}

/// Scanner for records deferring to the sponsoring registrar.
#[derive(Debug, Default)]
pub struct PirScanner {
    state: RecordState,
    server: Option<String>,
}

impl PirScanner {
    /// Create a scanner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HopScanner for PirScanner {
    fn observe(&mut self, line: &str) {
        match self.state {
            RecordState::SeekingRecord
                if line.starts_with("Registrant Name:SEE SPONSORING REGISTRAR") =>
            {
                self.state = RecordState::SeekingServer;
            }
            RecordState::SeekingServer
                if line.starts_with("Registrant Street1:Whois Server:") =>
            {
                self.state = RecordState::Done;
                self.server = line
                    .splitn(3, ':')
                    .nth(2)
                    .and_then(|value| first_token(value, &['\r', '\n']));
                debug!(server = ?self.server, "registrar whois server");
            }
            _ => {}
        }
    }

    fn into_next_hop(self) -> Option<Referral> {
        self.server.map(|server| Referral::new(server, None))
    }
}

fn first_token(value: &str, terminators: &[char]) -> Option<String> {
    let token = value
        .trim_start_matches(' ')
        .split(terminators)
        .next()
        .unwrap_or_default();
    (!token.is_empty()).then(|| token.to_string())
}

//! `whois.conf` pattern file: local overrides of the server choice.
//!
//! Each line holds a regular expression and a server name separated by
//! whitespace. Matching is case-insensitive and the first match wins.
//! Blank lines and lines starting with `#` are ignored.

use std::path::Path;

use fancy_regex::Regex;
use tracing::debug;
use whois_core::{Result, WhoisError};

/// One `pattern server` line.
#[derive(Debug)]
struct Rule {
    pattern: Regex,
    server: String,
}

/// Parsed pattern file.
#[derive(Debug, Default)]
pub struct PatternConfig {
    rules: Vec<Rule>,
}

impl PatternConfig {
    /// Read `path`; a missing file yields an empty configuration.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "loading server patterns");
                Self::parse(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(WhoisError::Config(format!("{}: {e}", path.display()))),
        }
    }

    /// Parse pattern file content.
    pub fn parse(content: &str) -> Result<Self> {
        let mut rules = Vec::new();
        for line in content.lines() {
            let line = line.trim_end_matches('\r').trim_start_matches([' ', '\t']);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(pattern), Some(server), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(WhoisError::Config(format!("Cannot parse this line: {line}")));
            };

            let compiled = Regex::new(&format!("(?i){pattern}")).map_err(|e| {
                WhoisError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                }
            })?;
            rules.push(Rule {
                pattern: compiled,
                server: server.to_string(),
            });
        }
        Ok(Self { rules })
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Server of the first rule matching `query`.
    ///
    /// A rule that cannot be evaluated, such as one exceeding the backtracking
    /// limit, aborts the search.
    pub fn find(&self, query: &str) -> Result<Option<&str>> {
        for rule in &self.rules {
            let matched = rule
                .pattern
                .is_match(query)
                .map_err(|e| WhoisError::InvalidPattern {
                    pattern: rule.pattern.as_str().to_string(),
                    message: e.to_string(),
                })?;
            if matched {
                debug!(pattern = rule.pattern.as_str(), server = %rule.server, "pattern matched");
                return Ok(Some(rule.server.as_str()));
            }
        }
        Ok(None)
    }
}

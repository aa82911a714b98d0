//! Request line assembly for the different server dialects.

use whois_core::domain_matches;
use whois_core::tables::{self, CORENIC_SERVER, DENIC_SERVER, JPNIC_SERVER, MIL_SERVER};

/// How a server expects its requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// RIPE-style flags, identified with `-V <tag> `
    Directive,
    /// RIPE-style flags, identified with `-V<tag> `
    LegacyDirective,
    /// Bare query
    Plain,
}

impl Dialect {
    /// Dialect spoken by `server`.
    #[must_use]
    pub fn of(server: &str) -> Self {
        if tables::directive_servers().contains(&server) {
            Self::Directive
        } else if tables::legacy_directive_servers().contains(&server) {
            Self::LegacyDirective
        } else {
            Self::Plain
        }
    }

    /// Returns true if the server understands flags.
    #[must_use]
    pub const fn accepts_flags(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// A request ready to be sent, minus the line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRequest {
    /// Request body
    pub line: String,
    /// Flags were given for a server that does not understand them
    pub flags_on_plain_server: bool,
}

/// Builds request lines for a given client tag and language preference.
#[derive(Debug, Clone, Copy)]
pub struct RequestFormatter<'a> {
    client_tag: &'a str,
    language: Option<&'a str>,
}

impl<'a> RequestFormatter<'a> {
    /// Create a formatter
    #[must_use]
    pub const fn new(client_tag: &'a str, language: Option<&'a str>) -> Self {
        Self {
            client_tag,
            language,
        }
    }

    /// Assemble the request for `query` sent to `server` with `flags`.
    #[must_use]
    pub fn format(&self, server: &str, flags: &str, query: &str) -> FormattedRequest {
        let dialect = Dialect::of(server);
        let mut line = match dialect {
            Dialect::Directive => format!("-V {} ", self.client_tag),
            Dialect::LegacyDirective => format!("-V{} ", self.client_tag),
            Dialect::Plain => String::new(),
        };

        let flags_on_plain_server =
            !flags.is_empty() && !dialect.accepts_flags() && server != CORENIC_SERVER;
        line.push_str(flags);

        let directive = dialect.accepts_flags();
        if directive && server == DENIC_SERVER && domain_matches(query, ".de") && !query.contains(' ')
        {
            // DENIC answers in a "friendly" format unless told otherwise
            line = format!("-T dn,ace -C US-ASCII {query}");
        } else if !directive && (server == MIL_SERVER || server == JPNIC_SERVER) && is_as_number(query)
        {
            line = format!("AS {}", &query[2..]);
        } else if !directive && server == JPNIC_SERVER {
            line.push_str(query);
            if !self.language.is_some_and(|lang| lang.starts_with("ja")) {
                line.push_str("/e");
            }
        } else {
            line.push_str(query);
        }

        FormattedRequest {
            line,
            flags_on_plain_server,
        }
    }
}

fn is_as_number(query: &str) -> bool {
    let bytes = query.as_bytes();
    bytes.len() > 2 && bytes[..2].eq_ignore_ascii_case(b"as") && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(server: &str, flags: &str, query: &str) -> FormattedRequest {
        RequestFormatter::new("tag1", None).format(server, flags, query)
    }

    #[test]
    fn test_dialects() {
        assert_eq!(Dialect::of("whois.ripe.net"), Dialect::Directive);
        assert_eq!(Dialect::of("whois.nic.it"), Dialect::LegacyDirective);
        assert_eq!(Dialect::of("whois.arin.net"), Dialect::Plain);
    }

    #[test]
    fn test_directive_prefix() {
        assert_eq!(format("whois.ripe.net", "", "AS3333").line, "-V tag1 AS3333");
        assert_eq!(format("whois.nic.it", "", "example.it").line, "-Vtag1 example.it");
        assert_eq!(format("whois.arin.net", "", "192.0.2.1").line, "192.0.2.1");
    }

    #[test]
    fn test_flags() {
        let request = format("whois.ripe.net", "-r -T person ", "XYZ1-RIPE");
        assert_eq!(request.line, "-V tag1 -r -T person XYZ1-RIPE");
        assert!(!request.flags_on_plain_server);

        let request = format("whois.arin.net", "-r ", "192.0.2.1");
        assert_eq!(request.line, "-r 192.0.2.1");
        assert!(request.flags_on_plain_server);

        let request = format("whois.corenic.net", "-r ", "coco-1");
        assert!(!request.flags_on_plain_server);
    }

    #[test]
    fn test_denic_override() {
        assert_eq!(
            format("whois.denic.de", "-r ", "example.de").line,
            "-T dn,ace -C US-ASCII example.de"
        );
        // Not a plain domain query: left alone.
        assert_eq!(
            format("whois.denic.de", "", "-T person Max Mustermann").line,
            "-V tag1 -T person Max Mustermann"
        );
        assert_eq!(format("whois.denic.de", "", "DENIC-1").line, "-V tag1 DENIC-1");
    }

    #[test]
    fn test_as_number_rewrite() {
        assert_eq!(format("whois.nic.mil", "", "AS306").line, "AS 306");
        assert_eq!(format("whois.nic.ad.jp", "", "as2515").line, "AS 2515");
        assert_eq!(format("whois.nic.mil", "", "ASN-1").line, "ASN-1");
    }

    #[test]
    fn test_jpnic_language() {
        assert_eq!(format("whois.nic.ad.jp", "", "XY12JP").line, "XY12JP/e");

        let english = RequestFormatter::new("tag1", Some("en_US.UTF-8"));
        assert_eq!(english.format("whois.nic.ad.jp", "", "XY12JP").line, "XY12JP/e");

        let japanese = RequestFormatter::new("tag1", Some("ja_JP.eucJP"));
        assert_eq!(japanese.format("whois.nic.ad.jp", "", "XY12JP").line, "XY12JP");
    }
}

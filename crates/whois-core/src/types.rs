//! Query classification and server directive types.

use std::fmt;

/// What kind of object a query string names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Domain name (contains a dot, not an IPv4 address)
    Domain,
    /// Dotted-quad IPv4 address
    Ipv4,
    /// Anything containing a colon that is not an RPSL AS name
    Ipv6,
    /// Autonomous system number (`AS1234`, `as 1234`, `AS8627:fltr-OUT`)
    Asn,
    /// Contact address
    Email,
    /// Registry handle or network name
    OpaqueHandle,
    /// Empty query
    Unclassifiable,
}

impl IdentifierKind {
    /// Human-readable label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Ipv4 => "IPv4 address",
            Self::Ipv6 => "IPv6 address",
            Self::Asn => "AS number",
            Self::Email => "email address",
            Self::OpaqueHandle => "handle",
            Self::Unclassifiable => "unclassifiable object",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Registries whose records carry the next whois server in a structured
/// field instead of a referral line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    /// `Domain Name:` / `Whois Server:` records, queried with `=<name>`
    Crsnic(&'static str),
    /// `Registrant Name:SEE SPONSORING REGISTRAR` records, queried with `FULL <name>`
    Pir(&'static str),
    /// 2002::/16 address, re-resolved through its embedded IPv4 endpoint
    SixToFour,
}

impl AdapterKind {
    /// Server contacted by the adapter, if it talks to one directly.
    #[must_use]
    pub const fn host(self) -> Option<&'static str> {
        match self {
            Self::Crsnic(host) | Self::Pir(host) => Some(host),
            Self::SixToFour => None,
        }
    }
}

/// Outcome of resolving a query: where to send it, or what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerDirective {
    /// Query this server. An empty name means "the default server".
    Authority(String),
    /// Print a registry-specific message, no query is sent
    DisplayMessage(&'static str),
    /// The TLD only offers a web interface
    DisplayMessageWithAuthority {
        /// Fixed explanation line
        text: &'static str,
        /// Where the database can be browsed
        url: &'static str,
    },
    /// The TLD has no whois service at all
    NoTldServer,
    /// Nothing serves this kind of object
    NoAuthorityKnown,
    /// AS number or IP network outside every known allocation
    UnknownAsnOrNetwork,
    /// Dotted name that matches no TLD or handle suffix
    UnknownTldOrHandle,
    /// Talk to a structured-record registry, or rewrite the query
    SpecialAdapter(AdapterKind),
}

/// First line printed for [`ServerDirective::DisplayMessageWithAuthority`].
pub const WEB_ONLY_TEXT: &str =
    "This TLD has no whois server, but you can access the whois database at";

impl ServerDirective {
    /// Shorthand for an [`Authority`](Self::Authority) directive.
    #[must_use]
    pub fn authority(host: impl Into<String>) -> Self {
        Self::Authority(host.into())
    }

    /// Returns true if this directive ends the run without any network I/O.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Authority(_) | Self::SpecialAdapter(_))
    }

    /// Lines to print for a terminal directive, `None` for the others.
    #[must_use]
    pub fn message(&self) -> Option<Vec<&'static str>> {
        let lines = match self {
            Self::Authority(_) | Self::SpecialAdapter(_) => return None,
            Self::DisplayMessage(text) => vec![*text],
            Self::DisplayMessageWithAuthority { text, url } => vec![*text, *url],
            Self::NoTldServer => vec!["This TLD has no whois server."],
            Self::NoAuthorityKnown => vec!["No whois server is known for this kind of object."],
            Self::UnknownAsnOrNetwork => {
                vec!["Unknown AS number or IP network. Please upgrade this program."]
            }
            Self::UnknownTldOrHandle => {
                vec!["Unknown TLD or NIC handle: no whois server is known for this object."]
            }
        };
        Some(lines)
    }
}

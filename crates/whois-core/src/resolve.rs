//! Query classification and server selection.
//!
//! [`resolve`] is a pure function of the query and the static tables: it
//! never touches the network. Rules are applied in a fixed order and the
//! first one that matches decides.

use std::net::Ipv4Addr;

use crate::tables::{self, NSI_SERVER, JPNIC_SERVER, SIXBONE_SERVER};
use crate::types::{AdapterKind, IdentifierKind, ServerDirective};

/// Decide what kind of object `query` names.
#[must_use]
pub fn classify(query: &str) -> IdentifierKind {
    if query.is_empty() {
        IdentifierKind::Unclassifiable
    } else if query.contains(':') {
        // RPSL hierarchical names look like AS8627:fltr-TRANSIT-OUT
        if starts_with_as_then(query, |c| c.is_ascii_digit()) {
            IdentifierKind::Asn
        } else {
            IdentifierKind::Ipv6
        }
    } else if query.contains('@') {
        IdentifierKind::Email
    } else if !query.contains(['.', '-']) {
        if starts_with_as_then(query, |c| c.is_ascii_digit() || c == b' ') {
            IdentifierKind::Asn
        } else {
            IdentifierKind::OpaqueHandle
        }
    } else if parse_ipv4(query).is_some() {
        IdentifierKind::Ipv4
    } else if query.contains('.') {
        IdentifierKind::Domain
    } else {
        IdentifierKind::OpaqueHandle
    }
}

/// Pick the server (or the message) for `query`.
#[must_use]
pub fn resolve(query: &str) -> ServerDirective {
    match classify(query) {
        IdentifierKind::Ipv6 => resolve_ipv6(query),
        IdentifierKind::Asn => {
            parse_asn(&query[2..]).map_or(ServerDirective::UnknownAsnOrNetwork, resolve_asn)
        }
        IdentifierKind::Email | IdentifierKind::Unclassifiable => {
            ServerDirective::NoAuthorityKnown
        }
        IdentifierKind::Ipv4 => {
            parse_ipv4(query).map_or(ServerDirective::NoAuthorityKnown, resolve_ipv4)
        }
        IdentifierKind::Domain => lookup_suffix(query).unwrap_or(ServerDirective::UnknownTldOrHandle),
        IdentifierKind::OpaqueHandle if !query.contains('-') => resolve_plain_handle(query),
        IdentifierKind::OpaqueHandle => lookup_suffix(query)
            .or_else(|| lookup_handle_prefix(query))
            // probably a network or organisation name
            .unwrap_or_else(|| ServerDirective::authority("")),
    }
}

/// Find the registry serving an AS number.
#[must_use]
pub fn resolve_asn(asn: u32) -> ServerDirective {
    tables::asn_ranges()
        .iter()
        .find(|range| range.contains(asn))
        .map_or(ServerDirective::UnknownAsnOrNetwork, |range| {
            ServerDirective::authority(range.server)
        })
}

fn resolve_ipv4(addr: Ipv4Addr) -> ServerDirective {
    let addr = u32::from(addr);
    tables::ipv4_routes()
        .iter()
        .find(|row| row.contains(addr))
        // not in the unicast IPv4 space
        .map_or(ServerDirective::NoAuthorityKnown, |row| row.route.directive())
}

fn resolve_ipv6(query: &str) -> ServerDirective {
    if let Some(rest) = query.strip_prefix("2001:") {
        let net = leading_hex(rest) & 0xfe00;
        tables::ipv6_routes()
            .iter()
            .find(|row| u32::from(row.net) == net)
            .map_or(ServerDirective::UnknownAsnOrNetwork, |row| {
                ServerDirective::authority(row.server)
            })
    } else if query.starts_with("2002:") {
        ServerDirective::SpecialAdapter(AdapterKind::SixToFour)
    } else if starts_with_ignore_case(query, "3ffe:") {
        ServerDirective::authority(SIXBONE_SERVER)
    } else {
        ServerDirective::NoAuthorityKnown
    }
}

/// Handles without dots or hyphens.
fn resolve_plain_handle(query: &str) -> ServerDirective {
    let bytes = query.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 2..].eq_ignore_ascii_case(b"jp") {
        ServerDirective::authority(JPNIC_SERVER)
    } else if query.starts_with('!') {
        ServerDirective::authority(NSI_SERVER)
    } else {
        ServerDirective::NoAuthorityKnown
    }
}

fn lookup_suffix(query: &str) -> Option<ServerDirective> {
    tables::tld_routes()
        .iter()
        .find(|row| domain_matches(query, row.suffix))
        .map(|row| row.route.directive())
}

fn lookup_handle_prefix(query: &str) -> Option<ServerDirective> {
    tables::handle_prefixes()
        .iter()
        .find(|row| starts_with_ignore_case(query, row.prefix))
        .map(|row| ServerDirective::authority(row.server))
}

/// Check whether `name` ends with `suffix`, ignoring ASCII case.
///
/// Suffixes starting with `.` or `-` carry their own boundary. Any other
/// suffix only matches a whole label: `example.com` matches `com`,
/// `example.comedy` and `telecom` do not.
#[must_use]
pub fn domain_matches(name: &str, suffix: &str) -> bool {
    let (name, suffix) = (name.as_bytes(), suffix.as_bytes());
    if suffix.is_empty() || name.len() < suffix.len() {
        return false;
    }
    let split = name.len() - suffix.len();
    if !name[split..].eq_ignore_ascii_case(suffix) {
        return false;
    }
    matches!(suffix[0], b'.' | b'-') || split == 0 || name[split - 1] == b'.'
}

/// Parse a strict dotted-quad address: four decimal octets, each at most 255.
#[must_use]
pub fn parse_ipv4(query: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = query.split('.');
    for octet in &mut octets {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

/// Map a 6to4 address onto the IPv4 endpoint it embeds.
///
/// `2002:0101:0202::` becomes `1.1.2.2`. Malformed input yields `0.0.0.0`.
#[must_use]
pub fn convert_6to4(query: &str) -> String {
    parse_6to4(query)
        .unwrap_or(Ipv4Addr::UNSPECIFIED)
        .to_string()
}

fn parse_6to4(query: &str) -> Option<Ipv4Addr> {
    let mut groups = query.strip_prefix("2002:")?.split(':');
    let high = hex_group(groups.next()?)?;
    let low = hex_group(groups.next()?)?;
    Some(Ipv4Addr::from((u32::from(high) << 16) | u32::from(low)))
}

fn hex_group(group: &str) -> Option<u16> {
    if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

/// Value of the hex digits at the start of `s`, 0 if there are none.
fn leading_hex(s: &str) -> u32 {
    s.bytes()
        .take(8)
        .map_while(|b| char::from(b).to_digit(16))
        .fold(0, |acc, digit| (acc << 4) | digit)
}

/// AS number from the text following `AS`: optional blanks, then digits.
fn parse_asn(rest: &str) -> Option<u32> {
    let rest = rest.trim_start();
    let end = rest.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(rest.len());
    rest[..end].parse().ok()
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

fn starts_with_as_then(s: &str, next: impl Fn(u8) -> bool) -> bool {
    starts_with_ignore_case(s, "as") && s.as_bytes().get(2).copied().is_some_and(next)
}

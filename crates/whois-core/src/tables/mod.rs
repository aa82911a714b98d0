//! Static routing data.
//!
//! Every table is an ordered slice scanned front to back; the first matching
//! row wins, so more specific rows must come before the ranges that contain
//! them.

mod asn;
mod disclaimers;
mod handles;
mod ipv4;
mod ipv6;
mod servers;
mod tld;

use crate::types::{AdapterKind, ServerDirective, WEB_ONLY_TEXT};

/// Target of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Plain whois server
    Server(&'static str),
    /// Only reachable through a web page
    WebOnly(&'static str),
    /// Registry-specific message
    Message(&'static str),
    /// TLD without whois service
    NoServer,
    /// Address block that no registry serves
    Unallocated,
    /// Structured-record registry
    Adapter(AdapterKind),
}

impl Route {
    /// Convert a table target into the directive handed to the client.
    #[must_use]
    pub fn directive(self) -> ServerDirective {
        match self {
            Self::Server(host) => ServerDirective::authority(host),
            Self::WebOnly(url) => ServerDirective::DisplayMessageWithAuthority {
                text: WEB_ONLY_TEXT,
                url,
            },
            Self::Message(text) => ServerDirective::DisplayMessage(text),
            Self::NoServer => ServerDirective::NoTldServer,
            Self::Unallocated => ServerDirective::NoAuthorityKnown,
            Self::Adapter(kind) => ServerDirective::SpecialAdapter(kind),
        }
    }
}

/// Domain or handle suffix row.
#[derive(Debug, Clone, Copy)]
pub struct TldRoute {
    /// Lowercase suffix, usually starting with `.` or `-`
    pub suffix: &'static str,
    /// Where matching names go
    pub route: Route,
}

/// IPv4 block row: an address matches when `addr & mask == net`.
#[derive(Debug, Clone, Copy)]
pub struct Ipv4Route {
    /// Network address
    pub net: u32,
    /// Network mask
    pub mask: u32,
    /// Where matching addresses go
    pub route: Route,
}

impl Ipv4Route {
    /// Build a row from a dotted network and prefix length.
    const fn new(net: [u8; 4], prefix_len: u32, route: Route) -> Self {
        let mask = if prefix_len == 0 {
            0
        } else {
            u32::MAX << (32 - prefix_len)
        };
        Self {
            net: u32::from_be_bytes(net),
            mask,
            route,
        }
    }

    /// Returns true if `addr` lies in this block.
    #[must_use]
    pub const fn contains(&self, addr: u32) -> bool {
        addr & self.mask == self.net
    }
}

/// 2001::/16 sub-allocation row, keyed by the top 7 bits of the second group.
#[derive(Debug, Clone, Copy)]
pub struct Ipv6Route {
    /// Second 16-bit group masked with `0xfe00`
    pub net: u16,
    /// Registry serving the block
    pub server: &'static str,
}

/// Inclusive AS number range row.
#[derive(Debug, Clone, Copy)]
pub struct AsnRange {
    /// First ASN in the range
    pub first: u32,
    /// Last ASN in the range
    pub last: u32,
    /// Registry serving the range
    pub server: &'static str,
}

impl AsnRange {
    /// Returns true if `asn` lies in this range.
    #[must_use]
    pub const fn contains(&self, asn: u32) -> bool {
        asn >= self.first && asn <= self.last
    }
}

/// Handle prefix row (matched case-insensitively at the start of the query).
#[derive(Debug, Clone, Copy)]
pub struct HandlePrefix {
    /// Lowercase prefix, e.g. `net-`
    pub prefix: &'static str,
    /// Registry owning the handle namespace
    pub server: &'static str,
}

/// Start and end markers of a disclaimer block.
#[derive(Debug, Clone, Copy)]
pub struct DisclaimerMarkers {
    /// Prefix of the first hidden line
    pub start: &'static str,
    /// Prefix of the last hidden line
    pub end: &'static str,
}

/// Domain and handle suffixes, most specific first.
#[must_use]
pub fn tld_routes() -> &'static [TldRoute] {
    tld::TLD_ROUTES
}

/// IPv4 allocations, most specific first.
#[must_use]
pub fn ipv4_routes() -> &'static [Ipv4Route] {
    ipv4::IPV4_ROUTES
}

/// 2001::/16 sub-allocations.
#[must_use]
pub fn ipv6_routes() -> &'static [Ipv6Route] {
    ipv6::IPV6_ROUTES
}

/// AS number ranges, most specific first.
#[must_use]
pub fn asn_ranges() -> &'static [AsnRange] {
    asn::ASN_RANGES
}

/// Handle prefixes.
#[must_use]
pub fn handle_prefixes() -> &'static [HandlePrefix] {
    handles::HANDLE_PREFIXES
}

/// Disclaimer blocks that can be hidden, in matching order.
#[must_use]
pub fn disclaimers() -> &'static [DisclaimerMarkers] {
    disclaimers::DISCLAIMERS
}

/// Servers that accept RIPE-style flags and `-V <tag> ` identification.
#[must_use]
pub fn directive_servers() -> &'static [&'static str] {
    servers::DIRECTIVE_SERVERS
}

/// Servers that accept RIPE-style flags and the older `-V<tag> ` form.
#[must_use]
pub fn legacy_directive_servers() -> &'static [&'static str] {
    servers::LEGACY_DIRECTIVE_SERVERS
}

pub use servers::{
    CORENIC_SERVER, DENIC_SERVER, JPNIC_SERVER, MIL_SERVER, NSI_SERVER, RIPE_SERVER,
    SIXBONE_SERVER,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_route_mask() {
        let row = Ipv4Route::new([193, 0, 0, 0], 8, Route::Server("whois.ripe.net"));
        assert_eq!(row.mask, 0xff00_0000);
        assert!(row.contains(u32::from_be_bytes([193, 1, 2, 3])));
        assert!(!row.contains(u32::from_be_bytes([194, 1, 2, 3])));
    }

    #[test]
    fn test_ipv4_table_has_no_unreachable_rows() {
        // A row fully covered by an earlier row can never match.
        let rows = ipv4_routes();
        for (i, later) in rows.iter().enumerate() {
            for earlier in &rows[..i] {
                let covered = earlier.mask & later.mask == earlier.mask
                    && later.net & earlier.mask == earlier.net;
                assert!(!covered, "row {i} is shadowed");
            }
        }
    }

    #[test]
    fn test_suffixes_are_lowercase() {
        for row in tld_routes() {
            assert_eq!(row.suffix, row.suffix.to_ascii_lowercase());
        }
        for row in handle_prefixes() {
            assert_eq!(row.prefix, row.prefix.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_ipv6_keys_are_masked() {
        for row in ipv6_routes() {
            assert_eq!(row.net & 0xfe00, row.net);
        }
    }

    #[test]
    fn test_disclaimer_markers_not_empty() {
        for pair in disclaimers() {
            assert!(!pair.start.is_empty());
            assert!(!pair.end.is_empty());
        }
    }
}

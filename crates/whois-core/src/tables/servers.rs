//! Well-known servers and request dialect sets.

/// RIPE NCC database, also used for template and info requests
pub const RIPE_SERVER: &str = "whois.ripe.net";
/// DENIC, which needs `-T dn,ace` for plain domain queries
pub const DENIC_SERVER: &str = "whois.denic.de";
/// JPNIC, which answers in Japanese unless asked for `/e`
pub const JPNIC_SERVER: &str = "whois.nic.ad.jp";
/// DoD NIC, which expects `AS <n>`
pub const MIL_SERVER: &str = "whois.nic.mil";
/// CORE, which accepts flags without the identification directive
pub const CORENIC_SERVER: &str = "whois.corenic.net";
/// Network Solutions, home of `!`-prefixed handles
pub const NSI_SERVER: &str = "whois.networksolutions.com";
/// 6bone registry for 3ffe::/16
pub const SIXBONE_SERVER: &str = "whois.6bone.net";

pub(super) static DIRECTIVE_SERVERS: &[&str] = &[
    RIPE_SERVER,
    "whois.apnic.net",
    "whois.afrinic.net",
    "rr.arin.net",
    SIXBONE_SERVER,
    "whois.nic.fr",
    "whois.telstra.net",
    "whois.restena.lu",
    "rr.level3.net",
    "whois.ra.net",
    "whois.arnes.si",
    DENIC_SERVER,
];

pub(super) static LEGACY_DIRECTIVE_SERVERS: &[&str] = &[
    "whois.nic.it",
    "whois.ripn.net",
    "whois.aunic.net",
    "whois.metu.edu.tr",
];

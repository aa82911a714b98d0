use super::Ipv6Route;

pub(super) static IPV6_ROUTES: &[Ipv6Route] = &[
    Ipv6Route { net: 0x0200, server: "whois.apnic.net" },
    Ipv6Route { net: 0x0400, server: "whois.arin.net" },
    Ipv6Route { net: 0x0600, server: "whois.ripe.net" },
    Ipv6Route { net: 0x0800, server: "whois.ripe.net" },
    Ipv6Route { net: 0x0a00, server: "whois.ripe.net" },
    Ipv6Route { net: 0x0c00, server: "whois.apnic.net" },
    Ipv6Route { net: 0x0e00, server: "whois.apnic.net" },
    Ipv6Route { net: 0x1200, server: "whois.lacnic.net" },
    Ipv6Route { net: 0x1400, server: "whois.ripe.net" },
    Ipv6Route { net: 0x1600, server: "whois.ripe.net" },
    Ipv6Route { net: 0x1800, server: "whois.arin.net" },
    Ipv6Route { net: 0x1a00, server: "whois.ripe.net" },
    Ipv6Route { net: 0x1c00, server: "whois.ripe.net" },
    Ipv6Route { net: 0x1e00, server: "whois.ripe.net" },
    Ipv6Route { net: 0x4000, server: "whois.ripe.net" },
    Ipv6Route { net: 0x4200, server: "whois.afrinic.net" },
    Ipv6Route { net: 0x4400, server: "whois.ripe.net" },
];

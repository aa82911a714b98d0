use super::HandlePrefix;

pub(super) static HANDLE_PREFIXES: &[HandlePrefix] = &[
    HandlePrefix { prefix: "net-", server: "whois.arin.net" },
    HandlePrefix { prefix: "netblk-", server: "whois.arin.net" },
    HandlePrefix { prefix: "asn-", server: "whois.arin.net" },
    HandlePrefix { prefix: "as-", server: "whois.ripe.net" },
    HandlePrefix { prefix: "lim-", server: "whois.ripe.net" },
    HandlePrefix { prefix: "coco-", server: "whois.corenic.net" },
    HandlePrefix { prefix: "coho-", server: "whois.corenic.net" },
    HandlePrefix { prefix: "core-", server: "whois.corenic.net" },
    HandlePrefix { prefix: "denic-", server: "whois.denic.de" },
];

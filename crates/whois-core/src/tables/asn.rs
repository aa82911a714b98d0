use super::AsnRange;

const fn range(first: u32, last: u32, server: &'static str) -> AsnRange {
    AsnRange { first, last, server }
}

pub(super) static ASN_RANGES: &[AsnRange] = &[
    range(248, 251, "whois.ripe.net"),
    range(306, 306, "whois.nic.mil"),
    range(1877, 1901, "whois.ripe.net"),
    range(2043, 2043, "whois.ripe.net"),
    range(2047, 2047, "whois.ripe.net"),
    range(2121, 2121, "whois.ripe.net"),
    range(2124, 2124, "whois.ripe.net"),
    range(2514, 2523, "whois.nic.ad.jp"),
    range(2830, 2879, "whois.ripe.net"),
    range(3154, 3353, "whois.ripe.net"),
    range(4608, 4864, "whois.apnic.net"),
    range(5377, 5631, "whois.ripe.net"),
    range(6656, 6911, "whois.ripe.net"),
    range(7467, 7722, "whois.apnic.net"),
    range(8192, 9215, "whois.ripe.net"),
    range(9216, 10239, "whois.apnic.net"),
    range(12288, 13311, "whois.ripe.net"),
    range(15360, 16383, "whois.ripe.net"),
    range(17408, 18431, "whois.apnic.net"),
    range(20480, 21503, "whois.ripe.net"),
    range(23552, 24575, "whois.apnic.net"),
    range(24576, 25599, "whois.ripe.net"),
    range(26592, 26623, "whois.lacnic.net"),
    range(27648, 28671, "whois.lacnic.net"),
    range(28672, 29695, "whois.ripe.net"),
    range(1, 30719, "whois.arin.net"),
];

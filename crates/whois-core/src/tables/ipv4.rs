use super::{Ipv4Route, Route};

const APNIC: Route = Route::Server("whois.apnic.net");
const ARIN: Route = Route::Server("whois.arin.net");
const LACNIC: Route = Route::Server("whois.lacnic.net");
const RIPE: Route = Route::Server("whois.ripe.net");

const PRIVATE: Route = Route::Message(
    "This address belongs to a private network range (RFC 1918): no registry holds data for it.",
);
const LOOPBACK: Route = Route::Message("This address belongs to the loopback network 127.0.0.0/8.");

pub(super) static IPV4_ROUTES: &[Ipv4Route] = &[
    Ipv4Route::new([0, 0, 0, 0], 8, Route::Unallocated),
    Ipv4Route::new([10, 0, 0, 0], 8, PRIVATE),
    Ipv4Route::new([24, 132, 0, 0], 14, RIPE),
    Ipv4Route::new([61, 0, 0, 0], 8, APNIC),
    Ipv4Route::new([62, 0, 0, 0], 8, RIPE),
    Ipv4Route::new([80, 0, 0, 0], 7, RIPE),
    Ipv4Route::new([82, 0, 0, 0], 8, RIPE),
    Ipv4Route::new([127, 0, 0, 0], 8, LOOPBACK),
    Ipv4Route::new([133, 0, 0, 0], 8, Route::Server("whois.nic.ad.jp")),
    Ipv4Route::new([172, 16, 0, 0], 12, PRIVATE),
    Ipv4Route::new([192, 168, 0, 0], 16, PRIVATE),
    Ipv4Route::new([193, 0, 0, 0], 8, RIPE),
    Ipv4Route::new([194, 0, 0, 0], 7, RIPE),
    Ipv4Route::new([200, 0, 0, 0], 7, LACNIC),
    Ipv4Route::new([202, 0, 0, 0], 7, APNIC),
    Ipv4Route::new([210, 0, 0, 0], 7, APNIC),
    Ipv4Route::new([212, 0, 0, 0], 7, RIPE),
    Ipv4Route::new([217, 0, 0, 0], 8, RIPE),
    Ipv4Route::new([218, 0, 0, 0], 7, APNIC),
    Ipv4Route::new([220, 0, 0, 0], 7, APNIC),
    Ipv4Route::new([222, 0, 0, 0], 8, APNIC),
    // Everything else below 224.0.0.0 was handed out by the InterNIC.
    Ipv4Route::new([0, 0, 0, 0], 1, ARIN),
    Ipv4Route::new([128, 0, 0, 0], 2, ARIN),
    Ipv4Route::new([192, 0, 0, 0], 3, ARIN),
];

use super::{Route, TldRoute};
use crate::types::AdapterKind;

const fn server(suffix: &'static str, host: &'static str) -> TldRoute {
    TldRoute { suffix, route: Route::Server(host) }
}

const fn route(suffix: &'static str, route: Route) -> TldRoute {
    TldRoute { suffix, route }
}

const CENTRALNIC: &str = "whois.centralnic.net";
const CRSNIC: Route = Route::Adapter(AdapterKind::Crsnic("whois.crsnic.net"));

pub(super) static TLD_ROUTES: &[TldRoute] = &[
    // Second-level registries that must win over their parent TLD.
    server(".br.com", CENTRALNIC),
    server(".cn.com", CENTRALNIC),
    server(".eu.com", CENTRALNIC),
    server(".gb.com", CENTRALNIC),
    server(".uk.com", CENTRALNIC),
    server(".us.com", CENTRALNIC),
    server(".gb.net", CENTRALNIC),
    server(".uk.net", CENTRALNIC),
    server(".e164.arpa", "whois.ripe.net"),
    server(".ac.uk", "whois.ja.net"),
    server(".gov.uk", "whois.ja.net"),
    route(
        ".co.za",
        Route::Message("The .co.za registry only offers lookups at https://co.za/whois.shtml"),
    ),
    // Generic TLDs.
    route(".com", CRSNIC),
    route(".net", CRSNIC),
    route(".org", Route::Adapter(AdapterKind::Pir("whois.publicinterestregistry.net"))),
    server(".edu", "whois.educause.net"),
    server(".gov", "whois.nic.gov"),
    server(".mil", "whois.nic.mil"),
    server(".int", "whois.iana.org"),
    server(".arpa", "whois.iana.org"),
    server(".aero", "whois.information.aero"),
    server(".biz", "whois.neulevel.biz"),
    server(".coop", "whois.nic.coop"),
    server(".info", "whois.afilias.info"),
    server(".museum", "whois.museum"),
    server(".name", "whois.nic.name"),
    server(".pro", "whois.registrypro.pro"),
    // Country code TLDs.
    server(".ac", "whois.nic.ac"),
    server(".at", "whois.nic.at"),
    server(".au", "whois.aunic.net"),
    server(".be", "whois.dns.be"),
    server(".br", "whois.registro.br"),
    server(".ca", "whois.cira.ca"),
    route(".cc", Route::Adapter(AdapterKind::Crsnic("whois.nic.cc"))),
    server(".ch", "whois.nic.ch"),
    server(".cn", "whois.cnnic.net.cn"),
    server(".cz", "whois.nic.cz"),
    server(".de", "whois.denic.de"),
    server(".dk", "whois.dk-hostmaster.dk"),
    route(".es", Route::WebOnly("https://www.nic.es/")),
    server(".fi", "whois.ficora.fi"),
    server(".fr", "whois.nic.fr"),
    route(".gr", Route::WebOnly("https://grweb.ics.forth.gr/")),
    server(".hk", "whois.hkdnr.net.hk"),
    server(".ie", "whois.domainregistry.ie"),
    server(".it", "whois.nic.it"),
    server(".jp", "whois.jprs.jp"),
    server(".kr", "whois.krnic.net"),
    server(".li", "whois.nic.li"),
    server(".lu", "whois.restena.lu"),
    server(".mx", "whois.nic.mx"),
    server(".nl", "whois.domain-registry.nl"),
    server(".no", "whois.norid.no"),
    server(".nz", "whois.srs.net.nz"),
    route(".ph", Route::NoServer),
    server(".pl", "whois.dns.pl"),
    route(".pt", Route::WebOnly("https://www.dns.pt/")),
    server(".ru", "whois.ripn.net"),
    server(".se", "whois.iis.se"),
    server(".si", "whois.arnes.si"),
    server(".tr", "whois.metu.edu.tr"),
    server(".tv", "whois.nic.tv"),
    server(".tw", "whois.twnic.net"),
    server(".uk", "whois.nic.uk"),
    server(".us", "whois.nic.us"),
    route(".vn", Route::NoServer),
    server(".ws", "whois.website.ws"),
    // Registry handle suffixes.
    server("-arin", "whois.arin.net"),
    server("-ripe", "whois.ripe.net"),
    server("-ap", "whois.apnic.net"),
    server("-lacnic", "whois.lacnic.net"),
    server("-afrinic", "whois.afrinic.net"),
    server("-norid", "whois.norid.no"),
    server("-nicat", "whois.nic.at"),
    server("-gandi", "whois.gandi.net"),
    server("-dk", "whois.dk-hostmaster.dk"),
    server("-frnic", "whois.nic.fr"),
];

//! Static table of authoritative WHOIS servers for common TLDs.
//!
//! Registries not listed here are discovered at runtime through the IANA
//! root server referral.

/// Returns the authoritative WHOIS server for a TLD, if known.
pub(crate) fn authoritative_server(tld: &str) -> Option<&'static str> {
    let server = match tld {
        "com" => "whois.verisign-grs.com",
        "net" => "whois.verisign-grs.com",
        "org" => "whois.pir.org",
        "io" => "whois.nic.io",
        "co" => "whois.nic.co",
        "info" => "whois.afilias.net",
        "edu" => "whois.educause.edu",
        "gov" => "whois.nic.gov",
        "biz" => "whois.neulevel.biz",
        "uk" => "whois.nic.uk",
        "ca" => "whois.cira.ca",
        "us" => "whois.nic.us",
        "au" => "whois.audns.net.au",
        "de" => "whois.denic.de",
        "jp" => "whois.jprs.jp",
        "in" => "whois.registry.in",
        "br" => "whois.registro.br",
        "pt" => "whois.dns.pt",
        "fr" => "whois.afnic.fr",
        "it" => "whois.nic.it",
        "es" => "whois.nic.es",
        "cn" => "whois.cnnic.cn",
        "ru" => "whois.tcinet.ru",
        "nl" => "whois.domain-registry.nl",
        "be" => "whois.dns.be",
        "ch" => "whois.nic.ch",
        "dk" => "whois.dk-hostmaster.dk",
        "se" => "whois.iis.se",
        _ => return None,
    };
    Some(server)
}

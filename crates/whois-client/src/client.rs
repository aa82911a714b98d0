//! The referral-following query loop.

use std::io::Write;

use tracing::{debug, info, warn};
use whois_core::{
    convert_6to4, resolve, AdapterKind, Result, ServerDirective, WhoisError, DEFAULT_PORT,
};

use crate::adapter::{adapter_request, CrsnicScanner, PirScanner};
use crate::config::ClientConfig;
use crate::connection::{open, parse_port};
use crate::filter::DisclaimerFilter;
use crate::referral::{HopScanner, Referral, ReferralScanner};
use crate::request::RequestFormatter;
use crate::session::Session;

/// Split `host:port`, lowercasing the host.
///
/// Names with more than one colon are taken as bare IPv6 literals.
#[must_use]
pub fn split_server_port(server: &str) -> (String, Option<String>) {
    let server = server.to_ascii_lowercase();
    if server.matches(':').count() != 1 {
        return (server, None);
    }
    match server.split_once(':') {
        Some((host, port)) if !port.is_empty() => (host.to_string(), Some(port.to_string())),
        Some((host, _)) => (host.to_string(), None),
        None => (server, None),
    }
}

/// Whois client following referrals from server to server.
#[derive(Debug, Clone, Default)]
pub struct WhoisClient {
    config: ClientConfig,
}

/// Result of one hop: where to go next, and whether to announce it.
struct Hop {
    next: Option<Referral>,
    announce: bool,
}

impl WhoisClient {
    /// Create a client
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look `query` up, picking the server from the built-in tables.
    pub async fn lookup<W: Write>(&self, query: &str, flags: &str, out: &mut W) -> Result<()> {
        self.query(resolve(query), None, query, flags, out).await
    }

    /// Run `query` starting at `directive`, following referrals until a
    /// server gives a final answer.
    ///
    /// Diagnostic directives are printed to `out` and count as success.
    pub async fn query<W: Write>(
        &self,
        directive: ServerDirective,
        port: Option<String>,
        query: &str,
        flags: &str,
        out: &mut W,
    ) -> Result<()> {
        let mut directive = directive;
        let mut port = port;
        let mut query = query.to_string();
        let mut referrals = 0usize;

        loop {
            let hop = match directive {
                ServerDirective::SpecialAdapter(AdapterKind::SixToFour) => {
                    let endpoint = convert_6to4(&query);
                    writeln!(
                        out,
                        "\nQuerying for the IPv4 endpoint {endpoint} of a 6to4 IPv6 address.\n"
                    )
                    .map_err(WhoisError::Output)?;
                    debug!(%endpoint, "rewrote 6to4 address");
                    directive = resolve(&endpoint);
                    query = endpoint;
                    continue;
                }
                ServerDirective::SpecialAdapter(
                    kind @ (AdapterKind::Crsnic(host) | AdapterKind::Pir(host)),
                ) => self.query_adapter(kind, host, &query, out).await?,
                ServerDirective::Authority(ref server) => {
                    self.query_authority(server, port.as_deref(), &query, flags, out)
                        .await?
                }
                ref diagnostic => {
                    debug!(?diagnostic, "no query sent");
                    for line in diagnostic.message().unwrap_or_default() {
                        writeln!(out, "{line}").map_err(WhoisError::Output)?;
                    }
                    return Ok(());
                }
            };

            let Some(referral) = hop.next else {
                return Ok(());
            };

            referrals += 1;
            if let Some(max) = self.config.max_referrals {
                if referrals > max {
                    warn!(max, %referral, "referral limit reached");
                    return Err(WhoisError::TooManyReferrals(max));
                }
            }

            if hop.announce {
                writeln!(out, "\n\nFound a referral to {referral}.\n").map_err(WhoisError::Output)?;
            }
            info!(%referral, hop = referrals, "following referral");
            directive = ServerDirective::Authority(referral.server);
            port = referral.port;
        }
    }

    async fn query_authority<W: Write>(
        &self,
        server: &str,
        port: Option<&str>,
        query: &str,
        flags: &str,
        out: &mut W,
    ) -> Result<Hop> {
        let (host, port) = match port {
            Some(port) => (server.to_string(), Some(port.to_string())),
            None => split_server_port(server),
        };
        let host = if host.is_empty() {
            self.config.default_server.clone()
        } else {
            host
        };

        let formatter =
            RequestFormatter::new(&self.config.client_tag, self.config.language.as_deref());
        let request = formatter.format(&host, flags, query);
        if request.flags_on_plain_server {
            warn!(server = %host, "flags sent to a server without flag support");
            writeln!(out, "Warning: RIPE flags used with a traditional server.")
                .map_err(WhoisError::Output)?;
        }
        if self.config.verbose {
            writeln!(out, "Using server {host}.").map_err(WhoisError::Output)?;
            writeln!(out, "Query string: \"{}\"\n", request.line).map_err(WhoisError::Output)?;
        }

        let port = parse_port(port.as_deref())?;
        let conn = open(&host, port, self.config.connect_timeout).await?;
        let mut session = Session::new(conn, DisclaimerFilter::new(self.config.hide_disclaimers));
        session.send(&request.line).await?;

        let mut scanner = ReferralScanner::new();
        session.relay(out, &mut scanner).await?;
        session.finish()?;

        Ok(Hop {
            next: scanner.into_next_hop(),
            announce: true,
        })
    }

    async fn query_adapter<W: Write>(
        &self,
        kind: AdapterKind,
        host: &str,
        query: &str,
        out: &mut W,
    ) -> Result<Hop> {
        if self.config.verbose {
            writeln!(out, "Connecting to {host}.").map_err(WhoisError::Output)?;
        }

        let conn = open(host, DEFAULT_PORT, self.config.connect_timeout).await?;
        let mut session = Session::new(conn, DisclaimerFilter::new(self.config.hide_disclaimers));
        session.send(&adapter_request(kind, query)).await?;

        // No end-of-stream disclaimer check here: host records and missing
        // domains come back without the usual trailer.
        let next = if matches!(kind, AdapterKind::Pir(_)) {
            relay_with(&mut session, out, PirScanner::new()).await?
        } else {
            relay_with(&mut session, out, CrsnicScanner::new()).await?
        };

        Ok(Hop {
            next,
            announce: false,
        })
    }
}

async fn relay_with<C, W, S>(
    session: &mut Session<C>,
    out: &mut W,
    mut scanner: S,
) -> Result<Option<Referral>>
where
    C: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
    W: Write,
    S: HopScanner,
{
    session.relay(out, &mut scanner).await?;
    Ok(scanner.into_next_hop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, answer it, and hand back the request line.
    async fn serve_once(response: String) -> (u16, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut stream = BufReader::new(stream);
            let mut request = String::new();
            stream.read_line(&mut request).await.unwrap();
            stream.get_mut().write_all(response.as_bytes()).await.unwrap();
            request
        });
        (port, handle)
    }

    fn local() -> ServerDirective {
        ServerDirective::authority("127.0.0.1")
    }

    #[test]
    fn test_split_server_port() {
        assert_eq!(
            split_server_port("RWhois.Example.NET:4321"),
            ("rwhois.example.net".to_string(), Some("4321".to_string()))
        );
        assert_eq!(split_server_port("whois.ripe.net"), ("whois.ripe.net".to_string(), None));
        assert_eq!(split_server_port("2001:db8::43"), ("2001:db8::43".to_string(), None));
        assert_eq!(split_server_port("host:"), ("host".to_string(), None));
    }

    #[tokio::test]
    async fn test_referral_followed_with_original_query() {
        let (second_port, second) = serve_once("domain: example\r\n".to_string()).await;
        let (first_port, first) =
            serve_once(format!("% referto: 127.0.0.1 {second_port} foo\r\n")).await;

        let client = WhoisClient::new(ClientConfig::new());
        let mut out = Vec::new();
        client
            .query(local(), Some(first_port.to_string()), "example", "", &mut out)
            .await
            .unwrap();

        assert_eq!(first.await.unwrap(), "example\r\n");
        assert_eq!(second.await.unwrap(), "example\r\n");

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(&format!("\n\nFound a referral to 127.0.0.1:{second_port}.\n\n")));
        assert!(out.ends_with("domain: example\n"));
    }

    #[tokio::test]
    async fn test_referral_server_with_port() {
        let (second_port, second) = serve_once("ok\n".to_string()).await;
        let (first_port, _first) = serve_once(format!(
            "NetRange: 192.0.2.0 - 192.0.2.255\nReferralServer: rwhois://127.0.0.1:{second_port}/\n"
        ))
        .await;

        let client = WhoisClient::new(ClientConfig::new());
        let mut out = Vec::new();
        client
            .query(local(), Some(first_port.to_string()), "192.0.2.1", "", &mut out)
            .await
            .unwrap();

        assert_eq!(second.await.unwrap(), "192.0.2.1\r\n");
    }

    #[tokio::test]
    async fn test_server_port_split() {
        let (port, server) = serve_once("ok\n".to_string()).await;

        let client = WhoisClient::new(ClientConfig::new());
        let mut out = Vec::new();
        client
            .query(ServerDirective::authority(format!("127.0.0.1:{port}")), None, "q", "", &mut out)
            .await
            .unwrap();

        assert_eq!(server.await.unwrap(), "q\r\n");
        assert_eq!(out, b"ok\n");
    }

    #[tokio::test]
    async fn test_empty_authority_uses_default_server() {
        let (port, server) = serve_once("ok\n".to_string()).await;

        let client = WhoisClient::new(ClientConfig::new().default_server("127.0.0.1"));
        let mut out = Vec::new();
        client
            .query(ServerDirective::authority(""), Some(port.to_string()), "ACME", "", &mut out)
            .await
            .unwrap();

        assert_eq!(server.await.unwrap(), "ACME\r\n");
    }

    #[tokio::test]
    async fn test_verbose_status_lines() {
        let (port, _server) = serve_once("ok\n".to_string()).await;

        let client = WhoisClient::new(ClientConfig::new().verbose(true));
        let mut out = Vec::new();
        client
            .query(local(), Some(port.to_string()), "example", "-r ", &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(
            "Warning: RIPE flags used with a traditional server.\n\
             Using server 127.0.0.1.\n\
             Query string: \"-r example\"\n\n"
        ));
    }

    #[tokio::test]
    async fn test_disclaimer_hidden() {
        let (port, _server) = serve_once(
            "domain: example\r\n\
             NOTICE: The expiration date displayed in this record is the date...\r\n\
             legal text\r\n\
             reserves the right to modify these terms at any time.\r\n"
                .to_string(),
        )
        .await;

        let client = WhoisClient::new(ClientConfig::new().hide_disclaimers(true));
        let mut out = Vec::new();
        client
            .query(local(), Some(port.to_string()), "example", "", &mut out)
            .await
            .unwrap();

        assert_eq!(out, b"domain: example\n");
    }

    #[tokio::test]
    async fn test_changed_disclaimer_is_fatal() {
        let (port, _server) = serve_once(
            "NOTICE: The expiration date displayed in this record is the date...\r\n\
             new wording\r\n"
                .to_string(),
        )
        .await;

        let client = WhoisClient::new(ClientConfig::new().hide_disclaimers(true));
        let mut out = Vec::new();
        let err = client
            .query(local(), Some(port.to_string()), "example", "", &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, WhoisError::DisclaimerChanged));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_referral_limit() {
        let (port, _server) =
            serve_once("% referto: whois.example.org 43 foo\r\n".to_string()).await;

        let client = WhoisClient::new(ClientConfig::new().max_referrals(Some(0)));
        let mut out = Vec::new();
        let err = client
            .query(local(), Some(port.to_string()), "example", "", &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, WhoisError::TooManyReferrals(0)));
    }

    #[tokio::test]
    async fn test_6to4_rewritten_before_connecting() {
        let client = WhoisClient::new(ClientConfig::new());
        let mut out = Vec::new();
        client
            .lookup("2002:0a00:0001::", "", &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(
            "\nQuerying for the IPv4 endpoint 10.0.0.1 of a 6to4 IPv6 address.\n\n"
        ));
        assert!(out.contains("RFC 1918"));
    }

    #[tokio::test]
    async fn test_link_local_needs_no_network() {
        let client = WhoisClient::new(ClientConfig::new());
        let mut out = Vec::new();
        client.lookup("fe80::1", "", &mut out).await.unwrap();

        assert_eq!(out, b"No whois server is known for this kind of object.\n");
    }

    #[tokio::test]
    async fn test_connection_refused_is_fatal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = WhoisClient::new(ClientConfig::new());
        let mut out = Vec::new();
        let err = client
            .query(local(), Some(port.to_string()), "example", "", &mut out)
            .await
            .unwrap_err();
        assert!(err.is_network_error());
    }
}

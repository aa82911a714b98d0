//! Connection establishment with a bounded connect phase.

use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::net::{lookup_host, TcpStream};
use tracing::debug;
use whois_core::{Result, WhoisError, DEFAULT_PORT};

/// Turn a user-supplied port into a number.
///
/// Accepts decimal ports and the `whois`/`nicname` service names.
pub fn parse_port(port: Option<&str>) -> Result<u16> {
    match port {
        None | Some("whois" | "nicname") => Ok(DEFAULT_PORT),
        Some(port) => port
            .parse::<u16>()
            .ok()
            .filter(|&n| n != 0)
            .ok_or_else(|| WhoisError::UnknownService(port.to_string())),
    }
}

/// Connect to `host:port`, trying every address the resolver returns.
///
/// Only establishment is bounded by `deadline`; the returned stream has no
/// timeout attached.
pub async fn open(host: &str, port: u16, deadline: Duration) -> Result<TcpStream> {
    debug!(host, port, "connecting");
    with_deadline(deadline, connect(host, port)).await
}

/// Run `fut`, turning expiry of `deadline` into [`WhoisError::Timeout`].
async fn with_deadline<T, F>(deadline: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(deadline, fut)
        .await
        .map_err(|_| WhoisError::Timeout(deadline.as_secs()))?
}

async fn connect(host: &str, port: u16) -> Result<TcpStream> {
    let addrs = lookup_host((host, port))
        .await
        .map_err(|source| WhoisError::Resolve {
            host: host.to_string(),
            source,
        })?;

    let mut last_error = None;
    for addr in addrs {
        match TcpStream::connect(addr).await {
            Ok(stream) => {
                debug!(%addr, "connected");
                return Ok(stream);
            }
            Err(e) => {
                debug!(%addr, error = %e, "connect attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(WhoisError::Connect {
        host: host.to_string(),
        source: last_error
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no address found")),
    })
}

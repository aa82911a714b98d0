//! One request/response exchange with a whois server.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, trace};
use whois_core::{Result, WhoisError};

use crate::filter::DisclaimerFilter;
use crate::referral::HopScanner;

/// A connection carrying a single query.
///
/// The server closes the connection after its answer, so the response is
/// everything up to end of stream.
#[derive(Debug)]
pub struct Session<C> {
    conn: BufReader<C>,
    filter: DisclaimerFilter,
}

impl<C> Session<C>
where
    C: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an established connection
    pub fn new(conn: C, filter: DisclaimerFilter) -> Self {
        Self {
            conn: BufReader::new(conn),
            filter,
        }
    }

    /// Send the request line, terminated with CRLF.
    pub async fn send(&mut self, request: &str) -> Result<()> {
        debug!(request, "sending request");
        let line = format!("{request}\r\n");
        let conn = self.conn.get_mut();
        conn.write_all(line.as_bytes())
            .await
            .map_err(WhoisError::Write)?;
        conn.flush().await.map_err(WhoisError::Write)
    }

    /// Copy the response to `out` line by line.
    ///
    /// Every line goes through `scanner` before the disclaimer filter decides
    /// whether it is shown. Shown lines lose their CR/LF and get a single
    /// newline back.
    pub async fn relay<W, S>(&mut self, out: &mut W, scanner: &mut S) -> Result<()>
    where
        W: Write,
        S: HopScanner,
    {
        let mut buf = Vec::with_capacity(256);
        let mut lines = 0usize;
        loop {
            buf.clear();
            let n = self
                .conn
                .read_until(b'\n', &mut buf)
                .await
                .map_err(WhoisError::Read)?;
            if n == 0 {
                break;
            }
            lines += 1;

            let line = String::from_utf8_lossy(&buf);
            trace!(line = %line.trim_end(), "response line");
            scanner.observe(&line);
            if self.filter.hide_line(&line) {
                continue;
            }
            writeln!(out, "{}", line.trim_end_matches(['\r', '\n'])).map_err(WhoisError::Output)?;
        }
        debug!(lines, "response complete");
        Ok(())
    }

    /// Close the exchange, checking that no disclaimer was left open.
    pub fn finish(self) -> Result<()> {
        self.filter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::CrsnicScanner;
    use crate::referral::{Referral, ReferralScanner};
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_relay_with_referral() {
        let mock = Builder::new()
            .write(b"example\r\n")
            .read(b"% referto: whois.example.org 43 foo\r\n")
            .read(b"% no data\r\n")
            .build();

        let mut session = Session::new(mock, DisclaimerFilter::new(false));
        session.send("example").await.unwrap();
        let mut scanner = ReferralScanner::new();
        let mut out = Vec::new();
        session.relay(&mut out, &mut scanner).await.unwrap();
        session.finish().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "% referto: whois.example.org 43 foo\n% no data\n"
        );
        assert_eq!(
            scanner.into_next_hop(),
            Some(Referral::new("whois.example.org", Some("43".into())))
        );
    }

    #[tokio::test]
    async fn test_crsnic_exchange() {
        let mock = Builder::new()
            .write(b"=example.com\r\n")
            .read(b"   Domain Name: EXAMPLE.COM\r\n   Registrar: EXAMPLE\r\n")
            .read(b"   Whois Server: whois.example-registry.net\r\n")
            .build();

        let mut session = Session::new(mock, DisclaimerFilter::new(false));
        session.send("=example.com").await.unwrap();
        let mut scanner = CrsnicScanner::new();
        let mut out = Vec::new();
        session.relay(&mut out, &mut scanner).await.unwrap();

        assert_eq!(
            scanner.into_next_hop(),
            Some(Referral::new("whois.example-registry.net", None))
        );
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[tokio::test]
    async fn test_unterminated_last_line() {
        let mock = Builder::new().read(b"first\nlast").build();

        let mut session = Session::new(mock, DisclaimerFilter::new(false));
        let mut out = Vec::new();
        session
            .relay(&mut out, &mut ReferralScanner::new())
            .await
            .unwrap();
        assert_eq!(out, b"first\nlast\n");
    }

    #[tokio::test]
    async fn test_open_disclaimer_at_eof() {
        let mock = Builder::new()
            .read(b"domain: example\r\n")
            .read(b"NOTICE: The expiration date displayed in this record is not...\r\n")
            .read(b"more legal text\r\n")
            .build();

        let mut session = Session::new(mock, DisclaimerFilter::new(true));
        let mut out = Vec::new();
        session
            .relay(&mut out, &mut ReferralScanner::new())
            .await
            .unwrap();

        assert_eq!(out, b"domain: example\n");
        assert!(matches!(session.finish(), Err(WhoisError::DisclaimerChanged)));
    }

    #[tokio::test]
    async fn test_read_error() {
        let mock = Builder::new()
            .read(b"partial\n")
            .read_error(std::io::Error::other("connection reset"))
            .build();

        let mut session = Session::new(mock, DisclaimerFilter::new(false));
        let mut out = Vec::new();
        let err = session
            .relay(&mut out, &mut ReferralScanner::new())
            .await
            .unwrap_err();
        assert!(matches!(err, WhoisError::Read(_)));
        assert_eq!(out, b"partial\n");
    }
}

//! CLI argument parsing and query dispatch.

pub mod args;

use std::io::{self, Write};

use anyhow::Result;
use args::Cli;
use clap::Parser;
use tracing::debug;
use whois_client::WhoisClient;
use whois_core::tables::RIPE_SERVER;
use whois_core::{normalize_query, resolve, ServerDirective, WhoisError};

use crate::config::{Config, PatternConfig};
use crate::logging;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    // Load configuration
    let settings = Config::load()?;
    let mut config = settings.client_config().verbose(cli.verbose);
    if cli.hide {
        config = config.hide_disclaimers(true);
    }
    if let Some(tag) = &cli.client_tag {
        config = config.client_tag(tag.as_str());
    }

    let flags = cli.ripe.flag_string();
    let mut stdout = io::stdout().lock();
    let (directive, query) = select_server(&cli, &settings, &mut stdout)?;
    debug!(?directive, %query, %flags, "starting lookup");

    let client = WhoisClient::new(config);
    tokio::select! {
        result = client.query(directive, cli.port.clone(), &query, &flags, &mut stdout) => result?,
        () = interrupted() => return Err(WhoisError::Interrupted.into()),
    }

    stdout.flush()?;
    Ok(())
}

/// Choose where the query goes first.
///
/// An explicit server wins, then informational requests go to RIPE, then
/// the pattern file, and finally the built-in tables on the normalized query.
fn select_server<W: Write>(
    cli: &Cli,
    settings: &Config,
    out: &mut W,
) -> Result<(ServerDirective, String)> {
    let query = cli.query();

    if let Some(host) = &cli.host {
        return Ok((ServerDirective::authority(host.as_str()), query));
    }
    if query.is_empty() {
        return Ok((ServerDirective::authority(RIPE_SERVER), query));
    }

    let patterns = PatternConfig::load(settings.patterns_path())?;
    if let Some(server) = patterns.find(&query)? {
        if cli.verbose {
            writeln!(out, "Using server {server}.")?;
        }
        return Ok((ServerDirective::authority(server), query));
    }

    let query = normalize_query(&query);
    Ok((resolve(&query), query))
}

/// Resolves on Ctrl-C or SIGTERM.
async fn interrupted() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    debug!("interrupted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn settings_with_patterns(content: &str) -> (Config, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let settings = Config {
            patterns_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        (settings, file)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("whois").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_explicit_server_wins() {
        let (settings, _file) = settings_with_patterns("\\.de$ whois.example.net\n");
        let mut out = Vec::new();
        let (directive, query) =
            select_server(&cli(&["-h", "whois.nic.it", "example.de."]), &settings, &mut out).unwrap();
        assert_eq!(directive, ServerDirective::authority("whois.nic.it"));
        // Normalization only applies to table lookups.
        assert_eq!(query, "example.de.");
    }

    #[test]
    fn test_template_goes_to_ripe() {
        let (settings, _file) = settings_with_patterns("");
        let mut out = Vec::new();
        let (directive, query) = select_server(&cli(&["-t", "person"]), &settings, &mut out).unwrap();
        assert_eq!(directive, ServerDirective::authority("whois.ripe.net"));
        assert!(query.is_empty());
    }

    #[test]
    fn test_pattern_match() {
        let (settings, _file) = settings_with_patterns("\\.lan$ whois.example.lan\n");
        let mut out = Vec::new();
        let (directive, _) =
            select_server(&cli(&["--verbose", "printer.lan"]), &settings, &mut out).unwrap();
        assert_eq!(directive, ServerDirective::authority("whois.example.lan"));
        assert_eq!(out, b"Using server whois.example.lan.\n");
    }

    #[test]
    fn test_table_lookup_on_normalized_query() {
        let (settings, _file) = settings_with_patterns("");
        let mut out = Vec::new();
        let (directive, query) = select_server(&cli(&["example.de."]), &settings, &mut out).unwrap();
        assert_eq!(directive, ServerDirective::authority("whois.denic.de"));
        assert_eq!(query, "example.de");
        assert!(out.is_empty());
    }
}

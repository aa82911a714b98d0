//! Client configuration types.

use std::time::Duration;

/// Identification sent to servers that accept the `-V` directive
pub const DEFAULT_CLIENT_TAG: &str = concat!("whois-rs-", env!("CARGO_PKG_VERSION"));

/// Server used for network and organisation names
pub const DEFAULT_SERVER: &str = "whois.arin.net";

/// Ceiling on connection establishment
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for a [`WhoisClient`](crate::WhoisClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Tag sent with `-V` to directive-style servers
    pub client_tag: String,

    /// Hide known legal disclaimers
    pub hide_disclaimers: bool,

    /// Print which server is used and what is sent
    pub verbose: bool,

    /// Bound on connection establishment
    pub connect_timeout: Duration,

    /// Server for queries that resolve to no specific registry
    pub default_server: String,

    /// Stop after this many referrals (unbounded when `None`)
    pub max_referrals: Option<usize>,

    /// Language preference, as found in `LANG`
    pub language: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Create a configuration with built-in defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            client_tag: DEFAULT_CLIENT_TAG.to_string(),
            hide_disclaimers: false,
            verbose: false,
            connect_timeout: CONNECT_TIMEOUT,
            default_server: DEFAULT_SERVER.to_string(),
            max_referrals: None,
            language: None,
        }
    }

    /// Defaults adjusted by `WHOIS_HIDE`, `WHOIS_SERVER` and `LANG`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new().apply_env()
    }

    /// Let the environment override this configuration.
    ///
    /// `WHOIS_HIDE` only ever enables hiding.
    #[must_use]
    pub fn apply_env(mut self) -> Self {
        if std::env::var_os("WHOIS_HIDE").is_some() {
            self.hide_disclaimers = true;
        }
        if let Ok(server) = std::env::var("WHOIS_SERVER") {
            self.default_server = server;
        }
        if let Ok(lang) = std::env::var("LANG") {
            self.language = Some(lang);
        }
        self
    }

    /// Set the client identification tag
    #[must_use]
    pub fn client_tag(mut self, tag: impl Into<String>) -> Self {
        self.client_tag = tag.into();
        self
    }

    /// Enable or disable disclaimer hiding
    #[must_use]
    pub const fn hide_disclaimers(mut self, hide: bool) -> Self {
        self.hide_disclaimers = hide;
        self
    }

    /// Enable or disable verbose status lines
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the connection establishment timeout
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the fallback server
    #[must_use]
    pub fn default_server(mut self, server: impl Into<String>) -> Self {
        self.default_server = server.into();
        self
    }

    /// Bound the referral chain
    #[must_use]
    pub const fn max_referrals(mut self, max: Option<usize>) -> Self {
        self.max_referrals = max;
        self
    }

    /// Set the language preference
    #[must_use]
    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}

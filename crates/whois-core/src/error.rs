use thiserror::Error;

/// Result type alias for whois operations
pub type Result<T> = std::result::Result<T, WhoisError>;

/// Errors that abort a whois run.
///
/// Resolution outcomes such as "no server known" are not errors; they are
/// [`ServerDirective`](crate::ServerDirective) values printed to the user.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// Host name lookup failed
    #[error("cannot resolve {host}: {source}")]
    Resolve {
        /// Server that could not be resolved
        host: String,
        /// Underlying resolver error
        source: std::io::Error,
    },

    /// Port is neither a number nor a known service name
    #[error("{0}/tcp: unknown service")]
    UnknownService(String),

    /// Every address of the server refused or failed the connection
    #[error("connect to {host}: {source}")]
    Connect {
        /// Server we tried to reach
        host: String,
        /// Error from the last address attempted
        source: std::io::Error,
    },

    /// Connection establishment exceeded the deadline
    #[error("Timeout.")]
    Timeout(u64),

    /// Sending the request failed
    #[error("write: {0}")]
    Write(#[source] std::io::Error),

    /// Reading the response failed
    #[error("read: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the response to our own output failed
    #[error("output: {0}")]
    Output(#[source] std::io::Error),

    /// The server stopped sending a disclaimer we were hiding
    #[error("Catastrophic error: disclaimer text has been changed.\nPlease upgrade this program.")]
    DisclaimerChanged,

    /// Referral chain exceeded the configured bound
    #[error("too many referrals: gave up after {0} hops")]
    TooManyReferrals(usize),

    /// The run was interrupted by a signal
    #[error("Interrupted by signal.")]
    Interrupted,

    /// A server pattern could not be compiled
    #[error("Invalid regular expression '{pattern}': {message}")]
    InvalidPattern {
        /// Offending pattern
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// Configuration file is unreadable or malformed
    #[error("configuration error: {0}")]
    Config(String),
}

impl WhoisError {
    /// Returns true if the error came from the network layer
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::Resolve { .. }
                | Self::Connect { .. }
                | Self::Timeout(_)
                | Self::Write(_)
                | Self::Read(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_errors() {
        assert!(WhoisError::Timeout(60).is_network_error());
        assert!(WhoisError::Read(std::io::Error::other("reset")).is_network_error());
        assert!(!WhoisError::DisclaimerChanged.is_network_error());
        assert!(!WhoisError::Interrupted.is_network_error());
    }

    #[test]
    fn test_messages() {
        assert_eq!(WhoisError::Timeout(60).to_string(), "Timeout.");
        assert_eq!(
            WhoisError::UnknownService("gopher".into()).to_string(),
            "gopher/tcp: unknown service"
        );
        assert!(WhoisError::DisclaimerChanged
            .to_string()
            .contains("upgrade this program"));
    }
}

//! Referral-following whois query engine.
//!
//! [`WhoisClient`] takes a [`ServerDirective`](whois_core::ServerDirective),
//! talks to the chosen server over port 43 and follows referrals until a
//! server answers without pointing elsewhere.
//!
//! # Example
//!
//! ```rust,ignore
//! use whois_client::{ClientConfig, WhoisClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> whois_core::Result<()> {
//!     let client = WhoisClient::new(ClientConfig::from_env());
//!     let mut stdout = std::io::stdout().lock();
//!     client.lookup("example.de", "", &mut stdout).await
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/whois-client/1.0.0")]

mod adapter;
mod client;
mod config;
mod connection;
mod filter;
mod referral;
mod request;
mod session;

pub use adapter::{adapter_request, CrsnicScanner, PirScanner};
pub use client::{split_server_port, WhoisClient};
pub use config::{ClientConfig, CONNECT_TIMEOUT, DEFAULT_CLIENT_TAG, DEFAULT_SERVER};
pub use connection::{open, parse_port};
pub use filter::{DisclaimerFilter, HideState};
pub use referral::{HopScanner, Referral, ReferralScanner};
pub use request::{Dialect, FormattedRequest, RequestFormatter};
pub use session::Session;

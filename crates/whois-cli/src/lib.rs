//! # whois-cli
//!
//! Command-line front end for the whois client.
//!
//! ## Features
//!
//! - **Automatic server selection**: domains, IP addresses, AS numbers and NIC handles
//! - **Referral following**: `% referto:`, `ReferralServer:` and registrar records
//! - **RIPE query flags**: passed through to servers that understand them
//! - **Local overrides**: `whois.conf` patterns and a TOML user config

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::run;

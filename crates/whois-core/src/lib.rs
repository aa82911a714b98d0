//! Core types, routing tables and server selection for the whois client.
//!
//! This crate holds everything that can be decided without touching the
//! network:
//!
//! - **Classification**: [`classify`] tells what kind of object a query names
//! - **Resolution**: [`resolve`] maps a query onto a [`ServerDirective`]
//! - **Tables**: the static routing data consulted by the resolver
//! - **Errors**: [`WhoisError`] shared by the client and the CLI
//!
//! # Example
//!
//! ```rust
//! use whois_core::{resolve, ServerDirective};
//!
//! match resolve("example.de") {
//!     ServerDirective::Authority(host) => assert_eq!(host, "whois.denic.de"),
//!     other => panic!("unexpected directive: {other:?}"),
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/whois-core/1.0.0")]

mod error;
pub mod normalize;
pub mod resolve;
pub mod tables;
pub mod types;

pub use error::{Result, WhoisError};
pub use normalize::normalize_query;
pub use resolve::{classify, convert_6to4, domain_matches, parse_ipv4, resolve, resolve_asn};
pub use types::*;

/// Registered whois port.
pub const DEFAULT_PORT: u16 = 43;

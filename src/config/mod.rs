//! Configuration module for sftp-location.
//!
//! This module turns SFTP location strings into [`Config`] records and
//! validates records that were built by hand or deserialized. Two location
//! syntaxes are understood:
//!
//! - the URI form `sftp://[user@]host[:port]/path`
//! - the legacy form `sftp:[user@]host:path`
//!
//! # Examples
//!
//! Parsing a location:
//!
//! ```
//! use sftp_location::config::Config;
//!
//! let config = Config::parse_from_str("sftp://user@host:10022//srv/backup").unwrap();
//! assert_eq!(config.user, "user");
//! assert_eq!(config.port, "10022");
//! assert_eq!(config.path, "/srv/backup");
//! ```
//!
//! Creating a configuration programmatically:
//!
//! ```
//! use sftp_location::config::{Config, validate_config};
//!
//! let config = Config::new("backup.example.com", "repos/main").with_connections(2);
//! validate_config(&config).unwrap();
//! assert_eq!(config.connections, 2);
//! ```
mod parser;
pub mod validator;

pub use parser::{Config, DEFAULT_CONNECTIONS, parse_config};
pub use validator::validate_config;

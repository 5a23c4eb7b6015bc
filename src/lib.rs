/*!
 # sftp-location

 A Rust library for parsing SFTP repository locations.

 ## Overview

 sftp-location turns a location string such as `sftp://user@host:2222//srv/backup`
 into a [`Config`] holding the user, host, port, remote path and connection
 pool size. The code that opens SSH sessions reads these fields; this crate
 performs no network or filesystem access.

 Two syntaxes are accepted:

 - URI form: `sftp://[user@]host[:port]/path`, with `[addr]` for IPv6 hosts.
   `host/dir` is relative to the login directory; `host//dir` is rooted.
 - Legacy form: `sftp:[user@]host:path`, where the user may contain `@`.

 ## Basic Usage

 ```
 use sftp_location::{Config, Result};

 fn main() -> Result<()> {
     let config = sftp_location::parse("sftp://user@[::1]:22/dir/subdir/../other")?;
     assert_eq!(config.user, "user");
     assert_eq!(config.host, "::1");
     assert_eq!(config.port, "22");
     assert_eq!(config.path, "dir/other");
     assert_eq!(config.connections, 5);

     let legacy: Config = "sftp:user@host:dir/subdir:suffix".parse()?;
     assert_eq!(legacy.path, "dir/subdir:suffix");

     Ok(())
 }
 ```

 ## Features

 - **Two syntaxes**: URI and legacy `scp`-like locations
 - **IPv6**: bracketed literals with optional port
 - **Path cleaning**: lexical `.`/`..` resolution and separator collapsing
 - **Validation**: checks for programmatically built configs
 - **Serde**: JSON (de)serialization of [`Config`]
 - **Tracing**: parse results are reported through `tracing`

 ## License

 This project is licensed under the terms in the LICENSE file.
*/

pub mod config;
pub mod error;
pub mod path;

pub use config::{Config, DEFAULT_CONNECTIONS, parse_config, validate_config};
pub use error::{Error, Result};

/// Parses an SFTP location string into a [`Config`].
///
/// Shorthand for [`config::parse_config`].
pub fn parse(location: &str) -> Result<Config> {
    parse_config(location)
}

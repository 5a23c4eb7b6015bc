use crate::config::Config;
use crate::error::{Error, Result};

/// Validates a host name or IPv6 literal
pub fn validate_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(Error::ConfigInvalid("host is empty".to_string()));
    }

    // Both delimit other parts of a location, so a host holding one was split wrongly
    if host.contains(['@', '/']) {
        return Err(Error::ConfigInvalid(format!(
            "host '{}' contains '@' or '/'",
            host
        )));
    }

    Ok(())
}

/// Validates a port, empty meaning the SSH default
pub fn validate_port(port: &str) -> Result<()> {
    if port.is_empty() {
        return Ok(());
    }

    // u16::from_str accepts a leading '+'
    let digits_only = port.bytes().all(|b| b.is_ascii_digit());
    match port.parse::<u16>() {
        Ok(port_number) if digits_only && port_number != 0 => Ok(()),
        _ => Err(Error::ConfigInvalid(format!(
            "port '{}' is not a number between 1 and 65535",
            port
        ))),
    }
}

/// Full configuration validation
pub fn validate_config(config: &Config) -> Result<()> {
    validate_host(&config.host)?;
    validate_port(&config.port)?;

    if config.path.is_empty() {
        return Err(Error::ConfigInvalid(format!(
            "no directory specified for host '{}'",
            config.host
        )));
    }

    if config.connections == 0 {
        return Err(Error::ConfigInvalid(
            "connections must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port() {
        assert!(validate_port("").is_ok());
        assert!(validate_port("22").is_ok());
        assert!(validate_port("65535").is_ok());
        assert!(validate_port("0").is_err());
        assert!(validate_port("65536").is_err());
        assert!(validate_port("+22").is_err());
        assert!(validate_port("ssh").is_err());
    }

    #[test]
    fn test_validate_host() {
        assert!(validate_host("host").is_ok());
        assert!(validate_host("::1").is_ok());
        assert!(validate_host("").is_err());
        assert!(validate_host("user@host").is_err());
        assert!(validate_host("host/dir").is_err());
    }
}

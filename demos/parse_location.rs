use sftp_location::error::Result;
use sftp_location::{Config, validate_config};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    // `with_env_filter` reads RUST_LOG, e.g. RUST_LOG=sftp_location=debug
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    tracing::info!("Starting parse_location example");

    let locations: Vec<String> = std::env::args().skip(1).collect();
    if locations.is_empty() {
        println!("usage: parse_location <sftp-location>...");
        println!("example: parse_location sftp://user@host//srv/backup sftp:user@host:repo");
        return Ok(());
    }

    for location in &locations {
        let config: Config = match location.parse() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(location = %location, error = %e, "Failed to parse location");
                println!("{}: {}", location, e);
                continue;
            }
        };

        if let Err(e) = validate_config(&config) {
            tracing::warn!(error = %e, "Parsed location does not validate");
        }

        println!("{} => {}", location, config.to_json()?);
        println!("  canonical: {}", config);
    }

    Ok(())
}

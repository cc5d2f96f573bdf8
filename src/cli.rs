use std::time::Duration;

use clap::{Parser, Subcommand};
use gridnet::{Client, Variant};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser)]
pub struct ConnectionArgs {
    /// Device hostname or IP address, optionally followed by a port.
    #[clap(long, env = "GRIDNET_HOST")]
    pub host: String,

    #[clap(long, env = "GRIDNET_REQUEST_TIMEOUT", default_value = "10s")]
    pub request_timeout: humantime::Duration,

    /// Device generation, decides which device information fields are mandatory.
    #[clap(long, env = "GRIDNET_VARIANT", value_enum, default_value = "gridnet")]
    pub variant: Variant,
}

impl ConnectionArgs {
    pub fn new_client(&self) -> Client {
        Client::builder()
            .host(&self.host)
            .request_timeout(Duration::from(self.request_timeout))
            .variant(self.variant)
            .build()
    }
}

#[derive(Copy, Clone, Subcommand)]
pub enum Command {
    /// Show the device identity and firmware.
    Device,

    /// Show the current power flow and the energy totals.
    SmartBridge,

    /// Show both, fetched concurrently.
    All,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_ok() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "gridnet",
            "--host",
            "192.168.1.10",
            "--request-timeout",
            "2s",
            "--variant",
            "pure-energie",
            "smart-bridge",
        ])?;
        assert!(matches!(args.command, Command::SmartBridge));
        let client = args.connection.new_client();
        assert_eq!(client.host(), "192.168.1.10");
        assert_eq!(client.request_timeout(), Duration::from_secs(2));
        assert_eq!(client.variant(), Variant::PureEnergie);
        Ok(())
    }
}
